use actix_web::{HttpResponse, get, post, web};

use crate::error::ApiError;
use crate::handlers::auth::Authenticated;
use crate::models::post::Post;
use crate::store::Store;

#[post("/posts")]
async fn create_post(
    _auth: Authenticated,
    store: web::Data<dyn Store>,
    post: web::Json<Post>,
) -> Result<HttpResponse, ApiError> {
    let outcome = store.insert_post(&post).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[get("/posts")]
async fn all_posts(
    _auth: Authenticated,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.posts().await?))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_post).service(all_posts);
}
