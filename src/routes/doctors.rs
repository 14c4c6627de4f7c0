use actix_web::{HttpResponse, delete, get, post, web};

use super::parse_id;
use crate::error::ApiError;
use crate::handlers::auth::Authenticated;
use crate::models::doctor::Doctor;
use crate::store::Store;

#[get("/doctors")]
async fn all_doctors(
    _auth: Authenticated,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.doctors().await?))
}

#[post("/doctors")]
async fn add_doctor(
    _auth: Authenticated,
    store: web::Data<dyn Store>,
    doctor: web::Json<Doctor>,
) -> Result<HttpResponse, ApiError> {
    let outcome = store.insert_doctor(&doctor).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[delete("/doctors/{id}")]
async fn remove_doctor(
    _auth: Authenticated,
    store: web::Data<dyn Store>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let outcome = store.delete_doctor(parse_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(all_doctors)
        .service(add_doctor)
        .service(remove_doctor);
}
