use actix_web::{HttpResponse, get, post, put, web};
use serde::Serialize;

use super::{EmailQuery, parse_id};
use crate::error::ApiError;
use crate::handlers::auth::Authenticated;
use crate::models::outcome::InsertOutcome;
use crate::models::user::User;
use crate::store::Store;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminStatus {
    is_admin: bool,
}

/// Registers a user once per email; later registrations are no-ops.
#[post("/users")]
async fn create_user(
    store: web::Data<dyn Store>,
    user: web::Json<User>,
) -> Result<HttpResponse, ApiError> {
    if store.find_user(&user.email).await?.is_some() {
        return Ok(HttpResponse::Ok().json(InsertOutcome::refused("user already exists")));
    }

    let outcome = store.insert_user(&user).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[get("/users")]
async fn users_by_email(
    _auth: Authenticated,
    store: web::Data<dyn Store>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    let users = store.users_by_email(&query.email).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/users/admin/{email}")]
async fn admin_status(
    store: web::Data<dyn Store>,
    email: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let is_admin = store
        .find_user(&email)
        .await?
        .is_some_and(|user| user.is_admin());
    Ok(HttpResponse::Ok().json(AdminStatus { is_admin }))
}

// Any authenticated caller may promote; the admin-only check stays off
// until the portal owners decide who should hold that right.
#[put("/users/admin/{id}")]
async fn make_admin(
    auth: Authenticated,
    store: web::Data<dyn Store>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let outcome = store.promote_to_admin(id).await?;
    tracing::info!(by = %auth.0.email, user = %id, "promoted user to admin");
    Ok(HttpResponse::Ok().json(outcome))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user)
        .service(users_by_email)
        .service(admin_status)
        .service(make_admin);
}
