use actix_web::{HttpResponse, get, web};
use serde::Serialize;

use super::EmailQuery;
use crate::error::ApiError;
use crate::handlers::auth::JwtKeys;
use crate::store::Store;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
}

/// Tokens are only handed out to registered users.
#[get("/jwt")]
async fn issue_token(
    store: web::Data<dyn Store>,
    keys: web::Data<JwtKeys>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    if store.find_user(&query.email).await?.is_none() {
        tracing::debug!(email = %query.email, "token refused for unknown user");
        return Ok(HttpResponse::Forbidden().json(TokenResponse {
            access_token: String::new(),
        }));
    }

    let access_token = keys.issue(&query.email)?;
    Ok(HttpResponse::Ok().json(TokenResponse { access_token }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(issue_token);
}
