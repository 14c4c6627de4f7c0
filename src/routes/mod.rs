pub mod appointments;
pub mod bookings;
pub mod doctors;
pub mod health;
pub mod jwt;
pub mod posts;
pub mod users;

use actix_web::web;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Deserialize, Debug)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: String,
}

fn parse_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(users::init)
        .configure(jwt::init)
        .configure(posts::init)
        .configure(appointments::init)
        .configure(doctors::init)
        .configure(bookings::init);
}
