use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::availability::compute_availability;
use crate::store::Store;

#[derive(Deserialize, Debug)]
struct DateQuery {
    #[serde(default)]
    date: String,
}

/// Every appointment option with the slots still open on `date`.
#[get("/appointmentOptions")]
async fn appointment_options(
    store: web::Data<dyn Store>,
    query: web::Query<DateQuery>,
) -> Result<HttpResponse, ApiError> {
    let options = store.appointment_options().await?;
    let bookings = store.bookings_on(&query.date).await?;

    Ok(HttpResponse::Ok().json(compute_availability(&options, &bookings, &query.date)))
}

#[get("/specialty")]
async fn specialties(store: web::Data<dyn Store>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.specialties().await?))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(appointment_options).service(specialties);
}
