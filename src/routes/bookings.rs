use actix_web::{HttpResponse, get, post, web};

use super::{EmailQuery, parse_id};
use crate::error::ApiError;
use crate::handlers::admission::{Admission, can_accept, rejection_reason};
use crate::handlers::auth::Authenticated;
use crate::models::booking::Booking;
use crate::models::outcome::InsertOutcome;
use crate::store::Store;

/// A caller may only list their own bookings.
#[get("/bookings")]
async fn bookings_for_email(
    auth: Authenticated,
    store: web::Data<dyn Store>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    if auth.0.email != query.email {
        tracing::debug!(token = %auth.0.email, requested = %query.email, "booking list refused");
        return Err(ApiError::Forbidden);
    }

    Ok(HttpResponse::Ok().json(store.bookings_for(&query.email).await?))
}

#[get("/dashboard/payment/{id}")]
async fn booking_for_payment(
    store: web::Data<dyn Store>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let booking = store.booking(parse_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(booking))
}

#[post("/bookings")]
async fn create_booking(
    store: web::Data<dyn Store>,
    booking: web::Json<Booking>,
) -> Result<HttpResponse, ApiError> {
    let existing = store
        .bookings_matching(&booking.email, &booking.appointment_date, &booking.treatment)
        .await?;

    if let Admission::Rejected { reason } = can_accept(&existing, &booking) {
        tracing::info!(email = %booking.email, "{}", reason);
        return Ok(HttpResponse::Ok().json(InsertOutcome::refused(reason)));
    }

    match store.insert_booking_if_absent(&booking).await? {
        Some(outcome) => Ok(HttpResponse::Ok().json(outcome)),
        None => {
            let reason = rejection_reason(&booking);
            tracing::info!(email = %booking.email, "{} (concurrent request)", reason);
            Ok(HttpResponse::Ok().json(InsertOutcome::refused(reason)))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(bookings_for_email)
        .service(booking_for_payment)
        .service(create_booking);
}
