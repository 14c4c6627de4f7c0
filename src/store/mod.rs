//! Persistence behind the HTTP handlers.
//!
//! Handlers only see the [`Store`] trait; the server wires in [`mongo::MongoStore`]
//! at startup and tests use the in-memory implementation.

pub mod mongo;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::appointment::{AppointmentOption, Specialty};
use crate::models::booking::Booking;
use crate::models::doctor::Doctor;
use crate::models::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::models::post::Post;
use crate::models::user::User;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("could not encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user(&self, email: &str) -> StoreResult<Option<User>>;

    async fn users_by_email(&self, email: &str) -> StoreResult<Vec<User>>;

    async fn insert_user(&self, user: &User) -> StoreResult<InsertOutcome>;

    /// Sets `role = admin` on the user with this id, creating the document
    /// when it does not exist.
    async fn promote_to_admin(&self, id: ObjectId) -> StoreResult<UpdateOutcome>;

    async fn insert_post(&self, post: &Post) -> StoreResult<InsertOutcome>;

    async fn posts(&self) -> StoreResult<Vec<Post>>;

    async fn appointment_options(&self) -> StoreResult<Vec<AppointmentOption>>;

    async fn specialties(&self) -> StoreResult<Vec<Specialty>>;

    async fn doctors(&self) -> StoreResult<Vec<Doctor>>;

    async fn insert_doctor(&self, doctor: &Doctor) -> StoreResult<InsertOutcome>;

    async fn delete_doctor(&self, id: ObjectId) -> StoreResult<DeleteOutcome>;

    async fn bookings_on(&self, date: &str) -> StoreResult<Vec<Booking>>;

    async fn bookings_for(&self, email: &str) -> StoreResult<Vec<Booking>>;

    /// Bookings held by `email` for `treatment` on `date`.
    async fn bookings_matching(
        &self,
        email: &str,
        date: &str,
        treatment: &str,
    ) -> StoreResult<Vec<Booking>>;

    async fn booking(&self, id: ObjectId) -> StoreResult<Option<Booking>>;

    /// Inserts the booking unless one already exists for the same
    /// (email, appointmentDate, treatment). Returns `None` when it did.
    async fn insert_booking_if_absent(&self, booking: &Booking)
    -> StoreResult<Option<InsertOutcome>>;

    async fn close(&self);
}
