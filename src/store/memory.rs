use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use std::sync::Mutex;

use super::{Store, StoreResult};
use crate::models::appointment::{AppointmentOption, Specialty};
use crate::models::booking::Booking;
use crate::models::doctor::Doctor;
use crate::models::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::models::post::Post;
use crate::models::user::{Role, User};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    posts: Mutex<Vec<Post>>,
    options: Mutex<Vec<AppointmentOption>>,
    bookings: Mutex<Vec<Booking>>,
    doctors: Mutex<Vec<Doctor>>,
    stale_matches: bool,
}

impl MemoryStore {
    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().unwrap() = users;
        self
    }

    pub fn with_options(self, options: Vec<AppointmentOption>) -> Self {
        *self.options.lock().unwrap() = options;
        self
    }

    pub fn with_bookings(self, bookings: Vec<Booking>) -> Self {
        *self.bookings.lock().unwrap() = bookings;
        self
    }

    /// `bookings_matching` answers as if no booking existed yet, the view a
    /// request gets when a concurrent twin inserts between check and insert.
    pub fn with_stale_matches(mut self) -> Self {
        self.stale_matches = true;
        self
    }

    pub fn stored_bookings(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    pub fn stored_users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

fn assign_id(id: &mut Option<ObjectId>) -> InsertOutcome {
    let oid = *id.get_or_insert_with(ObjectId::new);
    InsertOutcome::inserted(&Bson::ObjectId(oid))
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn users_by_email(&self, email: &str) -> StoreResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().filter(|u| u.email == email).cloned().collect())
    }

    async fn insert_user(&self, user: &User) -> StoreResult<InsertOutcome> {
        let mut user = user.clone();
        let outcome = assign_id(&mut user.id);
        self.users.lock().unwrap().push(user);
        Ok(outcome)
    }

    async fn promote_to_admin(&self, id: ObjectId) -> StoreResult<UpdateOutcome> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(user) => {
                let modified = !user.is_admin();
                user.role = Some(Role::Admin);
                Ok(UpdateOutcome {
                    acknowledged: true,
                    matched_count: 1,
                    modified_count: modified as u64,
                    upserted_id: None,
                })
            }
            // same shape as `{_id, role: "admin"}` read back from MongoDB
            None => {
                users.push(User {
                    id: Some(id),
                    email: String::new(),
                    name: None,
                    role: Some(Role::Admin),
                    extra: Document::new(),
                });
                Ok(UpdateOutcome {
                    acknowledged: true,
                    matched_count: 0,
                    modified_count: 0,
                    upserted_id: Some(id.to_hex()),
                })
            }
        }
    }

    async fn insert_post(&self, post: &Post) -> StoreResult<InsertOutcome> {
        let mut post = post.clone();
        let outcome = assign_id(&mut post.id);
        self.posts.lock().unwrap().push(post);
        Ok(outcome)
    }

    async fn posts(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn appointment_options(&self) -> StoreResult<Vec<AppointmentOption>> {
        Ok(self.options.lock().unwrap().clone())
    }

    async fn specialties(&self) -> StoreResult<Vec<Specialty>> {
        let options = self.options.lock().unwrap();
        Ok(options
            .iter()
            .map(|o| Specialty {
                name: o.name.clone(),
            })
            .collect())
    }

    async fn doctors(&self) -> StoreResult<Vec<Doctor>> {
        Ok(self.doctors.lock().unwrap().clone())
    }

    async fn insert_doctor(&self, doctor: &Doctor) -> StoreResult<InsertOutcome> {
        let mut doctor = doctor.clone();
        let outcome = assign_id(&mut doctor.id);
        self.doctors.lock().unwrap().push(doctor);
        Ok(outcome)
    }

    async fn delete_doctor(&self, id: ObjectId) -> StoreResult<DeleteOutcome> {
        let mut doctors = self.doctors.lock().unwrap();
        let before = doctors.len();
        doctors.retain(|d| d.id != Some(id));
        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: (before - doctors.len()) as u64,
        })
    }

    async fn bookings_on(&self, date: &str) -> StoreResult<Vec<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .iter()
            .filter(|b| b.appointment_date == date)
            .cloned()
            .collect())
    }

    async fn bookings_for(&self, email: &str) -> StoreResult<Vec<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.iter().filter(|b| b.email == email).cloned().collect())
    }

    async fn bookings_matching(
        &self,
        email: &str,
        date: &str,
        treatment: &str,
    ) -> StoreResult<Vec<Booking>> {
        if self.stale_matches {
            return Ok(Vec::new());
        }
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .iter()
            .filter(|b| b.email == email && b.appointment_date == date && b.treatment == treatment)
            .cloned()
            .collect())
    }

    async fn booking(&self, id: ObjectId) -> StoreResult<Option<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.iter().find(|b| b.id == Some(id)).cloned())
    }

    async fn insert_booking_if_absent(
        &self,
        booking: &Booking,
    ) -> StoreResult<Option<InsertOutcome>> {
        let mut bookings = self.bookings.lock().unwrap();
        if bookings.iter().any(|b| b.collides_with(booking)) {
            return Ok(None);
        }
        let mut booking = booking.clone();
        let outcome = assign_id(&mut booking.id);
        bookings.push(booking);
        Ok(Some(outcome))
    }

    async fn close(&self) {}
}
