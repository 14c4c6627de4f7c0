use anyhow::{Context, Result};
use async_trait::async_trait;
use mongodb::bson::{Document, doc, oid::ObjectId, to_document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Cursor, Database, IndexModel};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::{Store, StoreResult};
use crate::config::AppConfig;
use crate::models::appointment::{AppointmentOption, Specialty};
use crate::models::booking::Booking;
use crate::models::doctor::Doctor;
use crate::models::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome, id_to_string};
use crate::models::post::Post;
use crate::models::user::User;

const USERS: &str = "users";
const POSTS: &str = "posts";
const APPOINTMENT_OPTIONS: &str = "appointmentOptions";
const BOOKINGS: &str = "bookings";
const DOCTORS: &str = "doctors";

const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let uri = config.database_uri()?;
        let client = Client::with_uri_str(&uri)
            .await
            .context("Failed to create MongoDB client")?;
        let db = client.database(&config.db_name);

        db.run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB did not answer ping")?;
        info!(database = %config.db_name, "connected to MongoDB");

        Ok(MongoStore { client, db })
    }

    /// One booking per (email, appointmentDate, treatment). The index build
    /// fails if duplicates already exist; the server keeps running without it.
    pub async fn ensure_indexes(&self) {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1, "appointmentDate": 1, "treatment": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        if let Err(e) = self.bookings().create_index(index).await {
            warn!("could not create unique booking index: {}", e);
        }
    }

    fn users(&self) -> Collection<User> {
        self.db.collection(USERS)
    }

    fn posts_collection(&self) -> Collection<Post> {
        self.db.collection(POSTS)
    }

    fn options(&self) -> Collection<AppointmentOption> {
        self.db.collection(APPOINTMENT_OPTIONS)
    }

    fn bookings(&self) -> Collection<Booking> {
        self.db.collection(BOOKINGS)
    }

    fn doctors_collection(&self) -> Collection<Doctor> {
        self.db.collection(DOCTORS)
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY
    )
}

async fn collect<T>(mut cursor: Cursor<T>) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned + Send + Sync,
{
    let mut items = Vec::new();
    while cursor.advance().await? {
        items.push(cursor.deserialize_current()?);
    }
    Ok(items)
}

#[async_trait]
impl Store for MongoStore {
    async fn find_user(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self.users().find_one(doc! { "email": email }).await?)
    }

    async fn users_by_email(&self, email: &str) -> StoreResult<Vec<User>> {
        collect(self.users().find(doc! { "email": email }).await?).await
    }

    async fn insert_user(&self, user: &User) -> StoreResult<InsertOutcome> {
        let result = self.users().insert_one(user).await?;
        Ok(InsertOutcome::inserted(&result.inserted_id))
    }

    async fn promote_to_admin(&self, id: ObjectId) -> StoreResult<UpdateOutcome> {
        let result = self
            .users()
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": "admin" } })
            .upsert(true)
            .await?;

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().map(id_to_string),
        })
    }

    async fn insert_post(&self, post: &Post) -> StoreResult<InsertOutcome> {
        let result = self.posts_collection().insert_one(post).await?;
        Ok(InsertOutcome::inserted(&result.inserted_id))
    }

    async fn posts(&self) -> StoreResult<Vec<Post>> {
        collect(self.posts_collection().find(doc! {}).await?).await
    }

    async fn appointment_options(&self) -> StoreResult<Vec<AppointmentOption>> {
        collect(self.options().find(doc! {}).await?).await
    }

    async fn specialties(&self) -> StoreResult<Vec<Specialty>> {
        let cursor = self
            .options()
            .clone_with_type::<Specialty>()
            .find(doc! {})
            .projection(doc! { "_id": 0, "name": 1 })
            .await?;
        collect(cursor).await
    }

    async fn doctors(&self) -> StoreResult<Vec<Doctor>> {
        collect(self.doctors_collection().find(doc! {}).await?).await
    }

    async fn insert_doctor(&self, doctor: &Doctor) -> StoreResult<InsertOutcome> {
        let result = self.doctors_collection().insert_one(doctor).await?;
        Ok(InsertOutcome::inserted(&result.inserted_id))
    }

    async fn delete_doctor(&self, id: ObjectId) -> StoreResult<DeleteOutcome> {
        let result = self.doctors_collection().delete_one(doc! { "_id": id }).await?;
        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn bookings_on(&self, date: &str) -> StoreResult<Vec<Booking>> {
        collect(self.bookings().find(doc! { "appointmentDate": date }).await?).await
    }

    async fn bookings_for(&self, email: &str) -> StoreResult<Vec<Booking>> {
        collect(self.bookings().find(doc! { "email": email }).await?).await
    }

    async fn bookings_matching(
        &self,
        email: &str,
        date: &str,
        treatment: &str,
    ) -> StoreResult<Vec<Booking>> {
        let filter = doc! {
            "email": email,
            "appointmentDate": date,
            "treatment": treatment,
        };
        collect(self.bookings().find(filter).await?).await
    }

    async fn booking(&self, id: ObjectId) -> StoreResult<Option<Booking>> {
        Ok(self.bookings().find_one(doc! { "_id": id }).await?)
    }

    async fn insert_booking_if_absent(
        &self,
        booking: &Booking,
    ) -> StoreResult<Option<InsertOutcome>> {
        let filter = doc! {
            "email": booking.email.as_str(),
            "appointmentDate": booking.appointment_date.as_str(),
            "treatment": booking.treatment.as_str(),
        };
        let fields: Document = to_document(booking)?;

        let result = match self
            .bookings()
            .update_one(filter, doc! { "$setOnInsert": fields })
            .upsert(true)
            .await
        {
            Ok(result) => result,
            // lost an upsert race against the unique index
            Err(e) if is_duplicate_key(&e) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(result.upserted_id.as_ref().map(InsertOutcome::inserted))
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client shut down");
    }
}
