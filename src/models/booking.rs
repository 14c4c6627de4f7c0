use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::object_id::as_hex"
    )]
    pub id: Option<ObjectId>,
    pub email: String,
    pub appointment_date: String,
    pub treatment: String,
    pub slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Patient metadata the portal does not interpret, kept as sent.
    #[serde(flatten)]
    pub extra: Document,
}

impl Booking {
    /// Two bookings collide when the same client holds the same treatment on
    /// the same date, whatever the slot.
    pub fn collides_with(&self, other: &Booking) -> bool {
        self.email == other.email
            && self.appointment_date == other.appointment_date
            && self.treatment == other.treatment
    }
}
