use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A treatment type offered by the portal, with the fixed list of time
/// slots that can be booked for it on any given day.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppointmentOption {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::object_id::as_hex"
    )]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub slots: Vec<String>,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Specialty {
    pub name: String,
}
