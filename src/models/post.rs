use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Village posts carry no fixed schema; whatever the client sends is kept.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Post {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::object_id::as_hex"
    )]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub content: Document,
}
