use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::Serializer;

/// Writes `_id` as the 24-hex string clients pass back in `/:id` paths.
///
/// Only ids read back from the store are ever `Some`; new documents leave
/// `_id` unset and let MongoDB assign a native ObjectId.
pub fn as_hex<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serialize_object_id_as_hex_string(oid, serializer),
        None => serializer.serialize_none(),
    }
}
