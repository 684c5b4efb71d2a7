//! Employee wire and persisted shapes

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

/// Employee as exchanged over HTTP
///
/// Absent or `null` business fields decode to their zero value. The
/// identifier is omitted from output while unassigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub salary: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub age: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: f64, age: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            salary,
            age,
        }
    }

    /// Same employee carrying the given identifier
    pub fn with_id(mut self, id: &ObjectId) -> Self {
        self.id = Some(id.to_hex());
        self
    }

    /// Same employee with any identifier discarded
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }
}

fn is_unassigned(id: &Option<String>) -> bool {
    id.as_deref().map_or(true, str::is_empty)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Employee as stored in the collection: `{_id, name, salary, age}`
///
/// Stored `null` business fields read back as their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct EmployeeRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub salary: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub age: f64,
}
