//! # Employee Codec
//!
//! Converts between request bodies, stored documents and response values.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc, Document};
use serde_json::Value;

use super::errors::{CodecError, CodecResult};
use super::model::{Employee, EmployeeRecord};

/// Decode a request body into an employee
///
/// The body must be a JSON object. Unknown fields are ignored.
pub fn decode_body(body: &[u8]) -> CodecResult<Employee> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(CodecError::Decode(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse a path segment into the store's identifier type
pub fn parse_id(raw: &str) -> CodecResult<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|e| CodecError::Format(format!("invalid employee id {:?}: {}", raw, e)))
}

/// Persisted form of a new employee
///
/// Any identifier on `employee` is dropped so the store assigns one.
pub fn to_document(employee: &Employee) -> CodecResult<Document> {
    let record = EmployeeRecord {
        id: None,
        name: employee.name.clone(),
        salary: employee.salary,
        age: employee.age,
    };
    bson::to_document(&record).map_err(|e| CodecError::Document(e.to_string()))
}

/// Wire form of a stored document
pub fn from_document(document: Document) -> CodecResult<Employee> {
    let record: EmployeeRecord =
        bson::from_document(document).map_err(|e| CodecError::Document(e.to_string()))?;

    let employee = Employee::new(record.name, record.salary, record.age);
    Ok(match record.id {
        Some(id) => employee.with_id(&id),
        None => employee,
    })
}

/// Wire form of every stored document, in store order
pub fn from_documents(documents: Vec<Document>) -> CodecResult<Vec<Employee>> {
    documents.into_iter().map(from_document).collect()
}

/// Field values written by a full update: name, age and salary
pub fn update_fields(employee: &Employee) -> Document {
    doc! {
        "name": employee.name.as_str(),
        "age": employee.age,
        "salary": employee.salary,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
