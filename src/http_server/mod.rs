//! # HTTP Server Module
//!
//! JSON-over-HTTP API for the employee collection.
//!
//! # Endpoints
//!
//! - `GET /employee` - List every employee
//! - `POST /employee` - Create an employee
//! - `PUT /employee/:id` - Replace an employee's fields
//! - `DELETE /employee/:id` - Remove an employee

pub mod config;
pub mod employee_routes;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use employee_routes::{employee_routes, EmployeeState, DELETE_CONFIRMATION};
pub use errors::ApiError;
pub use server::{app, HttpServer};
