//! hrms - employee records over HTTP, backed by a document database
//!
//! - [`store`]: record store adapter (MongoDB, in-memory)
//! - [`employee`]: the employee resource and its codec
//! - [`http_server`]: routes and handlers
//! - [`cli`]: argument parsing, configuration and boot
//! - [`observability`]: logging setup and lifecycle events

pub mod cli;
pub mod employee;
pub mod http_server;
pub mod observability;
pub mod store;
