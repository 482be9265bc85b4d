//! Networking: wire types, typed errors, the HTTP client, and one thin
//! service module per API resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each service function maps exactly one REST call onto one typed result.
//! Failures are logged with the operation name and returned unchanged, so
//! pages decide how to present them.

pub mod auth;
pub mod client;
pub mod equipment;
pub mod equipment_types;
pub mod error;
pub mod makes;
pub mod movements;
pub mod organizations;
pub mod types;
pub mod users;
