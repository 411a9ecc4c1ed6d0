//! Request-building layer for the UpCloud storage API
//!
//! Each request type holds the parameters of one API operation and renders
//! the operation's URL path. Types that carry a body also know how to
//! serialize it for the wire (XML or JSON). Transport, authentication and
//! response parsing live in the surrounding SDK runtime, not here.
//!
//! # Module Organization
//!
//! - [`errors`] - Error types (UpcloudError, Result)
//! - [`models`] - Domain value objects and API vocabulary (BackupRule, constants)
//! - [`request`] - Request types and the Request/RequestBody traits

pub mod errors;
pub mod models;
pub mod request;

pub use errors::{Result, UpcloudError};
pub use request::{Request, RequestBody};
