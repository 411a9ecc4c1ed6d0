//! Request types for the storage API
//!
//! Each type represents one API operation: it holds the operation's
//! parameters and renders the target URL path via [`Request::request_url`].
//! Types that carry a body implement [`RequestBody`] on top, which maps the
//! struct's fields to the wire format the API expects.

mod storage;

pub use storage::{
    AttachStorageRequest, CreateStorageRequest, DeleteStorageRequest, DetachStorageRequest,
    GetStorageDetailsRequest, GetStoragesRequest, ModifyStorageRequest,
};

use serde::Serialize;
use tracing::trace;

use crate::errors::Result;

/// A single API operation, able to render its target URL path
pub trait Request {
    /// Path of the endpoint this request targets, relative to the API base URL.
    ///
    /// Pure and infallible: identifier fields are interpolated verbatim with
    /// no shape validation, so a malformed UUID surfaces as a remote error
    /// rather than a client-side one.
    fn request_url(&self) -> String;
}

/// A request that carries a serialized body
///
/// Field-to-element mapping is declared with serde attributes on the
/// concrete type: identity fields used only for URL construction are
/// skipped, optional fields are omitted entirely when unset (never emitted
/// as empty tags or nulls).
pub trait RequestBody: Request + Serialize {
    /// Root element name wrapping the serialized fields
    fn element_name(&self) -> &'static str;

    /// Render the body as an XML document
    fn to_xml(&self) -> Result<String> {
        let mut out = String::new();
        let ser = quick_xml::se::Serializer::with_root(&mut out, Some(self.element_name()))?;
        self.serialize(ser)?;
        trace!(element = self.element_name(), "rendered XML request body");
        Ok(out)
    }

    /// Render the body as a JSON value, fields wrapped under the root
    /// element name as the single top-level key
    fn to_json(&self) -> Result<serde_json::Value> {
        let fields = serde_json::to_value(self)?;
        let mut root = serde_json::Map::new();
        root.insert(self.element_name().to_string(), fields);
        trace!(element = self.element_name(), "rendered JSON request body");
        Ok(serde_json::Value::Object(root))
    }
}
