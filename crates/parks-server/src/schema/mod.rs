//! JSON API schema types.
//!
//! Types use serde derives for JSON serialization. Request bodies live in
//! [`crate::decode`] because they are validated on extraction.

pub mod parks;
