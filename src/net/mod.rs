//! Networking modules for the student REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the auth client contract and its HTTP implementation, and
//! `types` defines the JSON schema shared with the student API.

pub mod api;
pub mod types;
