//! Typed client for the headless CMS REST API.
//!
//! Every call returns a typed result; transport failures on read paths
//! degrade to empty results instead of surfacing to the page handlers.

mod auth;
mod client;
mod content;
mod messages;

pub use client::CmsClient;
