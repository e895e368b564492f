//! Meteor - photo search tool for a space-education agent
//!
//! This library provides the `getPhotos` tool, the data sources behind it,
//! and the agent profile an external host registers at startup.

pub mod agent;
pub mod config;
pub mod error;
pub mod photos;
pub mod tools;
pub mod ui;

pub use error::{Error, ErrorKind, ErrorPayload, Result};
