//! Configuration module
//!
//! Provides the theme config record, its validation rules, and file
//! loading/discovery.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
