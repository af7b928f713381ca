// Phonebook - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform, app, or any filesystem access.

pub mod format;
pub mod model;
pub mod parser;
pub mod sample;
pub mod search;
