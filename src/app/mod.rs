// Phonebook - app/mod.rs
//
// Application layer: record store, query handlers, command routing.
// Dependencies: core, platform.

pub mod handlers;
pub mod router;
pub mod store;
