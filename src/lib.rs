// Phonebook - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// for hosts that plug the query handlers into their own message transport.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
