//! kiglist web server library.
//!
//! Exposes configuration, state, page data loaders, and routes so
//! integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod loaders;
pub mod router;
pub mod routes;
pub mod state;
