//! Client library for the kiglist API.
//!
//! [`http`] is the JSON request core, [`api`] the typed per-resource facade
//! built on it, and [`session`] the admin token store whose token the
//! facade's authenticated calls consume.

pub mod api;
pub mod http;
pub mod session;

pub use api::KiglistApi;
pub use http::{ApiError, HttpClient, RequestOptions};
pub use session::{AuthSession, AuthState, FileStorage, MemoryStorage, SessionStorage};
