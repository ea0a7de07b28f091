//! Shared domain types for kiglist.
//!
//! Holds the records exchanged with the kiglist API, the locale set used
//! for localized URLs, and the pure builders for JSON-LD and sitemap XML.
//! Nothing in this crate performs I/O.

pub mod character;
pub mod crawl;
pub mod error;
pub mod jsonld;
pub mod kiger;
pub mod locale;
pub mod maker;
pub mod review;
pub mod sitemap;
pub mod types;
