//! Podcastr Core
//!
//! Platform-agnostic episode types, catalog loading, and error handling for
//! Podcastr Player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Episode`
//! - **Episode Data Source**: `Catalog`, parsed from the podcast API's JSON shape
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{Catalog, Episode};
//!
//! let catalog = Catalog::from_json_str(
//!     r#"{ "episodes": [ {
//!         "title": "Faladev #30",
//!         "members": "Diego e Richard",
//!         "thumbnail": "https://example.com/thumb.jpg",
//!         "file": { "url": "https://example.com/30.m4a", "duration": 3981 }
//!     } ] }"#,
//! )
//! .unwrap();
//!
//! let episode: &Episode = catalog.get(0).unwrap();
//! assert_eq!(episode.duration, 3981);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod episode;
pub mod error;

pub use catalog::Catalog;
pub use episode::Episode;
pub use error::{CoreError, Result};
