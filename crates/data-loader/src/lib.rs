//! # Data Loader Crate
//!
//! This crate loads the public perk collection the directory page lists.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Perk, PerkId, PerkCollection)
//! - **parser**: Decode JSON payloads into a validated collection
//! - **source**: The `PerkSource` trait and the file-backed source
//! - **client**: HTTP-backed source for the live backend
//! - **config**: Backend address and timeout settings
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{ClientConfig, HttpPerkSource, PerkSource};
//!
//! let source = HttpPerkSource::new(&ClientConfig::new("http://localhost:4000"))?;
//! let perks = source.fetch_all().await?;
//!
//! println!("Loaded {} perks", perks.len());
//! ```

// Public modules
pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod source;
pub mod types;

// Re-export commonly used types for convenience
pub use client::HttpPerkSource;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_PERKS_PATH};
pub use error::{LoadError, Result};
pub use parser::parse_perks;
pub use source::{FilePerkSource, PerkSource};
pub use types::{Perk, PerkCollection, PerkId};
