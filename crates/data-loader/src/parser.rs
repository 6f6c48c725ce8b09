//! Parser for perk payloads.
//!
//! Two shapes are accepted, since the listing endpoint has shipped both:
//! - a bare array: `[{"id": 1, "title": "...", "merchant": "..."}, ...]`
//! - a wrapped object: `{"perks": [ ... ]}`
//!
//! Both the HTTP and the file sources funnel their bytes through
//! [`parse_perks`], so the id-uniqueness check applies to every load.

use crate::error::Result;
use crate::types::{Perk, PerkCollection};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<Perk>),
    Wrapped { perks: Vec<Perk> },
}

impl Payload {
    fn into_perks(self) -> Vec<Perk> {
        match self {
            Payload::Bare(perks) => perks,
            Payload::Wrapped { perks } => perks,
        }
    }
}

/// Decode a response body into a validated collection.
pub fn parse_perks(body: &[u8]) -> Result<PerkCollection> {
    let payload: Payload = serde_json::from_slice(body)?;
    PerkCollection::from_perks(payload.into_perks())
}

/// Read and decode a payload stored on disk.
pub async fn load_from_file(path: &Path) -> Result<PerkCollection> {
    let bytes = tokio::fs::read(path).await?;
    parse_perks(&bytes)
}
