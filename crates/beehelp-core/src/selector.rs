//! Canned reply selection
//!
//! Stands in for a generative backend: every assistant turn is drawn uniformly
//! at random from a fixed catalog, ignoring what the user wrote. The random
//! source is a type parameter so callers can seed it or swap it out.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SelectorError;

/// Replies used when configuration doesn't provide a catalog
pub const DEFAULT_REPLIES: [&str; 5] = [
    "Hai! Saya akan membantu menjawab pertanyaan kamu.",
    "Tentu, saya mengerti masalah yang kamu hadapi.",
    "Berdasarkan informasi yang kamu berikan, berikut solusinya...",
    "Apakah ada hal lain yang bisa saya bantu?",
    "Mari kita cari solusi bersama untuk masalah ini.",
];

pub fn default_catalog() -> Vec<String> {
    DEFAULT_REPLIES.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct ResponseSelector<R = StdRng> {
    catalog: Vec<String>,
    rng: R,
}

impl ResponseSelector<StdRng> {
    /// Selector seeded from OS entropy
    pub fn new(catalog: Vec<String>) -> Result<Self, SelectorError> {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Selector with a reproducible draw sequence
    pub fn seeded(catalog: Vec<String>, seed: u64) -> Result<Self, SelectorError> {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ResponseSelector<R> {
    /// Builds a selector over `catalog`, rejecting an empty catalog or blank entries
    /// so misconfiguration fails at startup instead of producing empty turns.
    pub fn with_rng(catalog: Vec<String>, rng: R) -> Result<Self, SelectorError> {
        if catalog.is_empty() {
            return Err(SelectorError::EmptyCatalog);
        }
        if let Some(index) = catalog.iter().position(|reply| reply.trim().is_empty()) {
            return Err(SelectorError::BlankReply { index });
        }

        Ok(Self { catalog, rng })
    }

    pub fn select(&mut self) -> String {
        // catalog is non-empty by construction
        let index = self.rng.gen_range(0..self.catalog.len());
        self.catalog[index].clone()
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn contains(&self, reply: &str) -> bool {
        self.catalog.iter().any(|c| c == reply)
    }
}
