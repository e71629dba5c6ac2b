//! Run configuration — the human-authored knobs of a visualization run.
//!
//! Everything here is pacing and presentation: the tick period changes how
//! fast a sort plays, never which steps it takes.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::engine::AlgorithmKind;
use crate::types::{Color, NamedColor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Algorithm identifier: bubble, selection, insertion or merge.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Number of elements to generate.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Generated values are drawn from `0..max_value`.
    #[serde(default = "default_max_value")]
    pub max_value: u32,
    /// Tick period in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Bar color.
    #[serde(default = "default_color")]
    pub color: Color,
    /// Seed for reproducible datasets; omitted means a fresh one per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_algorithm() -> String {
    "bubble".into()
}
fn default_count() -> usize {
    10
}
fn default_max_value() -> u32 {
    1000
}
fn default_tick_ms() -> u64 {
    10
}
fn default_color() -> Color {
    Color::Named(NamedColor::Red)
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            algorithm: default_algorithm(),
            count: default_count(),
            max_value: default_max_value(),
            tick_ms: default_tick_ms(),
            color: default_color(),
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn load(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {path}"))?;
        serde_json::from_str(&json).with_context(|| format!("Failed to parse {path}"))
    }

    /// The configured algorithm, parsed. Unknown identifiers fail here,
    /// before any clock starts.
    pub fn kind(&self) -> Result<AlgorithmKind> {
        AlgorithmKind::parse(&self.algorithm)
    }

    /// Generate a fresh dataset of `count` values below `max_value`.
    pub fn generate_dataset(&self) -> Vec<u32> {
        let mut rng: StdRng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        (0..self.count)
            .map(|_| rng.random_range(0..self.max_value.max(1)))
            .collect()
    }
}
