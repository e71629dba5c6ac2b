//! Shared boundary types for the sorting visualizer.
//!
//! This module defines the two key data contracts:
//! - Control channel → Driver: `Signal`
//! - Driver → caller: `Completion`, emitted once per finished sort

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A discrete control signal delivered to the driver.
///
/// Signals carry no payload; a fresh dataset travels separately through
/// `Driver::load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Start,
    Pause,
    Stop,
    Continue,
}

/// Emitted exactly once per full sort, for external ranking/reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Number of ticks during which the algorithm actually advanced.
    pub ticks: u64,
    /// Wall-clock time between the last `Start` and completion.
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// Style primitives (serialized in the run config)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}
