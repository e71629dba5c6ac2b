//! Engine — the algorithm-stepping and swap-animation core.
//!
//! Turns a sorting algorithm's abstract comparisons and swaps into a
//! sequence of discrete, independently replayable animation steps.
//!
//! The engine understands elements, steps, and transitions. It never deals
//! with terminals, clocks, or control signals — the driver bridges those.

pub mod algorithms;
pub mod element;
pub mod step;
pub mod swap;

pub use algorithms::{Animate, AlgorithmKind, Sorter};
pub use element::Element;
pub use step::Step;
pub use swap::SwapTransition;

/// Build the element arena for a fresh dataset, one element per value,
/// positioned in input order.
pub fn build_elements(values: &[u32], scale: f64) -> Vec<Element> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Element::new(value, i, scale))
        .collect()
}
