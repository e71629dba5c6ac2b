//! Sorting algorithm state machines and their factory.
//!
//! Each algorithm lives in its own module with its cursor state and
//! next-step derivation side by side. All four are lazy producers of
//! `Step`s: one `animate()` call performs at most one comparison-decision
//! and at most one transition-advance.

mod bubble;
mod insertion;
mod merge;
mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use selection::SelectionSort;

use anyhow::{bail, Result};

use crate::engine::element::Element;

/// Advance an algorithm by one unit of work against the shared arena.
///
/// `done` becomes true exactly once, after the last step completes and no
/// further comparisons remain; from then on `animate` is a no-op. There is
/// no reset — a new sort requires a new instance.
pub trait Animate {
    fn animate(&mut self, elements: &mut [Element]);
    fn done(&self) -> bool;
}

/// The fixed set of registered algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Selection,
        AlgorithmKind::Insertion,
        AlgorithmKind::Merge,
    ];

    /// Parse an identifier. Unrecognized names are a configuration error.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "bubble" => Ok(AlgorithmKind::Bubble),
            "selection" => Ok(AlgorithmKind::Selection),
            "insertion" => Ok(AlgorithmKind::Insertion),
            "merge" => Ok(AlgorithmKind::Merge),
            _ => bail!(
                "unknown sorting algorithm '{name}' (expected one of: \
                 bubble, selection, insertion, merge)"
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Selection => "selection",
            AlgorithmKind::Insertion => "insertion",
            AlgorithmKind::Merge => "merge",
        }
    }
}

/// One active sorting algorithm bound to an element arena.
#[derive(Debug)]
pub enum Sorter {
    Bubble(BubbleSort),
    Selection(SelectionSort),
    Insertion(InsertionSort),
    Merge(MergeSort),
}

impl Sorter {
    /// Construct a fresh algorithm instance over the given elements.
    ///
    /// Fails on an empty arena; never returns a partially-constructed
    /// algorithm.
    pub fn build(kind: AlgorithmKind, elements: &[Element]) -> Result<Self> {
        Ok(match kind {
            AlgorithmKind::Bubble => Sorter::Bubble(BubbleSort::new(elements)?),
            AlgorithmKind::Selection => Sorter::Selection(SelectionSort::new(elements)?),
            AlgorithmKind::Insertion => Sorter::Insertion(InsertionSort::new(elements)?),
            AlgorithmKind::Merge => Sorter::Merge(MergeSort::new(elements)?),
        })
    }
}

impl Animate for Sorter {
    fn animate(&mut self, elements: &mut [Element]) {
        match self {
            Sorter::Bubble(s) => s.animate(elements),
            Sorter::Selection(s) => s.animate(elements),
            Sorter::Insertion(s) => s.animate(elements),
            Sorter::Merge(s) => s.animate(elements),
        }
    }

    fn done(&self) -> bool {
        match self {
            Sorter::Bubble(s) => s.done(),
            Sorter::Selection(s) => s.done(),
            Sorter::Insertion(s) => s.done(),
            Sorter::Merge(s) => s.done(),
        }
    }
}

/// Require a non-empty arena at algorithm construction.
fn require_elements(elements: &[Element]) -> Result<()> {
    if elements.is_empty() {
        bail!("cannot sort an empty dataset");
    }
    Ok(())
}

/// Element ids in current slot order, the private bookkeeping every
/// algorithm starts from.
fn slot_order(elements: &[Element]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..elements.len()).collect();
    order.sort_by_key(|&id| elements[id].index);
    order
}
