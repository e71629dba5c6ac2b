//! Step — one unit of algorithmic work.

use crate::engine::element::Element;
use crate::engine::swap::SwapTransition;

/// One comparison-decision plus, conditionally, one swap animation.
///
/// The decision is fixed at construction by the owning algorithm; a step
/// never decides a new comparison. `Immediate` steps complete on their first
/// `execute()`; `Swap` steps lazily construct their transition on first
/// `execute()` and complete when it does.
#[derive(Debug)]
pub enum Step {
    Immediate { done: bool },
    Swap {
        a: usize,
        b: usize,
        transition: Option<SwapTransition>,
    },
}

impl Step {
    /// A comparison that needs no visual exchange.
    pub fn immediate() -> Self {
        Step::Immediate { done: false }
    }

    /// A comparison that exchanges the elements with arena ids `a` and `b`.
    pub fn swap(a: usize, b: usize) -> Self {
        Step::Swap {
            a,
            b,
            transition: None,
        }
    }

    pub fn done(&self) -> bool {
        match self {
            Step::Immediate { done } => *done,
            Step::Swap { transition, .. } => {
                transition.as_ref().is_some_and(SwapTransition::done)
            }
        }
    }

    /// Advance this step by one tick. Idempotent once done.
    pub fn execute(&mut self, elements: &mut [Element]) {
        match self {
            Step::Immediate { done } => *done = true,
            Step::Swap { a, b, transition } => {
                let swap = transition
                    .get_or_insert_with(|| SwapTransition::new(*a, *b, elements));
                swap.animate(elements);
            }
        }
    }
}
