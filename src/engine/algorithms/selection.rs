//! Selection sort — repeatedly moves the minimum of the unsearched suffix
//! to its front.

use std::collections::VecDeque;

use anyhow::Result;

use super::{require_elements, slot_order, Animate};
use crate::engine::element::Element;
use crate::engine::step::Step;

/// Keeps a shrinking unsearched suffix of element ids. Each step-derivation
/// scans the suffix for the minimum value (first occurrence wins ties) and
/// emits a swap step exchanging it with the suffix front; fronts that are
/// already the minimum shrink the suffix without a visible step.
#[derive(Debug)]
pub struct SelectionSort {
    section: VecDeque<usize>,
    step: Option<Step>,
    done: bool,
}

impl SelectionSort {
    pub fn new(elements: &[Element]) -> Result<Self> {
        require_elements(elements)?;
        Ok(SelectionSort {
            section: slot_order(elements).into(),
            step: None,
            done: false,
        })
    }

    fn derive_next(&mut self, elements: &[Element]) -> Option<Step> {
        while self.section.len() > 1 {
            let mut min_at = 0;
            for k in 1..self.section.len() {
                if elements[self.section[k]].value < elements[self.section[min_at]].value {
                    min_at = k;
                }
            }
            if min_at == 0 {
                // Front already correct; shrink and keep scanning.
                self.section.pop_front();
                continue;
            }
            let front = self.section[0];
            let lowest = self.section[min_at];
            // Record the exchange in the private order before the animation
            // catches the shared positions up.
            self.section[min_at] = front;
            self.section[0] = lowest;
            self.section.pop_front();
            return Some(Step::swap(front, lowest));
        }
        self.section.clear();
        None
    }
}

impl Animate for SelectionSort {
    fn animate(&mut self, elements: &mut [Element]) {
        if self.done {
            return;
        }
        if self.step.as_ref().is_none_or(Step::done) {
            match self.derive_next(elements) {
                Some(next) => self.step = Some(next),
                None => {
                    self.done = true;
                    return;
                }
            }
        }
        if let Some(step) = &mut self.step {
            step.execute(elements);
        }
    }

    fn done(&self) -> bool {
        self.done
    }
}
