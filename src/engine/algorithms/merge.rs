//! Merge sort — bottom-up run merging, with element relocations expressed
//! as chains of adjacent exchanges so every visual move is a standard swap.

use anyhow::Result;

use super::{require_elements, slot_order, Animate};
use crate::engine::element::Element;
use crate::engine::step::Step;

/// An element sinking leftward from `pos` to `target`, one adjacent swap
/// step per derivation.
#[derive(Debug)]
struct Rotation {
    pos: usize,
    target: usize,
}

/// Merges runs of doubling width. Within a merge of `[lo, mid)` and
/// `[mid, hi)`, the left cursor is compared against the right run's head:
/// in order emits an immediate step, out of order rotates the right head
/// into place. Done when the run width reaches the sequence length.
#[derive(Debug)]
pub struct MergeSort {
    order: Vec<usize>,
    width: usize,
    lo: usize,
    i: usize,
    mid: usize,
    hi: usize,
    rot: Option<Rotation>,
    step: Option<Step>,
    done: bool,
}

impl MergeSort {
    pub fn new(elements: &[Element]) -> Result<Self> {
        require_elements(elements)?;
        let order = slot_order(elements);
        let len = order.len();
        Ok(MergeSort {
            order,
            width: 1,
            lo: 0,
            i: 0,
            mid: 1.min(len),
            hi: 2.min(len),
            rot: None,
            step: None,
            done: false,
        })
    }

    fn derive_next(&mut self, elements: &[Element]) -> Option<Step> {
        loop {
            if self.width >= self.order.len() {
                return None;
            }
            if let Some(rot) = &mut self.rot {
                let p = rot.pos;
                let a = self.order[p - 1];
                let b = self.order[p];
                self.order.swap(p - 1, p);
                rot.pos -= 1;
                if rot.pos == rot.target {
                    self.rot = None;
                    self.i += 1;
                    self.mid += 1;
                }
                return Some(Step::swap(a, b));
            }
            if self.i < self.mid && self.mid < self.hi {
                let left = self.order[self.i];
                let right = self.order[self.mid];
                if elements[left].value <= elements[right].value {
                    self.i += 1;
                    return Some(Step::immediate());
                }
                self.rot = Some(Rotation {
                    pos: self.mid,
                    target: self.i,
                });
                continue;
            }
            self.advance_pair();
        }
    }

    /// Move on to the next pair of runs, doubling the width once every pair
    /// at the current width has been merged.
    fn advance_pair(&mut self) {
        let len = self.order.len();
        self.lo += self.width * 2;
        if self.lo + self.width >= len {
            self.width *= 2;
            self.lo = 0;
            if self.width >= len {
                return;
            }
        }
        self.i = self.lo;
        self.mid = (self.lo + self.width).min(len);
        self.hi = (self.lo + self.width * 2).min(len);
    }
}

impl Animate for MergeSort {
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
