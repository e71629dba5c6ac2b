//! Bubble sort — adjacent-pair passes over a shrinking unsorted prefix.

use anyhow::Result;

use super::{require_elements, slot_order, Animate};
use crate::engine::element::Element;
use crate::engine::step::Step;

/// Compares adjacent pairs across passes; an out-of-order pair emits a swap
/// step, an in-order pair an immediate one. A full pass without a swap marks
/// the sort done; each completed pass shrinks the prefix by one.
#[derive(Debug)]
pub struct BubbleSort {
    order: Vec<usize>,
    cursor: usize,
    end: usize,
    swapped: bool,
    step: Option<Step>,
    done: bool,
}

impl BubbleSort {
    pub fn new(elements: &[Element]) -> Result<Self> {
        require_elements(elements)?;
        let order = slot_order(elements);
        let end = order.len();
        Ok(BubbleSort {
            order,
            cursor: 0,
            end,
            swapped: false,
            step: None,
            done: false,
        })
    }

    fn derive_next(&mut self, elements: &[Element]) -> Option<Step> {
        loop {
            if self.end < 2 {
                return None;
            }
            if self.cursor + 1 >= self.end {
                if !self.swapped {
                    return None;
                }
                self.swapped = false;
                self.cursor = 0;
                self.end -= 1;
                continue;
            }
            let i = self.cursor;
            self.cursor += 1;
            let a = self.order[i];
            let b = self.order[i + 1];
            if elements[a].value > elements[b].value {
                self.order.swap(i, i + 1);
                self.swapped = true;
                return Some(Step::swap(a, b));
            }
            return Some(Step::immediate());
        }
    }
}

impl Animate for BubbleSort {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::algorithms::tests_support::{run_to_done, values_in_order};
    use crate::engine::build_elements;

    #[test]
    fn sorts_reverse_ordered_input() {
        let mut elements = build_elements(&[5, 4, 3, 2, 1], 1.0);
        let mut sort = BubbleSort::new(&elements).unwrap();
        run_to_done(&mut sort, &mut elements);
        assert_eq!(values_in_order(&elements), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn already_sorted_input_ends_after_one_pass() {
        let mut elements = build_elements(&[1, 2, 3, 4], 1.0);
        let mut sort = BubbleSort::new(&elements).unwrap();
        // Three in-order comparisons, then the pass ends without a swap.
        let calls = run_to_done(&mut sort, &mut elements);
        assert_eq!(calls, 4);
        assert_eq!(values_in_order(&elements), vec![1, 2, 3, 4]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let mut elements = build_elements(&[3, 1, 3, 1], 1.0);
        let mut sort = BubbleSort::new(&elements).unwrap();
        run_to_done(&mut sort, &mut elements);
        assert_eq!(values_in_order(&elements), vec![1, 1, 3, 3]);
    }

    #[test]
    fn animate_after_done_leaves_everything_unchanged() {
        let mut elements = build_elements(&[2, 1], 1.0);
        let mut sort = BubbleSort::new(&elements).unwrap();
        run_to_done(&mut sort, &mut elements);
        let snapshot: Vec<(usize, f64)> =
            elements.iter().map(|e| (e.index, e.pos)).collect();
        for _ in 0..10 {
            sort.animate(&mut elements);
        }
        assert!(sort.done());
        let after: Vec<(usize, f64)> =
            elements.iter().map(|e| (e.index, e.pos)).collect();
        assert_eq!(snapshot, after);
    }
}
