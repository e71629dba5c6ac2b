//! Insertion sort — grows a sorted prefix by sinking each element leftward.

use anyhow::Result;

use super::{require_elements, slot_order, Animate};
use crate::engine::element::Element;
use crate::engine::step::Step;

/// Maintains a sorted prefix; the element being inserted sinks one adjacent
/// swap step at a time until in place, then an immediate step takes up the
/// next element. Done when the cursor passes the end.
#[derive(Debug)]
pub struct InsertionSort {
    order: Vec<usize>,
    cursor: usize,
    hole: usize,
    step: Option<Step>,
    done: bool,
}

impl InsertionSort {
    pub fn new(elements: &[Element]) -> Result<Self> {
        require_elements(elements)?;
        Ok(InsertionSort {
            order: slot_order(elements),
            cursor: 1,
            hole: 1,
            step: None,
            done: false,
        })
    }

    fn derive_next(&mut self, elements: &[Element]) -> Option<Step> {
        if self.cursor >= self.order.len() {
            return None;
        }
        if self.hole > 0 {
            let a = self.order[self.hole - 1];
            let b = self.order[self.hole];
            if elements[a].value > elements[b].value {
                self.order.swap(self.hole - 1, self.hole);
                self.hole -= 1;
                return Some(Step::swap(a, b));
            }
        }
        // The moving element settled; take up the next one.
        self.cursor += 1;
        self.hole = self.cursor;
        Some(Step::immediate())
    }
}

impl Animate for InsertionSort {
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
        let mut elements = build_elements(&[4, 3, 2, 1], 1.0);
        let mut sort = InsertionSort::new(&elements).unwrap();
        run_to_done(&mut sort, &mut elements);
        assert_eq!(values_in_order(&elements), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sorts_mixed_input_with_duplicates() {
        let mut elements = build_elements(&[6, 2, 6, 1, 2], 1.0);
        let mut sort = InsertionSort::new(&elements).unwrap();
        run_to_done(&mut sort, &mut elements);
        assert_eq!(values_in_order(&elements), vec![1, 2, 2, 6, 6]);
    }

    #[test]
    fn single_element_is_done_on_first_animate() {
        let mut elements = build_elements(&[9], 1.0);
        let mut sort = InsertionSort::new(&elements).unwrap();
        sort.animate(&mut elements);
        assert!(sort.done());
    }

    #[test]
    fn sinking_uses_only_adjacent_exchanges() {
        // Every committed swap moves each element exactly one slot.
        let mut elements = build_elements(&[3, 2, 1], 1.0);
        let mut sort = InsertionSort::new(&elements).unwrap();
        while !sort.done() {
            let before: Vec<usize> = elements.iter().map(|e| e.index).collect();
            sort.animate(&mut elements);
            for (id, e) in elements.iter().enumerate() {
                if e.index != before[id] {
                    assert_eq!(e.index.abs_diff(before[id]), 1);
                }
            }
        }
        assert_eq!(values_in_order(&elements), vec![1, 2, 3]);
    }
}
