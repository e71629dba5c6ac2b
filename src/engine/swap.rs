//! SwapTransition — a bounded, restart-free sub-animation exchanging two
//! elements' positions.

use crate::engine::element::Element;

/// Number of ticks a swap animation takes from start to finish.
pub const SWAP_TICKS: u32 = 10;

/// Interpolates two elements' rendered positions from their arrangement at
/// creation time to the swapped arrangement, then exchanges their logical
/// indices exactly once.
///
/// The endpoints are captured at construction, so intermediate positions
/// never leave `[min(from_a, from_b), max(from_a, from_b)]` and the final
/// positions are integer-exact. Never reused across element pairs; the
/// owning step discards it once done.
#[derive(Debug)]
pub struct SwapTransition {
    a: usize,
    b: usize,
    from_a: f64,
    from_b: f64,
    ticks: u32,
    done: bool,
}

impl SwapTransition {
    /// Capture the two elements' current positions as interpolation
    /// endpoints. `a` and `b` are ids into the element arena.
    pub fn new(a: usize, b: usize, elements: &[Element]) -> Self {
        SwapTransition {
            a,
            b,
            from_a: elements[a].pos,
            from_b: elements[b].pos,
            ticks: 0,
            done: false,
        }
    }

    pub fn done(&self) -> bool {
        self.done
    }

    /// Advance the interpolation by one increment. On the final increment,
    /// snap both positions to the exact swapped endpoints and exchange the
    /// logical indices. A no-op once done.
    pub fn animate(&mut self, elements: &mut [Element]) {
        if self.done {
            return;
        }
        self.ticks += 1;
        if self.ticks >= SWAP_TICKS {
            elements[self.a].pos = self.from_b;
            elements[self.b].pos = self.from_a;
            let ia = elements[self.a].index;
            let ib = elements[self.b].index;
            elements[self.a].index = ib;
            elements[self.b].index = ia;
            self.done = true;
            return;
        }
        let t = f64::from(self.ticks) / f64::from(SWAP_TICKS);
        elements[self.a].pos = self.from_a + (self.from_b - self.from_a) * t;
        elements[self.b].pos = self.from_b + (self.from_a - self.from_b) * t;
    }
}
