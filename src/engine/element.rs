//! Element — one visualized array entry.

use anyhow::Result;

use crate::renderer::RenderSurface;

/// Horizontal spacing factor between adjacent bars, matching the slot pitch
/// the render surface draws with.
pub const DEFAULT_SCALE: f64 = 1.1;

/// A value-holding visual unit with a position slot.
///
/// `value` is immutable once created; during a sort only positions permute,
/// so the finished arrangement is a permutation of the input. `index` is the
/// logical slot and changes exactly once per swap, at transition completion.
/// `pos` is the rendered position and is the only field a transition moves
/// incrementally.
#[derive(Debug, Clone)]
pub struct Element {
    pub value: u32,
    pub index: usize,
    pub pos: f64,
    pub scale: f64,
}

impl Element {
    pub fn new(value: u32, index: usize, scale: f64) -> Self {
        Element {
            value,
            index,
            pos: index as f64,
            scale,
        }
    }

    /// Render this element at its current (possibly mid-swap) position.
    pub fn draw(&self, surface: &mut dyn RenderSurface) -> Result<()> {
        surface.draw_element(self.value, self.pos, self.scale)
    }
}
