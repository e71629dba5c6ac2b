//! Renderer — the render surfaces the engine draws on.
//!
//! The engine and driver know nothing about terminals; they speak to a
//! `RenderSurface`. The terminal implementation paints one bar column per
//! element; the null implementation backs headless races and tests.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, queue, style};

use crate::types::{Color, NamedColor};

/// Rows reserved above the canvas for the menu bar.
pub const CANVAS_OFFSET: u16 = 1;

/// Drawing boundary between the engine and the outside world.
///
/// `clear` and `draw_element` are invoked once per tick and once per element
/// per tick respectively; `present` flushes the frame.
pub trait RenderSurface {
    fn clear(&mut self) -> Result<()>;
    fn draw_element(&mut self, value: u32, position: f64, scale: f64) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

/// Discards every draw call. Used for headless races and tests.
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw_element(&mut self, _value: u32, _position: f64, _scale: f64) -> Result<()> {
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Paints value-proportional bar columns onto the terminal canvas area.
pub struct TerminalSurface {
    stdout: io::Stdout,
    /// Canvas size in cells, below the menu bar.
    width: u16,
    height: u16,
    /// Largest value the dataset can contain; scales bar heights.
    max_value: u32,
    bar_width: u16,
    color: style::Color,
}

impl TerminalSurface {
    pub fn new(width: u16, height: u16, max_value: u32, color: &Color) -> Self {
        TerminalSurface {
            stdout: io::stdout(),
            width,
            height,
            max_value: max_value.max(1),
            bar_width: 2,
            color: to_ct_color(color),
        }
    }

    /// Canvas width in cells needed for `count` bars at the given scale.
    pub fn required_width(count: usize, scale: f64) -> u16 {
        (count as f64 * 2.0 * scale + 2.0).ceil() as u16
    }

    fn bar_height(&self, value: u32) -> u16 {
        let h = f64::from(self.height) * f64::from(value) / f64::from(self.max_value);
        (h.ceil() as u16).clamp(1, self.height)
    }
}

impl RenderSurface for TerminalSurface {
    fn clear(&mut self) -> Result<()> {
        for y in 0..self.height {
            queue!(self.stdout, cursor::MoveTo(0, y + CANVAS_OFFSET))?;
            for _ in 0..self.width {
                queue!(self.stdout, style::Print(" "))?;
            }
        }
        Ok(())
    }

    fn draw_element(&mut self, value: u32, position: f64, scale: f64) -> Result<()> {
        let pitch = f64::from(self.bar_width) * scale;
        let x = (position * pitch).round() as i64;
        if x < 0 || x + i64::from(self.bar_width) > i64::from(self.width) {
            return Ok(());
        }
        let x = x as u16;
        let h = self.bar_height(value);

        queue!(self.stdout, style::SetForegroundColor(self.color))?;
        for row in 0..h {
            let y = self.height - 1 - row + CANVAS_OFFSET;
            queue!(self.stdout, cursor::MoveTo(x, y))?;
            for _ in 0..self.bar_width {
                queue!(self.stdout, style::Print("\u{2588}"))?;
            }
        }
        queue!(self.stdout, style::ResetColor)?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Color conversion
// ---------------------------------------------------------------------------

pub fn to_ct_color(c: &Color) -> style::Color {
    match c {
        Color::Named(n) => match n {
            NamedColor::Black => style::Color::Black,
            NamedColor::Red => style::Color::Red,
            NamedColor::Green => style::Color::Green,
            NamedColor::Yellow => style::Color::Yellow,
            NamedColor::Blue => style::Color::Blue,
            NamedColor::Magenta => style::Color::Magenta,
            NamedColor::Cyan => style::Color::Cyan,
            NamedColor::White => style::Color::White,
        },
        Color::Rgb { r, g, b } => style::Color::Rgb {
            r: *r,
            g: *g,
            b: *b,
        },
    }
}
