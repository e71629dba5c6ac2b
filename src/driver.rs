//! Driver — bridges the external clock and control channel to the
//! algorithm.
//!
//! Owns the element arena and at most one active algorithm. One `tick()`
//! performs at most one `animate()` call and always redraws every element,
//! so paused frames still show the last committed state. The clock itself
//! is external; the driver only tracks whether ticks should advance the
//! algorithm.

use std::time::Instant;

use anyhow::{bail, Result};

use crate::engine::{self, AlgorithmKind, Animate, Element, Sorter};
use crate::renderer::RenderSurface;
use crate::types::{Completion, Signal};

/// Explicit clock state, replacing ad hoc interval handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    Stopped,
    Running,
    Paused,
}

pub struct Driver {
    kind: AlgorithmKind,
    elements: Vec<Element>,
    sorter: Option<Sorter>,
    clock: Clock,
    ticks: u64,
    started: Option<Instant>,
    finished: bool,
}

impl Driver {
    pub fn new(kind: AlgorithmKind) -> Self {
        Driver {
            kind,
            elements: Vec::new(),
            sorter: None,
            clock: Clock::Stopped,
            ticks: 0,
            started: None,
            finished: false,
        }
    }

    /// Replace the dataset wholesale and bind a fresh algorithm to it.
    ///
    /// An empty dataset is a configuration error; the previous state is
    /// discarded either way.
    pub fn load(&mut self, values: &[u32], scale: f64) -> Result<()> {
        self.sorter = None;
        self.clock = Clock::Stopped;
        self.ticks = 0;
        self.started = None;
        self.finished = false;
        self.elements = engine::build_elements(values, scale);
        self.sorter = Some(Sorter::build(self.kind, &self.elements)?);
        Ok(())
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// React to a control signal. Signals that do not apply to the current
    /// state (a pause before any start, a stray continue) are tolerated as
    /// no-ops; the control channel is asynchronous relative to the engine.
    pub fn signal(&mut self, signal: Signal) -> Result<()> {
        match signal {
            Signal::Start => {
                if self.elements.is_empty() {
                    return Ok(());
                }
                // Re-derive the algorithm against the current arrangement
                // and reset the completion counters.
                self.sorter = Some(Sorter::build(self.kind, &self.elements)?);
                self.ticks = 0;
                self.started = Some(Instant::now());
                self.finished = false;
                self.clock = Clock::Running;
            }
            Signal::Pause => {
                if self.sorter.is_some() && self.clock == Clock::Running {
                    self.clock = Clock::Paused;
                }
            }
            Signal::Continue => {
                if self.sorter.is_some() && self.clock == Clock::Paused {
                    self.clock = Clock::Running;
                }
            }
            Signal::Stop => {
                self.sorter = None;
                self.elements.clear();
                self.clock = Clock::Stopped;
                self.ticks = 0;
                self.started = None;
                self.finished = false;
            }
        }
        Ok(())
    }

    /// One clock tick: advance the algorithm if one is active and the clock
    /// is running, then redraw all elements. Returns the completion report
    /// exactly once, on the tick that finds the algorithm done.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> Result<Option<Completion>> {
        surface.clear()?;

        let mut completion = None;
        if let Some(sorter) = &mut self.sorter {
            if self.clock == Clock::Running {
                if !sorter.done() {
                    sorter.animate(&mut self.elements);
                    self.ticks += 1;
                } else if !self.finished {
                    self.clock = Clock::Stopped;
                    self.finished = true;
                    completion = Some(Completion {
                        ticks: self.ticks,
                        elapsed: self
                            .started
                            .map(|t| t.elapsed())
                            .unwrap_or_default(),
                    });
                }
            }
        }

        for element in &self.elements {
            element.draw(surface)?;
        }
        surface.present()?;

        Ok(completion)
    }

    /// Run the current sort to completion against the given surface,
    /// ticking synchronously. Used for headless races.
    pub fn run_to_completion(&mut self, surface: &mut dyn RenderSurface) -> Result<Completion> {
        if self.elements.is_empty() {
            bail!("no dataset loaded");
        }
        self.signal(Signal::Start)?;
        loop {
            if let Some(completion) = self.tick(surface)? {
                return Ok(completion);
            }
        }
    }
}
