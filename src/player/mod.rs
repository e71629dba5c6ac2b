//! Player — the terminal runtime around the driver.
//!
//! Owns the periodic clock (an `event::poll` timeout) and the key-driven
//! control channel, and forwards both to the driver. The player makes no
//! algorithmic decisions; it paces ticks and relays signals.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::{cursor, event, execute, queue, style, terminal};

use crate::config::RunConfig;
use crate::driver::{Clock, Driver};
use crate::engine::element::DEFAULT_SCALE;
use crate::menubar::print_menu_item;
use crate::renderer::{RenderSurface, TerminalSurface};
use crate::types::{Completion, Signal};

/// Rows reserved outside the canvas: menu bar above, status line below.
const CHROME_ROWS: u16 = 2;
const MIN_CANVAS_ROWS: u16 = 5;

pub struct Player {
    config: RunConfig,
    driver: Driver,
    last_completion: Option<Completion>,
}

impl Player {
    /// Parse the configured algorithm and generate the first dataset.
    /// Configuration errors surface here, before any terminal setup.
    pub fn new(config: RunConfig) -> Result<Self> {
        let kind = config.kind()?;
        let mut driver = Driver::new(kind);
        let dataset = config.generate_dataset();
        driver.load(&dataset, DEFAULT_SCALE)?;
        Ok(Player {
            config,
            driver,
            last_completion: None,
        })
    }

    /// Run the visualization in the terminal.
    ///
    /// Sets up the terminal, enters the tick/event loop, and restores the
    /// terminal on exit (even on error).
    pub fn play(&mut self) -> Result<()> {
        let (term_w, term_h) = terminal::size()?;
        let need_w = TerminalSurface::required_width(self.config.count, DEFAULT_SCALE);
        if term_w < need_w || term_h < MIN_CANVAS_ROWS + CHROME_ROWS {
            bail!(
                "Terminal too small: need {}x{}, have {}x{}",
                need_w,
                MIN_CANVAS_ROWS + CHROME_ROWS,
                term_w,
                term_h,
            );
        }

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        let mut surface = TerminalSurface::new(
            term_w,
            term_h - CHROME_ROWS,
            self.config.max_value,
            &self.config.color,
        );
        let result = self.run_loop(&mut stdout, &mut surface, term_h);

        // Always restore terminal state.
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        result
    }

    // -----------------------------------------------------------------------
    // Tick/event loop
    // -----------------------------------------------------------------------

    fn run_loop(
        &mut self,
        stdout: &mut io::Stdout,
        surface: &mut TerminalSurface,
        term_h: u16,
    ) -> Result<()> {
        self.render_menubar(stdout)?;
        self.driver.signal(Signal::Start)?;
        let tick_period = Duration::from_millis(self.config.tick_ms.max(1));

        loop {
            if event::poll(tick_period)? {
                match event::read()? {
                    event::Event::Key(key) => {
                        use event::KeyCode::*;
                        match key.code {
                            Char('q') | Esc => break,
                            Char(' ') => match self.driver.clock() {
                                Clock::Running => self.driver.signal(Signal::Pause)?,
                                Clock::Paused => self.driver.signal(Signal::Continue)?,
                                Clock::Stopped => {}
                            },
                            Char('s') => {
                                self.driver.signal(Signal::Stop)?;
                                self.last_completion = None;
                                surface.clear()?;
                                surface.present()?;
                            }
                            Char('r') => {
                                let dataset = self.config.generate_dataset();
                                self.driver.load(&dataset, DEFAULT_SCALE)?;
                                self.driver.signal(Signal::Start)?;
                                self.last_completion = None;
                            }
                            _ => {}
                        }
                    }
                    event::Event::Resize(_, _) => {
                        self.render_menubar(stdout)?;
                    }
                    _ => {}
                }
            } else {
                // The tick period elapsed; one clock tick reaches the driver.
                if let Some(completion) = self.driver.tick(surface)? {
                    self.last_completion = Some(completion);
                }
            }
            self.render_status(stdout, term_h)?;
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Chrome
    // -----------------------------------------------------------------------

    fn render_menubar(&self, stdout: &mut io::Stdout) -> Result<()> {
        let items: &[&str] = &[
            "[Space] pause/continue",
            "[r] restart",
            "[s] stop",
            "[q][Esc] quit",
        ];

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(" "),
        )?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                queue!(stdout, style::Print("  "))?;
            }
            print_menu_item(stdout, item)?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn render_status(&self, stdout: &mut io::Stdout, term_h: u16) -> Result<()> {
        let status_y = term_h - 1;
        let state = match (&self.last_completion, self.driver.clock()) {
            (Some(c), _) => format!(
                "done in {} ticks ({:.2}s)",
                c.ticks,
                c.elapsed.as_secs_f64()
            ),
            (None, Clock::Running) => format!("tick {}", self.driver.ticks()),
            (None, Clock::Paused) => format!("paused at tick {}", self.driver.ticks()),
            (None, Clock::Stopped) => "stopped".to_string(),
        };
        let status = format!(" {} | {state} ", self.config.algorithm);

        let mut cs = style::ContentStyle::default();
        cs.attributes.set(style::Attribute::Dim);

        queue!(
            stdout,
            cursor::MoveTo(0, status_y),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::PrintStyledContent(style::StyledContent::new(cs, status)),
        )?;
        stdout.flush()?;
        Ok(())
    }
}
