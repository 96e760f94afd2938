//! Terminal framework: owns the terminal and drives a [`Playable`].

use crate::keymap::map_key;
use crate::ui;
use anyhow::{Result, bail};
use crossterm::{
    cursor::{Hide, Show},
    event::{Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use keytac_engine::{Directive, GameView, InputEvent, Playable};
use ratatui::{Terminal, backend::Backend};
use std::io::{self, Write};
use tracing::{debug, info, instrument, warn};

/// Raw mode plus the alternate screen, undone by [`TerminalGuard::restore`]
/// or on drop.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen.
    ///
    /// The guard exists as soon as raw mode is on, so a failure after that
    /// point still restores the terminal.
    #[instrument]
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        info!("Terminal entered raw mode");
        Ok(guard)
    }

    /// Leaves raw mode and the alternate screen.
    ///
    /// Every step is attempted even if an earlier one fails. A failed restore
    /// is retried on drop.
    #[instrument(skip(self))]
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }

        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
        self.settle(raw, screen)
    }

    /// Marks the guard restored only if both steps succeeded.
    fn settle(&mut self, raw: io::Result<()>, screen: io::Result<()>) -> Result<()> {
        raw?;
        screen?;
        self.restored = true;
        info!("Terminal restored");
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Runs a [`Playable`] on a ratatui terminal.
///
/// `bell` receives BEL on an invalid move when `beep` is set.
pub struct Screen<B: Backend, W: Write> {
    terminal: Terminal<B>,
    bell: W,
    beep: bool,
}

impl<B, W> Screen<B, W>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    W: Write,
{
    /// Creates a screen drawing to `terminal`.
    pub fn new(terminal: Terminal<B>, bell: W, beep: bool) -> Self {
        Self {
            terminal,
            bell,
            beep,
        }
    }

    /// Runs `game` on input from `events` until it asks the screen to stop.
    ///
    /// After [`Directive::Finish`] the final frame stays up until one more
    /// key press.
    #[instrument(skip_all)]
    pub fn run<G, E>(&mut self, game: &mut G, mut events: E) -> Result<()>
    where
        G: Playable,
        E: Iterator<Item = io::Result<Event>>,
    {
        self.terminal.clear()?;
        self.draw(&game.view())?;

        loop {
            let Some(event) = next_input(&mut events)? else {
                self.draw(&game.view())?;
                continue;
            };
            let directive = game.handle_input(event);
            debug!(?event, ?directive, "Handled input");

            match directive {
                Directive::Redraw => self.draw(&game.view())?,
                Directive::InvalidMove => {
                    self.ring()?;
                    self.draw(&game.view())?;
                }
                Directive::Finish => {
                    self.draw(&game.view())?;
                    while next_input(&mut events)?.is_none() {
                        self.draw(&game.view())?;
                    }
                    debug!("Dismissed final screen");
                    return Ok(());
                }
                Directive::Stop => return Ok(()),
                Directive::Ignore => {}
            }
        }
    }

    fn draw(&mut self, view: &GameView<'_>) -> Result<()> {
        self.terminal.draw(|frame| ui::draw(frame, view))?;
        Ok(())
    }

    fn ring(&mut self) -> Result<()> {
        if self.beep {
            self.bell.write_all(b"\x07")?;
            self.bell.flush()?;
        }
        Ok(())
    }
}

/// Reads until the next key press. `None` means the terminal was resized and
/// the frame needs redrawing.
fn next_input<E>(events: &mut E) -> Result<Option<InputEvent>>
where
    E: Iterator<Item = io::Result<Event>>,
{
    for event in events {
        match event? {
            // Release and repeat events are reported on some platforms
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(map_key(key))),
            Event::Resize(..) => return Ok(None),
            _ => {}
        }
    }
    bail!("Input stream closed")
}
