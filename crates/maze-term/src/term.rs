//! Crossterm renderer for a running [`Session`].

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use maze_session::Session;

use crate::ascii::{Glyph, Piece, layout};

/// Maps a [`Glyph`] to the colour it is drawn in.
fn glyph_color(g: Glyph) -> Color {
    match g {
        Glyph::Empty => Color::Reset,
        Glyph::Open => Color::Green,
        Glyph::Closed => Color::Red,
        Glyph::Path => Color::Blue,
        Glyph::Start => Color::Green,
        Glyph::Target => Color::Magenta,
    }
}

/// Number of picture lines that fit above the status line on a terminal
/// `height` rows tall.
fn fit_rows(lines: usize, height: u16) -> u16 {
    let room = height.saturating_sub(1);
    u16::try_from(lines).map_or(room, |n| n.min(room))
}

/// Draws sessions on an alternate terminal screen.
pub struct TermRenderer {
    out: io::Stdout,
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TermRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
    }

    /// Redraw the maze with the current search state and a status line
    /// underneath. Lines that do not fit the terminal height are dropped.
    pub fn draw(&mut self, session: &Session) -> io::Result<()> {
        let (_, height) = terminal::size()?;
        let lines = layout(session);
        let shown = fit_rows(lines.len(), height);

        for (row, line) in (0..shown).zip(&lines) {
            queue!(self.out, cursor::MoveTo(0, row), ResetColor)?;
            for piece in line {
                match *piece {
                    Piece::Wall(s) => queue!(self.out, Print(s))?,
                    Piece::Cell(g) => queue!(
                        self.out,
                        Print(' '),
                        SetForegroundColor(glyph_color(g)),
                        Print(g.ch()),
                        ResetColor,
                        Print(' ')
                    )?,
                }
            }
        }

        queue!(
            self.out,
            cursor::MoveTo(0, shown),
            terminal::Clear(ClearType::CurrentLine),
            Print(format!(
                "{}  tick {}  open {}  closed {}  (q to quit)",
                session.state(),
                session.ticks(),
                session.frontier(),
                session.expanded()
            ))
        )?;
        self.out.flush()
    }

    /// Wait up to `timeout` for input. Returns `true` if the user asked to
    /// quit.
    pub fn poll_quit(&mut self, timeout: Duration) -> io::Result<bool> {
        if !event::poll(timeout)? {
            return Ok(false);
        }
        match event::read()? {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                kind: KeyEventKind::Press,
                ..
            }) => Ok(true),
            _ => Ok(false),
        }
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        let _ = crossterm::execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
