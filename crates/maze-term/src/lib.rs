//! Terminal driver for maze sessions.
//!
//! The core crates own no timing and no drawing; this crate plays the
//! external driver. [`render_ascii`] produces a plain-text picture and
//! [`TermRenderer`] animates a session with crossterm, one step per tick.

pub mod ascii;
pub mod term;

use std::time::Duration;

use maze_session::Session;

pub use ascii::{Glyph, render_ascii};
pub use term::TermRenderer;

/// Step `session` once per `delay` until it is terminal or the user quits,
/// drawing after every step.
pub fn animate(session: &mut Session, delay: Duration) -> std::io::Result<()> {
    let mut renderer = TermRenderer::new();
    renderer.init()?;
    let result = drive(&mut renderer, session, delay);
    renderer.close();
    result
}

fn drive(renderer: &mut TermRenderer, session: &mut Session, delay: Duration) -> std::io::Result<()> {
    loop {
        renderer.draw(session)?;
        if session.state().is_terminal() {
            // Leave the final frame up briefly.
            renderer.poll_quit(delay * 20)?;
            return Ok(());
        }
        if renderer.poll_quit(delay)? {
            log::info!("stopped by user after {} ticks", session.ticks());
            return Ok(());
        }
        session.step();
    }
}
