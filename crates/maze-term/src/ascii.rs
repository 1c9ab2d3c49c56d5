//! Plain-text picture of a session.
//!
//! Screen columns follow `x` and screen rows follow `y`. Each cell is three
//! characters wide, framed by `+`, `---` and `|` wall segments.

use std::collections::HashSet;

use maze_core::{Point, Side};
use maze_session::{CellView, Session, SessionState};

/// What to show inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Empty,
    Open,
    Closed,
    Path,
    Start,
    Target,
}

impl Glyph {
    pub fn ch(self) -> char {
        match self {
            Glyph::Empty => ' ',
            Glyph::Open => 'o',
            Glyph::Closed => 'x',
            Glyph::Path => '*',
            Glyph::Start => 'S',
            Glyph::Target => 'T',
        }
    }
}

/// Glyph for the cell at `p`. `path` holds the solved path, if any.
pub fn glyph(session: &Session, view: &CellView, p: Point, path: &HashSet<Point>) -> Glyph {
    if p == session.start() {
        Glyph::Start
    } else if p == session.target() {
        Glyph::Target
    } else if path.contains(&p) {
        Glyph::Path
    } else if view.in_closed_set {
        Glyph::Closed
    } else if view.in_open_set {
        Glyph::Open
    } else {
        Glyph::Empty
    }
}

/// Cells on the solved path; empty until the session is solved.
pub fn path_cells(session: &Session) -> HashSet<Point> {
    match session.state() {
        SessionState::Solved => session
            .reconstruct_path()
            .map(|p| p.into_iter().collect())
            .unwrap_or_default(),
        _ => HashSet::new(),
    }
}

/// A run of characters in the maze picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// Wall segments and corners, drawn as is.
    Wall(&'static str),
    /// A cell interior, drawn as the glyph padded by one space each side.
    Cell(Glyph),
}

fn wall_or_gap(up: bool, wall: &'static str, gap: &'static str) -> &'static str {
    if up { wall } else { gap }
}

/// The picture as lines of pieces, top to bottom: for each `y`, a wall line
/// and a cell line, then the bottom wall.
pub fn layout(session: &Session) -> Vec<Vec<Piece>> {
    let grid = session.grid();
    let (rows, cols) = (grid.rows(), grid.cols());
    let path = path_cells(session);
    let mut lines = Vec::with_capacity(cols.max(0) as usize * 2 + 1);

    for y in 0..cols {
        let mut top = Vec::new();
        let mut mid = Vec::new();
        for x in 0..rows {
            let Ok(view) = session.cell_view(x, y) else {
                continue;
            };
            top.push(Piece::Wall(wall_or_gap(view.wall(Side::North), "+---", "+   ")));
            mid.push(Piece::Wall(wall_or_gap(view.wall(Side::West), "|", " ")));
            mid.push(Piece::Cell(glyph(session, &view, Point::new(x, y), &path)));
            if x == rows - 1 {
                mid.push(Piece::Wall(wall_or_gap(view.wall(Side::East), "|", " ")));
            }
        }
        top.push(Piece::Wall("+"));
        lines.push(top);
        lines.push(mid);
    }

    let mut bottom = Vec::new();
    for x in 0..rows {
        let closed = match session.cell_view(x, cols - 1) {
            Ok(v) => v.wall(Side::South),
            Err(_) => true,
        };
        bottom.push(Piece::Wall(wall_or_gap(closed, "+---", "+   ")));
    }
    bottom.push(Piece::Wall("+"));
    lines.push(bottom);
    lines
}

/// Render the maze walls and search state as text, one line per `\n`.
pub fn render_ascii(session: &Session) -> String {
    let mut out = String::new();
    for line in layout(session) {
        for piece in line {
            match piece {
                Piece::Wall(s) => out.push_str(s),
                Piece::Cell(g) => {
                    out.push(' ');
                    out.push(g.ch());
                    out.push(' ');
                }
            }
        }
        out.push('\n');
    }
    out
}
