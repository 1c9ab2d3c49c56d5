//! **maze-session**: generate a perfect maze, then solve it one tick at a
//! time.
//!
//! ```
//! use maze_session::{Session, SessionState};
//!
//! let mut session = Session::initialize(8, 8)?;
//! assert_eq!(session.state(), SessionState::Ready);
//! while !session.step().is_terminal() {}
//! let path = session.reconstruct_path()?;
//! assert_eq!(path.first(), Some(&session.start()));
//! # Ok::<(), maze_session::SessionError>(())
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod view;

pub use config::SessionConfig;
pub use error::SessionError;
pub use session::{Session, SessionState};
pub use view::CellView;

pub use maze_core::{MazeGrid, Point, Side};
pub use maze_paths::{Membership, SearchNode};
