//! This crate contains all shared UI for the workspace: the session
//! container, presentational components, and formatting helpers.

pub mod components;
pub mod format;

mod attendance;
pub use attendance::AttendanceIndex;

mod flash;
pub use flash::flash;

mod game_card;
pub use game_card::GameCard;

mod game_filters;
pub use game_filters::GameFilters;

pub mod session;
pub use session::{use_session, Session, SessionProvider, SessionState};
