//! Small stateless building blocks shared by the pages.

mod alert;
mod button;
mod card;
mod input;
mod loading;
mod stat_tile;

pub use alert::{Alert, AlertKind};
pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use input::{Input, Textarea};
pub use loading::Loading;
pub use stat_tile::StatTile;
