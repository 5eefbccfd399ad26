//! Type-safe wrappers for ESPN Fantasy Football data.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, TeamId};
pub use time::{Season, Week, WeekSelection, WeekSource, DEFAULT_WEEK};
