//! Core game logic: rooms, fuzzy item resolution, hints, badges, and the
//! interactive session loop that ties them together.

pub mod badges;
pub mod errors;
pub mod hints;
pub mod resolver;
pub mod room;
pub mod session;
pub mod types;

pub use badges::{BadgeTier, Scorecard};
pub use errors::GameError;
pub use hints::HintProvider;
pub use resolver::{resolve, DEFAULT_CUTOFF};
pub use room::{Room, RoomItem, SolveOutcome, ITEM_CATALOG};
pub use session::{LineInput, ReadOutcome, RustylineInput, Session, SessionSummary};
pub use types::{Command, SkillLevel};
