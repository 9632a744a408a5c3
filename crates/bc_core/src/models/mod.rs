pub mod category;
pub mod championship;
pub mod match_entry;
pub mod team;

pub use category::{Category, CategoryExport};
pub use championship::{Championship, ChampionshipExport};
pub use match_entry::{Leg, Match, MatchWinner};
pub use team::{MatchOutcome, Team, TeamExport};
