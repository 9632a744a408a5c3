use serde::{Deserialize, Serialize};

/// Outcome of one match from a single team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Won,
    Lost,
    Tied,
}

/// Per-team statistics accumulator.
///
/// Counters grow one registered result at a time; `league_points` is derived
/// from the counters and the category's point weights and is overwritten on
/// every standings recomputation, never updated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub category: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub league_points: i64,
    pub penalty_points: i64,
}

impl Team {
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            played: 0,
            won: 0,
            lost: 0,
            tied: 0,
            points_for: 0,
            points_against: 0,
            league_points: 0,
            penalty_points: 0,
        }
    }

    /// Accumulate one match outcome.
    ///
    /// Precondition: the caller applies each match result exactly once;
    /// calling twice for the same match double-counts.
    pub fn record_outcome(&mut self, points_for: u32, points_against: u32, outcome: MatchOutcome) {
        self.played += 1;
        self.points_for += points_for;
        self.points_against += points_against;

        match outcome {
            MatchOutcome::Won => self.won += 1,
            MatchOutcome::Lost => self.lost += 1,
            MatchOutcome::Tied => self.tied += 1,
        }
    }

    /// Add to the cumulative penalty deduction. Positive deducts league
    /// points, negative gives them back.
    pub fn apply_penalty(&mut self, delta: i64) {
        self.penalty_points += delta;
    }

    /// Recompute `league_points` from the current counters. Overwrites any
    /// previous value, so repeated calls with the same weights are idempotent.
    pub fn compute_league_points(&mut self, points_per_win: i64, points_per_loss: i64) {
        self.league_points = self.won as i64 * points_per_win + self.lost as i64 * points_per_loss
            - self.penalty_points;
    }

    /// Points scored minus points conceded across all registered matches.
    pub fn point_differential(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    pub fn export(&self) -> TeamExport {
        TeamExport {
            name: self.name.clone(),
            category: self.category.clone(),
            played: self.played,
            won: self.won,
            lost: self.lost,
            tied: self.tied,
            points_for: self.points_for,
            points_against: self.points_against,
            point_differential: self.point_differential(),
            league_points: self.league_points,
            penalty_points: self.penalty_points,
        }
    }
}

/// Serialized team row, including the computed point differential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamExport {
    pub name: String,
    pub category: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub point_differential: i64,
    pub league_points: i64,
    pub penalty_points: i64,
}
