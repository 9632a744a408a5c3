use serde::{Deserialize, Serialize};

/// First or second meeting between a pair of teams within one round-trip
/// cycle. Venues reverse between legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leg {
    FirstLeg,
    SecondLeg,
}

/// Winner of a played match, relative to the stored team order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchWinner {
    TeamA,
    TeamB,
    Tie,
}

/// A single fixture entry between two teams.
///
/// Created unplayed by fixture generation; transitions once to played when a
/// result is registered and never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub team_a: String,
    pub team_b: String,
    pub round: u32,
    pub leg: Leg,
    pub played: bool,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    pub winner: Option<MatchWinner>,
}

impl Match {
    pub fn new(team_a: &str, team_b: &str, round: u32, leg: Leg) -> Self {
        Self {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            round,
            leg,
            played: false,
            score_a: None,
            score_b: None,
            winner: None,
        }
    }

    /// Record the final score. Scores are in stored order: `score_a` belongs
    /// to `team_a`.
    pub fn register_result(&mut self, score_a: u32, score_b: u32) {
        self.score_a = Some(score_a);
        self.score_b = Some(score_b);
        self.played = true;

        self.winner = Some(if score_a > score_b {
            MatchWinner::TeamA
        } else if score_b > score_a {
            MatchWinner::TeamB
        } else {
            MatchWinner::Tie
        });
    }

    pub fn involves(&self, team: &str) -> bool {
        self.team_a == team || self.team_b == team
    }

    /// Whether this match is between the given pair, in either order.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.team_a == a && self.team_b == b) || (self.team_a == b && self.team_b == a)
    }

    pub(crate) fn swap_venue(&mut self) {
        std::mem::swap(&mut self.team_a, &mut self.team_b);
    }
}
