//! Standings computation and tie-break ordering.
//!
//! `Standings` owns no team data: it carries a category's point weights and
//! computes over the team table owned by the category. League points are
//! recomputed from scratch on every read, so the ranking can never drift from
//! the underlying counters.

use serde::{Deserialize, Serialize};

use crate::error::{ChampionshipError, Result};
use crate::models::{Team, TeamExport};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standings {
    pub category: String,
    pub points_per_win: i64,
    pub points_per_loss: i64,
}

impl Standings {
    pub fn new(category: &str, points_per_win: i64, points_per_loss: i64) -> Self {
        Self { category: category.to_string(), points_per_win, points_per_loss }
    }

    /// Recompute league points for every team from its current counters.
    pub fn recompute(&self, teams: &mut [Team]) {
        for team in teams.iter_mut() {
            team.compute_league_points(self.points_per_win, self.points_per_loss);
        }
    }

    /// Ranked table: league points desc, point differential desc, points
    /// scored desc, then name asc. The name tie-break makes the order total.
    pub fn rank(&self, teams: &mut [Team]) -> Vec<Team> {
        self.recompute(teams);

        let mut ranked = teams.to_vec();
        ranked.sort_by(|a, b| {
            b.league_points
                .cmp(&a.league_points)
                .then_with(|| b.point_differential().cmp(&a.point_differential()))
                .then_with(|| b.points_for.cmp(&a.points_for))
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked
    }

    /// Apply a point penalty (or bonus) to the named team and recompute.
    pub fn apply_penalty(&self, teams: &mut [Team], team_name: &str, points: i64) -> Result<()> {
        match teams.iter_mut().find(|t| t.name == team_name) {
            Some(team) => team.apply_penalty(points),
            None => return Err(ChampionshipError::TeamNotFound(team_name.to_string())),
        }
        self.recompute(teams);
        Ok(())
    }

    pub fn table(&self, teams: &mut [Team]) -> StandingsExport {
        StandingsExport {
            category: self.category.clone(),
            points_per_win: self.points_per_win,
            points_per_loss: self.points_per_loss,
            standings: self.rank(teams).iter().map(Team::export).collect(),
        }
    }
}

/// Serialized standings table: the weights plus the ranked rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsExport {
    pub category: String,
    pub points_per_win: i64,
    pub points_per_loss: i64,
    pub standings: Vec<TeamExport>,
}
