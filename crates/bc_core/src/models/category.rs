//! One competition bracket: its teams, its fixture, and its standings view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{ChampionshipError, Result};
use crate::fixture;
use crate::models::{Leg, Match, MatchOutcome, Team, TeamExport};
use crate::standings::{Standings, StandingsExport};

#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub round_trips: u32,
    teams: Vec<Team>,
    matches: Vec<Match>,
    standings: Standings,
    fixture_generated: bool,
}

impl Category {
    pub fn new(name: &str, round_trips: u32, points_per_win: i64, points_per_loss: i64) -> Self {
        Self {
            name: name.to_string(),
            round_trips,
            teams: Vec::new(),
            matches: Vec::new(),
            standings: Standings::new(name, points_per_win, points_per_loss),
            fixture_generated: false,
        }
    }

    /// Create a team per new name. Names already present are left untouched.
    pub fn add_teams(&mut self, team_names: &[String]) {
        for name in team_names {
            if self.team(name).is_none() {
                self.teams.push(Team::new(name, &self.name));
            }
        }
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    fn team_mut(&mut self, name: &str) -> Result<&mut Team> {
        self.teams
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(|| ChampionshipError::TeamNotFound(name.to_string()))
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Generate the category's full fixture. One-shot: a category's schedule
    /// is fixed once matches exist.
    pub fn generate_fixture(&mut self) -> Result<()> {
        if self.fixture_generated {
            return Err(ChampionshipError::FixtureAlreadyGenerated(self.name.clone()));
        }
        if self.teams.len() < 2 {
            return Err(ChampionshipError::InsufficientTeams { found: self.teams.len() });
        }

        let team_names: Vec<String> = self.teams.iter().map(|t| t.name.clone()).collect();
        self.matches = fixture::generate_fixture(&team_names, self.round_trips)?;
        self.fixture_generated = true;
        Ok(())
    }

    /// Register a played result.
    ///
    /// The match is located by unordered team pair and round (and leg when
    /// given); the scores passed by the caller always apply to the teams as
    /// named, regardless of stored home/away order. Lookup fails if no match
    /// satisfies the criteria, and also if more than one does (the caller
    /// must then name the leg).
    pub fn register_match_result(
        &mut self,
        team_a: &str,
        team_b: &str,
        round: u32,
        score_a: u32,
        score_b: u32,
        leg: Option<Leg>,
    ) -> Result<()> {
        let candidates: Vec<usize> = self
            .matches
            .iter()
            .enumerate()
            .filter(|(_, m)| {
                m.is_between(team_a, team_b)
                    && m.round == round
                    && leg.map_or(true, |l| m.leg == l)
            })
            .map(|(idx, _)| idx)
            .collect();

        let idx = match candidates.as_slice() {
            [] => {
                return Err(ChampionshipError::MatchNotFound {
                    team_a: team_a.to_string(),
                    team_b: team_b.to_string(),
                    round,
                })
            }
            [idx] => *idx,
            _ => {
                return Err(ChampionshipError::AmbiguousMatch {
                    team_a: team_a.to_string(),
                    team_b: team_b.to_string(),
                    round,
                })
            }
        };

        // The stored order may be reversed relative to the caller's arguments.
        let entry = &mut self.matches[idx];
        if entry.team_a == team_a {
            entry.register_result(score_a, score_b);
        } else {
            entry.register_result(score_b, score_a);
        }

        let (outcome_a, outcome_b) = match score_a.cmp(&score_b) {
            Ordering::Greater => (MatchOutcome::Won, MatchOutcome::Lost),
            Ordering::Less => (MatchOutcome::Lost, MatchOutcome::Won),
            Ordering::Equal => (MatchOutcome::Tied, MatchOutcome::Tied),
        };
        self.team_mut(team_a)?.record_outcome(score_a, score_b, outcome_a);
        self.team_mut(team_b)?.record_outcome(score_b, score_a, outcome_b);

        self.standings.recompute(&mut self.teams);
        Ok(())
    }

    pub fn apply_penalty(&mut self, team_name: &str, points: i64) -> Result<()> {
        self.standings.apply_penalty(&mut self.teams, team_name, points)
    }

    /// Ranked standings, league points freshly recomputed.
    pub fn standings(&mut self) -> Vec<Team> {
        self.standings.rank(&mut self.teams)
    }

    pub fn standings_table(&mut self) -> StandingsExport {
        self.standings.table(&mut self.teams)
    }

    pub fn matches_in_round(&self, round: u32) -> Vec<&Match> {
        fixture::matches_in_round(&self.matches, round)
    }

    pub fn matches_for_team(&self, team_name: &str) -> Vec<&Match> {
        fixture::matches_for_team(&self.matches, team_name)
    }

    pub fn export(&mut self) -> CategoryExport {
        CategoryExport {
            name: self.name.clone(),
            round_trips: self.round_trips,
            teams: self.teams.iter().map(Team::export).collect(),
            matches: self.matches.clone(),
            standings: self.standings.table(&mut self.teams),
        }
    }
}

/// Serialized category: team list in registration order, matches in fixture
/// order, and the ranked standings table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExport {
    pub name: String,
    pub round_trips: u32,
    pub teams: Vec<TeamExport>,
    pub matches: Vec<Match>,
    pub standings: StandingsExport,
}
