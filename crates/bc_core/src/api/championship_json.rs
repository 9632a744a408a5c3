//! Championship management JSON API layer.
//!
//! Transport-independent facade over the global championship registry: one
//! entry point takes a JSON request string and returns a JSON response
//! string. A routing adapter (HTTP or otherwise) is expected to do nothing
//! beyond forwarding payloads and mapping the `success`/`error_message`
//! envelope onto its own status mechanism.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ChampionshipError;
use crate::models::{CategoryExport, Championship, ChampionshipExport, Leg, Match};
use crate::standings::StandingsExport;
use crate::state::{get_registry, get_registry_mut};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct ChampionshipRequest {
    pub schema_version: u8,
    pub request_type: ChampionshipRequestType,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ChampionshipRequestType {
    /// Create a championship and register it under a provided or allocated id.
    CreateChampionship {
        #[serde(default)]
        id: Option<String>,
        name: String,
        #[serde(default = "default_round_trips")]
        round_trips: u32,
        #[serde(default = "default_points_per_win")]
        points_per_win: i64,
        #[serde(default)]
        points_per_loss: i64,
    },

    /// Summaries of every registered championship.
    ListChampionships,

    /// Full serialized state of one championship.
    GetChampionship { id: String },

    /// Add a category with explicit team names or an auto-named team count;
    /// the fixture is generated immediately.
    AddCategory {
        championship_id: String,
        name: String,
        #[serde(default)]
        teams: Option<Vec<String>>,
        #[serde(default)]
        team_count: Option<usize>,
        #[serde(default)]
        points_per_win: Option<i64>,
        #[serde(default)]
        points_per_loss: Option<i64>,
    },

    /// Register a played result. Scores apply to the teams as named here.
    RegisterResult {
        championship_id: String,
        category: String,
        team_a: String,
        team_b: String,
        round: u32,
        score_a: u32,
        score_b: u32,
        #[serde(default)]
        leg: Option<Leg>,
    },

    /// Ranked standings table for one category.
    GetStandings { championship_id: String, category: String },

    /// Match list for one category, optionally filtered by round or team.
    GetFixture {
        championship_id: String,
        category: String,
        #[serde(default)]
        round: Option<u32>,
        #[serde(default)]
        team: Option<String>,
    },

    /// Apply a point penalty (positive deducts) to a team.
    ApplyPenalty { championship_id: String, category: String, team: String, points: i64 },
}

fn default_round_trips() -> u32 {
    1
}

fn default_points_per_win() -> i64 {
    2
}

#[derive(Debug, Serialize)]
pub struct ChampionshipResponse {
    pub schema_version: u8,
    pub success: bool,
    pub response_type: ChampionshipResponseType,
    pub error_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ChampionshipResponseType {
    ChampionshipCreated { id: String, championship: ChampionshipExport },
    ChampionshipList { championships: BTreeMap<String, ChampionshipSummary> },
    Championship { id: String, championship: ChampionshipExport },
    CategoryAdded { category: CategoryExport },
    ResultRegistered { championship_id: String, category: String },
    Standings { standings: StandingsExport },
    Fixture { matches: Vec<Match> },
    PenaltyApplied { championship_id: String, category: String, team: String, points: i64 },
    Error { code: String },
}

#[derive(Debug, Serialize)]
pub struct ChampionshipSummary {
    pub id: String,
    pub name: String,
    pub round_trips: u32,
    pub categories: Vec<String>,
}

/// Main entry point: parse the request, run it against the registry, and
/// serialize the response envelope.
pub fn execute_championship_json(request_json: &str) -> Result<String, String> {
    let request: ChampionshipRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let response = match handle_request(request.request_type) {
        Ok(response_type) => ChampionshipResponse {
            schema_version: SCHEMA_VERSION,
            success: true,
            response_type,
            error_message: None,
        },
        Err(err) => {
            warn!(code = err.code(), "championship request failed: {}", err);
            ChampionshipResponse {
                schema_version: SCHEMA_VERSION,
                success: false,
                response_type: ChampionshipResponseType::Error { code: err.code().to_string() },
                error_message: Some(err.to_string()),
            }
        }
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

fn handle_request(
    request: ChampionshipRequestType,
) -> crate::error::Result<ChampionshipResponseType> {
    match request {
        ChampionshipRequestType::CreateChampionship {
            id,
            name,
            round_trips,
            points_per_win,
            points_per_loss,
        } => {
            let mut championship =
                Championship::new(&name, round_trips, points_per_win, points_per_loss);
            let export = championship.export();
            let id = get_registry_mut().insert(id, championship);
            debug!(%id, "championship created");
            Ok(ChampionshipResponseType::ChampionshipCreated { id, championship: export })
        }

        ChampionshipRequestType::ListChampionships => {
            let registry = get_registry();
            let championships = registry
                .iter()
                .map(|(id, champ)| {
                    (
                        id.to_string(),
                        ChampionshipSummary {
                            id: id.to_string(),
                            name: champ.name.clone(),
                            round_trips: champ.round_trips,
                            categories: champ.category_names(),
                        },
                    )
                })
                .collect();
            Ok(ChampionshipResponseType::ChampionshipList { championships })
        }

        ChampionshipRequestType::GetChampionship { id } => {
            let mut registry = get_registry_mut();
            let championship = registry
                .get_mut(&id)
                .ok_or_else(|| ChampionshipError::ChampionshipNotFound(id.clone()))?;
            let export = championship.export();
            Ok(ChampionshipResponseType::Championship { id, championship: export })
        }

        ChampionshipRequestType::AddCategory {
            championship_id,
            name,
            teams,
            team_count,
            points_per_win,
            points_per_loss,
        } => {
            let mut registry = get_registry_mut();
            let championship = registry
                .get_mut(&championship_id)
                .ok_or_else(|| ChampionshipError::ChampionshipNotFound(championship_id.clone()))?;

            match (teams.filter(|t| !t.is_empty()), team_count) {
                (Some(team_names), _) => championship.add_category_with_teams(
                    &name,
                    &team_names,
                    points_per_win,
                    points_per_loss,
                )?,
                (None, Some(count)) => {
                    championship.add_category(&name, count, points_per_win, points_per_loss)?
                }
                (None, None) => {
                    return Err(ChampionshipError::MissingField("teams or team_count"))
                }
            }

            debug!(championship_id = %championship_id, category = %name, "category added");
            let category = championship
                .category_mut(&name)
                .ok_or_else(|| ChampionshipError::CategoryNotFound(name.clone()))?
                .export();
            Ok(ChampionshipResponseType::CategoryAdded { category })
        }

        ChampionshipRequestType::RegisterResult {
            championship_id,
            category,
            team_a,
            team_b,
            round,
            score_a,
            score_b,
            leg,
        } => {
            let mut registry = get_registry_mut();
            let championship = registry
                .get_mut(&championship_id)
                .ok_or_else(|| ChampionshipError::ChampionshipNotFound(championship_id.clone()))?;

            championship
                .register_match_result(&category, &team_a, &team_b, round, score_a, score_b, leg)?;
            debug!(
                championship_id = %championship_id,
                category = %category,
                round,
                "result registered: {} {} - {} {}",
                team_a,
                score_a,
                score_b,
                team_b
            );
            Ok(ChampionshipResponseType::ResultRegistered { championship_id, category })
        }

        ChampionshipRequestType::GetStandings { championship_id, category } => {
            let mut registry = get_registry_mut();
            let championship = registry
                .get_mut(&championship_id)
                .ok_or_else(|| ChampionshipError::ChampionshipNotFound(championship_id.clone()))?;
            let standings = championship
                .category_mut(&category)
                .ok_or_else(|| ChampionshipError::CategoryNotFound(category.clone()))?
                .standings_table();
            Ok(ChampionshipResponseType::Standings { standings })
        }

        ChampionshipRequestType::GetFixture { championship_id, category, round, team } => {
            let registry = get_registry();
            let championship = registry
                .get(&championship_id)
                .ok_or_else(|| ChampionshipError::ChampionshipNotFound(championship_id.clone()))?;
            let cat = championship
                .category(&category)
                .ok_or_else(|| ChampionshipError::CategoryNotFound(category.clone()))?;

            let matches: Vec<Match> = match (round, team) {
                (Some(round), _) => {
                    cat.matches_in_round(round).into_iter().cloned().collect()
                }
                (None, Some(team)) => {
                    cat.matches_for_team(&team).into_iter().cloned().collect()
                }
                (None, None) => cat.matches().to_vec(),
            };
            Ok(ChampionshipResponseType::Fixture { matches })
        }

        ChampionshipRequestType::ApplyPenalty { championship_id, category, team, points } => {
            let mut registry = get_registry_mut();
            let championship = registry
                .get_mut(&championship_id)
                .ok_or_else(|| ChampionshipError::ChampionshipNotFound(championship_id.clone()))?;
            championship.apply_penalty(&category, &team, points)?;
            debug!(
                championship_id = %championship_id,
                category = %category,
                team = %team,
                points,
                "penalty applied"
            );
            Ok(ChampionshipResponseType::PenaltyApplied { championship_id, category, team, points })
        }
    }
}
