//! # bc_core - Basketball Championship Management Core
//!
//! This library manages basketball championships: teams, categories,
//! round-robin fixtures, match results, and standings tables, exposed through
//! a transport-independent JSON API meant to sit behind a thin routing
//! adapter.
//!
//! ## Features
//! - Double round-robin fixture generation with home/away rotation across
//!   multiple round-trip cycles
//! - Standings with derived league points, point differential, and a total
//!   deterministic tie-break order
//! - Point penalties (fines or bonuses) folded into the ranking
//! - Process-wide in-memory championship registry behind a JSON facade

pub mod api;
pub mod error;
pub mod fixture;
pub mod models;
pub mod standings;
pub mod state;

// Re-export main API entry point
pub use api::execute_championship_json;
pub use error::{ChampionshipError, Result};

// Re-export core entity types
pub use models::{
    Category, CategoryExport, Championship, ChampionshipExport, Leg, Match, MatchOutcome,
    MatchWinner, Team, TeamExport,
};
pub use standings::{Standings, StandingsExport};
pub use state::{get_registry, get_registry_mut, reset_registry, ChampionshipRegistry};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn execute(request: serde_json::Value) -> serde_json::Value {
        let raw = execute_championship_json(&request.to_string()).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    // Distinct championship ids per test: the registry is global and tests
    // run in parallel.
    #[test]
    fn test_full_championship_flow() {
        let created = execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "CreateChampionship",
                "id": "e2e_flow",
                "name": "Local Championship 2026",
                "round_trips": 1,
                "points_per_win": 2,
                "points_per_loss": 0
            }
        }));
        assert_eq!(created["success"], true);
        assert_eq!(created["response_type"]["id"], "e2e_flow");

        let added = execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "AddCategory",
                "championship_id": "e2e_flow",
                "name": "TC",
                "teams": ["T1", "T2", "T3", "T4"]
            }
        }));
        assert_eq!(added["success"], true);

        // Pull round 1 from the generated fixture and register its first match.
        let fixture = execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "GetFixture",
                "championship_id": "e2e_flow",
                "category": "TC",
                "round": 1
            }
        }));
        let round_one = fixture["response_type"]["matches"].as_array().unwrap();
        assert_eq!(round_one.len(), 2);
        let team_a = round_one[0]["team_a"].as_str().unwrap();
        let team_b = round_one[0]["team_b"].as_str().unwrap();

        let registered = execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "RegisterResult",
                "championship_id": "e2e_flow",
                "category": "TC",
                "team_a": team_a,
                "team_b": team_b,
                "round": 1,
                "score_a": 80,
                "score_b": 70
            }
        }));
        assert_eq!(registered["success"], true);

        let standings = execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "GetStandings",
                "championship_id": "e2e_flow",
                "category": "TC"
            }
        }));
        let rows = standings["response_type"]["standings"]["standings"].as_array().unwrap();
        assert_eq!(rows.len(), 4);

        let top = &rows[0];
        assert_eq!(top["name"], team_a);
        assert_eq!(top["played"], 1);
        assert_eq!(top["won"], 1);
        assert_eq!(top["points_for"], 80);
        assert_eq!(top["points_against"], 70);
        assert_eq!(top["point_differential"], 10);
        assert_eq!(top["league_points"], 2);

        let loser = rows.iter().find(|r| r["name"] == team_b).unwrap();
        assert_eq!(loser["played"], 1);
        assert_eq!(loser["lost"], 1);
        assert_eq!(loser["league_points"], 0);
    }

    #[test]
    fn test_penalty_recomputes_league_points() {
        execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "CreateChampionship",
                "id": "e2e_penalty",
                "name": "Penalty Cup"
            }
        }));
        execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "AddCategory",
                "championship_id": "e2e_penalty",
                "name": "TC",
                "teams": ["T1", "T2", "T3", "T4"]
            }
        }));

        // T1 wins its round 1 and round 2 matches: league points 4.
        execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "RegisterResult",
                "championship_id": "e2e_penalty",
                "category": "TC",
                "team_a": "T1", "team_b": "T4", "round": 1,
                "score_a": 80, "score_b": 70
            }
        }));
        execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "RegisterResult",
                "championship_id": "e2e_penalty",
                "category": "TC",
                "team_a": "T1", "team_b": "T3", "round": 2,
                "score_a": 82, "score_b": 75
            }
        }));

        let standings_of = |value: &serde_json::Value| -> i64 {
            value["response_type"]["standings"]["standings"]
                .as_array()
                .unwrap()
                .iter()
                .find(|r| r["name"] == "T1")
                .unwrap()["league_points"]
                .as_i64()
                .unwrap()
        };

        let get_standings = json!({
            "schema_version": 1,
            "request_type": {
                "type": "GetStandings",
                "championship_id": "e2e_penalty",
                "category": "TC"
            }
        });
        assert_eq!(standings_of(&execute(get_standings.clone())), 4);

        // Deduct 3, then give 1 back: net penalty 2, league points 2.
        execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "ApplyPenalty",
                "championship_id": "e2e_penalty",
                "category": "TC",
                "team": "T1",
                "points": 3
            }
        }));
        assert_eq!(standings_of(&execute(get_standings.clone())), 1);

        execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "ApplyPenalty",
                "championship_id": "e2e_penalty",
                "category": "TC",
                "team": "T1",
                "points": -1
            }
        }));
        assert_eq!(standings_of(&execute(get_standings)), 2);
    }

    #[test]
    fn test_list_and_get_round_trip() {
        execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "CreateChampionship",
                "id": "e2e_list",
                "name": "Listed Cup",
                "round_trips": 2
            }
        }));
        execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "AddCategory",
                "championship_id": "e2e_list",
                "name": "Senior",
                "team_count": 3
            }
        }));

        let listed = execute(json!({
            "schema_version": 1,
            "request_type": { "type": "ListChampionships" }
        }));
        let entry = &listed["response_type"]["championships"]["e2e_list"];
        assert_eq!(entry["id"], "e2e_list");
        assert_eq!(entry["name"], "Listed Cup");
        assert_eq!(entry["round_trips"], 2);
        assert_eq!(entry["categories"], json!(["Senior"]));

        let fetched = execute(json!({
            "schema_version": 1,
            "request_type": { "type": "GetChampionship", "id": "e2e_list" }
        }));
        let championship = &fetched["response_type"]["championship"];
        assert_eq!(championship["categories"]["Senior"]["round_trips"], 2);
        assert_eq!(
            championship["categories"]["Senior"]["teams"].as_array().unwrap().len(),
            3
        );
    }

    #[test]
    fn test_duplicate_category_through_the_api() {
        execute(json!({
            "schema_version": 1,
            "request_type": {
                "type": "CreateChampionship",
                "id": "e2e_dup",
                "name": "Duplicate Cup"
            }
        }));

        let add = json!({
            "schema_version": 1,
            "request_type": {
                "type": "AddCategory",
                "championship_id": "e2e_dup",
                "name": "TC",
                "team_count": 4
            }
        });
        assert_eq!(execute(add.clone())["success"], true);

        let again = execute(add);
        assert_eq!(again["success"], false);
        assert_eq!(again["response_type"]["code"], "DUPLICATE_CATEGORY");
    }
}
