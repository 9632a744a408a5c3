//! Championship aggregate: categories under shared default scoring rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ChampionshipError, Result};
use crate::models::{Category, CategoryExport, Leg, Team};

#[derive(Debug, Clone)]
pub struct Championship {
    pub name: String,
    pub round_trips: u32,
    pub points_per_win: i64,
    pub points_per_loss: i64,
    categories: Vec<Category>,
}

impl Championship {
    pub fn new(name: &str, round_trips: u32, points_per_win: i64, points_per_loss: i64) -> Self {
        Self {
            name: name.to_string(),
            round_trips,
            points_per_win,
            points_per_loss,
            categories: Vec::new(),
        }
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Add a category with auto-named teams ("<category> Team <i>") and
    /// generate its fixture immediately. Weights default to the
    /// championship's unless overridden.
    pub fn add_category(
        &mut self,
        name: &str,
        team_count: usize,
        points_per_win: Option<i64>,
        points_per_loss: Option<i64>,
    ) -> Result<()> {
        let team_names: Vec<String> =
            (1..=team_count).map(|i| format!("{} Team {}", name, i)).collect();
        self.add_category_with_teams(name, &team_names, points_per_win, points_per_loss)
    }

    /// Add a category with explicit team names; fixture generation is eager.
    pub fn add_category_with_teams(
        &mut self,
        name: &str,
        team_names: &[String],
        points_per_win: Option<i64>,
        points_per_loss: Option<i64>,
    ) -> Result<()> {
        if self.category(name).is_some() {
            return Err(ChampionshipError::DuplicateCategory(name.to_string()));
        }

        let mut category = Category::new(
            name,
            self.round_trips,
            points_per_win.unwrap_or(self.points_per_win),
            points_per_loss.unwrap_or(self.points_per_loss),
        );
        category.add_teams(team_names);
        category.generate_fixture()?;

        self.categories.push(category);
        Ok(())
    }

    pub fn register_match_result(
        &mut self,
        category_name: &str,
        team_a: &str,
        team_b: &str,
        round: u32,
        score_a: u32,
        score_b: u32,
        leg: Option<Leg>,
    ) -> Result<()> {
        self.category_mut(category_name)
            .ok_or_else(|| ChampionshipError::CategoryNotFound(category_name.to_string()))?
            .register_match_result(team_a, team_b, round, score_a, score_b, leg)
    }

    pub fn apply_penalty(&mut self, category_name: &str, team_name: &str, points: i64) -> Result<()> {
        self.category_mut(category_name)
            .ok_or_else(|| ChampionshipError::CategoryNotFound(category_name.to_string()))?
            .apply_penalty(team_name, points)
    }

    pub fn standings(&mut self, category_name: &str) -> Result<Vec<Team>> {
        Ok(self
            .category_mut(category_name)
            .ok_or_else(|| ChampionshipError::CategoryNotFound(category_name.to_string()))?
            .standings())
    }

    pub fn export(&mut self) -> ChampionshipExport {
        ChampionshipExport {
            name: self.name.clone(),
            round_trips: self.round_trips,
            points_per_win: self.points_per_win,
            points_per_loss: self.points_per_loss,
            categories: self
                .categories
                .iter_mut()
                .map(|c| (c.name.clone(), c.export()))
                .collect(),
        }
    }
}

/// Full serialized championship, categories keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionshipExport {
    pub name: String,
    pub round_trips: u32,
    pub points_per_win: i64,
    pub points_per_loss: i64,
    pub categories: BTreeMap<String, CategoryExport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_category_generates_teams_and_fixture() {
        let mut champ = Championship::new("Local Championship", 1, 2, 0);
        champ.add_category("TC", 4, None, None).unwrap();

        let category = champ.category("TC").unwrap();
        assert_eq!(category.team_count(), 4);
        assert!(category.team("TC Team 1").is_some());
        assert!(category.team("TC Team 4").is_some());
        // Fixture exists as soon as the category does.
        assert_eq!(category.matches().len(), 12);
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let mut champ = Championship::new("Local Championship", 1, 2, 0);
        champ.add_category("TC", 4, None, None).unwrap();
        assert_eq!(
            champ.add_category("TC", 6, None, None),
            Err(ChampionshipError::DuplicateCategory("TC".to_string()))
        );
        // A failed add must not leave a half-built category behind.
        assert_eq!(champ.category_names(), ["TC"]);
    }

    #[test]
    fn test_category_weight_overrides() {
        let mut champ = Championship::new("Local Championship", 1, 2, 0);
        let teams: Vec<String> =
            ["Veterans A", "Veterans B", "Veterans C"].iter().map(|s| s.to_string()).collect();
        champ.add_category_with_teams("Senior", &teams, Some(3), None).unwrap();

        champ
            .register_match_result("Senior", "Veterans B", "Veterans C", 1, 70, 60, None)
            .unwrap();
        let standings = champ.standings("Senior").unwrap();
        assert_eq!(standings[0].name, "Veterans B");
        assert_eq!(standings[0].league_points, 3);
    }

    #[test]
    fn test_unknown_category_fails_loud() {
        let mut champ = Championship::new("Local Championship", 1, 2, 0);
        assert_eq!(
            champ.standings("Nope").unwrap_err().code(),
            "CATEGORY_NOT_FOUND"
        );
        assert_eq!(
            champ
                .register_match_result("Nope", "A", "B", 1, 1, 0, None)
                .unwrap_err()
                .code(),
            "CATEGORY_NOT_FOUND"
        );
        assert_eq!(
            champ.apply_penalty("Nope", "A", 1).unwrap_err().code(),
            "CATEGORY_NOT_FOUND"
        );
    }

    #[test]
    fn test_export_keys_categories_by_name() {
        let mut champ = Championship::new("Local Championship", 2, 2, 0);
        champ.add_category("TC", 4, None, None).unwrap();
        champ.add_category("Senior", 3, None, None).unwrap();

        let export = champ.export();
        assert_eq!(export.round_trips, 2);
        assert!(export.categories.contains_key("TC"));
        assert!(export.categories.contains_key("Senior"));
        // 3 teams: 3 dates per leg, 1 match per date, 2 legs, 2 cycles.
        assert_eq!(export.categories["Senior"].matches.len(), 12);
    }
}
