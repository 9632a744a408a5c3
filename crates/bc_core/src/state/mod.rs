//! Process-wide championship registry.
//!
//! Holds every championship created during this process's lifetime, keyed by
//! id in creation order. There is no persistence: the registry starts empty
//! at process start and its contents are gone on restart.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::models::Championship;

/// Global registry singleton.
pub static CHAMPIONSHIP_REGISTRY: Lazy<Arc<RwLock<ChampionshipRegistry>>> =
    Lazy::new(|| Arc::new(RwLock::new(ChampionshipRegistry::new())));

#[derive(Debug, Clone)]
struct RegistryEntry {
    id: String,
    championship: Championship,
}

#[derive(Debug, Clone, Default)]
pub struct ChampionshipRegistry {
    entries: Vec<RegistryEntry>,
}

impl ChampionshipRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Store a championship under the given id, or under an allocated
    /// `champ_<n>` id. Re-using an id replaces the stored championship.
    pub fn insert(&mut self, id: Option<String>, championship: Championship) -> String {
        let id = id.unwrap_or_else(|| format!("champ_{}", self.entries.len() + 1));

        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == id) {
            existing.championship = championship;
        } else {
            self.entries.push(RegistryEntry { id: id.clone(), championship });
        }
        id
    }

    pub fn get(&self, id: &str) -> Option<&Championship> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.championship)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Championship> {
        self.entries.iter_mut().find(|e| e.id == id).map(|e| &mut e.championship)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Championship)> {
        self.entries.iter().map(|e| (e.id.as_str(), &e.championship))
    }
}

// ========================
// Global Registry Access Functions
// ========================

/// Get a read lock on the global registry.
pub fn get_registry() -> std::sync::RwLockReadGuard<'static, ChampionshipRegistry> {
    CHAMPIONSHIP_REGISTRY.read().expect("CHAMPIONSHIP_REGISTRY lock poisoned")
}

/// Get a write lock on the global registry.
pub fn get_registry_mut() -> std::sync::RwLockWriteGuard<'static, ChampionshipRegistry> {
    CHAMPIONSHIP_REGISTRY.write().expect("CHAMPIONSHIP_REGISTRY lock poisoned")
}

/// Drop every registered championship.
pub fn reset_registry() {
    *CHAMPIONSHIP_REGISTRY.write().expect("CHAMPIONSHIP_REGISTRY lock poisoned") =
        ChampionshipRegistry::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn championship(name: &str) -> Championship {
        Championship::new(name, 1, 2, 0)
    }

    #[test]
    fn test_id_allocation_in_creation_order() {
        let mut registry = ChampionshipRegistry::new();
        let first = registry.insert(None, championship("First"));
        let second = registry.insert(None, championship("Second"));

        assert_eq!(first, "champ_1");
        assert_eq!(second, "champ_2");
        let ids: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["champ_1", "champ_2"]);
    }

    #[test]
    fn test_explicit_id_is_honored() {
        let mut registry = ChampionshipRegistry::new();
        let id = registry.insert(Some("regional".to_string()), championship("Regional"));
        assert_eq!(id, "regional");
        assert!(registry.contains("regional"));
        assert_eq!(registry.get("regional").unwrap().name, "Regional");
    }

    #[test]
    fn test_reinserting_an_id_replaces() {
        let mut registry = ChampionshipRegistry::new();
        registry.insert(Some("x".to_string()), championship("Old"));
        registry.insert(Some("x".to_string()), championship("New"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("x").unwrap().name, "New");
    }

    #[test]
    fn test_get_mut_allows_in_place_edits() {
        let mut registry = ChampionshipRegistry::new();
        registry.insert(Some("x".to_string()), championship("Edit Me"));

        registry.get_mut("x").unwrap().add_category("TC", 2, None, None).unwrap();
        assert_eq!(registry.get("x").unwrap().category_names(), ["TC"]);
        assert!(registry.get_mut("missing").is_none());
    }
}
