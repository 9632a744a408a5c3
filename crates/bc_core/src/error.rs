use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChampionshipError {
    #[error("category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("at least 2 teams are required to generate a fixture, found {found}")]
    InsufficientTeams { found: usize },

    #[error("fixture already generated for category '{0}'")]
    FixtureAlreadyGenerated(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("championship '{0}' not found")]
    ChampionshipNotFound(String),

    #[error("category '{0}' not found")]
    CategoryNotFound(String),

    #[error("team '{0}' not found")]
    TeamNotFound(String),

    #[error("no match found for {team_a} vs {team_b} in round {round}")]
    MatchNotFound { team_a: String, team_b: String, round: u32 },

    #[error("multiple matches found for {team_a} vs {team_b} in round {round}; specify the leg")]
    AmbiguousMatch { team_a: String, team_b: String, round: u32 },
}

impl ChampionshipError {
    /// Stable code exposed through the JSON API layer.
    pub fn code(&self) -> &'static str {
        match self {
            ChampionshipError::DuplicateCategory(_) => "DUPLICATE_CATEGORY",
            ChampionshipError::InsufficientTeams { .. } => "INSUFFICIENT_TEAMS",
            ChampionshipError::FixtureAlreadyGenerated(_) => "FIXTURE_ALREADY_GENERATED",
            ChampionshipError::MissingField(_) => "MISSING_FIELD",
            ChampionshipError::ChampionshipNotFound(_) => "CHAMPIONSHIP_NOT_FOUND",
            ChampionshipError::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
            ChampionshipError::TeamNotFound(_) => "TEAM_NOT_FOUND",
            ChampionshipError::MatchNotFound { .. } => "MATCH_NOT_FOUND",
            ChampionshipError::AmbiguousMatch { .. } => "AMBIGUOUS_MATCH",
        }
    }
}

pub type Result<T> = std::result::Result<T, ChampionshipError>;
