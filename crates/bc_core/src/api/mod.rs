pub mod championship_json;

pub use championship_json::{
    execute_championship_json, ChampionshipRequest, ChampionshipRequestType,
    ChampionshipResponse, ChampionshipResponseType, ChampionshipSummary,
};
