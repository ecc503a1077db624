use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One week of fantasy scoring for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Performance {
    pub performance_id: i64,
    pub player_id: i64,
    pub week_number: String,
    /// Points scored under SWC league scoring
    pub fantasy_points: f64,
    pub last_changed_date: String,
}

/// Player without nested performances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct PlayerBase {
    pub player_id: i64,
    pub gsis_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: String,
}

impl PlayerBase {
    pub fn into_player(self, performances: Vec<Performance>) -> Player {
        Player {
            player_id: self.player_id,
            gsis_id: self.gsis_id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            last_changed_date: self.last_changed_date,
            performances,
        }
    }
}

/// Player with their scoring history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    pub player_id: i64,
    pub gsis_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: String,
    pub performances: Vec<Performance>,
}

/// Team without its roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct TeamBase {
    pub team_id: i64,
    pub league_id: i64,
    pub team_name: String,
    pub last_changed_date: String,
}

impl TeamBase {
    pub fn into_team(self, players: Vec<PlayerBase>) -> Team {
        Team {
            team_id: self.team_id,
            league_id: self.league_id,
            team_name: self.team_name,
            last_changed_date: self.last_changed_date,
            players,
        }
    }
}

/// Team with the players on its roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Team {
    pub team_id: i64,
    pub league_id: i64,
    pub team_name: String,
    pub last_changed_date: String,
    pub players: Vec<PlayerBase>,
}

/// Row from the team_player join, one per rostered player
#[derive(Debug, sqlx::FromRow)]
pub struct RosterRow {
    pub team_id: i64,
    pub player_id: i64,
    pub gsis_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: String,
}

impl RosterRow {
    pub fn to_player_base(&self) -> PlayerBase {
        PlayerBase {
            player_id: self.player_id,
            gsis_id: self.gsis_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            position: self.position.clone(),
            last_changed_date: self.last_changed_date.clone(),
        }
    }
}

/// Row from the league table
#[derive(Debug, sqlx::FromRow)]
pub struct LeagueRow {
    pub league_id: i64,
    pub league_name: String,
    pub scoring_type: String,
    pub last_changed_date: String,
}

impl LeagueRow {
    pub fn into_league(self, teams: Vec<TeamBase>) -> League {
        League {
            league_id: self.league_id,
            league_name: self.league_name,
            scoring_type: self.scoring_type,
            last_changed_date: self.last_changed_date,
            teams,
        }
    }
}

/// Fantasy league and the teams competing in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct League {
    pub league_id: i64,
    pub league_name: String,
    /// e.g. "PPR" or "Half-PPR"
    pub scoring_type: String,
    pub last_changed_date: String,
    pub teams: Vec<TeamBase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Counts {
    pub league_count: i64,
    pub team_count: i64,
    pub player_count: i64,
}

/// Root health check payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
    pub league_count: i64,
    pub team_count: i64,
    pub player_count: i64,
}

impl HealthResponse {
    pub fn healthy(counts: Counts) -> Self {
        Self {
            message: "API health check successful".to_string(),
            league_count: counts.league_count,
            team_count: counts.team_count,
            player_count: counts.player_count,
        }
    }
}

/// Validated paging window shared by every list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
    /// Inclusive lower bound on last_changed_date, formatted YYYY-MM-DD
    pub min_last_changed_date: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
            min_last_changed_date: None,
        }
    }
}
