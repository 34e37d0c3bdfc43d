//! Team Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{Page, PageRequest, PlayerRecord, TeamRecord, TeamRepositoryPort};
use crate::application::queries::{GetTeam, ListTeams};
use crate::domain::parse_sort;
use crate::domain::team::Position;

// ============================================================================
// Response DTOs
// ============================================================================

/// 球队响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub acronym: String,
    pub budget: i64,
    pub players: Vec<PlayerResponse>,
}

/// 球员响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub position: Position,
}

impl From<PlayerRecord> for PlayerResponse {
    fn from(record: PlayerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            position: record.position,
        }
    }
}

impl From<TeamRecord> for TeamResponse {
    fn from(record: TeamRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            acronym: record.acronym,
            budget: record.budget,
            players: record.players.into_iter().map(PlayerResponse::from).collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetTeam Handler
///
/// 找不到时返回 `Ok(None)`，不视为错误
pub struct GetTeamHandler {
    team_repo: Arc<dyn TeamRepositoryPort>,
}

impl GetTeamHandler {
    pub fn new(team_repo: Arc<dyn TeamRepositoryPort>) -> Self {
        Self { team_repo }
    }

    pub async fn handle(&self, query: GetTeam) -> Result<Option<TeamResponse>, ApplicationError> {
        let team = self.team_repo.find_by_id(query.team_id).await?;

        if team.is_none() {
            tracing::debug!(team_id = query.team_id, "Team not found");
        }

        Ok(team.map(TeamResponse::from))
    }
}

/// ListTeams Handler
pub struct ListTeamsHandler {
    team_repo: Arc<dyn TeamRepositoryPort>,
}

impl ListTeamsHandler {
    pub fn new(team_repo: Arc<dyn TeamRepositoryPort>) -> Self {
        Self { team_repo }
    }

    pub async fn handle(&self, query: ListTeams) -> Result<Page<TeamResponse>, ApplicationError> {
        let sort = parse_sort(query.sort.as_deref().unwrap_or_default())?;
        let request = PageRequest::new(query.page, query.size, sort);

        let page = self.team_repo.find_page(&request).await?;

        tracing::debug!(
            page = page.number,
            size = page.size,
            returned = page.content.len(),
            total = page.total_elements,
            "Teams listed"
        );

        Ok(page.map(TeamResponse::from))
    }
}
