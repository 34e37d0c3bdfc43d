//! Team Command Handlers

use std::sync::Arc;

use crate::application::commands::AddTeam;
use crate::application::error::ApplicationError;
use crate::application::ports::TeamRepositoryPort;
use crate::application::queries::handlers::TeamResponse;
use crate::domain::team::validate_team;

// ============================================================================
// AddTeam
// ============================================================================

/// AddTeam Handler - 校验后创建球队及名单
pub struct AddTeamHandler {
    team_repo: Arc<dyn TeamRepositoryPort>,
}

impl AddTeamHandler {
    pub fn new(team_repo: Arc<dyn TeamRepositoryPort>) -> Self {
        Self { team_repo }
    }

    /// 校验失败时返回 `InvalidFields`，不会触达存储层
    pub async fn handle(&self, command: AddTeam) -> Result<TeamResponse, ApplicationError> {
        let new_team = validate_team(command.draft).map_err(|errors| {
            tracing::warn!(fields = %errors, "Team rejected by validation");
            ApplicationError::InvalidFields(errors)
        })?;

        let saved = self.team_repo.create(&new_team).await?;

        tracing::info!(
            team_id = saved.id,
            name = %saved.name,
            players = saved.players.len(),
            "Team created"
        );

        Ok(TeamResponse::from(saved))
    }
}
