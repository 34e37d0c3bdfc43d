//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    AddTeamHandler, GetTeamHandler, ListTeamsHandler, TeamRepositoryPort,
};

/// 应用状态
///
/// 仓储以 trait 对象注入，SQLite 与内存实现可互换
pub struct AppState {
    // ========== Command Handlers ==========
    pub add_team_handler: AddTeamHandler,

    // ========== Query Handlers ==========
    pub get_team_handler: GetTeamHandler,
    pub list_teams_handler: ListTeamsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(team_repo: Arc<dyn TeamRepositoryPort>) -> Self {
        Self {
            add_team_handler: AddTeamHandler::new(team_repo.clone()),
            get_team_handler: GetTeamHandler::new(team_repo.clone()),
            list_teams_handler: ListTeamsHandler::new(team_repo),
        }
    }
}
