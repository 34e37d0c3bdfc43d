//! Team HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{AddTeam, GetTeam, ListTeams, DEFAULT_PAGE_SIZE};
use crate::infrastructure::http::dto::{AddTeamRequest, ListTeamsParams, PageResponse, TeamBody};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 根据 ID 获取球队
///
/// 球队不存在时返回 200 + `null`
pub async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Option<TeamBody>>, ApiError> {
    tracing::info!(team_id = id, "Received request to fetch team by id");

    let team = state
        .get_team_handler
        .handle(GetTeam { team_id: id })
        .await?;

    Ok(Json(team.map(TeamBody::from)))
}

/// 分页获取球队列表
pub async fn list_teams(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTeamsParams>,
) -> Result<Json<PageResponse<TeamBody>>, ApiError> {
    let query = ListTeams {
        sort: params.sort,
        page: params.page.unwrap_or(0),
        size: params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    };

    tracing::info!(
        sort = ?query.sort,
        page = query.page,
        size = query.size,
        "Received request to fetch teams"
    );

    let page = state.list_teams_handler.handle(query).await?;

    Ok(Json(PageResponse::from_page(page)))
}

/// 新增球队
///
/// 校验失败返回 400 + `{field: message}`
pub async fn add_team(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddTeamRequest>,
) -> Result<Json<TeamBody>, ApiError> {
    tracing::info!(name = ?req.name, acronym = ?req.acronym, "Received request to add a team");

    let command = AddTeam { draft: req.into() };
    let saved = state.add_team_handler.handle(command).await?;

    tracing::info!(team_id = saved.id, "Added team");

    Ok(Json(TeamBody::from(saved)))
}
