//! Data Transfer Objects
//!
//! JSON 请求/响应结构，字段名与前端约定保持 camelCase

use serde::{Deserialize, Serialize};

use crate::application::{Page, PlayerResponse, TeamResponse};
use crate::domain::team::{PlayerDraft, Position, TeamDraft};

// ============================================================================
// Team DTOs
// ============================================================================

/// 新增球队请求体
///
/// 字段全部可选，缺失由校验逻辑报告而不是反序列化失败
#[derive(Debug, Default, Deserialize)]
pub struct AddTeamRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default, alias = "roster")]
    pub players: Option<Vec<AddPlayerRequest>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddPlayerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl From<AddTeamRequest> for TeamDraft {
    fn from(req: AddTeamRequest) -> Self {
        TeamDraft {
            name: req.name,
            acronym: req.acronym,
            budget: req.budget,
            players: req
                .players
                .unwrap_or_default()
                .into_iter()
                .map(|p| PlayerDraft {
                    name: p.name,
                    position: p.position,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamBody {
    pub id: i64,
    pub name: String,
    pub acronym: String,
    pub budget: i64,
    pub players: Vec<PlayerBody>,
}

#[derive(Debug, Serialize)]
pub struct PlayerBody {
    pub id: i64,
    pub name: String,
    pub position: Position,
}

impl From<PlayerResponse> for PlayerBody {
    fn from(p: PlayerResponse) -> Self {
        Self {
            id: p.id,
            name: p.name,
            position: p.position,
        }
    }
}

impl From<TeamResponse> for TeamBody {
    fn from(t: TeamResponse) -> Self {
        Self {
            id: t.id,
            name: t.name,
            acronym: t.acronym,
            budget: t.budget,
            players: t.players.into_iter().map(PlayerBody::from).collect(),
        }
    }
}

/// 列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListTeamsParams {
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

// ============================================================================
// Paging
// ============================================================================

/// 分页响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T: Serialize> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: usize,
    pub size: usize,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T: Serialize> PageResponse<T> {
    pub fn from_page<S>(page: Page<S>) -> Self
    where
        T: From<S>,
    {
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();
        let page = page.map(T::from);

        Self {
            number_of_elements: page.content.len(),
            empty: page.content.is_empty(),
            content: page.content,
            total_elements: page.total_elements,
            total_pages,
            number: page.number,
            size: page.size,
            first,
            last,
        }
    }
}
