//! Team Context - Entities

use super::Position;

/// 待校验的球队输入
///
/// 所有字段都可能缺失，由 [`validate_team`](super::validate_team) 统一检查
#[derive(Debug, Clone, Default)]
pub struct TeamDraft {
    pub name: Option<String>,
    pub acronym: Option<String>,
    pub budget: Option<i64>,
    pub players: Vec<PlayerDraft>,
}

/// 待校验的球员输入
#[derive(Debug, Clone, Default)]
pub struct PlayerDraft {
    pub name: Option<String>,
    pub position: Option<String>,
}

/// 已校验的新球队
///
/// 不变量:
/// - name / acronym 非空白
/// - budget >= 1
/// - 名单中每个球员都已校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub acronym: String,
    pub budget: i64,
    pub players: Vec<NewPlayer>,
}

/// 已校验的新球员
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub position: Position,
}
