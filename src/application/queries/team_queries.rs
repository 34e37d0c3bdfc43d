//! Team Queries

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// 根据 ID 获取球队
#[derive(Debug, Clone)]
pub struct GetTeam {
    pub team_id: i64,
}

/// 分页列出球队
#[derive(Debug, Clone)]
pub struct ListTeams {
    /// 排序字符串，如 `name:1,acronym:-1`
    pub sort: Option<String>,
    pub page: usize,
    pub size: usize,
}

impl Default for ListTeams {
    fn default() -> Self {
        Self {
            sort: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}
