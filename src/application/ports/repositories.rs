//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite、内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::team::{NewTeam, Position};
use crate::domain::Sort;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 查询参数无法被存储层执行（未知排序字段、非法分页）
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Paging
// ============================================================================

/// 分页请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 页码（从 0 开始）
    pub page: usize,
    /// 每页条数
    pub size: usize,
    /// 复合排序
    pub sort: Sort,
}

impl PageRequest {
    pub fn new(page: usize, size: usize, sort: Sort) -> Self {
        Self { page, size, sort }
    }

    /// 起始偏移量；size 为 0 或溢出时返回 InvalidQuery
    pub fn offset(&self) -> Result<usize, RepositoryError> {
        if self.size == 0 {
            return Err(RepositoryError::InvalidQuery(
                "Page size must be greater than 0".to_string(),
            ));
        }
        self.page.checked_mul(self.size).ok_or_else(|| {
            RepositoryError::InvalidQuery(format!(
                "Page {} with size {} is out of range",
                self.page, self.size
            ))
        })
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: usize,
    pub size: usize,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 1;
        }
        self.total_elements.div_ceil(self.size as u64)
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        (self.number as u64).saturating_add(1) >= self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

// ============================================================================
// Team Repository
// ============================================================================

/// 球员实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub id: i64,
    pub name: String,
    pub position: Position,
}

/// 球队实体（用于持久化），包含完整名单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub id: i64,
    pub name: String,
    pub acronym: String,
    pub budget: i64,
    pub players: Vec<PlayerRecord>,
}

/// 可排序的球队字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSortField {
    Id,
    Name,
    Acronym,
    Budget,
}

impl TeamSortField {
    pub fn column(&self) -> &'static str {
        match self {
            TeamSortField::Id => "id",
            TeamSortField::Name => "name",
            TeamSortField::Acronym => "acronym",
            TeamSortField::Budget => "budget",
        }
    }

    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "id" => Some(TeamSortField::Id),
            "name" => Some(TeamSortField::Name),
            "acronym" => Some(TeamSortField::Acronym),
            "budget" => Some(TeamSortField::Budget),
            _ => None,
        }
    }

    /// 解析排序字段，未知字段返回 InvalidQuery
    pub fn resolve(field: &str) -> Result<Self, RepositoryError> {
        Self::from_field(field).ok_or_else(|| {
            RepositoryError::InvalidQuery(format!("No property '{}' found for type Team", field))
        })
    }
}

/// Team Repository Port
#[async_trait]
pub trait TeamRepositoryPort: Send + Sync {
    /// 创建球队及其名单（原子操作），返回分配了 ID 的实体
    async fn create(&self, team: &NewTeam) -> Result<TeamRecord, RepositoryError>;

    /// 根据 ID 查找球队
    async fn find_by_id(&self, id: i64) -> Result<Option<TeamRecord>, RepositoryError>;

    /// 分页查询球队
    async fn find_page(&self, request: &PageRequest) -> Result<Page<TeamRecord>, RepositoryError>;
}
