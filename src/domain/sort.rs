//! Sort Specification - 排序字符串解析
//!
//! 格式: `field:direction[,field:direction...]`
//! - direction 为 `1` 表示升序，其他整数（通常为 `-1`）表示降序
//! - 多个字段按给出的顺序组成复合排序键，第一个为主键
//! - 字段名原样传递给存储层，不在此处校验

use thiserror::Error;

/// 排序字符串解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortParseError {
    #[error("Empty sort clause at position {0}")]
    EmptyClause(usize),

    #[error("Sort clause '{0}' must have the form field:direction")]
    MissingSeparator(String),

    #[error("Sort clause '{0}' has an empty field name")]
    EmptyField(String),

    #[error("Sort clause '{clause}' has a non-integer direction '{direction}'")]
    InvalidDirection { clause: String, direction: String },
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `1` 为升序，其余为降序
    pub fn from_code(code: i32) -> Self {
        if code == 1 {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// 单个排序键
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// 复合排序（有序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sort {
    orders: Vec<SortOrder>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(orders: Vec<SortOrder>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[SortOrder] {
        &self.orders
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }
}

/// 解析排序字符串
///
/// 空字符串（或仅空白）返回未排序；任何格式错误的子句立即返回错误
pub fn parse_sort(spec: &str) -> Result<Sort, SortParseError> {
    if spec.trim().is_empty() {
        return Ok(Sort::unsorted());
    }

    let mut orders = Vec::new();
    for (position, clause) in spec.split(',').enumerate() {
        let clause = clause.trim();
        if clause.is_empty() {
            return Err(SortParseError::EmptyClause(position));
        }

        let (field, direction) = clause
            .split_once(':')
            .ok_or_else(|| SortParseError::MissingSeparator(clause.to_string()))?;

        let field = field.trim();
        if field.is_empty() {
            return Err(SortParseError::EmptyField(clause.to_string()));
        }

        let direction = direction.trim();
        let code: i32 = direction
            .parse()
            .map_err(|_| SortParseError::InvalidDirection {
                clause: clause.to_string(),
                direction: direction.to_string(),
            })?;

        orders.push(SortOrder {
            field: field.to_string(),
            direction: SortDirection::from_code(code),
        });
    }

    Ok(Sort::by(orders))
}
