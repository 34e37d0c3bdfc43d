//! Domain Layer - 领域层
//!
//! - Team Context: 球队与球员名单
//! - Sort: 排序字符串解析

pub mod sort;
pub mod team;

pub use sort::{parse_sort, Sort, SortDirection, SortOrder, SortParseError};
