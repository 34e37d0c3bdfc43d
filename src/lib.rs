//! Team Manager - 球队与名单管理服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Team Context: 球队、球员、位置与校验
//! - Sort: 排序字符串解析
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TeamRepository）
//! - Commands: AddTeam
//! - Queries: GetTeam, ListTeams
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
