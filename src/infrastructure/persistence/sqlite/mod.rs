//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod team_repo;

pub use database::*;
pub use team_repo::*;
