//! Memory Layer - In-Memory Storage
//!
//! 球队仓储的内存实现，可通过配置启用，也用作测试替身

mod team_repository;

pub use team_repository::InMemoryTeamRepository;
