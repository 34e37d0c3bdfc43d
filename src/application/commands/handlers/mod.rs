//! Command Handlers 实现

mod team_handlers;

pub use team_handlers::*;
