//! Team Context - 球队限界上下文
//!
//! 职责:
//! - 球队与球员名单的输入模型
//! - 球员位置枚举
//! - 持久化前的字段校验

mod entities;
mod position;
mod validation;

pub use entities::{NewPlayer, NewTeam, PlayerDraft, TeamDraft};
pub use position::Position;
pub use validation::{validate_team, FieldErrors, MIN_BUDGET};
