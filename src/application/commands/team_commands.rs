//! Team Commands

use crate::domain::team::TeamDraft;

/// 新增球队命令（含可选的初始名单）
#[derive(Debug, Clone)]
pub struct AddTeam {
    pub draft: TeamDraft,
}
