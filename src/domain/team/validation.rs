//! Team Context - Validation
//!
//! 在持久化之前检查球队输入，按字段收集所有错误

use serde::Serialize;
use std::collections::BTreeMap;

use super::{NewPlayer, NewTeam, PlayerDraft, Position, TeamDraft};

/// 最小预算
pub const MIN_BUDGET: i64 = 1;

/// 字段错误集合：字段名 -> 错误信息
///
/// 同一字段多次写入时保留最后一条
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// 校验球队输入
///
/// 不会在第一个错误处返回，所有无效字段一次性报告
pub fn validate_team(draft: TeamDraft) -> Result<NewTeam, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = required_text(draft.name, "name", "Please provide a team name", &mut errors);
    let acronym = required_text(
        draft.acronym,
        "acronym",
        "Please provide a team acronym",
        &mut errors,
    );

    let budget = match draft.budget {
        None => {
            errors.insert("budget", "Please provide a team budget");
            None
        }
        Some(b) if b < MIN_BUDGET => {
            errors.insert("budget", "Team budget must be greater than 0");
            None
        }
        Some(b) => Some(b),
    };

    let players: Vec<Option<NewPlayer>> = draft
        .players
        .into_iter()
        .enumerate()
        .map(|(index, player)| validate_player(index, player, &mut errors))
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    match (name, acronym, budget) {
        (Some(name), Some(acronym), Some(budget)) => Ok(NewTeam {
            name,
            acronym,
            budget,
            players: players.into_iter().flatten().collect(),
        }),
        // errors 为空时三者必然都存在
        _ => Err(errors),
    }
}

fn validate_player(index: usize, draft: PlayerDraft, errors: &mut FieldErrors) -> Option<NewPlayer> {
    let prefix = format!("players[{}]", index);

    let name = required_text(
        draft.name,
        &format!("{}.name", prefix),
        "Please provide a player name",
        errors,
    );

    let position_field = format!("{}.position", prefix);
    let position = match draft.position.as_deref().map(str::trim) {
        None | Some("") => {
            errors.insert(position_field, "Please provide a player position");
            None
        }
        Some(raw) => match Position::from_str(raw) {
            Some(p) => Some(p),
            None => {
                errors.insert(position_field, format!("Unknown player position: {}", raw));
                None
            }
        },
    };

    Some(NewPlayer {
        name: name?,
        position: position?,
    })
}

fn required_text(
    value: Option<String>,
    field: &str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.insert(field, message);
            None
        }
    }
}
