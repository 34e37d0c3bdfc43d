//! Team Context - Player Position

use serde::Serialize;

/// 球员位置（足球）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    /// 门将
    GK,

    // 后卫
    CB,
    LB,
    RB,
    LWB,
    RWB,

    // 中场
    CM,
    CDM,
    CAM,
    LM,
    RM,
    LW,
    RW,

    // 前锋
    ST,
    CF,
}

impl Position {
    pub const ALL: [Position; 15] = [
        Position::GK,
        Position::CB,
        Position::LB,
        Position::RB,
        Position::LWB,
        Position::RWB,
        Position::CM,
        Position::CDM,
        Position::CAM,
        Position::LM,
        Position::RM,
        Position::LW,
        Position::RW,
        Position::ST,
        Position::CF,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::CB => "CB",
            Position::LB => "LB",
            Position::RB => "RB",
            Position::LWB => "LWB",
            Position::RWB => "RWB",
            Position::CM => "CM",
            Position::CDM => "CDM",
            Position::CAM => "CAM",
            Position::LM => "LM",
            Position::RM => "RM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::ST => "ST",
            Position::CF => "CF",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_parses_back() {
        for position in Position::ALL {
            assert_eq!(Position::from_str(position.as_str()), Some(position));
        }
    }

    #[test]
    fn test_unknown_position() {
        assert_eq!(Position::from_str("QB"), None);
        // 区分大小写
        assert_eq!(Position::from_str("gk"), None);
    }

    #[test]
    fn test_serde_uses_short_names() {
        let json = serde_json::to_string(&Position::CDM).unwrap();
        assert_eq!(json, "\"CDM\"");
    }
}
