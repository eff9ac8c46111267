//! Per-phase action choices

use serde::{Deserialize, Serialize};

/// What a fighter does during one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionChoice {
    /// One cell in the facing direction
    MoveForward,
    /// One cell away from the facing direction
    MoveBackward,
    /// Leap forward; evades melee and can stomp
    Jump,
    /// Melee strike at range 1
    Attack,
    /// Reduce incoming damage and bank energy
    Block,
    /// Spend energy on the fighter's signature move
    Skill,
    None,
}

impl ActionChoice {
    pub const ALL: [ActionChoice; 7] = [
        ActionChoice::MoveForward,
        ActionChoice::MoveBackward,
        ActionChoice::Jump,
        ActionChoice::Attack,
        ActionChoice::Block,
        ActionChoice::Skill,
        ActionChoice::None,
    ];

    pub fn is_move(self) -> bool {
        matches!(self, ActionChoice::MoveForward | ActionChoice::MoveBackward)
    }

    /// Short label for terminal output
    pub fn label(self) -> &'static str {
        match self {
            ActionChoice::MoveForward => "FWD",
            ActionChoice::MoveBackward => "BACK",
            ActionChoice::Jump => "JUMP",
            ActionChoice::Attack => "ATTACK",
            ActionChoice::Block => "BLOCK",
            ActionChoice::Skill => "SKILL",
            ActionChoice::None => "NONE",
        }
    }

    /// Parse a terminal keyword or single-letter shortcut
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "f" | "fwd" | "forward" => Some(ActionChoice::MoveForward),
            "b" | "back" | "backward" => Some(ActionChoice::MoveBackward),
            "j" | "jump" => Some(ActionChoice::Jump),
            "a" | "attack" => Some(ActionChoice::Attack),
            "g" | "block" | "guard" => Some(ActionChoice::Block),
            "s" | "skill" => Some(ActionChoice::Skill),
            "n" | "none" | "wait" => Some(ActionChoice::None),
            _ => None,
        }
    }
}
