//! Movement commands.

use std::fmt;
use std::str::FromStr;

use super::error::WalkerError;

/// One movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Step one `STEP_SIZE` along the current bearing ("up").
    Forward,
    /// Step one `STEP_SIZE` against the current bearing ("down").
    Backward,
    /// Rotate `TURN_SIZE` degrees counter-clockwise ("left").
    TurnLeft,
    /// Rotate `TURN_SIZE` degrees clockwise ("right").
    TurnRight,
}

impl FromStr for Direction {
    type Err = WalkerError;

    /// Parses the arrow-key style names (`up`, `down`, `left`, `right`)
    /// plus a few spelled-out aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "forward" => Ok(Direction::Forward),
            "down" | "backward" | "back" => Ok(Direction::Backward),
            "left" => Ok(Direction::TurnLeft),
            "right" => Ok(Direction::TurnRight),
            _ => Err(WalkerError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Forward => "up",
            Direction::Backward => "down",
            Direction::TurnLeft => "left",
            Direction::TurnRight => "right",
        };
        f.write_str(name)
    }
}
