//! Domain value objects: Position.
//!
//! # Design
//!
//! Pure value types: `Copy`, equality-by-value, no identity. This file's only
//! job is to define the types, their string representations, and their
//! `FromStr` parsers. The model, the persistence adapters and the CLI all
//! import the same `Position`; nobody keeps their own list of codes.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Position ─────────────────────────────────────────────────────────────────

/// A fielding position.
///
/// Serialized and displayed as its short scorecard code (`SS`, `1B`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
    #[serde(rename = "P")]
    Pitcher,
}

impl Position {
    /// Every position, in the order the menu lists them.
    pub const ALL: [Position; 9] = [
        Self::Catcher,
        Self::FirstBase,
        Self::SecondBase,
        Self::ThirdBase,
        Self::Shortstop,
        Self::LeftField,
        Self::CenterField,
        Self::RightField,
        Self::Pitcher,
    ];

    /// Short code used on screen and on disk.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Catcher => "C",
            Self::FirstBase => "1B",
            Self::SecondBase => "2B",
            Self::ThirdBase => "3B",
            Self::Shortstop => "SS",
            Self::LeftField => "LF",
            Self::CenterField => "CF",
            Self::RightField => "RF",
            Self::Pitcher => "P",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Catcher => "catcher",
            Self::FirstBase => "first base",
            Self::SecondBase => "second base",
            Self::ThirdBase => "third base",
            Self::Shortstop => "shortstop",
            Self::LeftField => "left field",
            Self::CenterField => "center field",
            Self::RightField => "right field",
            Self::Pitcher => "pitcher",
        }
    }

    /// Comma-separated list of every code, e.g. for prompts.
    pub fn codes() -> String {
        Self::ALL
            .iter()
            .map(Position::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "c" | "catcher" => Ok(Self::Catcher),
            "1b" | "first base" | "first" => Ok(Self::FirstBase),
            "2b" | "second base" | "second" => Ok(Self::SecondBase),
            "3b" | "third base" | "third" => Ok(Self::ThirdBase),
            "ss" | "shortstop" | "short stop" => Ok(Self::Shortstop),
            "lf" | "left field" => Ok(Self::LeftField),
            "cf" | "center field" | "centre field" => Ok(Self::CenterField),
            "rf" | "right field" => Ok(Self::RightField),
            "p" | "pitcher" => Ok(Self::Pitcher),
            _ => Err(DomainError::InvalidPosition(s.trim().to_string())),
        }
    }
}
