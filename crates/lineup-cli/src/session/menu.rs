//! Menu options and their text.

use lineup_core::domain::Position;

use crate::output::rule;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Add,
    Remove,
    Move,
    EditPosition,
    EditStats,
    Exit,
}

impl MenuChoice {
    /// Every option, in menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Display,
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Move,
        MenuChoice::EditPosition,
        MenuChoice::EditStats,
        MenuChoice::Exit,
    ];

    /// Parse a typed menu answer; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub const fn number(self) -> usize {
        self as usize + 1
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Display => "Display lineup",
            Self::Add => "Add player",
            Self::Remove => "Remove player",
            Self::Move => "Move player",
            Self::EditPosition => "Edit player position",
            Self::EditStats => "Edit player stats",
            Self::Exit => "Exit program",
        }
    }
}

/// The menu block printed before every choice.
pub fn menu_text() -> String {
    let mut text = String::from("MENU OPTIONS\n");
    for choice in MenuChoice::ALL {
        text.push_str(&format!("{} - {}\n", choice.number(), choice.label()));
    }
    text.push_str("POSITIONS\n");
    text.push_str(&Position::codes());
    text.push('\n');
    text.push_str(&rule());
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_through_seven() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Display));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Move));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["0", "8", "", "exit", "-1", "2.0"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn menu_lists_options_and_positions() {
        let text = menu_text();
        assert!(text.contains("1 - Display lineup\n"));
        assert!(text.contains("7 - Exit program\n"));
        assert!(text.contains("C, 1B, 2B, 3B, SS, LF, CF, RF, P\n"));
    }
}
