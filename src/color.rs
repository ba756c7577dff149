use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::player::Player;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        let string = string.to_lowercase();

        match string.as_str() {
            "b" | "black" => Ok(Self::Black),
            "w" | "white" => Ok(Self::White),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a Color!"
            ))),
        }
    }
}

/// Decides sides for a matched pair, returning (white, black).
///
/// The player who has had more black games gets white. On equal balance a
/// player yet to play their first game falls back to rating, ties going to
/// `first`; otherwise the sides strictly alternate from `first`'s most recent
/// color.
#[must_use]
pub fn assign<'a>(first: &'a Player, second: &'a Player) -> (&'a Player, &'a Player) {
    let first_balance = first.color_balance();
    let second_balance = second.color_balance();

    if first_balance < second_balance {
        return (first, second);
    }
    if second_balance < first_balance {
        return (second, first);
    }

    // First game ever is detected from the history itself, never from the
    // round number.
    let Some(last) = first.last_color() else {
        if first.rating >= second.rating {
            return (first, second);
        }
        return (second, first);
    };

    match last {
        Color::White => (second, first),
        Color::Black => (first, second),
    }
}
