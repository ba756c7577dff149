// This file is part of swiss-pairing.
//
// swiss-pairing is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// swiss-pairing is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The state of one pairing, pending until a result is declared.
///
/// A forfeit scores exactly like the plain win, the tag is kept distinct for
/// the scoresheet.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Status {
    BlackWins,
    BlackWinsByForfeit,
    Draw,
    #[default]
    Pending,
    WhiteWins,
    WhiteWinsByForfeit,
}

impl Status {
    #[must_use]
    pub fn is_decided(&self) -> bool {
        *self != Self::Pending
    }

    /// Half points this status awards to (white, black).
    #[must_use]
    pub fn half_points(&self) -> (i32, i32) {
        match self {
            Self::WhiteWins | Self::WhiteWinsByForfeit => (2, 0),
            Self::BlackWins | Self::BlackWinsByForfeit => (0, 2),
            Self::Draw => (1, 1),
            Self::Pending => (0, 0),
        }
    }

    /// The signed half-point adjustment for replacing `old` with `new`.
    ///
    /// Scores move by deltas rather than absolute additions, so declaring a
    /// result twice, correcting a result, or resetting one back to pending
    /// never double-counts.
    #[must_use]
    pub fn point_delta(old: Self, new: Self) -> (i32, i32) {
        let (old_white, old_black) = old.half_points();
        let (new_white, new_black) = new.half_points();

        (new_white - old_white, new_black - old_black)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlackWins => write!(f, "black-win"),
            Self::BlackWinsByForfeit => write!(f, "black-win-by-forfeit"),
            Self::Draw => write!(f, "draw"),
            Self::Pending => write!(f, "pending"),
            Self::WhiteWins => write!(f, "white-win"),
            Self::WhiteWinsByForfeit => write!(f, "white-win-by-forfeit"),
        }
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value {
            "black-win" | "0-1" => Ok(Self::BlackWins),
            "black-win-by-forfeit" | "0-1F" => Ok(Self::BlackWinsByForfeit),
            "draw" | "0.5-0.5" => Ok(Self::Draw),
            "pending" => Ok(Self::Pending),
            "white-win" | "1-0" => Ok(Self::WhiteWins),
            "white-win-by-forfeit" | "1-0F" => Ok(Self::WhiteWinsByForfeit),
            _ => Err(anyhow::Error::msg(format!("invalid result: {value}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Status;

    #[test]
    fn tokens_round_trip() -> anyhow::Result<()> {
        for status in [
            Status::BlackWins,
            Status::BlackWinsByForfeit,
            Status::Draw,
            Status::Pending,
            Status::WhiteWins,
            Status::WhiteWinsByForfeit,
        ] {
            assert_eq!(Status::from_str(&status.to_string())?, status);
        }

        assert!(Status::from_str("white wins").is_err());

        Ok(())
    }

    #[test]
    fn scoresheet_aliases() -> anyhow::Result<()> {
        assert_eq!(Status::from_str("1-0")?, Status::WhiteWins);
        assert_eq!(Status::from_str("0-1")?, Status::BlackWins);
        assert_eq!(Status::from_str("0.5-0.5")?, Status::Draw);
        assert_eq!(Status::from_str("1-0F")?, Status::WhiteWinsByForfeit);
        assert_eq!(Status::from_str("0-1F")?, Status::BlackWinsByForfeit);

        Ok(())
    }

    #[test]
    fn deltas() {
        assert_eq!(Status::point_delta(Status::Pending, Status::WhiteWins), (2, 0));
        assert_eq!(Status::point_delta(Status::Pending, Status::Draw), (1, 1));
        assert_eq!(Status::point_delta(Status::WhiteWins, Status::Draw), (-1, 1));
        assert_eq!(Status::point_delta(Status::Draw, Status::Pending), (-1, -1));
        assert_eq!(Status::point_delta(Status::BlackWins, Status::BlackWins), (0, 0));
        // A forfeit scores like the plain win.
        assert_eq!(
            Status::point_delta(Status::WhiteWins, Status::WhiteWinsByForfeit),
            (0, 0)
        );
    }
}
