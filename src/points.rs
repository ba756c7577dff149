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

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// A tournament score counted in half points.
///
/// Swiss scores only ever move in half-point steps, so an integer count keeps
/// equal scores exactly equal: score groups bucket with `Eq` and standings
/// sort with `Ord`, no floating point involved.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Points(u32);

impl Points {
    pub const ZERO: Self = Self(0);
    /// Each side's share of a draw.
    pub const DRAW: Self = Self(1);
    /// A full-point win, including a bye or a win by forfeit.
    pub const WIN: Self = Self(2);

    #[must_use]
    pub fn half_points(self) -> u32 {
        self.0
    }

    /// Applies a signed half-point adjustment, saturating at zero.
    pub fn apply(&mut self, delta: i32) {
        self.0 = self.0.saturating_add_signed(delta);
    }
}

impl Add for Points {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

impl FromStr for Points {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        if let Some(whole) = string.strip_suffix(".5") {
            Ok(Self(whole.parse::<u32>()? * 2 + 1))
        } else if let Some(whole) = string.strip_suffix(".0") {
            Ok(Self(whole.parse::<u32>()? * 2))
        } else {
            Ok(Self(string.parse::<u32>()? * 2))
        }
    }
}
