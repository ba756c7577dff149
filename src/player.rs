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

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{Id, color::Color, points::Points};

/// The seed rating for a player entering without one.
pub const DEFAULT_RATING: u32 = 1_200;

/// One entrant, mutated in place as rounds are paired and results declared.
///
/// `colors` gains one entry per non-bye pairing in round order, and
/// `opponents` both entries of a pair, at pairing time; `points` moves only
/// when results are declared. `tiebreak` is a derived snapshot, overwritten by
/// every recalculation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Player {
    pub id: Id,
    pub name: String,
    pub rating: u32,
    pub points: Points,
    pub colors: Vec<Color>,
    pub opponents: FxHashSet<Id>,
    pub tiebreak: Points,
}

impl Player {
    #[must_use]
    pub fn new(id: Id, name: &str, rating: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            rating,
            points: Points::ZERO,
            colors: Vec::new(),
            opponents: FxHashSet::default(),
            tiebreak: Points::ZERO,
        }
    }

    /// White games minus black games.
    #[must_use]
    pub fn color_balance(&self) -> i64 {
        self.colors
            .iter()
            .map(|color| match color {
                Color::White => 1_i64,
                Color::Black => -1_i64,
            })
            .sum()
    }

    #[must_use]
    pub fn last_color(&self) -> Option<Color> {
        self.colors.last().copied()
    }

    #[must_use]
    pub fn has_played(&self, opponent: Id) -> bool {
        self.opponents.contains(&opponent)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.rating, self.points, self.tiebreak
        )
    }
}
