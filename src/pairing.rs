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

use serde::{Deserialize, Serialize};

use crate::{Id, status::Status};

/// One board of one round. `black` is absent exactly when this is a bye, and
/// a bye is created already decided as a white win.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Pairing {
    pub round: u32,
    pub board: u32,
    pub white: Id,
    pub black: Option<Id>,
    pub status: Status,
}

impl Pairing {
    #[must_use]
    pub fn is_bye(&self) -> bool {
        self.black.is_none()
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.black {
            Some(black) => write!(
                f,
                "round {} board {}: {} {} {}",
                self.round, self.board, self.white, black, self.status
            ),
            None => write!(
                f,
                "round {} board {}: {} bye",
                self.round, self.board, self.white
            ),
        }
    }
}
