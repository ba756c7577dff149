//! A Swiss-system tournament engine.
//!
//! The crate pairs a field of players round by round: round one is seeded by
//! rating, later rounds pair within score groups under no-repeat and
//! color-balance constraints, an odd field gives one player a bye. Results
//! feed scores, scores feed tiebreaks, and standings fall out of both. All of
//! it is synchronous in-memory computation; persistence and transport belong
//! to the caller.
//!
//! ```
//! use swiss_pairing::{status::Status, tournament::Tournament};
//!
//! let mut tournament = Tournament::new();
//! for (name, rating) in [
//!     ("alfhild", 1_650),
//!     ("bjorn", 1_500),
//!     ("canute", 1_450),
//!     ("dagny", 1_300),
//! ] {
//!     tournament.add_player(name, rating);
//! }
//!
//! let pairings = tournament.generate_round(1)?;
//! assert_eq!(pairings.len(), 2);
//!
//! tournament.record_result(1, 1, Status::WhiteWins)?;
//! tournament.record_result(1, 2, Status::Draw)?;
//! tournament.recalculate_tiebreaks();
//!
//! let standings = tournament.standings();
//! assert_eq!(standings[0].name, "alfhild");
//! # Ok::<(), swiss_pairing::tournament::TournamentError>(())
//! ```

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

#![deny(clippy::panic)]

pub mod color;
pub mod pairing;
pub mod player;
pub mod points;
pub mod status;
pub mod swiss;
pub mod tournament;
pub mod utils;

pub type Id = u64;
