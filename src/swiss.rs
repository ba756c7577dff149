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

use std::collections::VecDeque;

use log::warn;
use thiserror::Error;

use crate::{Id, color, pairing::Pairing, player::Player, status::Status};

#[derive(Debug, Error)]
pub enum PairingError {
    #[error("pair: there are no players to pair")]
    NoPlayers,
}

/// Generates the full set of pairings for `round` without touching any player
/// state.
///
/// Round one seeds by rating; later rounds pair within score groups, walking
/// a floater down from each odd group, with at most one leftover player
/// taking a bye. The output is deterministic for a given player list, and the
/// caller commits it as one transaction.
///
/// # Errors
///
/// If `players` is empty.
pub fn generate_round(players: &[Player], round: u32) -> Result<Vec<Pairing>, PairingError> {
    if players.is_empty() {
        return Err(PairingError::NoPlayers);
    }

    if round <= 1 {
        Ok(round_one(players, round))
    } else {
        Ok(later_round(players, round))
    }
}

/// Rating seeding: the top half of the field plays the bottom half, first
/// seed against the first player below the cut, and so on down.
fn round_one(players: &[Player], round: u32) -> Vec<Pairing> {
    let mut seeded: Vec<&Player> = players.iter().collect();
    seeded.sort_by(|a, b| b.rating.cmp(&a.rating));

    let midpoint = seeded.len() / 2;
    let (top, bottom) = seeded.split_at(midpoint);

    let mut pairings = Vec::with_capacity(midpoint + 1);
    let mut board = 1;

    for (strong, weak) in top.iter().zip(bottom) {
        let (white, black) = color::assign(strong, weak);
        pairings.push(Pairing {
            round,
            board,
            white: white.id,
            black: Some(black.id),
            status: Status::Pending,
        });
        board += 1;
    }

    if seeded.len() % 2 == 1
        && let Some(bye) = bottom.last()
    {
        pairings.push(bye_pairing(round, board, bye.id));
    }

    pairings
}

fn later_round(players: &[Player], round: u32) -> Vec<Pairing> {
    let mut standings: Vec<&Player> = players.iter().collect();
    standings.sort_by(|a, b| b.points.cmp(&a.points).then(b.rating.cmp(&a.rating)));

    let mut pairings = Vec::with_capacity(standings.len() / 2 + 1);
    let mut board = 1;
    let mut floater: Option<&Player> = None;

    for group in standings.chunk_by(|a, b| a.points == b.points) {
        let mut pool: VecDeque<&Player> = group.iter().copied().collect();

        // A floater from the group above leads the pool below it.
        if let Some(down) = floater.take() {
            pool.push_front(down);
        }
        if pool.len() % 2 == 1 {
            floater = pool.pop_back();
        }

        while pool.len() >= 2 {
            let Some(anchor) = pool.pop_front() else {
                break;
            };
            let opponent = match pool.iter().position(|candidate| !anchor.has_played(candidate.id)) {
                Some(index) => pool.remove(index),
                // Everyone left has faced the anchor. Pairing them again beats
                // leaving them unpaired; the tournament stays valid.
                None => pool.pop_front(),
            };
            let Some(opponent) = opponent else {
                break;
            };

            if anchor.has_played(opponent.id) {
                warn!(
                    "round {round}: no fresh opponent for {}, pairing a rematch against {}",
                    anchor.name, opponent.name
                );
            }

            let (white, black) = color::assign(anchor, opponent);
            pairings.push(Pairing {
                round,
                board,
                white: white.id,
                black: Some(black.id),
                status: Status::Pending,
            });
            board += 1;
        }
    }

    // The floater chain leaves at most one player over the whole field.
    if let Some(bye) = floater {
        pairings.push(bye_pairing(round, board, bye.id));
    }

    pairings
}

fn bye_pairing(round: u32, board: u32, white: Id) -> Pairing {
    Pairing {
        round,
        board,
        white,
        black: None,
        status: Status::WhiteWins,
    }
}
