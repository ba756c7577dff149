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

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    Id,
    color::Color,
    pairing::Pairing,
    player::Player,
    points::Points,
    status::Status,
    swiss::{self, PairingError},
};

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Pairing(#[from] PairingError),
    #[error("pairings already exist for round {0}")]
    RoundAlreadyPaired(u32),
    #[error("no player with id {0}")]
    PlayerNotFound(Id),
    #[error("no pairing at round {0}, board {1}")]
    PairingNotFound(u32, u32),
    #[error("a bye is decided when it is created and takes no result")]
    ByePairing,
    #[error("pending is not a declarable result, use a reset")]
    PendingResult,
}

/// The bookkeeper for one tournament: the players with their running
/// histories, and every pairing made so far.
///
/// Round generation is two-phase. The matcher computes the complete round
/// over a read-only snapshot, then all writes land together: pairings
/// appended, colors and opponents recorded, the bye's point awarded. Nothing
/// is written if validation fails, and callers wanting mutual exclusion per
/// tournament serialize around these calls.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Tournament {
    pub players: Vec<Player>,
    pub pairings: Vec<Pairing>,
}

impl Tournament {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a player and returns the id assigned.
    pub fn add_player(&mut self, name: &str, rating: u32) -> Id {
        let id = self.players.len() as Id + 1;
        self.players.push(Player::new(id, name, rating));

        id
    }

    /// # Errors
    ///
    /// If no player has the id.
    pub fn player(&self, id: Id) -> Result<&Player, TournamentError> {
        self.players
            .iter()
            .find(|player| player.id == id)
            .ok_or(TournamentError::PlayerNotFound(id))
    }

    fn player_mut(&mut self, id: Id) -> Result<&mut Player, TournamentError> {
        self.players
            .iter_mut()
            .find(|player| player.id == id)
            .ok_or(TournamentError::PlayerNotFound(id))
    }

    #[must_use]
    pub fn round_exists(&self, round: u32) -> bool {
        self.pairings.iter().any(|pairing| pairing.round == round)
    }

    #[must_use]
    pub fn round_pairings(&self, round: u32) -> Vec<&Pairing> {
        self.pairings
            .iter()
            .filter(|pairing| pairing.round == round)
            .collect()
    }

    /// Generates, commits, and returns the pairings for `round`.
    ///
    /// Colors and opponents are recorded here, once per pairing, whether or
    /// not a result is ever declared; the bye is awarded its full point
    /// immediately.
    ///
    /// # Errors
    ///
    /// If the round was already paired or there are no players.
    pub fn generate_round(&mut self, round: u32) -> Result<Vec<Pairing>, TournamentError> {
        if self.round_exists(round) {
            return Err(TournamentError::RoundAlreadyPaired(round));
        }

        let pairings = swiss::generate_round(&self.players, round)?;

        for pairing in &pairings {
            if let Some(black) = pairing.black {
                let white = pairing.white;
                {
                    let player = self.player_mut(white)?;
                    player.colors.push(Color::White);
                    player.opponents.insert(black);
                }
                let player = self.player_mut(black)?;
                player.colors.push(Color::Black);
                player.opponents.insert(white);
            } else {
                let (white_delta, _) = Status::point_delta(Status::Pending, pairing.status);
                self.player_mut(pairing.white)?.points.apply(white_delta);
            }
        }

        self.pairings.extend(pairings.iter().cloned());
        Ok(pairings)
    }

    /// Declares `result` for the pairing at (`round`, `board`).
    ///
    /// The score moves by the signed delta between the old and new status, so
    /// correcting an already declared result is safe.
    ///
    /// # Errors
    ///
    /// If the pairing does not exist, is a bye, or `result` is pending.
    pub fn record_result(
        &mut self,
        round: u32,
        board: u32,
        result: Status,
    ) -> Result<(), TournamentError> {
        if result == Status::Pending {
            return Err(TournamentError::PendingResult);
        }

        self.transition(round, board, result)
    }

    /// Reverts a declared result, returning the pairing to pending and taking
    /// back the points it awarded.
    ///
    /// # Errors
    ///
    /// If the pairing does not exist or is a bye.
    pub fn reset_result(&mut self, round: u32, board: u32) -> Result<(), TournamentError> {
        self.transition(round, board, Status::Pending)
    }

    fn transition(&mut self, round: u32, board: u32, new: Status) -> Result<(), TournamentError> {
        let index = self
            .pairings
            .iter()
            .position(|pairing| pairing.round == round && pairing.board == board)
            .ok_or(TournamentError::PairingNotFound(round, board))?;

        let Some(black) = self.pairings[index].black else {
            return Err(TournamentError::ByePairing);
        };
        let white = self.pairings[index].white;
        let (white_delta, black_delta) = Status::point_delta(self.pairings[index].status, new);

        // Resolve both players before mutating either, so a bad id leaves
        // the tournament untouched.
        self.player(white)?;
        self.player(black)?;

        self.player_mut(white)?.points.apply(white_delta);
        self.player_mut(black)?.points.apply(black_delta);
        self.pairings[index].status = new;

        Ok(())
    }

    /// Recomputes every player's tiebreak, the sum of their opponents'
    /// current scores, against one snapshot taken up front. Byes contribute
    /// nothing. Each stored value is overwritten.
    pub fn recalculate_tiebreaks(&mut self) {
        let scores: FxHashMap<Id, Points> = self
            .players
            .iter()
            .map(|player| (player.id, player.points))
            .collect();

        for player in &mut self.players {
            player.tiebreak = player
                .opponents
                .iter()
                .filter_map(|id| scores.get(id))
                .copied()
                .sum();
        }
    }

    /// The standings table: points, then tiebreak, then rating, descending.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut table: Vec<&Player> = self.players.iter().collect();
        table.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.tiebreak.cmp(&a.tiebreak))
                .then(b.rating.cmp(&a.rating))
        });

        table
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (place, player) in self.standings().iter().enumerate() {
            writeln!(f, "{} {player}", place + 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Tournament, TournamentError};
    use crate::{points::Points, status::Status};

    fn small_tournament() -> Tournament {
        let mut tournament = Tournament::new();
        tournament.add_player("astrid", 2_000);
        tournament.add_player("brand", 1_900);
        tournament.add_player("colborn", 1_800);
        tournament.add_player("dagmar", 1_700);

        tournament
    }

    #[test]
    fn draws_and_forfeits_score() -> anyhow::Result<()> {
        let mut tournament = small_tournament();
        tournament.generate_round(1)?;

        tournament.record_result(1, 1, Status::Draw)?;
        tournament.record_result(1, 2, Status::WhiteWinsByForfeit)?;

        assert_eq!(tournament.player(1)?.points, Points::DRAW);
        assert_eq!(tournament.player(3)?.points, Points::DRAW);
        assert_eq!(tournament.player(2)?.points, Points::WIN);
        assert_eq!(tournament.player(4)?.points, Points::ZERO);

        Ok(())
    }

    #[test]
    fn redeclaring_does_not_double_count() -> anyhow::Result<()> {
        let mut tournament = small_tournament();
        tournament.generate_round(1)?;

        tournament.record_result(1, 1, Status::WhiteWins)?;
        tournament.record_result(1, 1, Status::WhiteWins)?;
        assert_eq!(tournament.player(1)?.points, Points::WIN);

        tournament.record_result(1, 1, Status::BlackWins)?;
        assert_eq!(tournament.player(1)?.points, Points::ZERO);
        assert_eq!(tournament.player(3)?.points, Points::WIN);

        tournament.reset_result(1, 1)?;
        assert_eq!(tournament.player(1)?.points, Points::ZERO);
        assert_eq!(tournament.player(3)?.points, Points::ZERO);
        assert_eq!(tournament.round_pairings(1)[0].status, Status::Pending);

        Ok(())
    }

    #[test]
    fn rejects_bad_declarations() -> anyhow::Result<()> {
        let mut tournament = small_tournament();
        tournament.add_player("erland", 1_600);
        tournament.generate_round(1)?;

        assert!(matches!(
            tournament.record_result(1, 1, Status::Pending),
            Err(TournamentError::PendingResult)
        ));
        // Board 3 is the bye, already decided at creation.
        assert!(matches!(
            tournament.record_result(1, 3, Status::BlackWins),
            Err(TournamentError::ByePairing)
        ));
        assert!(matches!(
            tournament.record_result(2, 1, Status::Draw),
            Err(TournamentError::PairingNotFound(2, 1))
        ));
        assert!(matches!(
            tournament.player(99),
            Err(TournamentError::PlayerNotFound(99))
        ));

        Ok(())
    }

    #[test]
    fn bye_scores_immediately() -> anyhow::Result<()> {
        let mut tournament = small_tournament();
        tournament.add_player("erland", 1_600);
        let pairings = tournament.generate_round(1)?;

        let bye = pairings.last().unwrap();
        assert!(bye.is_bye());
        assert_eq!(bye.status, Status::WhiteWins);
        assert_eq!(tournament.player(bye.white)?.points, Points::WIN);
        // No color and no opponent recorded for a bye.
        assert!(tournament.player(bye.white)?.colors.is_empty());
        assert!(tournament.player(bye.white)?.opponents.is_empty());

        Ok(())
    }

    #[test]
    fn round_generation_is_guarded() -> anyhow::Result<()> {
        let mut tournament = small_tournament();
        tournament.generate_round(1)?;

        assert!(matches!(
            tournament.generate_round(1),
            Err(TournamentError::RoundAlreadyPaired(1))
        ));
        assert!(tournament.round_exists(1));
        assert!(!tournament.round_exists(2));

        Ok(())
    }

    #[test]
    fn histories_recorded_at_pairing_time() -> anyhow::Result<()> {
        let mut tournament = small_tournament();
        tournament.generate_round(1)?;

        // Both sides of board 1 know each other before any result exists.
        let white = tournament.player(1)?;
        let black = tournament.player(3)?;
        assert!(white.has_played(3));
        assert!(black.has_played(1));
        assert_eq!(white.colors.len(), 1);
        assert_eq!(black.colors.len(), 1);

        Ok(())
    }

    #[test]
    fn tiebreak_sums_opponent_scores() -> anyhow::Result<()> {
        let mut tournament = Tournament::new();
        for rating in [1_500, 1_450, 1_400, 1_350] {
            tournament.add_player("player", rating);
        }

        // Player 1 has faced opponents on 1, 0.5, and 2 points.
        tournament.player_mut(1)?.opponents.extend([2, 3, 4]);
        tournament.player_mut(2)?.points = Points::WIN;
        tournament.player_mut(3)?.points = Points::DRAW;
        tournament.player_mut(4)?.points = Points::WIN + Points::WIN;

        tournament.recalculate_tiebreaks();
        assert_eq!(tournament.player(1)?.tiebreak.to_string(), "3.5");
        // No opponents, no tiebreak.
        assert_eq!(tournament.player(2)?.tiebreak, Points::ZERO);

        // Recalculating without score changes is idempotent.
        tournament.recalculate_tiebreaks();
        assert_eq!(tournament.player(1)?.tiebreak.to_string(), "3.5");

        Ok(())
    }

    #[test]
    fn standings_order() -> anyhow::Result<()> {
        let mut tournament = small_tournament();
        tournament.player_mut(3)?.points = Points::WIN;
        tournament.player_mut(4)?.points = Points::WIN;
        tournament.player_mut(4)?.tiebreak = Points::WIN;
        tournament.player_mut(3)?.tiebreak = Points::DRAW;

        let table = tournament.standings();
        let ids: Vec<u64> = table.iter().map(|player| player.id).collect();
        // Points first, then tiebreak, then rating.
        assert_eq!(ids, vec![4, 3, 1, 2]);

        Ok(())
    }
}
