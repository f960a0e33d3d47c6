//! Round and match controller.

use super::action::{Intent, MoveOutcome, MoveRejection};
use super::invariants::assert_invariants;
use super::outcome::{RoundOutcome, Status};
use super::rules::{self, WinnerInfo};
use super::view::MatchView;
use super::{Board, Player, Position, Score, Square};
use tracing::{debug, info, instrument};

/// Session state for a local two-player match.
///
/// Owns the board, the turn flag and the cumulative score. Outcome, status
/// and winning line are derived from the board on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    board: Board,
    x_is_next: bool,
    score: Score,
}

impl Match {
    /// Creates a match with an empty board, X to move and a zeroed score.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            x_is_next: true,
            score: Score::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true if X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Returns the player to move next.
    pub fn mover(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome::of(&self.board)
    }

    /// Winner and winning line of the current board.
    pub fn winner_info(&self) -> WinnerInfo {
        rules::evaluate_winner(&self.board)
    }

    /// Winning line as board indices, for highlighting.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winner_info().indices()
    }

    /// Returns true if the current board is a draw.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Status line for the current board and turn.
    pub fn status(&self) -> Status {
        Status::new(self.outcome(), self.mover())
    }

    /// Returns true if a click on `pos` would be ignored.
    pub fn is_cell_disabled(&self, pos: Position) -> bool {
        !self.board.is_empty(pos) || self.outcome().is_over()
    }

    /// Places the mover's mark at `index`.
    ///
    /// Illegal moves (round over, occupied square, index outside 0-8) leave
    /// the match untouched and report why. A move that ends the round adds
    /// exactly one to the winner's count or to the draws.
    #[instrument(skip(self), fields(mover = %self.mover()))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let position = match self.check_move(index) {
            Ok(position) => position,
            Err(reason) => {
                debug!(%reason, "Move ignored");
                return MoveOutcome::Ignored(reason);
            }
        };

        let player = self.mover();
        self.board.set(position, Square::Occupied(player));
        self.x_is_next = !self.x_is_next;
        debug!(%player, %position, "Mark placed");

        // Score from the post-move board.
        let outcome = match self.outcome() {
            RoundOutcome::Won { player: winner, line } => {
                self.score.record_win(winner);
                info!(%winner, score = %self.score, "Round won");
                MoveOutcome::Won {
                    player,
                    position,
                    line,
                }
            }
            RoundOutcome::Draw => {
                self.score.record_draw();
                info!(score = %self.score, "Round drawn");
                MoveOutcome::Drawn { player, position }
            }
            RoundOutcome::InProgress => MoveOutcome::Placed { player, position },
        };

        assert_invariants(self);

        outcome
    }

    /// Clears the board and gives X the first move. The score is kept.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        self.board = Board::new();
        self.x_is_next = true;
        info!(score = %self.score, "New round");
    }

    /// Starts a new round and zeroes the score.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.new_round();
        self.score = Score::new();
        info!("Match reset");
    }

    /// Routes a presentation-layer intent.
    ///
    /// Returns the move outcome for cell clicks and `None` for round/match
    /// resets.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Option<MoveOutcome> {
        match intent {
            Intent::Cell(index) => Some(self.apply_move(index)),
            Intent::NewRound => {
                self.new_round();
                None
            }
            Intent::ResetMatch => {
                self.reset_match();
                None
            }
        }
    }

    /// Snapshot of everything the presentation layer renders.
    pub fn view(&self) -> MatchView {
        MatchView::from(self)
    }

    fn check_move(&self, index: usize) -> Result<Position, MoveRejection> {
        if self.outcome().is_over() {
            return Err(MoveRejection::RoundOver);
        }
        let position = Position::from_index(index).ok_or(MoveRejection::OutOfRange(index))?;
        if !self.board.is_empty(position) {
            return Err(MoveRejection::Occupied(position));
        }
        Ok(position)
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
