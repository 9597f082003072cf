//! Game management: move validation, move application, and turn tracking.
//!
//! The [`Game`] struct owns the board and both players. Every mutation goes
//! through [`Game::submit_move`] or [`Game::submit_reserve_move`], which
//! validate the whole request before touching any state.

use crate::movegen::generate_moves;
use crate::rules::{evaluate_win, route_overflow, GameResult, OverflowDestination};
use crate::{Board, Player, PlayerId, PlayerIdentity};
use focus_core::{Coord, Move, NotationError, Piece};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Why a request was rejected.
///
/// A rejected request never changes the game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid player identity: {0}")]
    InvalidIdentity(String),

    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("pieces must move along a single row or column to a different square")]
    NullOrDiagonalMove,

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("the game is already over")]
    GameOver,

    #[error("no pieces at {0}")]
    EmptyLocation(Coord),

    #[error("the top piece at {0} is not yours")]
    NotYourPiece(Coord),

    #[error("moving {count} pieces requires a distance of {count}, got {distance}")]
    DistanceMismatch { distance: usize, count: usize },

    #[error("cannot move {requested} pieces from a stack of {available}")]
    InsufficientPieces { requested: usize, available: usize },

    #[error("no pieces in reserve")]
    EmptyReserve,

    #[error(transparent)]
    InvalidNotation(#[from] NotationError),
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was made and the turn passed to the opponent.
    Moved,
    /// The move was made and won the game for this player.
    Won(PlayerId),
}

impl MoveOutcome {
    pub fn is_win(self) -> bool {
        matches!(self, MoveOutcome::Won(_))
    }
}

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// Who made the move.
    pub player: PlayerId,
    /// The move as submitted.
    pub mov: Move,
    /// What the move did.
    pub outcome: MoveOutcome,
}

/// A game of Focus between two players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    /// Indexed by [`PlayerId::index`].
    players: [Player; 2],
    turn: PlayerId,
    result: Option<GameResult>,
    moves: Vec<GameMove>,
}

impl Game {
    /// Starts a new game from the standard layout with player 1 to move.
    ///
    /// Fails with [`GameError::InvalidIdentity`] if both players share a name
    /// or a color.
    pub fn new(
        player_one: impl Into<PlayerIdentity>,
        player_two: impl Into<PlayerIdentity>,
    ) -> Result<Self, GameError> {
        let (one, two) = (player_one.into(), player_two.into());
        let board = Board::initial(one.color, two.color);
        Self::from_board(one, two, board)
    }

    /// Starts a game from a custom board with player 1 to move.
    ///
    /// Win conditions are first checked after the opening move.
    pub fn from_board(
        player_one: impl Into<PlayerIdentity>,
        player_two: impl Into<PlayerIdentity>,
        board: Board,
    ) -> Result<Self, GameError> {
        let (one, two) = (player_one.into(), player_two.into());
        if one.name == two.name {
            return Err(GameError::InvalidIdentity(format!(
                "both players are named '{}'",
                one.name
            )));
        }
        if one.color == two.color {
            return Err(GameError::InvalidIdentity(format!(
                "both players play {}",
                one.color
            )));
        }

        Ok(Game {
            board,
            players: [Player::new(one), Player::new(two)],
            turn: PlayerId::One,
            result: None,
            moves: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player in the given seat.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Resolves a player name to its seat.
    pub fn player_id(&self, name: &str) -> Result<PlayerId, GameError> {
        PlayerId::ALL
            .into_iter()
            .find(|id| self.player(*id).name() == name)
            .ok_or_else(|| GameError::InvalidIdentity(format!("unknown player '{}'", name)))
    }

    /// Returns whose move it is.
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.map(GameResult::winner)
    }

    /// Returns the accepted moves in order.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of accepted moves.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns every move the player to move may make.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        generate_moves(&self.board, self.player(self.turn))
    }

    /// Returns the stack at `pos`, bottom to top.
    pub fn pieces_at(&self, pos: (usize, usize)) -> Result<&[Piece], GameError> {
        Ok(self.board.stack(coord(pos)?))
    }

    /// Returns how many pieces `name` has in reserve.
    pub fn reserve_count(&self, name: &str) -> Result<usize, GameError> {
        let id = self.player_id(name)?;
        Ok(self.player(id).reserve_count())
    }

    /// Returns how many pieces `name` has captured.
    pub fn captured_count(&self, name: &str) -> Result<usize, GameError> {
        let id = self.player_id(name)?;
        Ok(self.player(id).captured_count())
    }

    /// Moves the top `count` pieces at `from` onto the stack at `to`.
    ///
    /// The move must run straight along a row or column, cover exactly
    /// `count` squares, and start from a stack topped by the mover's color
    /// holding at least `count` pieces.
    pub fn submit_move(
        &mut self,
        player: &str,
        from: (usize, usize),
        to: (usize, usize),
        count: usize,
    ) -> Result<MoveOutcome, GameError> {
        let result = self.validate_stack_move(player, from, to, count);
        let (id, from, to) = match result {
            Ok(checked) => checked,
            Err(e) => {
                trace!(player, ?from, ?to, count, error = %e, "move rejected");
                return Err(e);
            }
        };

        self.board.transfer(from, to, count);
        Ok(self.finish_move(id, Move::stack(from, to, count)))
    }

    /// Plays one piece from the mover's reserve onto `to`.
    pub fn submit_reserve_move(
        &mut self,
        player: &str,
        to: (usize, usize),
    ) -> Result<MoveOutcome, GameError> {
        let result = self.validate_reserve_move(player, to);
        let (id, to) = match result {
            Ok(checked) => checked,
            Err(e) => {
                trace!(player, ?to, error = %e, "reserve move rejected");
                return Err(e);
            }
        };

        let piece = self.players[id.index()].take_from_reserve()?;
        self.board.push(to, piece);
        Ok(self.finish_move(id, Move::reserve(to)))
    }

    /// Makes a typed move.
    pub fn play(&mut self, player: &str, m: Move) -> Result<MoveOutcome, GameError> {
        match m {
            Move::Stack { from, to, count } => {
                self.submit_move(player, from.into(), to.into(), count)
            }
            Move::Reserve { to } => self.submit_reserve_move(player, to.into()),
        }
    }

    /// Makes a move given in move notation (e.g. `"0,0>0,1x1"` or `"*>2,3"`).
    pub fn play_notation(&mut self, player: &str, notation: &str) -> Result<MoveOutcome, GameError> {
        let m = notation.parse::<Move>()?;
        self.play(player, m)
    }

    fn validate_stack_move(
        &self,
        player: &str,
        from: (usize, usize),
        to: (usize, usize),
        count: usize,
    ) -> Result<(PlayerId, Coord, Coord), GameError> {
        let id = self.player_id(player)?;
        let (from, to) = (coord(from)?, coord(to)?);
        if from == to {
            return Err(GameError::NullOrDiagonalMove);
        }
        let available = self.board.height(from);
        if count == 0 {
            return Err(GameError::InsufficientPieces {
                requested: count,
                available,
            });
        }

        self.check_turn(id)?;

        match self.board.top(from) {
            None => return Err(GameError::EmptyLocation(from)),
            Some(color) if color != self.player(id).color() => {
                return Err(GameError::NotYourPiece(from))
            }
            Some(_) => {}
        }

        let distance = from.distance(to).ok_or(GameError::NullOrDiagonalMove)?;
        if distance != count {
            return Err(GameError::DistanceMismatch { distance, count });
        }
        if count > available {
            return Err(GameError::InsufficientPieces {
                requested: count,
                available,
            });
        }

        Ok((id, from, to))
    }

    fn validate_reserve_move(
        &self,
        player: &str,
        to: (usize, usize),
    ) -> Result<(PlayerId, Coord), GameError> {
        let id = self.player_id(player)?;
        let to = coord(to)?;
        self.check_turn(id)?;
        if self.player(id).reserve_count() == 0 {
            return Err(GameError::EmptyReserve);
        }
        Ok((id, to))
    }

    fn check_turn(&self, id: PlayerId) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        if self.turn != id {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// Reconciles overflow at the destination, checks for a win, and passes
    /// the turn. Called once the pieces have been placed.
    fn finish_move(&mut self, id: PlayerId, m: Move) -> MoveOutcome {
        let to = m.to();
        let displaced = self.board.trim_overflow(to);
        if !displaced.is_empty() {
            let mover = &mut self.players[id.index()];
            let color = mover.color();
            for piece in &displaced {
                match route_overflow(piece.color(), color) {
                    OverflowDestination::Reserve => mover.add_reserve(*piece),
                    OverflowDestination::Captured => mover.add_captured(*piece),
                }
            }
            debug!(
                player = mover.name(),
                square = %to,
                displaced = displaced.len(),
                reserve = mover.reserve_count(),
                captured = mover.captured_count(),
                "stack overflow reconciled"
            );
        }

        let outcome = match evaluate_win(&self.board, self.player(id)) {
            Some(reason) => {
                let result = GameResult::win(id, reason);
                self.result = Some(result);
                info!(winner = self.player(id).name(), ?reason, "game over");
                MoveOutcome::Won(id)
            }
            None => {
                self.turn = id.opponent();
                MoveOutcome::Moved
            }
        };

        debug!(player = self.player(id).name(), mov = %m, ?outcome, "move accepted");
        self.moves.push(GameMove {
            player: id,
            mov: m,
            outcome,
        });
        outcome
    }
}

fn coord((row, col): (usize, usize)) -> Result<Coord, GameError> {
    Coord::new(row, col).ok_or(GameError::OutOfBounds { row, col })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WinReason;
    use focus_core::{Color, BOARD_SIZE, MAX_STACK_HEIGHT};
    use proptest::prelude::*;

    const ADA: &str = "Ada";
    const BO: &str = "Bo";

    fn new_game() -> Game {
        Game::new((ADA, Color::Red), (BO, Color::Green)).unwrap()
    }

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn total_pieces(game: &Game) -> usize {
        game.board().piece_count()
            + PlayerId::ALL
                .iter()
                .map(|id| game.player(*id).pieces_held())
                .sum::<usize>()
    }

    #[test]
    fn new_game_state() {
        let game = new_game();
        assert_eq!(game.turn(), PlayerId::One);
        assert_eq!(game.result(), None);
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.board().piece_count(), 36);
        assert_eq!(game.reserve_count(ADA), Ok(0));
        assert_eq!(game.captured_count(BO), Ok(0));
    }

    #[test]
    fn rejects_duplicate_identities() {
        assert!(matches!(
            Game::new((ADA, Color::Red), (ADA, Color::Green)),
            Err(GameError::InvalidIdentity(_))
        ));
        assert!(matches!(
            Game::new((ADA, Color::Red), (BO, Color::Red)),
            Err(GameError::InvalidIdentity(_))
        ));
    }

    #[test]
    fn single_piece_move() {
        let mut game = new_game();
        assert_eq!(game.submit_move(ADA, (0, 0), (0, 1), 1), Ok(MoveOutcome::Moved));
        assert_eq!(game.pieces_at((0, 0)), Ok(&[][..]));
        assert_eq!(game.pieces_at((0, 1)), Ok(&[Piece::RED, Piece::RED][..]));
        assert_eq!(game.turn(), PlayerId::Two);
        assert_eq!(
            game.move_history(),
            &[GameMove {
                player: PlayerId::One,
                mov: Move::stack(c(0, 0), c(0, 1), 1),
                outcome: MoveOutcome::Moved,
            }]
        );
    }

    #[test]
    fn multi_piece_move_keeps_order() {
        let mut game = new_game();
        game.submit_move(ADA, (0, 0), (1, 0), 1).unwrap();
        game.submit_move(BO, (0, 2), (0, 3), 1).unwrap();
        // (1,0) is now Green, Red; Ada moves both two squares down.
        game.submit_move(ADA, (1, 0), (3, 0), 2).unwrap();
        assert_eq!(
            game.pieces_at((3, 0)),
            Ok(&[Piece::GREEN, Piece::GREEN, Piece::RED][..])
        );
        assert_eq!(game.pieces_at((1, 0)), Ok(&[][..]));
    }

    #[test]
    fn rejection_reasons() {
        let mut game = new_game();
        assert!(matches!(
            game.submit_move("Cy", (0, 0), (0, 1), 1),
            Err(GameError::InvalidIdentity(_))
        ));
        assert_eq!(
            game.submit_move(ADA, (0, 0), (0, 6), 6),
            Err(GameError::OutOfBounds { row: 0, col: 6 })
        );
        assert_eq!(
            game.submit_move(ADA, (0, 0), (0, 0), 1),
            Err(GameError::NullOrDiagonalMove)
        );
        assert_eq!(
            game.submit_move(ADA, (0, 0), (1, 1), 1),
            Err(GameError::NullOrDiagonalMove)
        );
        assert_eq!(
            game.submit_move(ADA, (0, 0), (0, 1), 0),
            Err(GameError::InsufficientPieces {
                requested: 0,
                available: 1
            })
        );
        assert_eq!(
            game.submit_move(BO, (0, 2), (0, 3), 1),
            Err(GameError::NotYourTurn)
        );
        assert_eq!(
            game.submit_move(ADA, (0, 2), (0, 3), 1),
            Err(GameError::NotYourPiece(c(0, 2)))
        );
        assert_eq!(
            game.submit_move(ADA, (0, 0), (0, 2), 1),
            Err(GameError::DistanceMismatch {
                distance: 2,
                count: 1
            })
        );
        assert_eq!(
            game.submit_move(ADA, (0, 0), (0, 2), 2),
            Err(GameError::InsufficientPieces {
                requested: 2,
                available: 1
            })
        );
        assert_eq!(game, new_game());
    }

    #[test]
    fn empty_location() {
        let mut game = new_game();
        game.submit_move(ADA, (0, 0), (0, 1), 1).unwrap();
        game.submit_move(BO, (1, 0), (1, 1), 1).unwrap();
        assert_eq!(
            game.submit_move(ADA, (0, 0), (1, 0), 1),
            Err(GameError::EmptyLocation(c(0, 0)))
        );
    }

    #[test]
    fn domination_win_ends_game() {
        let mut board = Board::empty();
        board.set_stack(c(0, 0), [Piece::RED]);
        board.set_stack(c(0, 1), [Piece::GREEN]);
        let mut game = Game::from_board((ADA, Color::Red), (BO, Color::Green), board).unwrap();
        assert_eq!(
            game.submit_move(ADA, (0, 0), (0, 1), 1),
            Ok(MoveOutcome::Won(PlayerId::One))
        );
        assert_eq!(
            game.result(),
            Some(GameResult::PlayerOneWins(WinReason::Domination))
        );
        assert_eq!(game.turn(), PlayerId::One);
        assert_eq!(
            game.submit_move(BO, (0, 1), (0, 2), 1),
            Err(GameError::GameOver)
        );
        assert_eq!(game.submit_reserve_move(ADA, (3, 3)), Err(GameError::GameOver));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn overflow_routes_by_color() {
        let mut board = Board::empty();
        board.set_stack(c(0, 0), [Piece::RED, Piece::RED]);
        board.set_stack(
            c(0, 2),
            [Piece::GREEN, Piece::RED, Piece::GREEN, Piece::GREEN],
        );
        board.set_stack(c(5, 5), [Piece::GREEN]);
        let mut game = Game::from_board((ADA, Color::Red), (BO, Color::Green), board).unwrap();

        assert_eq!(game.submit_move(ADA, (0, 0), (0, 2), 2), Ok(MoveOutcome::Moved));
        assert_eq!(
            game.pieces_at((0, 2)),
            Ok(&[Piece::RED, Piece::GREEN, Piece::GREEN, Piece::RED, Piece::RED][..])
        );
        assert_eq!(game.captured_count(ADA), Ok(1));
        assert_eq!(game.reserve_count(ADA), Ok(0));

        game.submit_move(BO, (5, 5), (4, 5), 1).unwrap();
        game.submit_move(ADA, (0, 2), (0, 3), 1).unwrap();
        assert_eq!(total_pieces(&game), 7);
    }

    #[test]
    fn overflow_sends_own_pieces_to_reserve() {
        let mut board = Board::empty();
        board.set_stack(c(2, 0), [Piece::RED]);
        board.set_stack(c(2, 1), [Piece::RED; 5]);
        board.set_stack(c(5, 5), [Piece::GREEN]);
        let mut game = Game::from_board((ADA, Color::Red), (BO, Color::Green), board).unwrap();

        game.submit_move(ADA, (2, 0), (2, 1), 1).unwrap();
        assert_eq!(game.reserve_count(ADA), Ok(1));
        assert_eq!(game.captured_count(ADA), Ok(0));
        assert_eq!(game.board().height(c(2, 1)), MAX_STACK_HEIGHT);
    }

    #[test]
    fn reserve_move() {
        let mut board = Board::empty();
        board.set_stack(c(2, 0), [Piece::RED]);
        board.set_stack(c(2, 1), [Piece::RED; 5]);
        board.set_stack(c(5, 5), [Piece::GREEN]);
        board.set_stack(c(5, 0), [Piece::GREEN]);
        let mut game = Game::from_board((ADA, Color::Red), (BO, Color::Green), board).unwrap();
        game.submit_move(ADA, (2, 0), (2, 1), 1).unwrap();

        assert_eq!(game.submit_reserve_move(BO, (0, 0)), Err(GameError::EmptyReserve));
        game.submit_move(BO, (5, 5), (5, 4), 1).unwrap();

        assert_eq!(
            game.submit_reserve_move(ADA, (9, 0)),
            Err(GameError::OutOfBounds { row: 9, col: 0 })
        );
        assert_eq!(game.submit_reserve_move(ADA, (5, 4)), Ok(MoveOutcome::Moved));
        assert_eq!(game.pieces_at((5, 4)), Ok(&[Piece::GREEN, Piece::RED][..]));
        assert_eq!(game.reserve_count(ADA), Ok(0));
        assert_eq!(game.turn(), PlayerId::Two);
        assert_eq!(
            game.move_history().last().map(|m| m.mov),
            Some(Move::reserve(c(5, 4)))
        );
    }

    #[test]
    fn reserve_move_validation_and_overflow() {
        let mut board = Board::empty();
        board.set_stack(c(2, 0), [Piece::RED; 2]);
        board.set_stack(c(2, 2), [Piece::RED; 5]);
        board.set_stack(c(3, 3), [Piece::GREEN; 5]);
        board.set_stack(
            c(4, 4),
            [Piece::RED, Piece::GREEN, Piece::GREEN, Piece::GREEN, Piece::GREEN],
        );
        board.set_stack(c(5, 4), [Piece::GREEN]);
        let mut game = Game::from_board((ADA, Color::Red), (BO, Color::Green), board).unwrap();

        game.submit_move(ADA, (2, 0), (2, 2), 2).unwrap();
        assert_eq!(game.reserve_count(ADA), Ok(2));

        let before = game.clone();
        assert_eq!(game.submit_reserve_move(ADA, (3, 3)), Err(GameError::NotYourTurn));
        assert_eq!(game, before);
        assert!(matches!(
            game.submit_reserve_move("Cy", (3, 3)),
            Err(GameError::InvalidIdentity(_))
        ));
        assert_eq!(game, before);

        game.submit_move(BO, (5, 4), (5, 3), 1).unwrap();

        // Own color pushed off the bottom goes back to reserve.
        let outcome = game.submit_reserve_move(ADA, (4, 4)).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved);
        assert!(!outcome.is_win());
        assert_eq!(game.reserve_count(ADA), Ok(2));
        assert_eq!(game.captured_count(ADA), Ok(0));
        assert_eq!(game.board().height(c(4, 4)), MAX_STACK_HEIGHT);
        assert_eq!(game.board().top(c(4, 4)), Some(Color::Red));
        assert_eq!(game.turn(), PlayerId::Two);

        game.submit_move(BO, (5, 3), (5, 2), 1).unwrap();

        // Opponent color pushed off the bottom is captured.
        assert_eq!(game.submit_reserve_move(ADA, (3, 3)), Ok(MoveOutcome::Moved));
        assert_eq!(game.reserve_count(ADA), Ok(1));
        assert_eq!(game.captured_count(ADA), Ok(1));
        assert_eq!(
            game.pieces_at((3, 3)),
            Ok(&[Piece::GREEN, Piece::GREEN, Piece::GREEN, Piece::GREEN, Piece::RED][..])
        );

        game.submit_move(BO, (5, 2), (4, 2), 1).unwrap();

        // Covering the last Green-topped stack from reserve dominates the board.
        let outcome = game.submit_reserve_move(ADA, (4, 2)).unwrap();
        assert_eq!(outcome, MoveOutcome::Won(PlayerId::One));
        assert!(outcome.is_win());
        assert_eq!(
            game.result(),
            Some(GameResult::PlayerOneWins(WinReason::Domination))
        );
        assert_eq!(game.reserve_count(ADA), Ok(0));
    }

    #[test]
    fn capture_win() {
        let mut board = Board::empty();
        board.set_stack(c(0, 0), [Piece::RED; 5]);
        board.set_stack(c(0, 5), [Piece::GREEN; 5]);
        board.set_stack(c(3, 3), [Piece::GREEN, Piece::RED]);
        board.set_stack(c(3, 4), [Piece::GREEN; 5]);
        board.set_stack(c(5, 5), [Piece::GREEN]);
        let mut game = Game::from_board((ADA, Color::Red), (BO, Color::Green), board).unwrap();

        game.submit_move(ADA, (0, 0), (0, 5), 5).unwrap();
        assert_eq!(game.captured_count(ADA), Ok(5));
        assert!(!game.is_game_over());

        game.submit_move(BO, (5, 5), (5, 4), 1).unwrap();
        assert_eq!(
            game.submit_move(ADA, (3, 3), (3, 4), 1),
            Ok(MoveOutcome::Won(PlayerId::One))
        );
        assert_eq!(game.captured_count(ADA), Ok(6));
        assert_eq!(
            game.result(),
            Some(GameResult::PlayerOneWins(WinReason::Capture))
        );
        assert_eq!(game.winner(), Some(PlayerId::One));
    }

    #[test]
    fn play_notation() {
        let mut game = new_game();
        assert_eq!(game.play_notation(ADA, "0,0>0,1x1"), Ok(MoveOutcome::Moved));
        assert!(matches!(
            game.play_notation(BO, "1,0 1,1"),
            Err(GameError::InvalidNotation(_))
        ));
        assert_eq!(game.play_notation(BO, "*>1,1"), Err(GameError::EmptyReserve));
    }

    #[test]
    fn queries_reject_bad_input() {
        let game = new_game();
        assert_eq!(
            game.pieces_at((6, 0)),
            Err(GameError::OutOfBounds { row: 6, col: 0 })
        );
        assert!(matches!(
            game.reserve_count("Cy"),
            Err(GameError::InvalidIdentity(_))
        ));
        assert!(matches!(
            game.captured_count("Cy"),
            Err(GameError::InvalidIdentity(_))
        ));
    }

    fn any_request() -> impl Strategy<Value = (usize, usize, usize, usize, usize)> {
        (0..BOARD_SIZE, 0..BOARD_SIZE, 0..BOARD_SIZE, 0..BOARD_SIZE, 0usize..7)
    }

    proptest! {
        #[test]
        fn random_play_keeps_invariants(picks in prop::collection::vec(any::<prop::sample::Index>(), 0..150)) {
            let mut game = new_game();
            for pick in picks {
                let moves = game.legal_moves();
                if moves.is_empty() {
                    break;
                }
                let m = *pick.get(&moves);
                let mover = game.turn();
                let name = game.player(mover).name().to_string();
                let outcome = game.play(&name, m).unwrap();

                prop_assert_eq!(total_pieces(&game), 36);
                for color in Color::ALL {
                    let held: usize = PlayerId::ALL
                        .iter()
                        .map(|id| game.player(*id).count_color(color))
                        .sum();
                    prop_assert_eq!(game.board().count_color(color) + held, 18);
                }
                prop_assert!(Coord::all().all(|sq| game.board().height(sq) <= MAX_STACK_HEIGHT));
                prop_assert_eq!(game.board().top(m.to()), Some(game.player(mover).color()));
                match outcome {
                    MoveOutcome::Moved => {
                        prop_assert_eq!(game.turn(), mover.opponent());
                    }
                    MoveOutcome::Won(id) => {
                        prop_assert_eq!(id, mover);
                        prop_assert_eq!(game.turn(), mover);
                        prop_assert_eq!(game.winner(), Some(mover));
                    }
                }
            }
        }

        #[test]
        fn accepted_iff_legal(
            setup in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
            (fr, fc, tr, tc, count) in any_request(),
        ) {
            let mut game = new_game();
            for pick in setup {
                let moves = game.legal_moves();
                if moves.is_empty() {
                    break;
                }
                let name = game.player(game.turn()).name().to_string();
                game.play(&name, *pick.get(&moves)).unwrap();
            }

            let before = game.clone();
            let legal = game.legal_moves();
            let name = game.player(game.turn()).name().to_string();
            let request = (c(fr, fc), c(tr, tc));
            let listed = legal.contains(&Move::stack(request.0, request.1, count));

            match game.submit_move(&name, (fr, fc), (tr, tc), count) {
                Ok(_) => {
                    prop_assert!(listed);
                    prop_assert_eq!(game.ply_count(), before.ply_count() + 1);
                }
                Err(_) => {
                    prop_assert!(!listed);
                    prop_assert_eq!(&game, &before);
                }
            }
        }
    }
}
