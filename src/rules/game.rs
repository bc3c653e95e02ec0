//! Live game state: board, side to move and capture tallies

use tracing::trace;

use crate::board::{Board, Player, Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{BoardSizeError, InvalidMove};

use super::capture::apply_captures;
use super::win::find_winner;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    /// Board filled with no winner
    Draw,
}

/// State of one game, mutated only through [`GameState::make_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    /// Captured pairs, indexed by [`Player::index`]. Never decremented.
    captures: [u32; 2],
    last_move: Option<Pos>,
}

impl GameState {
    /// New game on an empty `size`×`size` board, player one to move.
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardSizeError(size));
        }
        Ok(Self {
            board: Board::new(size),
            current_player: Player::One,
            captures: [0, 0],
            last_move: None,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions and for the search,
    /// which must leave the board as it found it.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Pairs captured by `player`
    #[inline]
    pub fn captures(&self, player: Player) -> u32 {
        self.captures[player.index()]
    }

    #[inline]
    pub fn captures_p1(&self) -> u32 {
        self.captures[0]
    }

    #[inline]
    pub fn captures_p2(&self) -> u32 {
        self.captures[1]
    }

    /// Both tallies, indexed by [`Player::index`]
    #[inline]
    pub fn capture_counts(&self) -> [u32; 2] {
        self.captures
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// True iff both coordinates are on the board and the cell is empty.
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        self.board
            .pos(row, col)
            .is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Place the current player's stone, resolve captures, pass the turn.
    ///
    /// # Returns
    /// Number of pairs captured by this move
    pub fn make_move(&mut self, row: i32, col: i32) -> Result<usize, InvalidMove> {
        let pos = self.board.pos(row, col).ok_or(InvalidMove::OutOfBounds {
            row,
            col,
            size: self.board.size(),
        })?;
        self.play(pos)
    }

    /// [`make_move`](Self::make_move) for an already on-board position.
    pub fn play(&mut self, pos: Pos) -> Result<usize, InvalidMove> {
        if pos.row >= self.size() || pos.col >= self.size() {
            return Err(InvalidMove::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
                size: self.size(),
            });
        }
        if !self.board.is_empty(pos) {
            return Err(InvalidMove::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let mover = self.current_player;
        self.board.place_stone(pos, mover);
        let pairs = apply_captures(&mut self.board, pos, mover);
        self.captures[mover.index()] += pairs as u32;
        self.last_move = Some(pos);
        self.current_player = mover.opponent();

        trace!(player = mover.number(), row = pos.row, col = pos.col, pairs, "move accepted");
        Ok(pairs)
    }

    /// Winner by five-in-a-row or by five captured pairs, if any.
    /// Full board scan.
    pub fn check_win(&self) -> Option<Player> {
        find_winner(&self.board, self.captures)
    }

    /// [`check_win`](Self::check_win) extended with a draw on a full board.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.check_win() {
            Some(player) => Some(Outcome::Win(player)),
            None if self.board.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_new_game() {
        let state = GameState::new(19).unwrap();
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.capture_counts(), [0, 0]);
        assert!(state.board().is_board_empty());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_board_size_range() {
        assert_eq!(GameState::new(4), Err(BoardSizeError(4)));
        assert_eq!(GameState::new(65), Err(BoardSizeError(65)));
        assert!(GameState::new(5).is_ok());
        assert!(GameState::new(64).is_ok());
    }

    #[test]
    fn test_is_valid_move() {
        let mut state = GameState::new(19).unwrap();
        assert!(state.is_valid_move(0, 0));
        assert!(!state.is_valid_move(-1, 0));
        assert!(!state.is_valid_move(0, 19));
        state.board_mut().place_stone(Pos::new(0, 0), Player::One);
        assert!(!state.is_valid_move(0, 0));
    }

    #[test]
    fn test_make_move_toggles() {
        let mut state = GameState::new(19).unwrap();
        assert_eq!(state.make_move(0, 0), Ok(0));
        assert_eq!(state.board().get(Pos::new(0, 0)), Cell::Stone(Player::One));
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.make_move(0, 1), Ok(0));
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.last_move(), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_make_move_occupied_leaves_state() {
        let mut state = GameState::new(19).unwrap();
        state.make_move(0, 0).unwrap();
        let before = state.clone();
        assert_eq!(
            state.make_move(0, 0),
            Err(InvalidMove::Occupied { row: 0, col: 0 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_make_move_out_of_bounds() {
        let mut state = GameState::new(9).unwrap();
        assert_eq!(
            state.make_move(9, 0),
            Err(InvalidMove::OutOfBounds { row: 9, col: 0, size: 9 })
        );
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_capture_credits_mover() {
        let mut state = GameState::new(19).unwrap();
        state.board_mut().place_stone(Pos::new(5, 5), Player::One);
        state.board_mut().place_stone(Pos::new(5, 6), Player::Two);
        state.board_mut().place_stone(Pos::new(5, 7), Player::Two);

        assert_eq!(state.make_move(5, 8), Ok(1));
        assert_eq!(state.captures_p1(), 1);
        assert_eq!(state.captures_p2(), 0);
        assert!(state.board().is_empty(Pos::new(5, 6)));
        assert!(state.board().is_empty(Pos::new(5, 7)));
    }

    #[test]
    fn test_check_win_line() {
        let mut state = GameState::new(19).unwrap();
        assert_eq!(state.check_win(), None);
        for col in 9..14 {
            state.board_mut().place_stone(Pos::new(9, col), Player::One);
        }
        assert_eq!(state.check_win(), Some(Player::One));
        assert_eq!(state.outcome(), Some(Outcome::Win(Player::One)));
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut state = GameState::new(5).unwrap();
        // Columns alternate in pairs so no line of five forms
        for pos in state.board().clone().positions() {
            let player = if (pos.col / 2 + pos.row) % 2 == 0 { Player::One } else { Player::Two };
            state.board_mut().place_stone(pos, player);
        }
        assert_eq!(state.check_win(), None);
        assert_eq!(state.outcome(), Some(Outcome::Draw));
    }
}
