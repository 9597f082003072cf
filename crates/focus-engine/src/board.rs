//! Board representation: a 6x6 grid of piece stacks.

use focus_core::{Color, Coord, Piece, BOARD_SIZE, MAX_STACK_HEIGHT};
use std::fmt;

const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The board: one stack per square, each ordered bottom to top.
///
/// An empty stack is an unoccupied square. The top piece of a stack decides
/// who controls the square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    stacks: [Vec<Piece>; SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            stacks: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Creates the starting position.
    ///
    /// Every square holds a single piece. Even rows read
    /// `first first second second first first`; odd rows swap the colors.
    pub fn initial(first: Color, second: Color) -> Self {
        let mut board = Board::empty();
        for coord in Coord::all() {
            let first_owns = matches!(coord.col(), 0 | 1 | 4 | 5) == (coord.row() % 2 == 0);
            let color = if first_owns { first } else { second };
            board.stacks[coord.index()].push(Piece::new(color));
        }
        board
    }

    /// Returns the stack at `coord`, bottom to top.
    #[inline]
    pub fn stack(&self, coord: Coord) -> &[Piece] {
        &self.stacks[coord.index()]
    }

    /// Replaces the stack at `coord`.
    ///
    /// Intended for building custom positions; the stack is stored as given,
    /// even above the height cap.
    pub fn set_stack(&mut self, coord: Coord, pieces: impl IntoIterator<Item = Piece>) {
        self.stacks[coord.index()] = pieces.into_iter().collect();
    }

    /// Number of pieces at `coord`.
    #[inline]
    pub fn height(&self, coord: Coord) -> usize {
        self.stacks[coord.index()].len()
    }

    /// Color of the top piece at `coord`, if any.
    #[inline]
    pub fn top(&self, coord: Coord) -> Option<Color> {
        self.stacks[coord.index()].last().map(|p| p.color())
    }

    /// Iterates over the occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| !self.stacks[c.index()].is_empty())
    }

    /// Total pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Pieces of `color` on the board, buried or not.
    pub fn count_color(&self, color: Color) -> usize {
        self.stacks
            .iter()
            .flatten()
            .filter(|p| p.is(color))
            .count()
    }

    /// Returns the color on top of every occupied square, if there is one.
    ///
    /// `None` if the tops are mixed or the board is empty.
    pub fn dominant_color(&self) -> Option<Color> {
        let mut tops = self.occupied().filter_map(|c| self.top(c));
        let first = tops.next()?;
        tops.all(|c| c == first).then_some(first)
    }

    /// Moves the top `count` pieces from `from` onto `to`, keeping their order.
    pub(crate) fn transfer(&mut self, from: Coord, to: Coord, count: usize) {
        let source = &mut self.stacks[from.index()];
        debug_assert!(count <= source.len());
        let moved = source.split_off(source.len() - count);
        self.stacks[to.index()].extend(moved);
    }

    pub(crate) fn push(&mut self, to: Coord, piece: Piece) {
        self.stacks[to.index()].push(piece);
    }

    /// Cuts the stack at `coord` back to the height cap.
    ///
    /// Returns the removed pieces, bottom-most first.
    pub(crate) fn trim_overflow(&mut self, coord: Coord) -> Vec<Piece> {
        let stack = &mut self.stacks[coord.index()];
        let excess = stack.len().saturating_sub(MAX_STACK_HEIGHT);
        stack.drain(..excess).collect()
    }
}

impl fmt::Display for Board {
    /// One line per row; each cell lists its stack bottom to top, `.` if empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .filter_map(|col| Coord::new(row, col))
                .map(|c| {
                    let stack = self.stack(c);
                    if stack.is_empty() {
                        ".".to_string()
                    } else {
                        stack.iter().map(|p| p.color().to_char()).collect()
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
