use crate::error::{Error, Result};
use crate::game::{Game, Player};
use std::fmt;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

/// A 3x3 position. `Player::Max` plays X and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Player>; 9],
    to_move: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 9], to_move: Player::Max }
    }
}

impl Board {
    /// Parse nine cells in row-major order: `X`, `O`, or `.` for empty.
    /// Whitespace is ignored. The side to move follows from the counts.
    pub fn from_cells(s: &str) -> Result<Self> {
        let mut cells = [None; 9];
        let mut n = 0usize;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if n == 9 {
                return Err(Error::InvalidPosition(format!("board has more than nine cells: {s:?}")));
            }
            cells[n] = match c {
                'X' | 'x' => Some(Player::Max),
                'O' | 'o' => Some(Player::Min),
                '.' | '-' => None,
                other => return Err(Error::InvalidPosition(format!("bad board cell {other:?}"))),
            };
            n += 1;
        }
        if n != 9 {
            return Err(Error::InvalidPosition(format!("board needs nine cells, got {n}")));
        }
        let xs = cells.iter().filter(|c| **c == Some(Player::Max)).count();
        let os = cells.iter().filter(|c| **c == Some(Player::Min)).count();
        let to_move = match xs.checked_sub(os) {
            Some(0) => Player::Max,
            Some(1) => Player::Min,
            _ => return Err(Error::InvalidPosition(format!("impossible mark counts X={xs} O={os}"))),
        };
        Ok(Self { cells, to_move })
    }

    pub fn cell(&self, sq: Square) -> Option<Player> {
        self.cells.get(sq.index()).copied().flatten()
    }

    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|[a, b, c]| match self.cells[*a] {
            Some(p) if self.cells[*b] == Some(p) && self.cells[*c] == Some(p) => Some(p),
            _ => None,
        })
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let c = match self.cells[row * 3 + col] {
                    Some(Player::Max) => 'X',
                    Some(Player::Min) => 'O',
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A square addressed by zero-based row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    fn index(self) -> usize {
        if self.row < 3 && self.col < 3 { self.row as usize * 3 + self.col as usize } else { usize::MAX }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = Board;
    type Action = Square;

    fn actions(&self, state: &Board) -> Vec<Square> {
        if self.terminal_test(state) {
            return Vec::new();
        }
        (0..9u8)
            .filter(|i| state.cells[*i as usize].is_none())
            .map(|i| Square::new(i / 3, i % 3))
            .collect()
    }

    fn result(&self, state: &Board, action: &Square) -> Result<Board> {
        let idx = action.index();
        if self.terminal_test(state) || idx >= 9 || state.cells[idx].is_some() {
            return Err(Error::invalid_move(state, action));
        }
        let mut next = *state;
        next.cells[idx] = Some(state.to_move);
        next.to_move = state.to_move.opponent();
        Ok(next)
    }

    fn terminal_test(&self, state: &Board) -> bool {
        state.winner().is_some() || state.is_full()
    }

    fn utility(&self, state: &Board, player: Player) -> Result<f64> {
        if !self.terminal_test(state) {
            return Err(Error::non_terminal_utility(state));
        }
        Ok(match state.winner() {
            Some(w) if w == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        })
    }

    fn to_move(&self, state: &Board) -> Player {
        state.to_move
    }
}
