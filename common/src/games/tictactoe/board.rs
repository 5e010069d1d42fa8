use std::fmt;

use super::types::{BOARD_SIZE, Mark, MoveError, Position, TerminalStatus, WinningLine};
use super::win_detector::{check_win_with_line, has_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three row strings. `X` and `O` are marks, any other
    /// character is an empty cell. Missing characters are treated as empty.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(BOARD_SIZE).enumerate() {
                board.cells[row][col] = match ch {
                    'X' | 'x' => Mark::X,
                    'O' | 'o' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    pub fn cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !pos.is_on_board() {
            return Err(MoveError::OutOfRange {
                row: pos.row,
                col: pos.col,
            });
        }

        if self.cells[pos.row][pos.col] != Mark::Empty {
            return Err(MoveError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }

        self.cells[pos.row][pos.col] = mark;
        Ok(())
    }

    /// Undoes a speculative placement made during search.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    pub fn is_winner(&self, mark: Mark) -> bool {
        has_line(&self.cells, mark)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn mark_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self)
    }

    /// A win takes precedence over a full board.
    pub fn terminal_status(&self) -> TerminalStatus {
        if self.is_winner(Mark::X) {
            TerminalStatus::HumanWin
        } else if self.is_winner(Mark::O) {
            TerminalStatus::OpponentWin
        } else if self.is_full() {
            TerminalStatus::Draw
        } else {
            TerminalStatus::None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let line: String = cells.iter().map(|cell| cell.symbol()).collect();
            if row + 1 < BOARD_SIZE {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

pub fn terminal_status(board: &Board) -> TerminalStatus {
    board.terminal_status()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_cell() {
        let mut board = Board::new();
        assert!(board.place(Position::new(1, 2), Mark::X).is_ok());
        assert_eq!(board.get(Position::new(1, 2)), Some(Mark::X));
        assert_eq!(board.mark_count(), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::from_rows(["X  ", "   ", "   "]);
        let before = board;
        let result = board.place(Position::new(0, 0), Mark::O);
        assert_eq!(result, Err(MoveError::CellOccupied { row: 0, col: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(Position::new(3, 0), Mark::X),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(Position::new(0, 7), Mark::X),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
        assert_eq!(board, Board::new());
        assert_eq!(board.get(Position::new(5, 5)), None);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(["X O", " X ", "O  "]);
        assert_eq!(
            board.empty_cells(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_is_full_matches_empty_cells() {
        let boards = [
            Board::new(),
            Board::from_rows(["XOX", "OXO", "OX "]),
            Board::from_rows(["XOX", "XOO", "OXX"]),
        ];
        for board in boards {
            assert_eq!(board.is_full(), board.empty_cells().is_empty());
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Board::from_rows(["XOX", "O  ", "  X"]);
        board.reset();
        let once = board;
        board.reset();
        assert_eq!(board, once);
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_is_winner_false_on_incomplete_board() {
        let board = Board::from_rows(["XX ", "O  ", "O  "]);
        assert!(!board.is_winner(Mark::X));
        assert!(!board.is_winner(Mark::O));
        assert_eq!(board.terminal_status(), TerminalStatus::None);
    }

    #[test]
    fn test_final_cell_win_reports_win_not_draw() {
        let mut board = Board::from_rows(["XOX", "OXO", "OX "]);
        board.place(Position::new(2, 2), Mark::X).unwrap();
        assert!(board.is_winner(Mark::X));
        assert!(board.is_full());
        assert_eq!(terminal_status(&board), TerminalStatus::HumanWin);
    }

    #[test]
    fn test_final_cell_without_win_is_draw() {
        let mut board = Board::from_rows(["XOX", "XOO", "OX "]);
        assert!(!board.is_winner(Mark::X));
        assert!(!board.is_winner(Mark::O));
        assert_eq!(board.terminal_status(), TerminalStatus::None);

        board.place(Position::new(2, 2), Mark::X).unwrap();
        assert_eq!(board.terminal_status(), TerminalStatus::Draw);
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows(["X O", "   ", "  X"]);
        assert_eq!(board.to_string(), "X.O\n...\n..X");
    }
}
