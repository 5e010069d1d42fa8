use super::board::Board;
use super::types::{Mark, Position, WinningLine};

/// Every row, column and diagonal of the 3x3 grid, as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn line_is(cells: &[[Mark; 3]; 3], line: &[(usize, usize); 3], mark: Mark) -> bool {
    line.iter().all(|&(row, col)| cells[row][col] == mark)
}

pub fn has_line(cells: &[[Mark; 3]; 3], mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES.iter().any(|line| line_is(cells, line, mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_line(board.cells(), mark))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for mark in [Mark::X, Mark::O] {
        for line in &LINES {
            if line_is(board.cells(), line, mark) {
                let (start_row, start_col) = line[0];
                let (end_row, end_col) = line[2];
                return Some(WinningLine::new(
                    mark,
                    Position::new(start_row, start_col),
                    Position::new(end_row, end_col),
                ));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_is_detected() {
        for line in &LINES {
            let mut board = Board::new();
            for &(row, col) in line {
                board.place(Position::new(row, col), Mark::O).unwrap();
            }
            assert_eq!(check_win(&board), Some(Mark::O));
            assert!(!board.is_winner(Mark::X));
        }
    }

    #[test]
    fn test_winning_line_reports_endpoints() {
        let board = Board::from_rows(["O X", "XO ", "X O"]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 2));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = Board::from_rows(["  X", " X ", "X  "]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_no_winner_on_incomplete_board() {
        let board = Board::from_rows(["XX ", "OO ", "   "]);
        assert_eq!(check_win(&board), None);
        assert_eq!(check_win_with_line(&board), None);
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let board = Board::new();
        assert!(!has_line(board.cells(), Mark::Empty));
    }
}
