use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

pub const HUMAN_MARK: Mark = Mark::X;
pub const OPPONENT_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Intermediate,
    #[default]
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Human,
    Opponent,
}

impl TurnState {
    pub fn mark(&self) -> Mark {
        match self {
            TurnState::Human => HUMAN_MARK,
            TurnState::Opponent => OPPONENT_MARK,
        }
    }

    pub fn next(&self) -> TurnState {
        match self {
            TurnState::Human => TurnState::Opponent,
            TurnState::Opponent => TurnState::Human,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStatus {
    None,
    HumanWin,
    OpponentWin,
    Draw,
}

impl TerminalStatus {
    pub fn is_over(&self) -> bool {
        *self != TerminalStatus::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingHumanMove,
    AwaitingOpponentMove,
    HumanWon,
    OpponentWon,
    Drawn,
}

impl SessionPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionPhase::HumanWon | SessionPhase::OpponentWon | SessionPhase::Drawn
        )
    }
}

/// Score plus the move that produced it. `position` is `None` at leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub position: Option<Position>,
}

impl SearchResult {
    pub fn leaf(score: i32) -> Self {
        Self {
            score,
            position: None,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Position ({row}, {col}) is out of bounds")]
    OutOfRange { row: usize, col: usize },
    #[error("Cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },
    #[error("Game is already over")]
    GameOver,
    #[error("Not your turn")]
    NotYourTurn,
}
