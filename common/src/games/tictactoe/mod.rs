mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, terminal_status};
pub use bot_controller::{
    BotInput, DEFAULT_INTERMEDIATE_DEPTH, calculate_minimax_move, calculate_move, minimax_search,
};
pub use game_state::TicTacToeGameState;
pub use session::{Scoreboard, TicTacToeSession};
pub use settings::TicTacToeSessionSettings;
pub use types::{
    BOARD_SIZE, Difficulty, HUMAN_MARK, Mark, MoveError, OPPONENT_MARK, Position, SearchResult,
    SessionPhase, TerminalStatus, TurnState, WinningLine,
};
pub use win_detector::{LINES, check_win, check_win_with_line};
