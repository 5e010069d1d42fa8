use super::board::Board;
use super::types::{MoveError, Position, SessionPhase, TerminalStatus, TurnState, WinningLine};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub turn: TurnState,
    pub phase: SessionPhase,
    pub last_move: Option<Position>,
    pub move_count: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: TurnState::Human,
            phase: SessionPhase::AwaitingHumanMove,
            last_move: None,
            move_count: 0,
        }
    }

    /// Places the mark of `turn` at `pos`. Rejected moves leave the state untouched.
    pub fn place_mark(
        &mut self,
        turn: TurnState,
        pos: Position,
    ) -> Result<TerminalStatus, MoveError> {
        if self.phase.is_terminal() {
            return Err(MoveError::GameOver);
        }

        if turn != self.turn {
            return Err(MoveError::NotYourTurn);
        }

        self.board.place(pos, turn.mark())?;
        self.last_move = Some(pos);
        self.move_count += 1;

        let status = self.check_game_over();

        if !status.is_over() {
            self.switch_turn();
        }

        Ok(status)
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.next();
        self.phase = match self.turn {
            TurnState::Human => SessionPhase::AwaitingHumanMove,
            TurnState::Opponent => SessionPhase::AwaitingOpponentMove,
        };
    }

    fn check_game_over(&mut self) -> TerminalStatus {
        let status = self.board.terminal_status();
        match status {
            TerminalStatus::HumanWin => self.phase = SessionPhase::HumanWon,
            TerminalStatus::OpponentWin => self.phase = SessionPhase::OpponentWon,
            TerminalStatus::Draw => self.phase = SessionPhase::Drawn,
            TerminalStatus::None => {}
        }
        status
    }

    pub fn terminal_status(&self) -> TerminalStatus {
        match self.phase {
            SessionPhase::HumanWon => TerminalStatus::HumanWin,
            SessionPhase::OpponentWon => TerminalStatus::OpponentWin,
            SessionPhase::Drawn => TerminalStatus::Draw,
            SessionPhase::AwaitingHumanMove | SessionPhase::AwaitingOpponentMove => {
                TerminalStatus::None
            }
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.phase {
            SessionPhase::HumanWon | SessionPhase::OpponentWon => self.board.winning_line(),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = TurnState::Human;
        self.phase = SessionPhase::AwaitingHumanMove;
        self.last_move = None;
        self.move_count = 0;
    }
}
