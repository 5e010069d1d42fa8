use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{
    Difficulty, MoveError, Position, SessionPhase, TerminalStatus, TurnState, WinningLine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, status: TerminalStatus) {
        match status {
            TerminalStatus::HumanWin => self.human_wins += 1,
            TerminalStatus::OpponentWin => self.opponent_wins += 1,
            TerminalStatus::Draw => self.draws += 1,
            TerminalStatus::None => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.human_wins + self.opponent_wins + self.draws
    }
}

/// One human-versus-computer play session at a fixed difficulty.
///
/// The human always plays `X` and moves first in every round. Rounds end on a
/// win or a draw, after which only [`TicTacToeSession::reset`] unfreezes the board.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
    scoreboard: Scoreboard,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        let rng = SessionRng::from_optional_seed(settings.seed);
        log!(
            "New session: difficulty={}, intermediate_depth={}, seed={}",
            settings.difficulty,
            settings.intermediate_depth,
            rng.seed()
        );
        Self {
            state: TicTacToeGameState::new(),
            settings,
            rng,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn new_session(difficulty: Difficulty) -> Self {
        Self::new(TicTacToeSessionSettings::with_difficulty(difficulty))
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn turn(&self) -> TurnState {
        self.state.turn
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn last_move(&self) -> Option<Position> {
        self.state.last_move
    }

    pub fn move_count(&self) -> usize {
        self.state.move_count
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn terminal_status(&self) -> TerminalStatus {
        self.state.terminal_status()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line()
    }

    pub fn apply_human_move(&mut self, pos: Position) -> Result<TerminalStatus, MoveError> {
        self.apply_move(TurnState::Human, pos)
    }

    pub fn apply_opponent_move(&mut self, pos: Position) -> Result<TerminalStatus, MoveError> {
        self.apply_move(TurnState::Opponent, pos)
    }

    fn apply_move(&mut self, turn: TurnState, pos: Position) -> Result<TerminalStatus, MoveError> {
        let status = self.state.place_mark(turn, pos)?;
        log!("{:?} placed {} at {}", turn, turn.mark().symbol(), pos);

        if status.is_over() {
            self.scoreboard.record(status);
            log!(
                "Round over: {:?} after {} moves (human {} / opponent {} / draws {})",
                status,
                self.state.move_count,
                self.scoreboard.human_wins,
                self.scoreboard.opponent_wins,
                self.scoreboard.draws
            );
        }

        Ok(status)
    }

    /// Searches for the opponent's reply without applying it. Returns `None`
    /// unless the opponent is to move.
    pub fn compute_opponent_move(&mut self) -> Option<Position> {
        if self.state.phase != SessionPhase::AwaitingOpponentMove {
            return None;
        }

        let input = BotInput::new(&mut self.state.board, self.settings.intermediate_depth);
        calculate_move(self.settings.difficulty, input, &mut self.rng)
    }

    pub fn play_opponent_turn(&mut self) -> Result<(Position, TerminalStatus), MoveError> {
        let pos = match self.compute_opponent_move() {
            Some(pos) => pos,
            None if self.state.phase.is_terminal() => return Err(MoveError::GameOver),
            None => return Err(MoveError::NotYourTurn),
        };
        let status = self.apply_opponent_move(pos)?;
        Ok((pos, status))
    }

    /// Clears the board for a new round. Difficulty and score carry over.
    pub fn reset(&mut self) {
        self.state.reset();
        log!("Board reset, round {}", self.scoreboard.rounds() + 1);
    }
}
