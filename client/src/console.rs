use common::games::tictactoe::{
    BOARD_SIZE, Board, Difficulty, Position, Scoreboard, TerminalStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Place(Position),
    Help,
    Quit,
}

/// Accepts `row col`, `row,col`, `help` and `quit`. Range checks are left to
/// the engine so out-of-range coordinates still reach it.
pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Err("Enter a move as `row col`".to_string()),
        "q" | "quit" | "exit" => return Ok(ConsoleCommand::Quit),
        "h" | "help" | "?" => return Ok(ConsoleCommand::Help),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() != 2 {
        return Err(format!("Expected two numbers, got `{}`", trimmed));
    }

    let row = parts[0]
        .parse::<usize>()
        .map_err(|_| format!("Invalid row `{}`", parts[0]))?;
    let col = parts[1]
        .parse::<usize>()
        .map_err(|_| format!("Invalid column `{}`", parts[1]))?;

    Ok(ConsoleCommand::Place(Position::new(row, col)))
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {}", col));
    }
    out.push('\n');

    for (row, cells) in board.cells().iter().enumerate() {
        out.push_str(&format!(" {} ", row));
        for cell in cells {
            out.push(' ');
            out.push(cell.symbol());
        }
        out.push('\n');
    }
    out
}

pub fn outcome_message(status: TerminalStatus) -> Option<&'static str> {
    match status {
        TerminalStatus::HumanWin => Some("You win!"),
        TerminalStatus::OpponentWin => Some("Opponent wins!"),
        TerminalStatus::Draw => Some("It's a draw!"),
        TerminalStatus::None => None,
    }
}

pub fn score_line(scoreboard: &Scoreboard) -> String {
    format!(
        "Score: you {} / opponent {} / draws {}",
        scoreboard.human_wins, scoreboard.opponent_wins, scoreboard.draws
    )
}

pub fn help_text(difficulty: Difficulty) -> String {
    format!(
        "You are X, the {} opponent is O. Type `row col` (0-{}) to place a mark, `quit` to leave.",
        difficulty,
        BOARD_SIZE - 1
    )
}
