use std::io::{self, BufRead, Write};

use common::games::tictactoe::{TicTacToeSession, TurnState};
use common::log;

use crate::console::{
    ConsoleCommand, help_text, outcome_message, parse_command, render_board, score_line,
};

enum RoundEnd {
    Finished,
    Quit,
}

/// Plays rounds until the player quits or input runs out.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}", help_text(session.difficulty()))?;

    loop {
        if let RoundEnd::Quit = play_round(session, input, output)? {
            break;
        }

        writeln!(output, "{}", score_line(&session.scoreboard()))?;
        write!(output, "Play again? [y/N] ")?;
        output.flush()?;

        let Some(answer) = read_line(input)? else {
            break;
        };
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            break;
        }
        session.reset();
    }

    writeln!(output, "Goodbye.")?;
    Ok(())
}

fn play_round<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    input: &mut R,
    output: &mut W,
) -> io::Result<RoundEnd> {
    loop {
        if session.turn() == TurnState::Opponent {
            match session.play_opponent_turn() {
                Ok((pos, _)) => writeln!(output, "Opponent plays {}", pos)?,
                Err(e) => {
                    log!("Opponent could not move: {}", e);
                    return Ok(RoundEnd::Finished);
                }
            }
        }

        write!(output, "{}", render_board(session.board()))?;

        if let Some(message) = outcome_message(session.terminal_status()) {
            writeln!(output, "{}", message)?;
            return Ok(RoundEnd::Finished);
        }

        write!(output, "Your move: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(RoundEnd::Quit);
        };

        match parse_command(&line) {
            Ok(ConsoleCommand::Place(pos)) => {
                if let Err(e) = session.apply_human_move(pos) {
                    writeln!(output, "{}", e)?;
                }
            }
            Ok(ConsoleCommand::Help) => {
                writeln!(output, "{}", help_text(session.difficulty()))?
            }
            Ok(ConsoleCommand::Quit) => return Ok(RoundEnd::Quit),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
