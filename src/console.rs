//! Line-oriented console front end.
//!
//! Reads a FEN, then moves and commands, one per line, printing the board
//! after each change. Errors are reported and the loop carries on.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::position::Position;
use crate::session::{GameSession, SessionError};

const FEN_PROMPT: &str = "\nEnter FEN position (or 'exit' to quit):";
const MOVE_PROMPT: &str = "\nEnter move or:\n\
- 'fen' to input new position\n\
- 'board' to show current position\n\
- 'exit' to quit";

/// Run the console loop until `exit` or end of input.
pub fn run_console<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<()> {
    let mut session = GameSession::new();
    let mut lines = input.lines();

    loop {
        if !session.is_active() {
            writeln!(out, "{FEN_PROMPT}")?;
            out.flush()?;
            let Some(line) = lines.next() else { break };
            let line = line?;
            let fen = line.trim();
            if fen.eq_ignore_ascii_case("exit") {
                break;
            }

            match session.load_fen(fen) {
                Ok(position) => {
                    writeln!(out, "\nCurrent position:")?;
                    print_board(&mut out, position)?;
                }
                Err(e) => {
                    debug!("console rejected FEN {fen:?}: {e:?}");
                    writeln!(out, "Invalid FEN")?;
                    continue;
                }
            }
        }

        writeln!(out, "{MOVE_PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();

        match input.to_ascii_lowercase().as_str() {
            "exit" => break,
            "fen" => {
                session.clear();
                continue;
            }
            "board" => {
                if let Some(position) = session.position() {
                    print_board(&mut out, position)?;
                    writeln!(out, "Current FEN: {position}")?;
                }
                continue;
            }
            _ => {}
        }

        if input.chars().count() != 4 {
            writeln!(out, "Moves are four characters, e.g. 'e2e4'")?;
            continue;
        }

        match session.make_move(input) {
            Ok(_) => {
                if let Some(position) = session.position() {
                    writeln!(out, "Move done, new position:")?;
                    print_board(&mut out, position)?;
                    writeln!(out, "New FEN: {position}")?;
                }
            }
            Err(SessionError::InvalidMove(e)) => {
                writeln!(out, "Error making move ({e})! Try again.")?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    writeln!(out, "bye!")?;
    out.flush()
}

fn print_board<W: Write>(out: &mut W, position: &Position) -> io::Result<()> {
    writeln!(out, "{}", position.render_ascii())
}
