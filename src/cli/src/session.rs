use cube_core::{CubeState, Move, ParseMoveError, parse_sequence};
use log::{debug, info};

/// What the session loop should do after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Owns the cube for an interactive session and feeds it input lines.
pub struct Session {
    initial: CubeState,
    cube: CubeState,
}

impl Session {
    pub fn new(initial: CubeState) -> Self {
        Session {
            cube: initial.clone(),
            initial,
        }
    }

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// Handles one line: a command, a move sequence such as `R U2 R'`, or a
    /// run of key presses such as `ruR`. Nothing is applied if the line
    /// doesn't parse.
    ///
    /// # Errors
    ///
    /// If the line is neither a command, a sequence nor a run of bound keys.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, ParseMoveError> {
        let line = line.trim();

        match line {
            "" => return Ok(Outcome::Continue),
            "quit" | "exit" => return Ok(Outcome::Quit),
            "reset" => {
                self.cube = self.initial.clone();
                info!(target: "session", "Reset the cube");
                return Ok(Outcome::Continue);
            }
            _ => {}
        }

        let moves = match parse_sequence(line) {
            Ok(moves) => moves,
            Err(e) if line.contains(char::is_whitespace) => return Err(e),
            Err(_) => line.chars().map(Move::from_key).collect::<Result<Vec<_>, _>>()?,
        };

        debug!(target: "session", "Applying {} moves", moves.len());
        self.cube.apply_all(moves);

        Ok(Outcome::Continue)
    }
}
