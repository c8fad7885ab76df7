//! Line protocol for driving a game from a terminal or a script.
//!
//! One command per line on the input, replies on the output. Commands:
//! `newgame`, `move e2e4`, `remote e7e5`, `moves e2`, `status`, `board`,
//! `captured`, `undo`, `options`, `setoption name <n> value <v>`, `quit`.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Color, MoveParseError, MoveRecord, Rejected, Square, SquareError};
use crate::sync::Session;

pub mod command;
pub mod options;

use command::{parse_command, Command};
use options::{parse_setoption, ProtocolOptions};

/// Error type for protocol commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command needs an argument that was not given
    MissingArgument { command: &'static str },
    /// Move text could not be parsed
    InvalidMove(MoveParseError),
    /// Square text could not be parsed
    InvalidSquare(SquareError),
    /// The engine refused the move
    Rejected(Rejected),
    /// No move is available to take back
    NothingToUndo,
    /// `setoption` named an option that does not exist
    UnknownOption { name: String },
    /// `setoption` gave a value the option does not accept
    InvalidOptionValue { name: String, value: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument { command } => {
                write!(f, "'{command}' needs an argument")
            }
            CommandError::InvalidMove(e) => write!(f, "{e}"),
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::Rejected(e) => write!(f, "{e}"),
            CommandError::NothingToUndo => write!(f, "No move to take back"),
            CommandError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            CommandError::InvalidOptionValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<MoveParseError> for CommandError {
    fn from(e: MoveParseError) -> Self {
        CommandError::InvalidMove(e)
    }
}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

impl From<Rejected> for CommandError {
    fn from(e: Rejected) -> Self {
        CommandError::Rejected(e)
    }
}

/// Result of processing a protocol command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command processed successfully, with optional output
    Ok(Option<String>),
    /// Command understood but failed; the game is unchanged
    Failed(CommandError),
    /// Driver should quit
    Quit,
    /// Command not recognized
    Unknown(String),
}

/// Parse a move in coordinate form, e.g. "e2e4".
pub fn parse_move(text: &str) -> Result<(Square, Square), MoveParseError> {
    let text = text.trim();
    let len = text.chars().count();
    if len != 4 {
        return Err(MoveParseError::InvalidLength { len });
    }

    let invalid = || MoveParseError::InvalidSquare {
        notation: text.to_string(),
    };
    if !text.is_ascii() {
        return Err(invalid());
    }
    let from = text[..2].parse::<Square>().map_err(|_| invalid())?;
    let to = text[2..].parse::<Square>().map_err(|_| invalid())?;
    Ok((from, to))
}

/// Reply line for an accepted move, e.g. "e4d5 captures Black pawn, check".
#[must_use]
pub fn format_record(record: &MoveRecord) -> String {
    match record.captured {
        Some((color, piece)) => format!("{record} captures {color} {piece}, {}", record.status),
        None => format!("{record}, {}", record.status),
    }
}

/// Command interpreter holding one game session.
#[derive(Debug, Default)]
pub struct Driver {
    session: Session,
    options: ProtocolOptions,
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Driver::default()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn options(&self) -> &ProtocolOptions {
        &self.options
    }

    /// Process a single command line.
    pub fn execute(&mut self, line: &str) -> CommandResult {
        let Some(cmd) = parse_command(line) else {
            return CommandResult::Ok(None);
        };

        match cmd {
            Command::Quit => CommandResult::Quit,
            Command::Unknown(text) => CommandResult::Unknown(text),
            cmd => match self.dispatch(cmd) {
                Ok(reply) => CommandResult::Ok(self.with_outbox(reply)),
                Err(e) => CommandResult::Failed(e),
            },
        }
    }

    fn dispatch(&mut self, cmd: Command) -> Result<Option<String>, CommandError> {
        match cmd {
            Command::NewGame => {
                self.session.reset();
                Ok(None)
            }
            Command::Move(text) => {
                let (from, to) = parse_move(&text.ok_or(missing("move"))?)?;
                let record = self.session.play(from, to)?;
                Ok(Some(self.move_reply(&record)))
            }
            Command::Remote(text) => {
                let (from, to) = parse_move(&text.ok_or(missing("remote"))?)?;
                let record = self.session.receive_move(from, to)?;
                Ok(Some(self.move_reply(&record)))
            }
            Command::Moves(text) => {
                let from = text.ok_or(missing("moves"))?.parse::<Square>()?;
                let dests: Vec<String> = self
                    .session
                    .legal_destinations(from)
                    .iter()
                    .map(Square::to_string)
                    .collect();
                if dests.is_empty() {
                    Ok(Some("(none)".to_string()))
                } else {
                    Ok(Some(dests.join(" ")))
                }
            }
            Command::Status => {
                let game = self.session.game();
                Ok(Some(format!(
                    "{} to move, {}",
                    game.current_player(),
                    game.status()
                )))
            }
            Command::Board => Ok(Some(self.session.game().to_string())),
            Command::Captured => {
                let game = self.session.game();
                let lines: Vec<String> = Color::BOTH
                    .iter()
                    .map(|&color| {
                        let taken: String = game
                            .captured(color)
                            .iter()
                            .map(|&(c, p)| p.glyph(c))
                            .collect();
                        format!("{color}: {taken}")
                    })
                    .collect();
                Ok(Some(lines.join("\n")))
            }
            Command::Undo => {
                let record = self.session.take_back().ok_or(CommandError::NothingToUndo)?;
                Ok(Some(format!("took back {record}")))
            }
            Command::Options => Ok(Some(self.options.describe())),
            Command::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let (name, value) = parse_setoption(&parts).ok_or(missing("setoption"))?;
                self.options.apply_setoption(&name, value.as_deref())?;
                self.session.set_seat(self.options.seat);
                Ok(None)
            }
            Command::Quit | Command::Unknown(_) => Ok(None),
        }
    }

    fn move_reply(&self, record: &MoveRecord) -> String {
        let line = format_record(record);
        if self.options.show_board {
            format!("{line}\n{}", self.session.game())
        } else {
            line
        }
    }

    /// Append one `sent ...` line per message queued for the peer.
    fn with_outbox(&mut self, reply: Option<String>) -> Option<String> {
        let sent: Vec<String> = self
            .session
            .drain_outbox()
            .iter()
            .map(|message| format!("sent {message}"))
            .collect();
        let lines: Vec<String> = reply.into_iter().chain(sent).collect();
        (!lines.is_empty()).then(|| lines.join("\n"))
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                CommandResult::Ok(Some(reply)) => writeln!(output, "{reply}")?,
                CommandResult::Ok(None) => {}
                CommandResult::Failed(e) => writeln!(output, "error: {e}")?,
                CommandResult::Unknown(text) => {
                    writeln!(output, "error: unknown command '{text}'")?;
                }
                CommandResult::Quit => break,
            }
            output.flush()?;
        }
        Ok(())
    }
}

const fn missing(command: &'static str) -> CommandError {
    CommandError::MissingArgument { command }
}

/// Run the protocol over stdin and stdout.
pub fn run_loop() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = Driver::new().run(stdin.lock(), stdout.lock()) {
        eprintln!("Error: {e}");
    }
}
