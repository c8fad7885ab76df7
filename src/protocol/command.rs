#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Move(Option<String>),
    Remote(Option<String>),
    Moves(Option<String>),
    Status,
    Board,
    Captured,
    Undo,
    Options,
    SetOption(Vec<String>),
    Quit,
    Unknown(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let (&head, rest) = parts.split_first()?;

    let arg = || rest.first().map(|v| (*v).to_string());

    let cmd = match head {
        "newgame" | "reset" => Command::NewGame,
        "move" => Command::Move(arg()),
        "remote" => Command::Remote(arg()),
        "moves" => Command::Moves(arg()),
        "status" => Command::Status,
        "board" | "d" => Command::Board,
        "captured" => Command::Captured,
        "undo" => Command::Undo,
        "options" => Command::Options,
        "setoption" => Command::SetOption(parts.iter().map(|p| (*p).to_string()).collect()),
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
