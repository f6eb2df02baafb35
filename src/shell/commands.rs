// Command enum to represent shell commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Register,
    Login,
    Compact,
    Help,
    Quit,
    Unknown(String),
}

// Parse raw input string into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "register" | "r" => Command::Register,
        "login" | "l" => Command::Login,
        "compact" => Command::Compact,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
