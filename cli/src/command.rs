use std::str::FromStr;

pub const HELP: &str = "\
commands:
  add <title>   add a todo (plain `add` resubmits the pending title)
  toggle <n>    flip todo number n between done and not done
  delete <n>    delete todo number n
  refresh       reload the list
  help          show this message
  quit          exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `None` resubmits whatever title is still pending.
    Add(Option<String>),
    Toggle(usize),
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}, type `help`")]
    Unknown(String),
    #[error("`{0}` needs a todo number")]
    MissingIndex(&'static str),
    #[error("{0:?} is not a todo number")]
    BadIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word {
            "" => Err(CommandError::Empty),
            "add" | "a" => Ok(Command::Add((!rest.is_empty()).then(|| rest.to_string()))),
            "toggle" | "t" => index("toggle", rest).map(Command::Toggle),
            "delete" | "rm" | "d" => index("delete", rest).map(Command::Delete),
            "refresh" | "r" | "ls" => Ok(Command::Refresh),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Parse a 1-based position as shown in the rendered list.
fn index(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingIndex(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadIndex(arg.to_string())),
    }
}
