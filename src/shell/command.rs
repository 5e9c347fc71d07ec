//! Shell command parsing.

use std::str::FromStr;
use thiserror::Error;

/// A line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate to a route (`go /invoices`).
    Go(String),
    /// Simulate the address bar changing underneath the app (`hash #/clients`).
    Hash(String),
    Login,
    Logout,
    /// Print the current route, page and session.
    Where,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("`{0}` needs a route argument")]
    MissingArgument(&'static str),

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word {
            "" => Err(CommandError::Empty),
            "go" | "navigate" if rest.is_empty() => Err(CommandError::MissingArgument("go")),
            "go" | "navigate" => Ok(Command::Go(rest.to_string())),
            // An empty fragment is valid: it means the root route.
            "hash" => Ok(Command::Hash(rest.to_string())),
            "login" => Ok(Command::Login),
            "logout" => Ok(Command::Logout),
            "where" | "status" => Ok(Command::Where),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            // A bare route is shorthand for `go`.
            route if route.starts_with('/') || route.starts_with('#') => Ok(Command::Go(line.to_string())),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  go <route>      navigate to a route (a bare /route works too)
  hash <fragment> change the location as if the address bar changed
  login | logout  change the session flag (does not navigate)
  where           show route, page and session
  quit            exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("go /invoices".parse::<Command>(), Ok(Command::Go("/invoices".into())));
        assert_eq!("  /clients/new ".parse::<Command>(), Ok(Command::Go("/clients/new".into())));
        assert_eq!("hash #/reports".parse::<Command>(), Ok(Command::Hash("#/reports".into())));
        assert_eq!("hash".parse::<Command>(), Ok(Command::Hash(String::new())));
        assert_eq!("login".parse::<Command>(), Ok(Command::Login));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("go".parse::<Command>(), Err(CommandError::MissingArgument("go")));
        assert_eq!("fly".parse::<Command>(), Err(CommandError::Unknown("fly".into())));
    }
}
