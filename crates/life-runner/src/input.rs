//! Line-based command surface on stdin.

use std::io::BufRead;

use crossbeam_channel::Sender;
use life_lifecycle::Command;
use thiserror::Error;
use tracing::{info, warn};

/// A parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', type 'help' for commands")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{0}' is not a non-negative integer")]
    InvalidNumber(String),

    #[error("'{command}' takes no argument '{extra}'")]
    UnexpectedArgument {
        command: &'static str,
        extra: String,
    },

    #[error("too many arguments: '{0}'")]
    TooManyArguments(String),
}

pub const HELP: &[&str] = &[
    "Commands:",
    "  delay <ms>    - Set the frame delay",
    "  seed [n]      - Restart the field, seeded with n if given",
    "  test          - Run the row/column sweep",
    "  dot           - Run the single-dot sweep",
    "  reset         - Restart the device",
    "  q, quit       - Quit",
    "  help          - Show this help",
];

pub fn parse_command(line: &str) -> Result<Input, ParseCommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseCommandError::Empty);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(ParseCommandError::TooManyArguments(line.trim().to_owned()));
    }

    let input = match head.to_ascii_lowercase().as_str() {
        "delay" => {
            let ms = arg.ok_or(ParseCommandError::MissingArgument {
                command: "delay",
                what: "a delay in milliseconds",
            })?;
            Input::Command(Command::SetDelay(parse_number(ms)?))
        }
        "seed" | "restart" => {
            Input::Command(Command::Reseed(arg.map(parse_number).transpose()?))
        }
        "test" => no_argument("test", arg, Command::RequestTest)?,
        "dot" => no_argument("dot", arg, Command::RunDot)?,
        "reset" => no_argument("reset", arg, Command::HardReset)?,
        "q" | "quit" | "exit" => no_argument("quit", arg, Command::Shutdown)?,
        "h" | "help" | "?" => Input::Help,
        other => return Err(ParseCommandError::Unknown(other.to_owned())),
    };
    Ok(input)
}

fn parse_number(text: &str) -> Result<u64, ParseCommandError> {
    text.parse()
        .map_err(|_| ParseCommandError::InvalidNumber(text.to_owned()))
}

fn no_argument(
    command: &'static str,
    arg: Option<&str>,
    parsed: Command,
) -> Result<Input, ParseCommandError> {
    match arg {
        None => Ok(Input::Command(parsed)),
        Some(extra) => Err(ParseCommandError::UnexpectedArgument {
            command,
            extra: extra.to_owned(),
        }),
    }
}

/// Forward parsed commands until stdin closes or the scheduler goes away.
pub fn input_thread(input: impl BufRead, tx: Sender<Command>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Input::Command(command)) => {
                if tx.send(command).is_err() {
                    break;
                }
            }
            Ok(Input::Help) => {
                for line in HELP {
                    info!("{}", line);
                }
            }
            Err(ParseCommandError::Empty) => {}
            Err(e) => warn!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crossbeam_channel::unbounded;

    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("delay 250"),
            Ok(Input::Command(Command::SetDelay(250)))
        );
        assert_eq!(
            parse_command("  SEED 42 "),
            Ok(Input::Command(Command::Reseed(Some(42))))
        );
        assert_eq!(
            parse_command("seed"),
            Ok(Input::Command(Command::Reseed(None)))
        );
        assert_eq!(
            parse_command("test"),
            Ok(Input::Command(Command::RequestTest))
        );
        assert_eq!(parse_command("dot"), Ok(Input::Command(Command::RunDot)));
        assert_eq!(
            parse_command("reset"),
            Ok(Input::Command(Command::HardReset))
        );
        assert_eq!(parse_command("q"), Ok(Input::Command(Command::Shutdown)));
        assert_eq!(parse_command("help"), Ok(Input::Help));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_command("   "), Err(ParseCommandError::Empty));
        assert_eq!(
            parse_command("delay"),
            Err(ParseCommandError::MissingArgument {
                command: "delay",
                what: "a delay in milliseconds"
            })
        );
        assert_eq!(
            parse_command("delay fast"),
            Err(ParseCommandError::InvalidNumber("fast".into()))
        );
        assert_eq!(
            parse_command("delay -5"),
            Err(ParseCommandError::InvalidNumber("-5".into()))
        );
        assert_eq!(
            parse_command("test now"),
            Err(ParseCommandError::UnexpectedArgument {
                command: "test",
                extra: "now".into()
            })
        );
        assert_eq!(
            parse_command("seed 1 2"),
            Err(ParseCommandError::TooManyArguments("seed 1 2".into()))
        );
        assert_eq!(
            parse_command("explode"),
            Err(ParseCommandError::Unknown("explode".into()))
        );
    }

    #[test]
    fn input_thread_forwards_valid_lines() {
        let (tx, rx) = unbounded();
        let stdin = Cursor::new("delay 10\nbogus\n\nhelp\ntest\n");

        input_thread(stdin, tx);

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![Command::SetDelay(10), Command::RequestTest]
        );
    }
}
