//! Line protocol for driving the simulation from a text stream.
//!
//! One command per line, whitespace separated:
//!
//! ```text
//! press X Y [touch]
//! move X Y [touch]
//! release X Y [touch]
//! secondary X Y
//! pivot X Y
//! reset
//! resize HALF
//! quit
//! ```
//!
//! Coordinates are screen pixels. Blank lines and lines starting with `#`
//! parse to `None`.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use crate::geometry::Point;
use crate::input::{Gesture, GestureKind, PointerKind};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    Arity { command: &'static str, expected: &'static str },
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("unknown pointer kind `{0}`")]
    Pointer(String),
}

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// A press, move, release or secondary gesture. `at_ms` is filled by the caller.
    Gesture { kind: GestureKind, screen: Point, pointer: PointerKind },
    Pivot(Point),
    Reset,
    Resize(f64),
    Quit,
}

impl Command {
    /// Stamp a gesture command with the current clock.
    #[must_use]
    pub fn into_gesture(self, at_ms: f64) -> Option<Gesture> {
        match self {
            Self::Gesture { kind, screen, pointer } => Some(Gesture::new(kind, screen, pointer, at_ms)),
            Self::Pivot(_) | Self::Reset | Self::Resize(_) | Self::Quit => None,
        }
    }
}

/// Parse one input line.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match head {
        "press" => gesture("press", GestureKind::PrimaryPress, &args)?,
        "move" => gesture("move", GestureKind::PrimaryMove, &args)?,
        "release" => gesture("release", GestureKind::PrimaryRelease, &args)?,
        "secondary" => match args.as_slice() {
            [x, y] => Command::Gesture {
                kind: GestureKind::Secondary,
                screen: Point::new(number(x)?, number(y)?),
                pointer: PointerKind::Mouse,
            },
            _ => return Err(CommandError::Arity { command: "secondary", expected: "X Y" }),
        },
        "pivot" => match args.as_slice() {
            [x, y] => Command::Pivot(Point::new(number(x)?, number(y)?)),
            _ => return Err(CommandError::Arity { command: "pivot", expected: "X Y" }),
        },
        "reset" => no_args("reset", &args, Command::Reset)?,
        "resize" => match args.as_slice() {
            [half] => Command::Resize(number(half)?),
            _ => return Err(CommandError::Arity { command: "resize", expected: "HALF" }),
        },
        "quit" | "exit" => no_args("quit", &args, Command::Quit)?,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn gesture(command: &'static str, kind: GestureKind, args: &[&str]) -> Result<Command, CommandError> {
    let (x, y, pointer) = match args {
        [x, y] => (x, y, PointerKind::Mouse),
        [x, y, p] => (x, y, pointer_kind(p)?),
        _ => return Err(CommandError::Arity { command, expected: "X Y [mouse|touch]" }),
    };
    Ok(Command::Gesture { kind, screen: Point::new(number(x)?, number(y)?), pointer })
}

fn no_args(command: &'static str, args: &[&str], value: Command) -> Result<Command, CommandError> {
    if args.is_empty() { Ok(value) } else { Err(CommandError::Arity { command, expected: "no arguments" }) }
}

fn pointer_kind(raw: &str) -> Result<PointerKind, CommandError> {
    match raw {
        "mouse" => Ok(PointerKind::Mouse),
        "touch" => Ok(PointerKind::Touch),
        other => Err(CommandError::Pointer(other.to_string())),
    }
}

fn number(raw: &str) -> Result<f64, CommandError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CommandError::NotANumber(raw.to_string())),
    }
}
