use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', expected one of: left, right, up, down, plus, minus")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    pub const ALL: &'static [Self] = &[Self::Left, Self::Right, Self::Up, Self::Down];

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl FromStr for PanDirection {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|direction| direction.token() == s)
            .ok_or_else(|| CommandError::Unknown(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// `plus`
    In,
    /// `minus`
    Out,
}

impl ZoomDirection {
    pub const ALL: &'static [Self] = &[Self::In, Self::Out];

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::In => "plus",
            Self::Out => "minus",
        }
    }
}

impl FromStr for ZoomDirection {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|direction| direction.token() == s)
            .ok_or_else(|| CommandError::Unknown(s.to_owned()))
    }
}

/// One navigation step, as issued by a toolbar button or a CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Pan(PanDirection),
    Zoom(ZoomDirection),
}

impl Command {
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Pan(direction) => direction.token(),
            Self::Zoom(direction) => direction.token(),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<PanDirection>()
            .map(Self::Pan)
            .or_else(|_| s.parse::<ZoomDirection>().map(Self::Zoom))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
