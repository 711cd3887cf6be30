//! Shared types used across benchrun.
//! Includes `OutlierMode` (the only enum-valued option) and `Platform`,
//! the shell-style predicate that example rendering and path checks depend on.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which outliers the statistics engine removes before summarizing.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
pub enum OutlierMode {
    #[value(name = "None")]
    None,
    #[value(name = "OnlyUpper")]
    #[default]
    OnlyUpper,
    #[value(name = "OnlyLower")]
    OnlyLower,
    #[value(name = "All")]
    All,
}

impl OutlierMode {
    /// Case-insensitive exact lookup of a member name.
    pub fn parse(input: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(input, true).ok()
    }

    pub fn name(self) -> &'static str {
        match self {
            OutlierMode::None => "None",
            OutlierMode::OnlyUpper => "OnlyUpper",
            OutlierMode::OnlyLower => "OnlyLower",
            OutlierMode::All => "All",
        }
    }
}

impl std::fmt::Display for OutlierMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shell convention of the host the tool runs on. `Platform::current()`
/// resolves it from the build target; everything else takes it as a value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// True when an unquoted `*` would be expanded by the shell.
    pub fn is_posix_shell(self) -> bool {
        matches!(self, Platform::Posix)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::current()
    }
}
