use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,         // copy icon
    Acknowledged, // check icon
}

impl CopyState {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Idle => "⧉",
            Self::Acknowledged => "✓",
        }
    }

    pub fn is_acknowledged(&self) -> bool {
        matches!(self, Self::Acknowledged)
    }
}

impl fmt::Display for CopyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "copy"),
            Self::Acknowledged => write!(f, "copied"),
        }
    }
}

/// How a single activation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    /// The write finished after the control was torn down.
    Discarded,
}
