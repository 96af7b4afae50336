use crate::content::{CopyTarget, LinkTarget};
use std::fmt;

/// Interactive elements of the page, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    CopyInstall,
    Github,
    Docs,
    CopyCode,
    FooterGithub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAction {
    Copy(CopyTarget),
    Open(LinkTarget),
}

const ORDER: [Focus; 5] = [
    Focus::CopyInstall,
    Focus::Github,
    Focus::Docs,
    Focus::CopyCode,
    Focus::FooterGithub,
];

impl Focus {
    fn index(&self) -> usize {
        ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        ORDER[(self.index() + 1) % ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        ORDER[(self.index() + ORDER.len() - 1) % ORDER.len()]
    }

    pub fn action(&self) -> FocusAction {
        match self {
            Self::CopyInstall => FocusAction::Copy(CopyTarget::Install),
            Self::Github | Self::FooterGithub => FocusAction::Open(LinkTarget::Github),
            Self::Docs => FocusAction::Open(LinkTarget::Docs),
            Self::CopyCode => FocusAction::Copy(CopyTarget::Code),
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action() {
            FocusAction::Copy(target) => write!(f, "{}", target.label()),
            FocusAction::Open(target) => write!(f, "Open {}", target.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut focus = Focus::default();
        for _ in 0..ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::CopyInstall);
        assert_eq!(Focus::FooterGithub.next(), Focus::CopyInstall);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(Focus::CopyInstall.prev(), Focus::FooterGithub);
        assert_eq!(Focus::CopyCode.prev(), Focus::Docs);
    }

    #[test]
    fn test_actions() {
        assert_eq!(Focus::CopyInstall.action(), FocusAction::Copy(CopyTarget::Install));
        assert_eq!(Focus::CopyCode.action(), FocusAction::Copy(CopyTarget::Code));
        assert_eq!(Focus::FooterGithub.action(), Focus::Github.action());
        assert_eq!(Focus::Docs.action(), FocusAction::Open(LinkTarget::Docs));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Focus::CopyInstall), "Copy install command");
        assert_eq!(format!("{}", Focus::Docs), "Open Documentation");
    }
}
