use chrono::{Datelike, Local};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;

pub const PRODUCT_NAME: &str = "Tingly Box";
pub const TAGLINE: &str = "Provider-agnostic AI model proxy with unified API";
pub const INSTALL_COMMAND: &str = "pip install tingly-box";
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/yourusername/tingly-box";

pub const QUICK_START: &str = r#"# Install Tingly Box
pip install tingly-box

# Start the server
tingly-box serve --config config.yaml

# Use with OpenAI client
from openai import OpenAI
client = OpenAI(base_url="http://localhost:8000/v1")"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    #[serde(skip)]
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "≋",
        title: "Multi-Provider Support",
        description: "Connect to OpenAI, Anthropic, Google, and more through a single interface.",
    },
    Feature {
        icon: "↯",
        title: "Unified API",
        description: "OpenAI-compatible API that works with all your existing tools and libraries.",
    },
    Feature {
        icon: "⚙",
        title: "Config-Based Routing",
        description: "Route requests to different providers based on model names and custom rules.",
    },
    Feature {
        icon: "▦",
        title: "Web Management UI",
        description: "Monitor usage, manage API keys, and configure providers through a clean interface.",
    },
];

/// Which payload a copy control carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyTarget {
    /// The one-line install command
    Install,
    /// The quick start code sample
    Code,
}

impl CopyTarget {
    pub fn payload(&self) -> &'static str {
        match self {
            Self::Install => INSTALL_COMMAND,
            Self::Code => QUICK_START,
        }
    }

    /// Accessible name shown in help and status messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Install => "Copy install command",
            Self::Code => "Copy code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Source repository
    Github,
    /// Project documentation
    Docs,
}

impl LinkTarget {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Docs => "Documentation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: String,
}

/// Everything the landing page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub name: &'static str,
    pub tagline: &'static str,
    pub install_command: &'static str,
    pub features: Vec<Feature>,
    pub quick_start: &'static str,
    pub github: Link,
    pub docs: Link,
    pub license: String,
}

impl Page {
    pub fn new(repository_url: &str) -> Self {
        Self::for_year(repository_url, Local::now().year())
    }

    pub fn for_year(repository_url: &str, year: i32) -> Self {
        let repository_url = repository_url.trim_end_matches('/');

        Self {
            name: PRODUCT_NAME,
            tagline: TAGLINE,
            install_command: INSTALL_COMMAND,
            features: FEATURES.to_vec(),
            quick_start: QUICK_START,
            github: Link {
                label: LinkTarget::Github.label(),
                url: repository_url.to_string(),
            },
            docs: Link {
                label: LinkTarget::Docs.label(),
                url: format!("{repository_url}#readme"),
            },
            license: format!("MIT License © {year} {PRODUCT_NAME}"),
        }
    }

    pub fn link(&self, target: LinkTarget) -> &Link {
        match target {
            LinkTarget::Github => &self.github,
            LinkTarget::Docs => &self.docs,
        }
    }

    /// The page as plain text, top to bottom.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}\n", self.name);
        let _ = writeln!(out, "{}\n", self.tagline);
        let _ = writeln!(out, "  $ {}\n", self.install_command);
        let _ = writeln!(out, "  {}: {}", self.github.label, self.github.url);
        let _ = writeln!(out, "  {}: {}\n", self.docs.label, self.docs.url);

        let _ = writeln!(out, "Features\n");
        for feature in &self.features {
            let _ = writeln!(out, "  {} {}", feature.icon, feature.title);
            let _ = writeln!(out, "    {}\n", feature.description);
        }

        let _ = writeln!(out, "Quick Start\n");
        for line in self.quick_start.lines() {
            let _ = writeln!(out, "  {line}");
        }

        let _ = writeln!(out, "\n{}  ·  {}", self.license, self.github.url);
        out
    }
}
