use crate::content::{CopyTarget, LinkTarget};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tingly-landing")]
#[command(version)]
#[command(about = "The Tingly Box landing page, in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the page to stdout
    Show {
        /// Emit the page content as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy the install command or the quick start code to the clipboard
    Copy {
        #[arg(value_enum)]
        target: CopyTarget,
    },
    /// Open a project link in the default browser
    Open {
        #[arg(value_enum)]
        target: LinkTarget,
    },
}
