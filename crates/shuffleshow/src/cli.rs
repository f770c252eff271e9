use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::interval::DEFAULT_INTERVAL_TEXT;
use crate::slideshow::ResumeBehavior;

#[derive(Parser)]
#[command(name = "shuffleshow")]
#[command(author, version, about)]
#[command(long_about = "A fullscreen shuffled image slideshow.\n\n\
    Pick a folder, and every png, jpg, gif and bmp below it is shown\n\
    fullscreen in random order.\n\n\
    Keys while the slideshow runs:\n  \
    \u{2190} / \u{2192}    Previous / next image\n  \
    Space    Pause / resume\n  \
    Delete   Delete the current image from disk\n  \
    H        Toggle the HUD\n  \
    Esc      Back to the launcher\n\n\
    Examples:\n  \
    shuffleshow                          Open the launcher\n  \
    shuffleshow ~/Pictures --start       Start right away\n  \
    shuffleshow list ~/Pictures          Print the images that would be shown")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Folder of images (pre-fills the launcher)
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Milliseconds between images (pre-fills the launcher)
    #[arg(long, default_value = DEFAULT_INTERVAL_TEXT)]
    pub interval: String,

    /// Start the slideshow immediately instead of waiting for the Start button
    #[arg(long, requires = "dir")]
    pub start: bool,

    /// Resuming from pause keeps the current image instead of skipping ahead
    #[arg(long)]
    pub resume_in_place: bool,

    /// Seed for the shuffle, for a repeatable order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the images found in a folder without opening a window
    List {
        /// Folder to scan
        dir: PathBuf,

        /// Print in shuffled order
        #[arg(long)]
        shuffle: bool,

        /// Seed for --shuffle
        #[arg(long, requires = "shuffle")]
        seed: Option<u64>,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::List { dir, shuffle, seed }) => {
                crate::commands::list::run(&dir, shuffle, seed, self.quiet)
            }
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("shuffleshow {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                if let Some(dir) = &self.dir {
                    if !dir.exists() {
                        anyhow::bail!("Folder not found: {}", dir.display());
                    }
                }
                let resume = if self.resume_in_place {
                    ResumeBehavior::InPlace
                } else {
                    ResumeBehavior::Advance
                };
                crate::app::run(crate::app::LaunchOptions {
                    directory: self.dir,
                    interval: self.interval,
                    start: self.start,
                    resume,
                    seed: self.seed,
                })
            }
        }
    }
}
