//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("TSYNC_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TSYNC_BUILD_DATE"),
    ")"
);

/// Keep a lecture transcript in step with video playback
#[derive(Parser, Debug)]
#[command(name = "tsync", author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Log sync cycles and requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the subtitle tracks of a stream or of local files
    Tracks {
        #[command(flatten)]
        tracks: TrackArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download the subtitle files a stream offers
    Fetch {
        /// Stream ID on the lecture platform
        stream_id: u64,

        /// Directory to save `<language>.vtt` files into
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Write the transcript of the selected track to transcript.txt
    Export {
        #[command(flatten)]
        tracks: TrackArgs,

        /// Preferred track label (falls back to the first caption track)
        #[arg(short, long)]
        label: Option<String>,

        /// Directory to write transcript.txt into
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Play back on a wall clock and print the active cue as it changes
    Follow {
        #[command(flatten)]
        tracks: TrackArgs,

        /// Preferred track label (falls back to the first caption track)
        #[arg(short, long)]
        label: Option<String>,

        /// Start position in seconds
        #[arg(long, default_value_t = 0.0)]
        start: f64,

        /// Playback speed multiplier
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
    },

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Where tracks come from: a platform stream or local subtitle files.
#[derive(Args, Debug, Clone)]
pub struct TrackArgs {
    /// Stream ID on the lecture platform
    #[arg(long, value_name = "ID", conflicts_with = "files")]
    pub stream: Option<u64>,

    /// Local .vtt/.srt files; `en.vtt` is labelled English, `de.vtt` Deutsch
    #[arg(value_name = "FILE", required_unless_present = "stream")]
    pub files: Vec<PathBuf>,
}
