//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

use crate::models::Platform;

#[derive(Parser)]
#[command(name = "echopulse")]
#[command(about = "Summarize the tone and themes of social media replies")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a narrative summary of the replies
    Summarize {
        #[command(flatten)]
        input: ReplyInput,
    },
    /// Print sentiment counts and top themes
    Analyze {
        #[command(flatten)]
        input: ReplyInput,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Extract the post or video id from a platform URL
    ParseUrl {
        /// Post or video URL
        url: String,
        /// Platform the URL belongs to
        #[arg(short, long, value_enum)]
        platform: Platform,
    },
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (default: from config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (default: from config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable CORS
        #[arg(long)]
        cors: bool,
    },
    /// Show current configuration
    Config,
}

/// Where replies come from; positional replies, a file and stdin are concatenated in that order
#[derive(Args, Debug, Default)]
pub struct ReplyInput {
    /// Reply texts
    pub replies: Vec<String>,
    /// File with one reply per line, or a JSON array of strings
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Read replies from standard input
    #[arg(long)]
    pub stdin: bool,
}
