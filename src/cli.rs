use clap::Parser;
use std::path::PathBuf;

use crate::logger::LogMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Input files to search
    inputs: Vec<PathBuf>,

    /// Fetch this URL as an additional haystack
    #[arg(short, long)]
    url: Option<String>,

    /// Comma-separated anchor sequence to walk
    #[arg(short, long, value_delimiter = ',')]
    walk: Option<Vec<String>>,

    /// Seed substring; extracts the enclosing tag's content
    #[arg(short, long)]
    find: Option<String>,

    /// Extract the value attribute paired with this name attribute
    #[arg(short, long)]
    get_value: Option<String>,

    /// Apply the HTML cleanup preset before extracting
    #[arg(short, long)]
    clean: bool,

    /// Repeat the walk/find to exhaustion, printing every match
    #[arg(short, long)]
    repeat: bool,

    /// Include the delimiting anchors/tags in matches
    #[arg(short, long)]
    inclusive: bool,

    /// Byte offset to start searching from
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    #[arg(long, value_enum)]
    log_mode: Option<LogMode>,
}

#[derive(Debug)]
pub struct Args {
    pub inputs: Vec<PathBuf>,
    pub url: Option<String>,
    pub walk: Option<Vec<String>>,
    pub find: Option<String>,
    pub get_value: Option<String>,
    pub clean: bool,
    pub repeat: bool,
    pub inclusive: bool,
    pub start: usize,
    pub log_mode: Option<LogMode>,
}

pub fn parse() -> Args {
    let cli = CliArgs::parse();

    Args {
        inputs: cli.inputs,
        url: cli.url,
        walk: cli.walk,
        find: cli.find,
        get_value: cli.get_value,
        clean: cli.clean,
        repeat: cli.repeat,
        inclusive: cli.inclusive,
        start: cli.start,
        log_mode: cli.log_mode,
    }
}
