use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

use crate::DEFAULT_ALPHABET;

/// Partition count used when none is given.
pub const DEFAULT_PARTITIONS: usize = 8;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}
impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}
impl Verbosity {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sequential or partitioned codec
pub enum Mode {
    Sequential,
    Parallel,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the input file is split into symbols
pub enum InputKind {
    /// UTF-8 text, one symbol per character
    Text,
    /// Raw bytes, one symbol per byte
    Bytes,
}
impl Display for InputKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define all user settable options to control program behavior
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Name of the file to read for input
    pub file: Option<String>,
    /// Sequential or partitioned codec
    pub op_mode: Mode,
    /// Number of partitions for the partitioned codec
    pub partitions: usize,
    /// Number of symbols in the alphabet
    pub alphabet: usize,
    /// How the input is turned into symbols
    pub input: InputKind,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    /// Set default parameters on program start
    pub fn new() -> Self {
        Self {
            file: None,
            op_mode: Mode::Parallel,
            partitions: DEFAULT_PARTITIONS,
            alphabet: DEFAULT_ALPHABET,
            input: InputKind::Text,
            verbose: Verbosity::Info,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        opts.file = Some(args.filename);
        if args.sequential {
            opts.op_mode = Mode::Sequential
        };
        opts.partitions = args.partitions;
        opts.alphabet = args.alphabet;
        if args.bytes {
            opts.input = InputKind::Bytes
        };
        opts.verbose = Verbosity::from(args.v);
        opts
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman coding with a partitioned parallel codec",
    long_about = "
    Reads a file, builds a Huffman code from its symbol frequencies, encodes it, decodes it
    again and checks that nothing changed. Reports the compressed size and how long each
    phase took.

    By default the input is split into partitions that are encoded and decoded concurrently
    against one shared code."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: String,

    /// Use the sequential codec instead of the partitioned one
    #[clap(short = 's', long = "sequential")]
    sequential: bool,

    /// Number of partitions for the partitioned codec
    #[clap(short = 'p', long = "partitions", default_value_t = DEFAULT_PARTITIONS)]
    partitions: usize,

    /// Number of symbols in the alphabet
    #[clap(short = 'a', long = "alphabet", default_value_t = DEFAULT_ALPHABET)]
    alphabet: usize,

    /// Treat the input as raw bytes instead of UTF-8 text
    #[clap(short = 'b', long = "bytes")]
    bytes: bool,

    /// Sets verbosity. -v1 shows very little, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Parse the command line, set the log level, and report the settings.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("---- Huffpar Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("No input file given"),
    }
    info!("Reading input as {}", opts.input);
    info!("Alphabet size set to {}", opts.alphabet);
    if opts.op_mode == Mode::Parallel {
        info!("Partitions set to {}", opts.partitions)
    };
    info!("---- Huffpar Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_test() {
        let opts = HuffOpts::from(Args::try_parse_from(["huffpar", "tale.txt"]).unwrap());
        assert_eq!(opts.file.as_deref(), Some("tale.txt"));
        assert_eq!(opts.op_mode, Mode::Parallel);
        assert_eq!(opts.partitions, 8);
        assert_eq!(opts.alphabet, 256);
        assert_eq!(opts.input, InputKind::Text);
        assert_eq!(opts.verbose, Verbosity::Info);
    }

    #[test]
    fn flags_test() {
        let args = Args::try_parse_from([
            "huffpar", "-s", "-p", "3", "-a", "65536", "-b", "-v", "5", "bible.txt",
        ])
        .unwrap();
        let opts = HuffOpts::from(args);
        assert_eq!(opts.op_mode, Mode::Sequential);
        assert_eq!(opts.partitions, 3);
        assert_eq!(opts.alphabet, 65536);
        assert_eq!(opts.input, InputKind::Bytes);
        assert_eq!(opts.verbose, Verbosity::Trace);
        assert_eq!(opts.verbose.level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn missing_file_test() {
        assert!(Args::try_parse_from(["huffpar"]).is_err());
    }

    #[test]
    fn verbosity_test() {
        assert_eq!(Verbosity::from(0).level_filter(), log::LevelFilter::Off);
        assert_eq!(Verbosity::from(2).level_filter(), log::LevelFilter::Warn);
        assert_eq!(Verbosity::from(9), Verbosity::Trace);
    }
}
