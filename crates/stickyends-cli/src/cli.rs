use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stickyends::core::models::ends::EndType;
use stickyends::engine::config::MismatchModel;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "stickyends - Nearest-neighbor free energies for DNA tile sticky ends, including mismatched and register-shifted pairings.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score arbitrary pairs of ends, searching every register for the most stable alignment.
    Mismatch(MismatchArgs),
    /// Score fully complementary pairs of ends as matched duplexes.
    Matched(MatchedArgs),
}

/// Where the sequences to score come from.
#[derive(Args, Debug)]
pub struct PairInput {
    /// End type shared by every sequence.
    #[arg(short = 't', long, value_name = "DT|TD")]
    pub end_type: EndType,

    /// A pair of ends to score, written as SEQ1,SEQ2. Can be used multiple times.
    #[arg(short, long = "pair", value_name = "SEQ1,SEQ2")]
    pub pairs: Vec<String>,

    /// Read pairs from a file, one whitespace-separated pair per line. '#' starts a comment.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Options controlling the energy model. CLI values override the config file.
#[derive(Args, Debug, Default)]
pub struct EnergeticsArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the mismatch model ('dangle', 'loop' or 'max').
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<MismatchModel>,

    /// Override the temperature in °C.
    #[arg(long, value_name = "FLOAT")]
    pub temperature: Option<f64>,

    /// Override the nearest-neighbor parameter file.
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Override `energetics.coaxial-stacking` from the config file.
    #[command(flatten)]
    pub coaxial_stacking: CoaxialStacking,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S energetics.coaxial-stacking=true
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// A group to handle mutually exclusive boolean flags for coaxial stacking.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct CoaxialStacking {
    /// Apply the coaxial stacking correction at the junction.
    #[arg(long)]
    pub coax: bool,
    /// Do not apply the coaxial stacking correction.
    #[arg(long)]
    pub no_coax: bool,
}

impl CoaxialStacking {
    pub fn as_option(&self) -> Option<bool> {
        if self.coax {
            Some(true)
        } else if self.no_coax {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for the `mismatch` subcommand.
#[derive(Args, Debug)]
pub struct MismatchArgs {
    #[command(flatten)]
    pub input: PairInput,

    #[command(flatten)]
    pub energetics: EnergeticsArgs,

    /// Score this end against every listed end instead of scoring pairs.
    /// Ends are taken from positional arguments and from every token of --input.
    #[arg(short, long, value_name = "SEQ", conflicts_with = "pairs")]
    pub against: Option<String>,

    /// Ends to score against the --against sequence.
    #[arg(value_name = "SEQ", requires = "against")]
    pub ends: Vec<String>,
}

/// Arguments for the `matched` subcommand.
#[derive(Args, Debug)]
pub struct MatchedArgs {
    #[command(flatten)]
    pub input: PairInput,

    #[command(flatten)]
    pub energetics: EnergeticsArgs,
}
