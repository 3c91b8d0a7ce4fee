use crate::ops::BitwiseOp;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vecbits")]
#[command(version, about = "Element-wise bitwise operations on random integer vectors", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the random generator (overrides the configuration)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Binary operations to show, comma separated (and, or, xor)
    #[arg(long, value_delimiter = ',')]
    pub ops: Option<Vec<BitwiseOp>>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
