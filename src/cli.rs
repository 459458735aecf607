// CLI definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Reads at most this many bytes unless overridden.
pub const DEFAULT_MAX_SIZE: u64 = 16384;

#[derive(Parser)]
#[command(name = "scdis")]
#[command(author, version, about = "Soarer's Converter config disassembler")]
pub struct Cli {
    /// Binary config file to disassemble
    #[arg(value_name = "BINARY_CONFIG")]
    pub input: PathBuf,

    /// Write the text config here instead of stdout
    #[arg(value_name = "TEXT_CONFIG")]
    pub output: Option<PathBuf>,

    /// Maximum number of bytes read from the input file
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: u64,

    /// Hex-dump the body of unrecognized blocks (default)
    #[arg(long, overrides_with = "no_hex_dump")]
    pub hex_dump: bool,

    /// Don't hex-dump the body of unrecognized blocks
    #[arg(long, overrides_with = "hex_dump")]
    pub no_hex_dump: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether unrecognized blocks get a hex dump; the last flag given wins.
    pub fn hex_dump_enabled(&self) -> bool {
        self.hex_dump || !self.no_hex_dump
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("scdis").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn hex_dump_defaults_on() {
        assert!(parse(&["in.bin"]).hex_dump_enabled());
        assert!(parse(&["in.bin", "--hex-dump"]).hex_dump_enabled());
    }

    #[test]
    fn last_hex_dump_flag_wins() {
        assert!(!parse(&["in.bin", "--no-hex-dump"]).hex_dump_enabled());
        assert!(!parse(&["in.bin", "--hex-dump", "--no-hex-dump"]).hex_dump_enabled());
        assert!(parse(&["in.bin", "--no-hex-dump", "--hex-dump"]).hex_dump_enabled());
    }

    #[test]
    fn max_size_default() {
        let cli = parse(&["in.bin", "out.sc"]);
        assert_eq!(cli.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(cli.output, Some(PathBuf::from("out.sc")));
    }
}
