//! OxiPack CLI - integer array compression
//!
//! Compresses arrays of 32-bit integers (posting lists, sorted ids, sensor
//! readings) into self-describing OxiPack envelopes and back.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{
    CompressOptions, SchemeArg, cmd_bench, cmd_compress, cmd_decompress, cmd_info, cmd_test,
};
use log::LevelFilter;
use std::path::PathBuf;
use utils::DataFormat;

#[derive(Parser)]
#[command(name = "oxipack")]
#[command(author, version, about = "Integer array compression with block bit packing")]
#[command(long_about = "
OxiPack compresses arrays of 32-bit integers with block binary packing,
XOR binary packing or variable-byte coding, and stores them in a
self-describing envelope.

Input files hold either whitespace separated decimal integers (text) or
little-endian 32-bit integers (binary).

Examples:
  oxipack compress ids.txt ids.oxp
  oxipack compress readings.bin readings.oxp --scheme xor --format binary
  oxipack decompress ids.oxp ids.txt
  oxipack info ids.oxp --json
  oxipack test ids.oxp
  oxipack bench --size 100000
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress an integer file into an envelope
    #[command(alias = "c")]
    Compress {
        /// Integer file to compress
        input: PathBuf,

        /// Output envelope file
        output: PathBuf,

        /// Compression scheme
        #[arg(short, long, value_enum, default_value = "binary")]
        scheme: SchemeArg,

        /// Compress values directly instead of their differences
        #[arg(long)]
        plain: bool,

        /// Input file format
        #[arg(short, long, value_enum, default_value = "text")]
        format: DataFormat,

        /// Keep the codec output even when it is larger than the input
        #[arg(long)]
        no_raw_fallback: bool,
    },

    /// Decompress an envelope into an integer file
    #[command(alias = "d")]
    Decompress {
        /// Envelope file
        input: PathBuf,

        /// Output integer file
        output: PathBuf,

        /// Output file format
        #[arg(short, long, value_enum, default_value = "text")]
        format: DataFormat,
    },

    /// Show envelope metadata
    #[command(alias = "i")]
    Info {
        /// Envelope file to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Check that an envelope decodes
    #[command(alias = "t")]
    Test {
        /// Envelope file to test
        input: PathBuf,
    },

    /// Measure every scheme on synthetic datasets
    Bench {
        /// Number of integers per dataset
        #[arg(short, long, default_value_t = 1_000_000)]
        size: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            scheme,
            plain,
            format,
            no_raw_fallback,
        } => {
            let options = CompressOptions {
                scheme,
                differential: !plain,
                format,
                raw_fallback: !no_raw_fallback,
            };
            cmd_compress(&input, &output, &options)
        }
        Commands::Decompress {
            input,
            output,
            format,
        } => cmd_decompress(&input, &output, format),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Test { input } => cmd_test(&input),
        Commands::Bench { size } => cmd_bench(size),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
