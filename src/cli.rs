use std::num::NonZeroUsize;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hexview")]
#[command(
    about = "Read a file in binary mode and print a hex dump: offset column, \
                   hex byte values, and a printable-ASCII view."
)]
pub struct Cli {
    /// Input file. If given more than once, the last one wins.
    #[arg(value_name = "file", num_args(0..))]
    pub files: Vec<String>,

    /// Bytes rendered per output line.
    #[arg(short = 'n', value_name = "bytes", default_value = "16")]
    pub bytes_per_line: NonZeroUsize,
}
