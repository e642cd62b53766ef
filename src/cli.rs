use clap::Parser;

/// Location used when none is given on the command line.
pub const DEFAULT_LOCATION: &str = "./sample.zip";

#[derive(Parser, Debug)]
#[command(name = "zipmeta")]
#[command(version)]
#[command(about = "Print ZIP entry metadata as JSON lines", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipmeta                                   list ./sample.zip\n  \
  zipmeta data1.zip | jq .name              entry names of data1.zip\n  \
  zipmeta https://example.com/archive.zip   list a remote ZIP")]
pub struct Cli {
    /// ZIP file path or HTTP URL
    #[arg(value_name = "LOCATION", default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
