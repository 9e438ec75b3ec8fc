use clap::Parser;

/// This program builds the reports of a local-level election: CSV files and pie charts for
/// every local body, district and province, and for the whole country.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON configuration file. See the documentation of the
    /// local_election crate for the available options.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, default ./local-level-election/raw/alldata.json) The election results, as a
    /// JSON array. Setting this option overrides the path that may be specified with the
    /// --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (directory, default local-level-election/result) The root of the reports. Setting this
    /// option overrides the directory that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// If passed as an argument, every page will also be captured as a PNG image with a headless
    /// browser.
    #[clap(long, takes_value = false)]
    pub screenshot: bool,

    /// (executable, default chromium) The browser used for the screenshots.
    #[clap(long, value_parser)]
    pub browser: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
