use clap::Parser;
use viewer::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Hash of the order to display
    pub hash: String,

    /// Root the order records are served from
    #[arg(long, env, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Give up on a record after this many seconds. Waits forever if unset.
    #[arg(long, env)]
    pub timeout_secs: Option<u64>,

    /// Print the assembled view as JSON
    #[arg(long)]
    pub json: bool,
}
