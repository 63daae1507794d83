// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::core::visibility::VisibilityPreference;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "analog-clock")]
#[command(about = "Analog clock that resyncs when its window is shown again", long_about = None)]
pub struct Cli {
    /// Time to display as H, H:M or H:M:S (default: current local time)
    #[arg(long)]
    pub time: Option<String>,

    /// Window size in logical pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Host signal used to detect that the clock is visible again
    #[arg(long, value_enum)]
    pub visibility: Option<VisibilityPreference>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep the hands still between resyncs
    #[arg(long = "no-animate", default_value = "false")]
    pub no_animate: bool,

    /// Print every time change as a JSON line on stdout
    #[arg(long = "emit-events", default_value = "false")]
    pub emit_events: bool,
}
