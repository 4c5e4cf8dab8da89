//! Command-line configuration.

use crate::cycler::CyclerConfig;
use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Default blink period of the title cursor.
pub const CURSOR_BLINK: Duration = Duration::from_millis(530);

/// A terminal portfolio page with a typewriter-style rotating title.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version)]
pub struct Cli {
    /// Portfolio data file (JSON)
    #[arg(env = "FOLIO_DATA", default_value = "cv_info.json")]
    pub data: PathBuf,

    /// Delay between typed characters, in milliseconds
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    pub type_delay_ms: i64,

    /// Delay between erased characters, in milliseconds (default: type delay)
    #[arg(long, allow_negative_numbers = true)]
    pub erase_delay_ms: Option<i64>,

    /// How long a fully typed title stays up, in milliseconds
    #[arg(long, default_value_t = 2000, allow_negative_numbers = true)]
    pub hold_ms: i64,

    /// Stop on the last title instead of cycling forever
    #[arg(long)]
    pub no_loop: bool,

    /// Print the title animation to stdout instead of drawing the page
    #[arg(long)]
    pub headless: bool,

    /// Append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated application settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Portfolio data file.
    pub data_path: PathBuf,
    /// Title cycler timing.
    pub cycler: CyclerConfig,
    /// Run without taking over the terminal.
    pub headless: bool,
    /// Log destination.
    pub log_file: Option<PathBuf>,
    /// Cursor blink period.
    pub blink_interval: Duration,
}

impl TryFrom<Cli> for AppConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let cycler = CyclerConfig::from_millis(cli.type_delay_ms, cli.erase_delay_ms, cli.hold_ms)?
            .with_looping(!cli.no_loop);
        Ok(Self {
            data_path: cli.data,
            cycler,
            headless: cli.headless,
            log_file: cli.log_file,
            blink_interval: CURSOR_BLINK,
        })
    }
}
