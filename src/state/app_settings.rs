use clap::Parser;
use fwc_api::tzone::{TzError, UserZone};
use log::LevelFilter;
use std::path::PathBuf;

/// Browse a World Cup edition from the terminal.
#[derive(Debug, Parser)]
#[command(name = "fwc-explorer", version, about, long_about = None)]
pub struct Args {
    /// Tournament data file
    #[arg(long = "data", env = "FWC_DATA_JSON", default_value = "fifa_data.json")]
    pub data_path: PathBuf,

    /// Time zone abbreviation (e.g. EDT) or Local; skips the zone prompt
    #[arg(long = "tz", env = "FWC_TZ", value_parser = parse_zone)]
    pub zone: Option<UserZone>,

    /// Log level for messages written to stderr
    #[arg(long, env = "FWC_LOG", default_value = "warn")]
    pub log_level: LevelFilter,
}

fn parse_zone(label: &str) -> Result<UserZone, TzError> {
    UserZone::parse(label)
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub data_path: PathBuf,
    pub zone: Option<UserZone>,
    pub log_level: LevelFilter,
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from(Args::parse())
    }

    /// Directive for the stderr subscriber, e.g. `warn`.
    pub fn log_directive(&self) -> String {
        self.log_level.as_str().to_ascii_lowercase()
    }
}

impl From<Args> for AppSettings {
    fn from(args: Args) -> Self {
        Self { data_path: args.data_path, zone: args.zone, log_level: args.log_level }
    }
}
