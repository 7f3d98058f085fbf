use std::path::PathBuf;

use clap::Parser;

use pom_calendar::ConfigFile;

/// Lunar phase and seasonal calendar generator.
#[derive(Parser, Debug)]
#[command(
    name = "pom",
    version,
    about = "Emit a year of moon phases, seasons and sunrise/sunset records for print layout"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target year (1000..=2999).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Named location from the built-in city table.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub city: Option<String>,

    /// Observer latitude in degrees, north positive.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Observer longitude in degrees, east positive.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Observer elevation in metres.
    #[arg(long, allow_negative_numbers = true)]
    pub elevation: Option<f64>,

    /// IANA timezone name, e.g. America/Los_Angeles.
    #[arg(long)]
    pub timezone: Option<String>,

    /// Atmospheric pressure in hPa; 0 disables refraction.
    #[arg(long)]
    pub pressure: Option<f64>,

    /// Extra horizon depression in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub horizon_dip: Option<f64>,

    /// Skip the daily sunrise/sunset records.
    #[arg(long)]
    pub no_solar: bool,
}

impl Cli {
    /// Flags win over the file. A city on the command line drops the file's
    /// coordinates, and explicit coordinates drop the file's city.
    pub fn overlay(&self, mut file: ConfigFile) -> ConfigFile {
        if self.year.is_some() {
            file.year = self.year;
        }

        let loc = &mut file.location;
        if let Some(city) = &self.city {
            loc.city = Some(city.clone());
            loc.latitude = None;
            loc.longitude = None;
            loc.elevation = None;
        }
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            loc.city = None;
            loc.latitude = Some(lat);
            loc.longitude = Some(lon);
        }
        if self.elevation.is_some() {
            loc.elevation = self.elevation;
        }
        if self.timezone.is_some() {
            loc.timezone = self.timezone.clone();
        }
        if self.pressure.is_some() {
            loc.pressure = self.pressure;
        }
        if self.horizon_dip.is_some() {
            loc.horizon_dip = self.horizon_dip;
        }

        if self.no_solar {
            file.solar = false;
        }
        file
    }
}
