use std::path::PathBuf;

pub const DEFAULT_VEHICLE_SPECS: &str = "resources/car_specs.csv";
pub const DEFAULT_REGISTRATIONS: &str = "resources/cars_regos.csv";

pub struct Config {
    /// Comma separated vehicle specifications, one vehicle per line.
    pub vehicle_specs: PathBuf,
    /// Comma separated `registration,vehicle id` pairs.
    pub registrations: PathBuf,
    /// Output verbosity reduction.
    ///
    /// `0` prints everything, `1` drops headers, `2` only prints results.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vehicle_specs: PathBuf::from(DEFAULT_VEHICLE_SPECS),
            registrations: PathBuf::from(DEFAULT_REGISTRATIONS),
            quiet: 0,
        }
    }
}
