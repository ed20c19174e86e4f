mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, lookup, stats};
use rego_common::config::Config;
use rego_core::SharedRegistry;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        vehicle_specs: commands.specs,
        registrations: commands.regos,
        quiet: commands.quiet,
    };
    let registry = SharedRegistry::from_config(&cfg);

    match commands.command {
        Commands::Stats => {
            print::header("bootstrap report", cfg.quiet);
            stats::stats(&registry, &cfg)
        }
        Commands::Get { registration } => {
            print::header("registration lookup", cfg.quiet);
            lookup::by_registration(registry.get(), &registration, &cfg)
        }
        Commands::Vehicle { vehicle_id } => {
            print::header("vehicle lookup", cfg.quiet);
            lookup::by_vehicle(registry.get(), &vehicle_id, &cfg)
        }
        Commands::Check {
            registration,
            vehicle_id,
        } => {
            print::header("registration check", cfg.quiet);
            check::check(registry.get(), &registration, &vehicle_id)
        }
    }
}
