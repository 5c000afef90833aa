use anyhow::Result;
use clap::Parser;

use minimizers::logging::init_logger;
use minimizers::SchemeParams;

mod commands;

use commands::{run_config, run_density, run_formula, Cli, Commands, DensityOptions};

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose);

    match args.command {
        Commands::Density {
            scheme,
            window,
            seed,
            hasher,
            length,
            rng_seed,
            input,
            tolerance,
            decycling_test,
            check,
        } => {
            let mut params = SchemeParams::new(window.w, window.k, window.t_or_k(), seed)
                .with_decycling_test(decycling_test);
            if let Some(tolerance) = tolerance {
                params = params.with_tolerance(tolerance);
            }
            run_density(&DensityOptions {
                scheme,
                params,
                hasher,
                length,
                rng_seed,
                input,
                check,
            })?;
        }

        Commands::Formula { scheme, window } => {
            run_formula(scheme, window.w, window.k, window.t_or_k())?;
        }

        Commands::Run { config } => {
            log::info!("Running scans from config: {}", config.display());
            run_config(&config)?;
        }
    }

    Ok(())
}
