use std::process::ExitCode;

use log::warn;

use nozzle_design::output::data_file::write_geometry_file;
use nozzle_design::output::plot::{plot_nozzle_geometry, PlotConfig, PlotOutcome};
use nozzle_design::output::report::{GeometrySummary, InputSummary};
use nozzle_design::{NozzleDesign, NozzleError};

mod cli;

fn report_failure(err: &NozzleError) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let seed = cli.seed();
    let flow = cli.flow();
    let solver = match cli.solver() {
        Ok(solver) => solver,
        Err(e) => return report_failure(&e),
    };

    let design = match NozzleDesign::with_config(
        &cli.generator(),
        &solver,
        &seed,
        &flow,
        cli.length_fraction,
    ) {
        Ok(design) => design,
        Err(e) => return report_failure(&e),
    };

    // Inputs are echoed only once the design has passed validation.
    if cli.json {
        match design.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("=== ROCKET NOZZLE GEOMETRY CALCULATOR ===\n");
        println!(
            "{}",
            InputSummary {
                seed: &seed,
                flow: &flow,
                length_fraction: cli.length_fraction,
            }
        );
        println!("{}", GeometrySummary(&design.geometry));
        println!("{}", design.performance);
    }

    if !cli.no_plot {
        let config = PlotConfig::default().with_image(&cli.output);
        match plot_nozzle_geometry(&design.geometry, &config) {
            Ok(PlotOutcome::Rendered(image)) if !cli.json => {
                println!("Nozzle geometry plot saved to {}", image.display())
            }
            Ok(_) => {}
            Err(e) => warn!("Failed to generate plot: {e}"),
        }
    }

    if let Some(path) = &cli.data {
        match write_geometry_file(&design.geometry, path) {
            Ok(()) if !cli.json => println!("Geometry data written to {}", path.display()),
            Ok(()) => {}
            Err(e) => warn!("Failed to write geometry data: {e}"),
        }
    }

    if !cli.json {
        println!("Calculation completed successfully!");
    }
    ExitCode::SUCCESS
}
