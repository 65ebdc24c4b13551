use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use nozzle_design::{
    ContourGenerator, FlowConditions, MachSolver, NewtonSlope, NozzleError, NozzleGeometry,
    PerformanceSolver,
    DEFAULT_AMBIENT_PRESSURE, DEFAULT_CHAMBER_PRESSURE, DEFAULT_CHAMBER_TEMPERATURE,
    DEFAULT_EXIT_RADIUS, DEFAULT_GAMMA, DEFAULT_LENGTH_FRACTION, DEFAULT_MACH_ITERATIONS,
    DEFAULT_MOLECULAR_WEIGHT, DEFAULT_PLOT_FILE, DEFAULT_THROAT_RADIUS, MAX_CONTOUR_POINTS,
    UNIVERSAL_GAS_CONSTANT,
};

#[derive(Parser, Debug)]
#[command(
    name = "ngc",
    version,
    about = "Rocket Nozzle Geometry Calculator",
    long_about = "Calculates bell nozzle geometries and ideal rocket performance, \
                  and plots the contour with gnuplot when available.",
    allow_negative_numbers = true,
    after_help = "Examples:\n  ngc -t 0.005 -e 0.025 -p 2000000\n  \
                  ngc --throat-radius 0.01 --exit-radius 0.05 --output my_nozzle.png"
)]
pub struct Cli {
    /// Throat radius in meters
    #[arg(short = 't', long, value_name = "M", default_value_t = DEFAULT_THROAT_RADIUS)]
    pub throat_radius: f64,

    /// Exit radius in meters
    #[arg(short = 'e', long, value_name = "M", default_value_t = DEFAULT_EXIT_RADIUS)]
    pub exit_radius: f64,

    /// Chamber pressure in Pa
    #[arg(short = 'p', long, value_name = "PA", default_value_t = DEFAULT_CHAMBER_PRESSURE)]
    pub chamber_pressure: f64,

    /// Ambient pressure in Pa
    #[arg(short = 'a', long, value_name = "PA", default_value_t = DEFAULT_AMBIENT_PRESSURE)]
    pub ambient_pressure: f64,

    /// Chamber temperature in K
    #[arg(
        short = 'T',
        long = "chamber-temp",
        value_name = "K",
        default_value_t = DEFAULT_CHAMBER_TEMPERATURE
    )]
    pub chamber_temperature: f64,

    /// Molecular weight in kg/mol
    #[arg(short = 'M', long, value_name = "KG_MOL", default_value_t = DEFAULT_MOLECULAR_WEIGHT)]
    pub molecular_weight: f64,

    /// Specific heat ratio
    #[arg(short = 'g', long, default_value_t = DEFAULT_GAMMA)]
    pub gamma: f64,

    /// Gas constant in J/(kmol·K)
    #[arg(long, value_name = "R", default_value_t = UNIVERSAL_GAS_CONSTANT)]
    pub gas_constant: f64,

    /// Bell length as a fraction of the 15° conical nozzle
    #[arg(short = 'l', long, value_name = "FRACTION", default_value_t = DEFAULT_LENGTH_FRACTION)]
    pub length_fraction: f64,

    /// Output plot filename
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_PLOT_FILE)]
    pub output: PathBuf,

    /// Output geometry data filename
    #[arg(short = 'd', long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Number of contour sample points (2 to 100000)
    #[arg(long, value_name = "N", default_value_t = MAX_CONTOUR_POINTS)]
    pub points: usize,

    /// Newton iterations for the exit Mach number
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MACH_ITERATIONS)]
    pub mach_iterations: usize,

    /// Use the exact derivative in the Mach iteration
    #[arg(long)]
    pub exact_slope: bool,

    /// Print the design as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Skip the gnuplot script, contour files and plot
    #[arg(long)]
    pub no_plot: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn seed(&self) -> NozzleGeometry {
        NozzleGeometry::seed(self.throat_radius, self.exit_radius)
    }

    pub fn flow(&self) -> FlowConditions {
        FlowConditions::new(
            self.chamber_pressure,
            self.ambient_pressure,
            self.chamber_temperature,
            self.molecular_weight,
            self.gamma,
        )
        .with_gas_constant(self.gas_constant)
    }

    pub fn generator(&self) -> ContourGenerator {
        ContourGenerator::default().with_max_points(self.points)
    }

    pub fn solver(&self) -> Result<PerformanceSolver, NozzleError> {
        let slope = if self.exact_slope {
            NewtonSlope::Exact
        } else {
            NewtonSlope::Simplified
        };
        let mach_solver = MachSolver::new(self.mach_iterations)?.with_slope(slope);
        Ok(PerformanceSolver::new(mach_solver))
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
