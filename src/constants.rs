// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s², used for specific impulse
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8314.5; // J/(kmol·K)

// Contour Generation
pub const MAX_CONTOUR_POINTS: usize = 1000;
pub const SAMPLE_POINTS_CEILING: usize = 100_000; // upper bound for a configured cap
pub const CONICAL_HALF_ANGLE_DEG: f64 = 15.0; // reference cone for bell length

// Mach Solver
pub const DEFAULT_MACH_ITERATIONS: usize = 10;

// Default Design Point (1 cm throat, 3 cm exit, sea level)
pub const DEFAULT_THROAT_RADIUS: f64 = 0.01; // m
pub const DEFAULT_EXIT_RADIUS: f64 = 0.03; // m
pub const DEFAULT_CHAMBER_PRESSURE: f64 = 1.0e6; // Pa
pub const DEFAULT_AMBIENT_PRESSURE: f64 = 101325.0; // Pa
pub const DEFAULT_CHAMBER_TEMPERATURE: f64 = 3000.0; // K
pub const DEFAULT_MOLECULAR_WEIGHT: f64 = 0.020; // kg/mol (typical combustion products)
pub const DEFAULT_GAMMA: f64 = 1.3; // typical for hot gases
pub const DEFAULT_LENGTH_FRACTION: f64 = 0.8; // 80% bell

// Output Files
pub const DEFAULT_PLOT_FILE: &str = "nozzle_plot.png";
pub const PLOT_SCRIPT_FILE: &str = "plot_nozzle.gp";
pub const UPPER_CONTOUR_FILE: &str = "nozzle_upper.dat";
pub const LOWER_CONTOUR_FILE: &str = "nozzle_lower.dat";
