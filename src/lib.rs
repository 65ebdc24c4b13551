pub mod constants;
pub mod design;
pub mod errors;
pub mod flow_system;
pub mod geometry_system;
pub mod model;
pub mod output;
pub mod utils;
pub mod validation;

pub use constants::*;
pub use design::NozzleDesign;
pub use errors::{NozzleError, OutputError, Parameter, SolverStage};
pub use validation::{validate, validate_length_fraction};

// Re-export the data model
pub use model::flow::FlowConditions;
pub use model::geometry::{expansion_ratio, nozzle_area, NozzleGeometry};
pub use model::performance::PerformanceResults;

// Re-export the solvers
pub use flow_system::mach::{MachSolver, NewtonSlope};
pub use flow_system::performance::{calculate_performance, PerformanceSolver};
pub use geometry_system::contour::{generate_bell_contour, ContourGenerator};

// Re-export commonly used utilities
pub use utils::point::ContourPoint;
