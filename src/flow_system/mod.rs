pub mod isentropic;
pub mod mach;
pub mod performance;
