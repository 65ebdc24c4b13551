pub mod flow;
pub mod geometry;
pub mod performance;
