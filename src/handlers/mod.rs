pub mod dashboard;
pub mod inspections;
