pub mod alerts;
pub mod calculations;
pub mod dates;
pub mod formatters;
pub mod validators;
