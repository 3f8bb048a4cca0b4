pub mod comparison;
pub mod error_study;
pub mod simulator;
