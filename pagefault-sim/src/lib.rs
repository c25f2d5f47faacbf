// Page-fault simulator driver library

pub mod error;
pub mod generator;
pub mod input;
pub mod logging;
pub mod models;
pub mod runner;
pub mod stats;
