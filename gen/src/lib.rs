pub mod bootstrap;
pub mod error;
pub mod report;
pub mod utils;
