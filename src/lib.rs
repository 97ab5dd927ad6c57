pub mod analyze;
pub mod config;
pub mod error;
pub mod leads;
pub mod output;
pub mod scoring;

pub use error::LeadError;
