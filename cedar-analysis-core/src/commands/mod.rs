//! Commands module - service layer for Cedar analysis operations

mod analyze;
mod compare;
pub(crate) mod service;

pub use service::CedarAnalysisService;
