pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServiceConfig;

pub use crate::core::{api_client::ApiClient, service::ProgramDataService};
pub use domain::filter::FilterCriteria;
pub use domain::model::{Area, EnrollmentPeriod, Institution, Level, Modality, Program, ProgramDto};
pub use utils::error::{ErrorKind, Result, ServiceError};
