pub mod api_client;
pub mod service;

pub use crate::domain::filter::FilterCriteria;
pub use crate::domain::model::{Institution, Program, ProgramDto};
pub use crate::domain::ports::{ConfigProvider, ProgramCatalog};
pub use crate::utils::error::Result;
