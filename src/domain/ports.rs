use crate::domain::model::{Institution, ProgramDto};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait ConfigProvider: Send + Sync {
    /// Base URL of the programs API, if one is configured.
    fn api_url(&self) -> Option<&str>;
    /// Extra headers sent with every request.
    fn default_headers(&self) -> &HashMap<String, String>;
}

/// Raw reads against the programs backend.
#[async_trait]
pub trait ProgramCatalog: Send + Sync {
    async fn fetch_programs(&self) -> Result<Vec<ProgramDto>>;
    async fn fetch_program(&self, id: &str) -> Result<ProgramDto>;
    async fn fetch_institutions(&self) -> Result<Vec<Institution>>;
    async fn fetch_institution(&self, id: &str) -> Result<Institution>;
}
