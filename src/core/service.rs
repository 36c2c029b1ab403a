use crate::domain::filter::FilterCriteria;
use crate::domain::model::{Institution, Program, ProgramDto};
use crate::domain::ports::ProgramCatalog;
use crate::utils::error::{Result, ServiceError};

/// Read operations over the programs catalog.
///
/// The `try_*` methods return explicit results so callers can tell an empty
/// listing from a failed fetch. The plain methods keep the degraded contract
/// used by presentation code: failures are logged and collapse to `[]` or
/// `None`.
pub struct ProgramDataService<C: ProgramCatalog> {
    catalog: C,
}

impl<C: ProgramCatalog> ProgramDataService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    fn to_domain(dto: ProgramDto) -> Program {
        let program = Program::from(dto);
        for warning in program.mapping_warnings() {
            tracing::warn!("{}", warning);
        }
        program
    }

    pub async fn try_list_programs(&self, filters: &FilterCriteria) -> Result<Vec<Program>> {
        let dtos = self.catalog.fetch_programs().await?;
        let fetched = dtos.len();

        let programs: Vec<Program> = dtos.into_iter().map(Self::to_domain).collect();
        let programs = filters.apply(programs);

        tracing::debug!(
            "Listed {} of {} programs (filters: {:?})",
            programs.len(),
            fetched,
            filters
        );
        Ok(programs)
    }

    pub async fn try_get_program(&self, id: &str) -> Result<Program> {
        let dto = self.catalog.fetch_program(id).await?;
        Ok(Self::to_domain(dto))
    }

    pub async fn try_list_institutions(&self) -> Result<Vec<Institution>> {
        self.catalog.fetch_institutions().await
    }

    pub async fn try_get_institution(&self, id: &str) -> Result<Institution> {
        self.catalog.fetch_institution(id).await
    }

    pub async fn list_programs(&self, filters: Option<&FilterCriteria>) -> Vec<Program> {
        let no_filters = FilterCriteria::default();
        let filters = filters.unwrap_or(&no_filters);
        degrade("list programs", self.try_list_programs(filters).await).unwrap_or_default()
    }

    pub async fn get_program(&self, id: &str) -> Option<Program> {
        degrade("fetch program", self.try_get_program(id).await)
    }

    pub async fn list_institutions(&self) -> Vec<Institution> {
        degrade("list institutions", self.try_list_institutions().await).unwrap_or_default()
    }

    pub async fn get_institution(&self, id: &str) -> Option<Institution> {
        degrade("fetch institution", self.try_get_institution(id).await)
    }
}

fn degrade<T>(operation: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log_failure(operation, &e);
            None
        }
    }
}

fn log_failure(operation: &str, error: &ServiceError) {
    tracing::error!(kind = ?error.kind(), "Failed to {}: {}", operation, error);
}
