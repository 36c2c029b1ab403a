use crate::domain::model::Program;
use serde::{Deserialize, Serialize};

/// Optional constraints over a program listing. A field that is `None` or an
/// empty string does not narrow the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    #[serde(alias = "search")]
    pub busca: Option<String>,
    pub area: Option<String>,
    #[serde(alias = "modality")]
    pub modalidade: Option<String>,
    #[serde(alias = "level")]
    pub nivel: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_busca(mut self, term: impl Into<String>) -> Self {
        self.busca = Some(term.into());
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_modalidade(mut self, modalidade: impl Into<String>) -> Self {
        self.modalidade = Some(modalidade.into());
        self
    }

    pub fn with_nivel(mut self, nivel: impl Into<String>) -> Self {
        self.nivel = Some(nivel.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        active(&self.busca).is_none()
            && active(&self.area).is_none()
            && active(&self.modalidade).is_none()
            && active(&self.nivel).is_none()
    }

    /// Narrows `programs` one dimension at a time: search, area, modality, level.
    pub fn apply(&self, mut programs: Vec<Program>) -> Vec<Program> {
        if let Some(term) = active(&self.busca) {
            let term = term.to_lowercase();
            programs.retain(|p| matches_search(p, &term));
        }
        if let Some(area) = active(&self.area) {
            programs.retain(|p| p.area.as_str() == area);
        }
        if let Some(modalidade) = active(&self.modalidade) {
            programs.retain(|p| p.modalidade.as_str() == modalidade);
        }
        if let Some(nivel) = active(&self.nivel) {
            programs.retain(|p| p.nivel.as_str() == nivel);
        }
        programs
    }
}

// `term` is already lowercased
fn matches_search(program: &Program, term: &str) -> bool {
    program.titulo.to_lowercase().contains(term)
        || program.resumo.to_lowercase().contains(term)
        || program
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProgramDto;

    fn program(id: &str, titulo: &str, area: &str, modalidade: &str, nivel: &str) -> Program {
        Program::from(ProgramDto {
            id: id.to_string(),
            titulo: titulo.to_string(),
            instituicao_id: "inst".to_string(),
            area: area.to_string(),
            modalidade: modalidade.to_string(),
            nivel: nivel.to_string(),
            publico_alvo: String::new(),
            periodo_inicio: "2024-01-01".to_string(),
            periodo_fim: "2024-06-30".to_string(),
            edital_url: String::new(),
            cidade: String::new(),
            estado: String::new(),
            tags: vec![],
            resumo: String::new(),
            descricao_completa: String::new(),
        })
    }

    fn catalog() -> Vec<Program> {
        let mut robotica = program("1", "Robótica Educacional", "tecnologia", "presencial", "medio");
        robotica.tags = vec!["Arduino".to_string(), "STEM".to_string()];

        let mut enfermagem = program("2", "Técnico em Enfermagem", "saude", "presencial", "tecnico");
        enfermagem.resumo = "Formação com estágio em hospital".to_string();

        let mut dados = program("3", "Ciência de Dados", "tecnologia", "online", "pos-graduacao");
        dados.resumo = "Python e estatística aplicada".to_string();
        dados.tags = vec!["python".to_string()];

        let mut idiomas = program("4", "Inglês Instrumental", "humanas", "online", "extensao");
        idiomas.tags = vec!["idiomas".to_string()];

        vec![robotica, enfermagem, dados, idiomas]
    }

    fn ids(programs: &[Program]) -> Vec<&str> {
        programs.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything_in_order() {
        let result = FilterCriteria::new().apply(catalog());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
        assert!(FilterCriteria::new().is_empty());
    }

    #[test]
    fn test_search_matches_title_summary_or_tag_case_insensitively() {
        let by_title = FilterCriteria::new().with_busca("ROBÓTICA").apply(catalog());
        assert_eq!(ids(&by_title), vec!["1"]);

        let by_summary = FilterCriteria::new().with_busca("hospital").apply(catalog());
        assert_eq!(ids(&by_summary), vec!["2"]);

        let by_tag = FilterCriteria::new().with_busca("arduino").apply(catalog());
        assert_eq!(ids(&by_tag), vec!["1"]);

        // "python" appears in both the summary and a tag of the same record
        let python = FilterCriteria::new().with_busca("Python").apply(catalog());
        assert_eq!(ids(&python), vec!["3"]);

        let none = FilterCriteria::new().with_busca("astronomia").apply(catalog());
        assert!(none.is_empty());
    }

    #[test]
    fn test_exact_dimension_filters_are_anded() {
        let result = FilterCriteria::new()
            .with_area("tecnologia")
            .with_modalidade("online")
            .apply(catalog());
        assert_eq!(ids(&result), vec!["3"]);

        let result = FilterCriteria::new()
            .with_area("tecnologia")
            .with_nivel("tecnico")
            .apply(catalog());
        assert!(result.is_empty());

        // equality, not substring
        let result = FilterCriteria::new().with_area("tec").apply(catalog());
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_string_values_do_not_narrow() {
        let criteria = FilterCriteria {
            busca: Some(String::new()),
            area: Some(String::new()),
            modalidade: None,
            nivel: Some(String::new()),
        };
        assert!(criteria.is_empty());
        assert_eq!(ids(&criteria.apply(catalog())), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_unrecognized_values_filter_by_raw_string() {
        let mut programs = catalog();
        programs.push(program("5", "Astronomia Amadora", "Astronomia", "ead", "livre"));

        let result = FilterCriteria::new()
            .with_area("Astronomia")
            .with_modalidade("ead")
            .apply(programs);
        assert_eq!(ids(&result), vec!["5"]);
    }

    #[test]
    fn test_filter_passes_commute() {
        let passes: Vec<FilterCriteria> = vec![
            FilterCriteria::new().with_busca("o"),
            FilterCriteria::new().with_area("tecnologia"),
            FilterCriteria::new().with_modalidade("presencial"),
            FilterCriteria::new().with_nivel("medio"),
        ];
        let combined = FilterCriteria::new()
            .with_busca("o")
            .with_area("tecnologia")
            .with_modalidade("presencial")
            .with_nivel("medio")
            .apply(catalog());

        let orders: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];
        for order in orders {
            let mut result = catalog();
            for index in order {
                result = passes[index].apply(result);
            }
            assert_eq!(result, combined);
        }
        assert_eq!(ids(&combined), vec!["1"]);
    }

    #[test]
    fn test_criteria_deserialize_from_query_keys() {
        let criteria: FilterCriteria =
            serde_json::from_value(serde_json::json!({"busca": "dados", "modalidade": "online"}))
                .unwrap();
        assert_eq!(criteria.busca.as_deref(), Some("dados"));
        assert_eq!(criteria.modalidade.as_deref(), Some("online"));
        assert!(criteria.area.is_none());

        let aliased: FilterCriteria =
            serde_json::from_value(serde_json::json!({"search": "dados", "level": "medio"})).unwrap();
        assert_eq!(aliased.busca.as_deref(), Some("dados"));
        assert_eq!(aliased.nivel.as_deref(), Some("medio"));
    }
}
