use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Program record as the API serves it. Missing or null fields decode to
/// empty values; the shape is otherwise trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramDto {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub titulo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instituicao_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modalidade: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nivel: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publico_alvo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub periodo_inicio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub periodo_fim: String,
    #[serde(deserialize_with = "null_as_default")]
    pub edital_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cidade: String,
    #[serde(deserialize_with = "null_as_default")]
    pub estado: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resumo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub descricao_completa: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Enrollment window. Both ends are opaque date strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentPeriod {
    pub inicio: String,
    pub fim: String,
}

/// Defines a closed set of wire values plus an `Unrecognized` member that keeps
/// whatever the API sent.
macro_rules! classified {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Unrecognized(String),
        }

        impl $name {
            pub fn parse(raw: &str) -> Self {
                match raw {
                    $($wire => $name::$variant,)+
                    other => $name::Unrecognized(other.to_string()),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unrecognized(raw) => raw,
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match $name::parse(&raw) {
                    $name::Unrecognized(_) => $name::Unrecognized(raw),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unrecognized(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

classified!(
    /// Knowledge area of a program.
    Area {
        Tecnologia => "tecnologia",
        Saude => "saude",
        Educacao => "educacao",
        Engenharia => "engenharia",
        Ciencias => "ciencias",
        Humanas => "humanas",
        Negocios => "negocios",
        Artes => "artes",
    }
);

classified!(
    /// Delivery mode.
    Modality {
        Presencial => "presencial",
        Online => "online",
        Hibrido => "hibrido",
    }
);

classified!(
    /// Education level a program targets.
    Level {
        Fundamental => "fundamental",
        Medio => "medio",
        Tecnico => "tecnico",
        Graduacao => "graduacao",
        PosGraduacao => "pos-graduacao",
        Extensao => "extensao",
    }
);

/// Domain view of a program listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub titulo: String,
    pub instituicao_id: String,
    pub area: Area,
    pub modalidade: Modality,
    pub nivel: Level,
    pub publico_alvo: String,
    pub periodo_inscricao: EnrollmentPeriod,
    pub edital_url: String,
    pub cidade: String,
    pub estado: String,
    pub tags: Vec<String>,
    pub resumo: String,
    pub descricao_completa: String,
}

/// A classified field whose wire value is outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingWarning {
    pub program_id: String,
    pub field: &'static str,
    pub value: String,
}

impl fmt::Display for MappingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "program {}: unrecognized {} '{}'",
            self.program_id, self.field, self.value
        )
    }
}

impl From<ProgramDto> for Program {
    fn from(dto: ProgramDto) -> Self {
        Self {
            id: dto.id,
            titulo: dto.titulo,
            instituicao_id: dto.instituicao_id,
            area: Area::from(dto.area),
            modalidade: Modality::from(dto.modalidade),
            nivel: Level::from(dto.nivel),
            publico_alvo: dto.publico_alvo,
            periodo_inscricao: EnrollmentPeriod {
                inicio: dto.periodo_inicio,
                fim: dto.periodo_fim,
            },
            edital_url: dto.edital_url,
            cidade: dto.cidade,
            estado: dto.estado,
            tags: dto.tags,
            resumo: dto.resumo,
            descricao_completa: dto.descricao_completa,
        }
    }
}

impl Program {
    pub fn mapping_warnings(&self) -> Vec<MappingWarning> {
        let fields = [
            ("area", self.area.is_recognized(), self.area.as_str()),
            (
                "modalidade",
                self.modalidade.is_recognized(),
                self.modalidade.as_str(),
            ),
            ("nivel", self.nivel.is_recognized(), self.nivel.as_str()),
        ];

        fields
            .into_iter()
            .filter(|(_, recognized, _)| !recognized)
            .map(|(field, _, value)| MappingWarning {
                program_id: self.id.clone(),
                field,
                value: value.to_string(),
            })
            .collect()
    }
}

/// Institution record, passed through without mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    #[serde(flatten)]
    pub data: HashMap<String, serde_json::Value>,
}

impl Institution {
    pub fn id(&self) -> Option<&str> {
        self.data.get("id").and_then(|v| v.as_str())
    }

    pub fn nome(&self) -> Option<&str> {
        self.data.get("nome").and_then(|v| v.as_str())
    }
}
