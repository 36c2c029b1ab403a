pub mod service_config;

pub use service_config::{ServiceConfig, API_URL_ENV};

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, InstitutionsCommand, ProgramsCommand};

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::filter::FilterCriteria;
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "programas-client")]
    #[command(about = "Query educational programs and institutions from the programs API")]
    pub struct CliConfig {
        /// Base URL of the programs API
        #[arg(long, env = "PROGRAMAS_API_URL")]
        pub api_url: Option<String>,

        /// TOML file with an [api] section
        #[arg(long)]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Program listings
        #[command(subcommand)]
        Programs(ProgramsCommand),
        /// Institution records
        #[command(subcommand)]
        Institutions(InstitutionsCommand),
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum ProgramsCommand {
        List {
            /// Case-insensitive match on title, summary or tags
            #[arg(long)]
            busca: Option<String>,
            #[arg(long)]
            area: Option<String>,
            #[arg(long)]
            modalidade: Option<String>,
            #[arg(long)]
            nivel: Option<String>,
        },
        Get {
            id: String,
        },
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum InstitutionsCommand {
        List,
        Get { id: String },
    }

    impl ProgramsCommand {
        pub fn filters(&self) -> Option<FilterCriteria> {
            match self {
                ProgramsCommand::List {
                    busca,
                    area,
                    modalidade,
                    nivel,
                } => Some(FilterCriteria {
                    busca: busca.clone(),
                    area: area.clone(),
                    modalidade: modalidade.clone(),
                    nivel: nivel.clone(),
                }),
                ProgramsCommand::Get { .. } => None,
            }
        }
    }

}
