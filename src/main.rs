use anyhow::Context;
use clap::Parser;
use programas_client::config::{Command, InstitutionsCommand, ProgramsCommand};
use programas_client::utils::{logger, validation::Validate};
use programas_client::{
    ApiClient, CliConfig, ErrorKind, Institution, Program, ProgramDataService, ServiceConfig,
    ServiceError,
};
use serde::Serialize;

fn exit_code(error: &ServiceError) -> i32 {
    match error.kind() {
        ErrorKind::Api | ErrorKind::Decode => 1,
        ErrorKind::Network => 2,
        ErrorKind::Configuration => 3,
    }
}

fn load_config(cli: &CliConfig) -> anyhow::Result<ServiceConfig> {
    let mut config = match &cli.config {
        Some(path) => ServiceConfig::from_file(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    // --api-url / PROGRAMAS_API_URL override the file
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url.clone());
    }
    Ok(config)
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Programs(Vec<Program>),
    Program(Program),
    Institutions(Vec<Institution>),
    Institution(Institution),
}

async fn run(
    service: &ProgramDataService<ApiClient<ServiceConfig>>,
    command: &Command,
) -> Result<Output, ServiceError> {
    let output = match command {
        Command::Programs(programs) => match programs {
            ProgramsCommand::List { .. } => {
                let filters = programs.filters().unwrap_or_default();
                Output::Programs(service.try_list_programs(&filters).await?)
            }
            ProgramsCommand::Get { id } => Output::Program(service.try_get_program(id).await?),
        },
        Command::Institutions(institutions) => match institutions {
            InstitutionsCommand::List => {
                Output::Institutions(service.try_list_institutions().await?)
            }
            InstitutionsCommand::Get { id } => {
                Output::Institution(service.try_get_institution(id).await?)
            }
        },
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = load_config(&cli)?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(exit_code(&e));
    }

    let service = ProgramDataService::new(ApiClient::new(config));

    let output = match run(&service, &cli.command).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "❌ Request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    let rendered = serde_json::to_string_pretty(&output).context("failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}
