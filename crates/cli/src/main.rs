use clap::{Parser, Subcommand};
use client::Client;

use crate::error::{AppError, Result};

mod commands;
mod config;
mod error;

#[derive(Parser, Debug)]
#[command(name = "monatis")]
#[command(about = "Client en ligne de commande pour le back-office Monatis")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://localhost:8082).
    #[arg(long)]
    base_url: Option<String>,
    /// Override API base path (default /monatis).
    #[arg(long)]
    base_path: Option<String>,
    /// Verb for report endpoints: get or post.
    #[arg(long)]
    rapport_method: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Opérations monétaires entre comptes.
    Operation(commands::operation::OperationArgs),
    /// Budgets périodiques par référence.
    Budget(commands::budget::BudgetArgs),
    /// Rapports en lecture seule (relevés, plus/moins-values).
    Rapport(commands::rapport::RapportArgs),
    /// Références : banques, catégories, bénéficiaires, titulaires.
    Reference(commands::reference::ReferenceArgs),
    /// Comptes internes, externes et techniques.
    Compte(commands::compte::CompteArgs),
    /// Évaluations de solde.
    Evaluation(commands::evaluation::EvaluationArgs),
    /// Exports CSV rendus par le serveur.
    Csv(commands::export::ExportArgs),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        match &err {
            AppError::Api(api) => eprintln!("{}", api.details()),
            autre => eprintln!("{autre}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = config::load(config::Overrides {
        config: cli.config,
        base_url: cli.base_url,
        base_path: cli.base_path,
        rapport_method: cli.rapport_method,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "monatis={level},client={level},engine={level}",
            level = settings.log
        ))
        .with_writer(std::io::stderr)
        .init();

    let client = Client::avec_methode_rapports(
        &settings.racine_api(),
        settings.methode_rapports()?,
    )?;
    tracing::debug!(racine = settings.racine_api(), "client initialisé");

    match cli.command {
        Command::Operation(args) => commands::operation::run(&client, args).await,
        Command::Budget(args) => commands::budget::run(&client, args).await,
        Command::Rapport(args) => commands::rapport::run(&client, args).await,
        Command::Reference(args) => commands::reference::run(&client, args).await,
        Command::Compte(args) => commands::compte::run(&client, args).await,
        Command::Evaluation(args) => commands::evaluation::run(&client, args).await,
        Command::Csv(args) => commands::export::run(&client, args).await,
    }
}
