use std::path::PathBuf;

use clap::Args;
use client::{Client, ExportCsv};

use crate::error::{AppError, Result};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export à télécharger : types-operation, operations-types,
    /// operations-erreurs, comptes-types, comptes-erreurs, comptes-tables,
    /// budgets-types, budgets-erreurs ou budgets-tables.
    #[arg(long)]
    pub export: String,
    /// Fichier de sortie, sinon "<export>.csv".
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn run(client: &Client, args: ExportArgs) -> Result<()> {
    let export = ExportCsv::depuis_nom(&args.export)
        .ok_or_else(|| AppError::Argument(format!("export inconnu : {}", args.export)))?;
    let octets = client.csv_exporter(export).await?;
    let chemin = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}.csv", export.nom())));
    std::fs::write(&chemin, octets)?;
    println!("Export écrit dans {}", chemin.display());
    Ok(())
}
