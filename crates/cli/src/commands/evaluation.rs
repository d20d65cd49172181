use clap::{Args, Subcommand};
use client::Client;
use engine::{Centimes, dates};

use crate::error::Result;

#[derive(Args, Debug)]
pub struct EvaluationArgs {
    #[command(subcommand)]
    pub command: EvaluationCommand,
}

#[derive(Subcommand, Debug)]
pub enum EvaluationCommand {
    /// Liste toutes les évaluations.
    List,
    /// Affiche une évaluation.
    Get {
        #[arg(long)]
        cle: String,
    },
}

pub async fn run(client: &Client, args: EvaluationArgs) -> Result<()> {
    match args.command {
        EvaluationCommand::List => {
            let evaluations = client.evaluations_all().await?;
            for evaluation in &evaluations {
                println!(
                    "{}\t{}\t{}\t{}",
                    evaluation.cle,
                    evaluation.compte_interne_id().unwrap_or("—"),
                    dates::format_date(evaluation.date_solde),
                    Centimes::new(evaluation.montant_solde_en_centimes),
                );
            }
            println!("{} évaluation(s)", evaluations.len());
        }
        EvaluationCommand::Get { cle } => {
            let evaluation = client.evaluation_get(&cle).await?;
            println!("Clé          : {}", evaluation.cle);
            println!(
                "Compte       : {}",
                evaluation.compte_interne_id().unwrap_or("—")
            );
            println!(
                "Date solde   : {}",
                dates::format_date(evaluation.date_solde)
            );
            println!(
                "Montant      : {}",
                Centimes::new(evaluation.montant_solde_en_centimes)
            );
            println!(
                "Libellé      : {}",
                evaluation.libelle.as_deref().unwrap_or("—")
            );
        }
    }
    Ok(())
}
