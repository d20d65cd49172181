use clap::{Args, Subcommand};
use client::{Client, TypeCompte};
use engine::{Centimes, dates};

use crate::error::{AppError, Result};

#[derive(Args, Debug)]
pub struct CompteArgs {
    #[command(subcommand)]
    pub command: CompteCommand,
}

#[derive(Subcommand, Debug)]
pub enum CompteCommand {
    /// Liste les comptes d'une famille.
    List {
        /// interne, externe ou technique.
        #[arg(long)]
        famille: String,
    },
    /// Affiche un compte.
    Get {
        #[arg(long)]
        famille: String,
        #[arg(long)]
        id: String,
    },
}

fn famille(code: &str) -> Result<TypeCompte> {
    TypeCompte::depuis_segment(code).ok_or_else(|| {
        AppError::Argument(format!(
            "famille de comptes inconnue : {code} (attendu interne, externe ou technique)"
        ))
    })
}

pub async fn run(client: &Client, args: CompteArgs) -> Result<()> {
    match args.command {
        CompteCommand::List { famille: code } => match famille(&code)? {
            TypeCompte::Interne => {
                let comptes = client.comptes_internes_all().await?;
                for compte in &comptes {
                    println!(
                        "{}\t{}\t{}\t{}",
                        compte.identifiant,
                        compte.code_type().unwrap_or("INTERNE"),
                        compte.banque_nom().unwrap_or("—"),
                        compte.libelle.as_deref().unwrap_or("—"),
                    );
                }
                println!("{} compte(s)", comptes.len());
            }
            autre => {
                let comptes = client.comptes_all(autre).await?;
                for compte in &comptes {
                    println!(
                        "{}\t{}",
                        compte.identifiant,
                        compte.libelle.as_deref().unwrap_or("—")
                    );
                }
                println!("{} compte(s)", comptes.len());
            }
        },
        CompteCommand::Get { famille: code, id } => match famille(&code)? {
            TypeCompte::Interne => {
                let compte = client.compte_interne_get(&id).await?;
                println!("Identifiant : {}", compte.identifiant);
                println!("Libellé     : {}", compte.libelle.as_deref().unwrap_or("—"));
                println!("Type        : {}", compte.code_type().unwrap_or("—"));
                println!("Banque      : {}", compte.banque_nom().unwrap_or("—"));
                let titulaires = compte.titulaire_noms();
                if !titulaires.is_empty() {
                    println!("Titulaires  : {}", titulaires.join(", "));
                }
                if let (Some(date), Some(montant)) = (
                    compte.date_solde_initial,
                    compte.montant_solde_initial_en_centimes,
                ) {
                    println!(
                        "Solde initial : {} au {}",
                        Centimes::new(montant),
                        dates::format_date(date)
                    );
                }
                if let Some(cloture) = compte.date_cloture {
                    println!("Clôturé le  : {}", dates::format_date(cloture));
                }
            }
            autre => {
                let compte = client.compte_get(autre, &id).await?;
                println!("Identifiant : {}", compte.identifiant);
                println!("Libellé     : {}", compte.libelle.as_deref().unwrap_or("—"));
            }
        },
    }
    Ok(())
}
