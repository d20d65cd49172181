use api_types::reference::ReferenceRequest;
use clap::{Args, Subcommand};
use client::{Client, TypeReference};
use engine::util;

use crate::error::{AppError, Result};

#[derive(Args, Debug)]
pub struct ReferenceArgs {
    #[command(subcommand)]
    pub command: ReferenceCommand,
}

#[derive(Subcommand, Debug)]
pub enum ReferenceCommand {
    /// Liste une famille de références.
    List {
        /// titulaire, banque, categorie, souscategorie ou beneficiaire.
        #[arg(long)]
        famille: String,
    },
    /// Crée une référence.
    New {
        #[arg(long)]
        famille: String,
        #[arg(long)]
        nom: String,
        #[arg(long)]
        libelle: Option<String>,
    },
    /// Modifie le libellé (et éventuellement renomme).
    Mod {
        #[arg(long)]
        famille: String,
        #[arg(long)]
        nom: String,
        #[arg(long)]
        libelle: Option<String>,
        /// Nouveau nom, si la référence doit être renommée.
        #[arg(long)]
        renommer: Option<String>,
    },
    /// Supprime une référence.
    Del {
        #[arg(long)]
        famille: String,
        #[arg(long)]
        nom: String,
    },
}

fn famille(code: &str) -> Result<TypeReference> {
    TypeReference::depuis_segment(code).ok_or_else(|| {
        AppError::Argument(format!(
            "famille de références inconnue : {code} (attendu titulaire, banque, categorie, souscategorie ou beneficiaire)"
        ))
    })
}

pub async fn run(client: &Client, args: ReferenceArgs) -> Result<()> {
    match args.command {
        ReferenceCommand::List { famille: code } => {
            let famille = famille(&code)?;
            let references = client.references_all(famille).await?;
            for reference in &references {
                println!(
                    "{}\t{}",
                    reference.nom,
                    reference.libelle.as_deref().unwrap_or("—")
                );
            }
            println!("{} référence(s)", references.len());
        }
        ReferenceCommand::New {
            famille: code,
            nom,
            libelle,
        } => {
            let famille = famille(&code)?;
            let requete = ReferenceRequest {
                nom: Some(nom),
                libelle: libelle.as_deref().and_then(util::texte_optionnel),
            };
            let reference = client.reference_creer(famille, &requete).await?;
            println!("Référence « {} » créée.", reference.nom);
        }
        ReferenceCommand::Mod {
            famille: code,
            nom,
            libelle,
            renommer,
        } => {
            let famille = famille(&code)?;
            let requete = ReferenceRequest {
                nom: renommer,
                libelle: libelle.as_deref().and_then(util::texte_optionnel),
            };
            let reference = client.reference_modifier(famille, &nom, &requete).await?;
            println!("Référence « {} » mise à jour.", reference.nom);
        }
        ReferenceCommand::Del { famille: code, nom } => {
            let famille = famille(&code)?;
            client.reference_supprimer(famille, &nom).await?;
            println!("Référence « {nom} » supprimée.");
        }
    }
    Ok(())
}
