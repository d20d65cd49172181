use std::path::{Path, PathBuf};

use api_types::rapport::{OperationReleve, ReleveCompte};
use clap::{Args, Subcommand};
use client::Client;
use engine::{dates, rapports};

use crate::error::Result;

#[derive(Args, Debug)]
pub struct RapportArgs {
    #[command(subcommand)]
    pub command: RapportCommand,
}

#[derive(Subcommand, Debug)]
pub enum RapportCommand {
    /// Relevé de compte sur une période.
    Releve {
        #[arg(long)]
        compte: String,
        /// Date de début (YYYY-MM-DD).
        #[arg(long)]
        debut: String,
        /// Date de fin, sinon jusqu'à aujourd'hui.
        #[arg(long)]
        fin: Option<String>,
        /// Écrit les opérations du relevé dans un fichier CSV local.
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Télécharge le PDF rendu par le serveur.
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
    /// Historique des plus/moins-values d'un compte.
    Historique {
        #[arg(long)]
        compte: String,
        #[arg(long)]
        periode: String,
        #[arg(long)]
        debut: Option<String>,
        #[arg(long)]
        fin: Option<String>,
    },
    /// Plus/moins-value de chaque compte à une date cible.
    Etat {
        #[arg(long)]
        periode: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Résumé des comptes internes par type de fonctionnement.
    Resumes {
        #[arg(long)]
        date: Option<String>,
    },
}

pub async fn run(client: &Client, args: RapportArgs) -> Result<()> {
    match args.command {
        RapportCommand::Releve {
            compte,
            debut,
            fin,
            csv,
            pdf,
        } => {
            let requete =
                rapports::requete_releve(&compte, &debut, fin.as_deref().unwrap_or(""))?;
            let releve = client.releve_compte(&requete).await?;
            afficher_releve(&compte, &releve);

            if let Some(chemin) = csv {
                ecrire_csv_releve(&chemin, &releve)?;
                println!("Relevé écrit dans {}", chemin.display());
            }
            if let Some(chemin) = pdf {
                let octets = client.releve_compte_pdf(&requete).await?;
                std::fs::write(&chemin, octets)?;
                println!("PDF écrit dans {}", chemin.display());
            }
        }
        RapportCommand::Historique {
            compte,
            periode,
            debut,
            fin,
        } => {
            let requete = rapports::requete_historique(
                &compte,
                &periode,
                debut.as_deref().unwrap_or(""),
                fin.as_deref().unwrap_or(""),
            )?;
            let historique = client.historique_plus_moins_value(&requete).await?;
            for valeur in &historique.plus_moins_values {
                println!(
                    "{} → {}  {:+.2} € ({:+.2} %)",
                    dates::format_date(valeur.date_debut_evaluation),
                    dates::format_date(valeur.date_fin_evaluation),
                    valeur.montant_plus_moins_value_en_euros,
                    valeur.montant_plus_moins_value_en_pourcentage,
                );
            }
            println!("{} période(s)", historique.plus_moins_values.len());
        }
        RapportCommand::Etat { periode, date } => {
            let requete = rapports::requete_etat(&periode, date.as_deref().unwrap_or(""))?;
            let etats = client.etat_plus_moins_value(&requete).await?;
            for etat in &etats {
                let valeur = &etat.plus_moins_value;
                println!(
                    "{} → {}  réel {:.2} €  technique {:.2} €  {:+.2} €",
                    dates::format_date(valeur.date_debut_evaluation),
                    dates::format_date(valeur.date_fin_evaluation),
                    valeur.montant_reel_en_euros,
                    valeur.montant_technique_en_euros,
                    valeur.montant_plus_moins_value_en_euros,
                );
            }
        }
        RapportCommand::Resumes { date } => {
            let requete = rapports::requete_resumes(date.as_deref().unwrap_or(""))?;
            let groupes = client.resumes_comptes_internes(&requete).await?;
            for groupe in &groupes {
                println!(
                    "{}",
                    groupe
                        .type_fonctionnement
                        .libelle
                        .as_deref()
                        .unwrap_or(&groupe.type_fonctionnement.code)
                );
                for resume in &groupe.comptes_internes {
                    println!(
                        "  {}  {}  {:.2} €",
                        resume.compte_interne.identifiant,
                        dates::format_date(resume.date_solde),
                        resume.montant_solde_en_euros,
                    );
                }
            }
        }
    }
    Ok(())
}

fn afficher_releve(compte: &str, releve: &ReleveCompte) {
    println!(
        "Relevé {} du {} au {}",
        compte,
        dates::format_date(releve.date_debut_releve),
        dates::format_date(releve.date_fin_releve),
    );
    println!(
        "Solde initial {:.2} €  →  solde final {:.2} €",
        releve.montant_solde_debut_releve_en_euros, releve.montant_solde_fin_releve_en_euros,
    );
    println!(
        "Recettes : {} opération(s), total {:.2} €",
        releve.operations_recette.len(),
        releve.montant_total_operations_recette_en_euros,
    );
    println!(
        "Dépenses : {} opération(s), total {:.2} €",
        releve.operations_depense.len(),
        releve.montant_total_operations_depense_en_euros,
    );
}

fn ecrire_csv_releve(chemin: &Path, releve: &ReleveCompte) -> Result<()> {
    let mut writer = csv::Writer::from_path(chemin)?;
    writer.write_record([
        "sens",
        "numero",
        "typeOperation",
        "dateValeur",
        "libelle",
        "montantEnEuros",
        "autreCompte",
    ])?;
    for operation in &releve.operations_recette {
        ecrire_ligne(&mut writer, "recette", operation)?;
    }
    for operation in &releve.operations_depense {
        ecrire_ligne(&mut writer, "depense", operation)?;
    }
    writer.flush()?;
    Ok(())
}

fn ecrire_ligne(
    writer: &mut csv::Writer<std::fs::File>,
    sens: &str,
    operation: &OperationReleve,
) -> Result<()> {
    writer.write_record([
        sens,
        &operation.numero,
        operation.code_type_operation.as_deref().unwrap_or(""),
        &dates::format_date(operation.date_valeur),
        operation.libelle.as_deref().unwrap_or(""),
        &format!("{:.2}", operation.montant_en_euros),
        operation.identifiant_autre_compte.as_deref().unwrap_or(""),
    ])?;
    Ok(())
}
