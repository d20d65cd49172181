use clap::{Args, Subcommand};
use client::Client;
use engine::{Centimes, FormulaireBudget, ReferenceBudget, dates};

use crate::error::{AppError, Result};

#[derive(Args, Debug)]
pub struct BudgetArgs {
    #[command(subcommand)]
    pub command: BudgetCommand,
}

#[derive(Subcommand, Debug)]
pub enum BudgetCommand {
    /// Liste les budgets d'une famille de références.
    List {
        /// categorie, souscategorie ou beneficiaire.
        #[arg(long)]
        reference: String,
        /// Restreint à une seule référence.
        #[arg(long)]
        nom: Option<String>,
    },
    /// Crée une période de budget.
    New {
        #[arg(long)]
        reference: String,
        #[arg(long)]
        nom: String,
        /// Code type période, ex. MENSUEL. TECHNIQUE est refusé.
        #[arg(long)]
        periode: String,
        /// Date cible (YYYY-MM-DD), sinon le serveur choisit.
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        montant: String,
    },
    /// Reconduit la période courante vers la suivante.
    Next {
        #[arg(long)]
        reference: String,
        #[arg(long)]
        nom: String,
        #[arg(long)]
        periode: String,
        /// Sinon le montant de la période précédente est repris.
        #[arg(long)]
        montant: Option<String>,
    },
    /// Modifie la période dont la date de début vaut --date.
    Mod {
        #[arg(long)]
        reference: String,
        #[arg(long)]
        nom: String,
        #[arg(long)]
        periode: Option<String>,
        #[arg(long)]
        date: String,
        #[arg(long)]
        montant: String,
    },
    /// Supprime la période ciblée ET toutes les périodes postérieures de
    /// la même référence (suppression en cascade).
    Del {
        #[arg(long)]
        reference: String,
        #[arg(long)]
        nom: String,
        #[arg(long)]
        periode: String,
        #[arg(long)]
        date: String,
        /// Confirme la suppression en cascade.
        #[arg(long)]
        yes: bool,
    },
}

fn famille(code: &str) -> Result<ReferenceBudget> {
    ReferenceBudget::depuis_segment(code).ok_or_else(|| {
        AppError::Argument(format!(
            "référence inconnue : {code} (attendu categorie, souscategorie ou beneficiaire)"
        ))
    })
}

pub async fn run(client: &Client, args: BudgetArgs) -> Result<()> {
    match args.command {
        BudgetCommand::List { reference, nom } => {
            let reference = famille(&reference)?;
            let groupes = match nom {
                Some(nom) => vec![client.budgets_reference(reference, &nom).await?],
                None => client.budgets_all(reference).await?,
            };
            for groupe in &groupes {
                println!(
                    "{} ({})",
                    groupe.reference.nom,
                    groupe.reference.libelle.as_deref().unwrap_or("—")
                );
                for budget in &groupe.budgets {
                    println!(
                        "  {}  {} → {}  {}",
                        budget.type_periode,
                        dates::format_date(budget.date_debut),
                        dates::format_date(budget.date_fin),
                        Centimes::new(budget.montant_en_centimes),
                    );
                }
            }
        }
        BudgetCommand::New {
            reference,
            nom,
            periode,
            date,
            montant,
        } => {
            let reference = famille(&reference)?;
            let requete = engine::requete_creation(&FormulaireBudget {
                nom_reference: nom,
                code_type_periode: periode,
                date_cible: date.unwrap_or_default(),
                montant,
            })?;
            let groupe = client.budget_creer(reference, &requete).await?;
            println!(
                "Budget créé pour « {} » ({} période(s)).",
                groupe.reference.nom,
                groupe.budgets.len()
            );
        }
        BudgetCommand::Next {
            reference,
            nom,
            periode,
            montant,
        } => {
            let reference = famille(&reference)?;
            let requete = engine::requete_reconduction(&FormulaireBudget {
                nom_reference: nom,
                code_type_periode: periode,
                date_cible: String::new(),
                montant: montant.unwrap_or_default(),
            })?;
            let groupe = client.budget_reconduire(reference, &requete).await?;
            if let Some(dernier) = groupe.budgets.last() {
                println!(
                    "Budget reconduit : {} → {}  {}",
                    dates::format_date(dernier.date_debut),
                    dates::format_date(dernier.date_fin),
                    Centimes::new(dernier.montant_en_centimes),
                );
            } else {
                println!("Budget reconduit pour « {} ».", groupe.reference.nom);
            }
        }
        BudgetCommand::Mod {
            reference,
            nom,
            periode,
            date,
            montant,
        } => {
            let reference = famille(&reference)?;
            let requete = engine::requete_modification(&FormulaireBudget {
                nom_reference: nom,
                code_type_periode: periode.unwrap_or_default(),
                date_cible: date,
                montant,
            })?;
            let groupe = client.budget_modifier(reference, &requete).await?;
            println!("Budget mis à jour pour « {} ».", groupe.reference.nom);
        }
        BudgetCommand::Del {
            reference,
            nom,
            periode,
            date,
            yes,
        } => {
            let reference = famille(&reference)?;
            let suppression = engine::requete_suppression(&FormulaireBudget {
                nom_reference: nom.clone(),
                code_type_periode: periode,
                date_cible: date,
                montant: String::new(),
            })?;

            println!("{}", suppression.avertissement);
            if let Some(date_cible) = suppression.requete.date_cible
                && let Ok(groupe) = client.budgets_reference(reference, &nom).await
            {
                let touches = engine::apercu_cascade(&groupe.budgets, date_cible);
                for budget in touches {
                    println!(
                        "  sera supprimé : {}  {} → {}  {}",
                        budget.type_periode,
                        dates::format_date(budget.date_debut),
                        dates::format_date(budget.date_fin),
                        Centimes::new(budget.montant_en_centimes),
                    );
                }
            }

            if !yes {
                println!("Aucune suppression envoyée. Relancez avec --yes pour confirmer.");
                return Ok(());
            }

            client.budget_supprimer(reference, &suppression.requete).await?;
            println!("Budget(s) supprimé(s) pour « {nom} ».");
        }
    }
    Ok(())
}
