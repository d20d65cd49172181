use api_types::operation::{Operation, OperationCreationRequest, OperationModificationRequest};
use clap::{Args, Subcommand};
use client::Client;
use engine::{Centimes, FormulaireSpecialise, LigneEditor, TypeOperation, dates, util};

use crate::error::{AppError, Result};

#[derive(Args, Debug)]
pub struct OperationArgs {
    #[command(subcommand)]
    pub command: OperationCommand,
}

#[derive(Subcommand, Debug)]
pub enum OperationCommand {
    /// Liste toutes les opérations.
    List,
    /// Affiche une opération et ses lignes.
    Get {
        #[arg(long)]
        numero: String,
    },
    /// Création spécialisée : un endpoint par type, comptes imposés par le type.
    Special(SpecialArgs),
    /// Création générique via /operations/new.
    New(NewArgs),
    /// Modification (libellé, comptes, pointage, lignes détaillées).
    Mod(ModArgs),
    /// Suppression.
    Del {
        #[arg(long)]
        numero: String,
    },
}

#[derive(Args, Debug)]
pub struct SpecialArgs {
    /// transfert, depense, recette, vente, achat, retrait, liquidation,
    /// depot ou investissement.
    #[arg(long = "type")]
    pub type_code: String,
    #[arg(long)]
    pub numero: Option<String>,
    #[arg(long)]
    pub libelle: Option<String>,
    /// Date valeur (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,
    /// Montant en euros, ex. "12,50".
    #[arg(long)]
    pub montant: String,
    #[arg(long)]
    pub compte_externe: Option<String>,
    #[arg(long)]
    pub compte_courant: Option<String>,
    #[arg(long)]
    pub compte_courant_depense: Option<String>,
    #[arg(long)]
    pub compte_courant_recette: Option<String>,
    #[arg(long)]
    pub compte_financier: Option<String>,
    #[arg(long)]
    pub compte_bien: Option<String>,
    /// Sous-catégorie (dépense/recette uniquement).
    #[arg(long)]
    pub sous_categorie: Option<String>,
    /// Bénéficiaires séparés par des virgules (dépense/recette uniquement).
    #[arg(long)]
    pub beneficiaires: Option<String>,
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Code du type d'opération (voir l'export CSV des types).
    #[arg(long = "type")]
    pub type_code: String,
    #[arg(long)]
    pub numero: Option<String>,
    #[arg(long)]
    pub libelle: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub montant: String,
    /// Identifiant du compte dépense.
    #[arg(long)]
    pub depense: String,
    /// Identifiant du compte recette.
    #[arg(long)]
    pub recette: String,
    #[arg(long)]
    pub sous_categorie: Option<String>,
    #[arg(long)]
    pub beneficiaires: Option<String>,
}

#[derive(Args, Debug)]
pub struct ModArgs {
    #[arg(long)]
    pub numero: String,
    #[arg(long)]
    pub libelle: Option<String>,
    #[arg(long = "type")]
    pub type_code: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    /// Montant saisi. Avec des lignes, la somme des lignes fait foi et un
    /// montant différent bloque la demande.
    #[arg(long)]
    pub montant: Option<String>,
    #[arg(long)]
    pub depense: Option<String>,
    #[arg(long)]
    pub recette: Option<String>,
    #[arg(long)]
    pub pointee: Option<bool>,
    /// Ligne détaillée, répétable :
    /// "montant[:libellé[:sous-catégorie[:bénéficiaires]]]".
    #[arg(long = "ligne")]
    pub lignes: Vec<String>,
}

pub async fn run(client: &Client, args: OperationArgs) -> Result<()> {
    match args.command {
        OperationCommand::List => {
            let operations = client.operations_all().await?;
            for operation in &operations {
                println!(
                    "{}\t{}\t{}\t{}",
                    operation.numero,
                    dates::format_date(operation.date_valeur),
                    Centimes::new(operation.montant_en_centimes),
                    operation.libelle.as_deref().unwrap_or("—"),
                );
            }
            println!("{} opération(s)", operations.len());
        }
        OperationCommand::Get { numero } => {
            let operation = client.operation_get(&numero).await?;
            afficher_operation(&operation);
        }
        OperationCommand::Special(special) => {
            let type_op = TypeOperation::depuis_code(&special.type_code).ok_or_else(|| {
                AppError::Argument(format!(
                    "type d'opération inconnu : {}",
                    special.type_code
                ))
            })?;
            let form = formulaire_depuis(&special);

            let verdict = engine::verifier(type_op, &form);
            if verdict.comptes_identiques {
                println!("Attention : les deux comptes du transfert sont identiques.");
            }
            let requete = engine::construire_requete(type_op, &form)?;

            let operation = client.operation_creer_specialisee(type_op, &requete).await?;
            // Le serveur peut imposer son propre numéro.
            println!("Opération {} créée.", operation.numero);
            afficher_operation(&operation);
        }
        OperationCommand::New(new) => {
            let montant: Centimes = new.montant.parse()?;
            if !montant.est_positif() {
                return Err(engine::EngineError::MontantInvalide(new.montant.clone()).into());
            }
            let beneficiaires = util::decouper_noms(new.beneficiaires.as_deref().unwrap_or(""));
            let requete = OperationCreationRequest {
                numero: new.numero.as_deref().and_then(util::texte_optionnel),
                libelle: new.libelle.as_deref().and_then(util::texte_optionnel),
                code_type_operation: new.type_code.clone(),
                date_valeur: dates::parse_date_opt(new.date.as_deref().unwrap_or(""))?,
                montant_en_centimes: montant.centimes(),
                identifiant_compte_depense: new.depense.clone(),
                identifiant_compte_recette: new.recette.clone(),
                nom_sous_categorie: new
                    .sous_categorie
                    .as_deref()
                    .and_then(util::texte_optionnel),
                noms_beneficiaires: (!beneficiaires.is_empty()).then_some(beneficiaires),
            };
            let operation = client.operation_creer(&requete).await?;
            println!("Opération {} créée.", operation.numero);
        }
        OperationCommand::Mod(modification) => {
            let requete = requete_modification(&modification)?;
            let operation = client
                .operation_modifier(&modification.numero, &requete)
                .await?;
            println!("Opération {} mise à jour.", operation.numero);
            afficher_operation(&operation);
        }
        OperationCommand::Del { numero } => {
            client.operation_supprimer(&numero).await?;
            println!("Opération {numero} supprimée.");
        }
    }
    Ok(())
}

fn formulaire_depuis(args: &SpecialArgs) -> FormulaireSpecialise {
    FormulaireSpecialise {
        numero: args.numero.clone().unwrap_or_default(),
        libelle: args.libelle.clone().unwrap_or_default(),
        date_valeur: args.date.clone().unwrap_or_default(),
        montant: args.montant.clone(),
        compte_externe: args.compte_externe.clone().unwrap_or_default(),
        compte_courant: args.compte_courant.clone().unwrap_or_default(),
        compte_courant_recette: args.compte_courant_recette.clone().unwrap_or_default(),
        compte_courant_depense: args.compte_courant_depense.clone().unwrap_or_default(),
        compte_financier: args.compte_financier.clone().unwrap_or_default(),
        compte_bien: args.compte_bien.clone().unwrap_or_default(),
        nom_sous_categorie: args.sous_categorie.clone().unwrap_or_default(),
        noms_beneficiaires: args.beneficiaires.clone().unwrap_or_default(),
    }
}

fn requete_modification(args: &ModArgs) -> Result<OperationModificationRequest> {
    let mut editeur = LigneEditor::new();
    for brut in &args.lignes {
        let mut champs = brut.splitn(4, ':');
        let montant = champs.next().unwrap_or("").to_string();
        let libelle = champs.next().unwrap_or("").to_string();
        let sous_categorie = champs.next().unwrap_or("").to_string();
        let beneficiaires = champs.next().unwrap_or("").to_string();

        let ligne = editeur.ajouter(args.date.as_deref().unwrap_or(""));
        ligne.montant = montant;
        ligne.libelle = libelle;
        ligne.nom_sous_categorie = sous_categorie;
        ligne.noms_beneficiaires = beneficiaires;
    }

    let montant_saisi = args.montant.clone().unwrap_or_default();
    let reconciliation = engine::reconcilier(&montant_saisi, editeur.lignes());
    if !reconciliation.soumettable {
        if reconciliation.desaccord
            && let (Ok(saisi), Some(somme)) = (
                montant_saisi.parse::<Centimes>(),
                reconciliation.montant_effectif,
            )
        {
            return Err(engine::EngineError::LignesIncoherentes {
                somme: somme.centimes(),
                saisi: saisi.centimes(),
            }
            .into());
        }
        return Err(AppError::Argument(
            "montant ou lignes invalides : rien n'a été envoyé".to_string(),
        ));
    }

    let lignes = if editeur.lignes().is_empty() {
        None
    } else {
        Some(engine::requetes_lignes(editeur.lignes())?)
    };

    Ok(OperationModificationRequest {
        numero: None,
        libelle: args.libelle.as_deref().and_then(util::texte_optionnel),
        code_type_operation: args.type_code.as_deref().and_then(util::texte_optionnel),
        date_valeur: dates::parse_date_opt(args.date.as_deref().unwrap_or(""))?,
        montant_en_centimes: reconciliation.montant_effectif.map(Centimes::centimes),
        identifiant_compte_depense: args.depense.as_deref().and_then(util::texte_optionnel),
        identifiant_compte_recette: args.recette.as_deref().and_then(util::texte_optionnel),
        pointee: args.pointee,
        lignes,
    })
}

fn afficher_operation(operation: &Operation) {
    println!("Numéro       : {}", operation.numero);
    println!("Type         : {}", operation.code_type().unwrap_or("—"));
    println!("Date valeur  : {}", dates::format_date(operation.date_valeur));
    println!(
        "Montant      : {}",
        Centimes::new(operation.montant_en_centimes)
    );
    println!("Libellé      : {}", operation.libelle.as_deref().unwrap_or("—"));
    println!("Compte dépense : {}", operation.depense_id().unwrap_or("—"));
    println!("Compte recette : {}", operation.recette_id().unwrap_or("—"));
    if operation.pointee == Some(true) {
        println!("Pointée");
    }
    for ligne in operation.lignes() {
        println!(
            "  ligne {} : {}  {}  {}",
            ligne.numero_ligne,
            Centimes::new(ligne.montant_en_centimes),
            ligne.libelle.as_deref().unwrap_or("—"),
            ligne.sous_categorie_nom().unwrap_or(""),
        );
    }
}
