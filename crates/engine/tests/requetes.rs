//! End-to-end request-construction scenarios: from raw form input to the
//! JSON body that would leave the process.

use engine::{
    Centimes, EngineError, FormulaireBudget, FormulaireSpecialise, LigneDraft, TypeOperation,
    dates, rapports, reconcilier, requete_creation, requete_suppression, requetes_lignes,
};

fn ligne(numero: u32, montant: &str) -> LigneDraft {
    LigneDraft {
        numero_ligne: numero,
        montant: montant.to_string(),
        ..LigneDraft::default()
    }
}

#[test]
fn scenario_lignes_sans_montant_saisi() {
    // Two lines, nothing typed in the header: the sum is the amount.
    let lignes = [ligne(1, "10,00"), ligne(2, "25,00")];
    let resultat = reconcilier("", &lignes);
    assert_eq!(resultat.montant_effectif, Some(Centimes::new(3500)));
    assert!(resultat.soumettable);
}

#[test]
fn scenario_desaccord_manuel() {
    // Same lines, but the user typed 34,00: warn and block, never fix.
    let lignes = [ligne(1, "10,00"), ligne(2, "25,00")];
    let resultat = reconcilier("34,00", &lignes);
    assert!(resultat.desaccord);
    assert!(!resultat.soumettable);
}

#[test]
fn scenario_vente_sans_compte_bien() {
    let form = FormulaireSpecialise {
        montant: "50".to_string(),
        compte_externe: "EXT1".to_string(),
        ..FormulaireSpecialise::default()
    };
    let verdict = engine::verifier(TypeOperation::Vente, &form);
    assert!(!verdict.soumettable);
    assert!(engine::construire_requete(TypeOperation::Vente, &form).is_err());
}

#[test]
fn scenario_suppression_en_cascade() {
    let form = FormulaireBudget {
        nom_reference: "Loisirs".to_string(),
        code_type_periode: "MENSUEL".to_string(),
        date_cible: "2025-03-01".to_string(),
        montant: String::new(),
    };
    let suppression = requete_suppression(&form).unwrap();

    let budgets = [
        api_types::budget::BudgetPeriode {
            type_periode: "MENSUEL".to_string(),
            date_debut: dates::parse_date("2025-02-01").unwrap(),
            date_fin: dates::parse_date("2025-02-28").unwrap(),
            montant_en_centimes: 10_000,
        },
        api_types::budget::BudgetPeriode {
            type_periode: "MENSUEL".to_string(),
            date_debut: dates::parse_date("2025-03-01").unwrap(),
            date_fin: dates::parse_date("2025-03-31").unwrap(),
            montant_en_centimes: 10_000,
        },
        api_types::budget::BudgetPeriode {
            type_periode: "MENSUEL".to_string(),
            date_debut: dates::parse_date("2025-04-01").unwrap(),
            date_fin: dates::parse_date("2025-04-30").unwrap(),
            montant_en_centimes: 10_000,
        },
    ];
    let cible = suppression.requete.date_cible.unwrap();
    let touches = engine::apercu_cascade(&budgets, cible);
    // The exact match and every later period, not just the exact match.
    assert_eq!(touches.len(), 2);
}

#[test]
fn scenario_normalisation_montant() {
    assert_eq!("12,50".parse::<Centimes>().unwrap().centimes(), 1250);
    assert!(matches!(
        "abc".parse::<Centimes>(),
        Err(EngineError::MontantInvalide(_))
    ));
    // Idempotent: cents -> euros string -> cents.
    let montant = Centimes::new(1250);
    assert_eq!(
        montant.to_euros_string().parse::<Centimes>().unwrap(),
        montant
    );
}

#[test]
fn corps_json_d_une_creation_specialisee() {
    let form = FormulaireSpecialise {
        libelle: "Courses de mars".to_string(),
        date_valeur: "2025-03-05".to_string(),
        montant: "35,00".to_string(),
        compte_externe: "EXT1".to_string(),
        compte_courant: "CC1".to_string(),
        nom_sous_categorie: "Alimentation".to_string(),
        noms_beneficiaires: "Alice, Bob".to_string(),
        ..FormulaireSpecialise::default()
    };
    let requete = engine::construire_requete(TypeOperation::Depense, &form).unwrap();
    let json = serde_json::to_value(&requete).unwrap();

    assert_eq!(json["montantEnCentimes"], 3500);
    assert_eq!(json["dateValeur"], "2025-03-05");
    assert_eq!(json["identifiantCompteExterne"], "EXT1");
    assert_eq!(json["identifiantCompteCourant"], "CC1");
    assert_eq!(json["nomSousCategorie"], "Alimentation");
    // Irrelevant account roles are absent from the body, not null.
    assert!(json.get("identifiantCompteFinancier").is_none());
    assert!(json.get("identifiantCompteBien").is_none());
    assert!(json.get("numero").is_none());
}

#[test]
fn corps_json_d_une_modification_avec_lignes() {
    let lignes = [ligne(1, "10,00"), ligne(2, "25,00")];
    let reconciliation = reconcilier("", &lignes);
    assert!(reconciliation.soumettable);

    let requete = api_types::operation::OperationModificationRequest {
        libelle: Some("Courses".to_string()),
        montant_en_centimes: reconciliation.montant_effectif.map(Centimes::centimes),
        lignes: Some(requetes_lignes(&lignes).unwrap()),
        ..api_types::operation::OperationModificationRequest::default()
    };
    let json = serde_json::to_value(&requete).unwrap();

    assert_eq!(json["montantEnCentimes"], 3500);
    assert_eq!(json["lignes"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["lignes"][0]["numeroLigne"], 1);
    assert_eq!(json["lignes"][1]["montantEnCentimes"], 2500);
}

#[test]
fn budgets_technique_bloques_avant_tout_envoi() {
    let form = FormulaireBudget {
        nom_reference: "Loisirs".to_string(),
        code_type_periode: "Technique".to_string(),
        date_cible: String::new(),
        montant: "10".to_string(),
    };
    assert!(matches!(
        requete_creation(&form).unwrap_err(),
        EngineError::PeriodeReservee(_)
    ));
    assert!(matches!(
        engine::requete_reconduction(&form).unwrap_err(),
        EngineError::PeriodeReservee(_)
    ));
}

#[test]
fn rapports_omettent_les_optionnels_vides() {
    let releve = rapports::requete_releve("CC1", "2025-01-01", "").unwrap();
    let json = serde_json::to_value(&releve).unwrap();
    assert_eq!(json["identifiantCompte"], "CC1");
    assert!(json.get("dateFin").is_none());

    let etat = rapports::requete_etat("ANNUEL", "").unwrap();
    let json = serde_json::to_value(&etat).unwrap();
    assert_eq!(json["codeTypePeriode"], "ANNUEL");
    assert!(json.get("dateCible").is_none());
}
