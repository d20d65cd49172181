//! Budget period lifecycle: create, reconduct, modify, cascading delete.
//!
//! Budgets have no surrogate id. Every request addresses a period through
//! the (reference name, period code, start date) tuple, and the backend
//! resolves it server-side.

use api_types::budget::{BudgetPeriode, BudgetRequest};
use chrono::NaiveDate;

use crate::{Centimes, EngineError, dates, util};

/// Reference kinds a budget can be attached to. Maps one-to-one onto the
/// `/budgets/{segment}/...` endpoint families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceBudget {
    Categorie,
    SousCategorie,
    Beneficiaire,
}

impl ReferenceBudget {
    pub const TOUTES: [ReferenceBudget; 3] =
        [Self::Categorie, Self::SousCategorie, Self::Beneficiaire];

    /// URL path segment of this reference family.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Categorie => "categorie",
            Self::SousCategorie => "souscategorie",
            Self::Beneficiaire => "beneficiaire",
        }
    }

    pub fn depuis_segment(segment: &str) -> Option<Self> {
        let segment = segment.trim().to_ascii_lowercase();
        Self::TOUTES.into_iter().find(|r| r.segment() == segment)
    }
}

/// Period type reserved by the backend for valuation bookkeeping. It can
/// never be the subject of a create or reconduct request.
pub const TYPE_PERIODE_TECHNIQUE: &str = "TECHNIQUE";

#[must_use]
pub fn est_periode_technique(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case(TYPE_PERIODE_TECHNIQUE)
}

/// Recovers the bare period code from the decorated display strings the
/// backend returns (`"Mensuel [MENSUEL]"` -> `"MENSUEL"`).
#[must_use]
pub fn extraire_code_type(type_periode: &str) -> &str {
    if let (Some(debut), Some(fin)) = (type_periode.find('['), type_periode.rfind(']'))
        && debut < fin
    {
        return &type_periode[debut + 1..fin];
    }
    type_periode
}

/// Raw form values for the budget screens. The same form feeds all four
/// lifecycle requests; each builder checks its own required subset.
#[derive(Clone, Debug, Default)]
pub struct FormulaireBudget {
    pub nom_reference: String,
    pub code_type_periode: String,
    pub date_cible: String,
    pub montant: String,
}

impl FormulaireBudget {
    /// Prefills the form from an existing period, the way the list screen
    /// seeds the edit panel.
    pub fn prefiller(&mut self, nom_reference: &str, periode: &BudgetPeriode) {
        self.nom_reference = nom_reference.to_string();
        self.code_type_periode = extraire_code_type(&periode.type_periode).to_string();
        self.date_cible = dates::format_date(periode.date_debut);
        self.montant = Centimes::new(periode.montant_en_centimes).to_euros_string();
    }
}

/// Deletion request together with the cascade contract.
///
/// Deleting a period also deletes every later period of the same
/// reference; `avertissement` spells that out and callers must show it
/// before sending the request.
#[derive(Clone, Debug, PartialEq)]
pub struct SuppressionBudget {
    pub requete: BudgetRequest,
    pub avertissement: String,
}

fn montant_positif(montant: &str) -> Result<Centimes, EngineError> {
    let montant: Centimes = montant.parse()?;
    if !montant.est_positif() {
        return Err(EngineError::MontantInvalide(
            "le montant doit être supérieur à 0".to_string(),
        ));
    }
    Ok(montant)
}

fn code_periode_autorise(code: &str) -> Result<String, EngineError> {
    let code = util::texte_obligatoire(code, "code type période")?;
    if est_periode_technique(&code) {
        return Err(EngineError::PeriodeReservee(code));
    }
    Ok(code)
}

/// Create: reference, period code and a positive amount are mandatory;
/// the target date is optional (the server defaults it). A `TECHNIQUE`
/// period can never be created.
pub fn requete_creation(form: &FormulaireBudget) -> Result<BudgetRequest, EngineError> {
    let nom_reference = util::texte_obligatoire(&form.nom_reference, "nom référence")?;
    let code = code_periode_autorise(&form.code_type_periode)?;
    let montant = montant_positif(&form.montant)?;
    Ok(BudgetRequest {
        nom_reference,
        code_type_periode: Some(code),
        date_cible: dates::parse_date_opt(&form.date_cible)?,
        montant_en_centimes: Some(montant.centimes()),
    })
}

/// Reconduct: generates the following period for the same reference. The
/// amount is optional and defaults server-side to the prior period's;
/// same `TECHNIQUE` prohibition as create.
pub fn requete_reconduction(form: &FormulaireBudget) -> Result<BudgetRequest, EngineError> {
    let nom_reference = util::texte_obligatoire(&form.nom_reference, "nom référence")?;
    let code = code_periode_autorise(&form.code_type_periode)?;
    let montant = match Centimes::parse_opt(&form.montant)? {
        Some(_) => Some(montant_positif(&form.montant)?.centimes()),
        None => None,
    };
    Ok(BudgetRequest {
        nom_reference,
        code_type_periode: Some(code),
        date_cible: dates::parse_date_opt(&form.date_cible)?,
        montant_en_centimes: montant,
    })
}

/// Modify: the target date must match an existing period's start date,
/// that is how the backend identifies the period to change. The period
/// code is forwarded to disambiguate references holding several types.
pub fn requete_modification(form: &FormulaireBudget) -> Result<BudgetRequest, EngineError> {
    let nom_reference = util::texte_obligatoire(&form.nom_reference, "nom référence")?;
    let date_cible = util::texte_obligatoire(&form.date_cible, "date cible")?;
    let date_cible = dates::parse_date(&date_cible)?;
    let montant = montant_positif(&form.montant)?;
    Ok(BudgetRequest {
        nom_reference,
        code_type_periode: util::texte_optionnel(&form.code_type_periode),
        date_cible: Some(date_cible),
        montant_en_centimes: Some(montant.centimes()),
    })
}

/// Delete: requires the full (reference, period code, target date) key and
/// returns the cascade notice alongside the request.
pub fn requete_suppression(form: &FormulaireBudget) -> Result<SuppressionBudget, EngineError> {
    let nom_reference = util::texte_obligatoire(&form.nom_reference, "nom référence")?;
    let code = util::texte_obligatoire(&form.code_type_periode, "code type période")?;
    let date_cible = util::texte_obligatoire(&form.date_cible, "date cible")?;
    let date_cible = dates::parse_date(&date_cible)?;

    let avertissement = format!(
        "Supprime le budget du {} et tous les budgets postérieurs pour « {} » (règle backend).",
        dates::format_date(date_cible),
        nom_reference
    );

    Ok(SuppressionBudget {
        requete: BudgetRequest {
            nom_reference,
            code_type_periode: Some(code),
            date_cible: Some(date_cible),
            montant_en_centimes: None,
        },
        avertissement,
    })
}

/// Lists the periods a deletion at `date_cible` would take with it: every
/// period of the reference starting on or after the target date.
#[must_use]
pub fn apercu_cascade(
    budgets: &[BudgetPeriode],
    date_cible: NaiveDate,
) -> Vec<&BudgetPeriode> {
    budgets
        .iter()
        .filter(|b| b.date_debut >= date_cible)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formulaire(nom: &str, code: &str, date: &str, montant: &str) -> FormulaireBudget {
        FormulaireBudget {
            nom_reference: nom.to_string(),
            code_type_periode: code.to_string(),
            date_cible: date.to_string(),
            montant: montant.to_string(),
        }
    }

    fn periode(code: &str, debut: &str, fin: &str, montant: i64) -> BudgetPeriode {
        BudgetPeriode {
            type_periode: code.to_string(),
            date_debut: dates::parse_date(debut).unwrap(),
            date_fin: dates::parse_date(fin).unwrap(),
            montant_en_centimes: montant,
        }
    }

    #[test]
    fn creation_valide() {
        let requete =
            requete_creation(&formulaire("Loisirs", "MENSUEL", "", "120,00")).unwrap();
        assert_eq!(requete.nom_reference, "Loisirs");
        assert_eq!(requete.code_type_periode.as_deref(), Some("MENSUEL"));
        assert_eq!(requete.montant_en_centimes, Some(12_000));
        assert_eq!(requete.date_cible, None);
    }

    #[test]
    fn creation_technique_interdite_quelle_que_soit_la_casse() {
        for code in ["TECHNIQUE", "technique", "Technique", " technique "] {
            let erreur =
                requete_creation(&formulaire("Loisirs", code, "", "120,00")).unwrap_err();
            assert!(
                matches!(erreur, EngineError::PeriodeReservee(_)),
                "{code}: {erreur:?}"
            );
        }
    }

    #[test]
    fn reconduction_technique_interdite_et_montant_optionnel() {
        assert!(matches!(
            requete_reconduction(&formulaire("Loisirs", "technique", "", "")).unwrap_err(),
            EngineError::PeriodeReservee(_)
        ));

        let sans_montant =
            requete_reconduction(&formulaire("Loisirs", "MENSUEL", "", "")).unwrap();
        assert_eq!(sans_montant.montant_en_centimes, None);

        let avec_montant =
            requete_reconduction(&formulaire("Loisirs", "MENSUEL", "", "99,90")).unwrap();
        assert_eq!(avec_montant.montant_en_centimes, Some(9990));
    }

    #[test]
    fn modification_exige_la_date_cible() {
        let erreur =
            requete_modification(&formulaire("Loisirs", "MENSUEL", "", "120,00")).unwrap_err();
        assert_eq!(erreur, EngineError::ChampManquant("date cible".to_string()));

        let requete =
            requete_modification(&formulaire("Loisirs", "MENSUEL", "2025-03-01", "120,00"))
                .unwrap();
        assert_eq!(
            requete.date_cible,
            Some(dates::parse_date("2025-03-01").unwrap())
        );
        assert_eq!(requete.code_type_periode.as_deref(), Some("MENSUEL"));
    }

    #[test]
    fn suppression_porte_l_avertissement_de_cascade() {
        let suppression =
            requete_suppression(&formulaire("Loisirs", "MENSUEL", "2025-03-01", "")).unwrap();
        assert_eq!(suppression.requete.nom_reference, "Loisirs");
        assert_eq!(suppression.requete.montant_en_centimes, None);
        assert!(suppression.avertissement.contains("2025-03-01"));
        assert!(suppression.avertissement.contains("postérieurs"));
    }

    #[test]
    fn apercu_cascade_prend_la_date_et_toutes_les_suivantes() {
        let budgets = [
            periode("MENSUEL", "2025-01-01", "2025-01-31", 100),
            periode("MENSUEL", "2025-02-01", "2025-02-28", 100),
            periode("MENSUEL", "2025-03-01", "2025-03-31", 100),
            periode("ANNUEL", "2025-06-01", "2026-05-31", 1200),
        ];
        let cible = dates::parse_date("2025-03-01").unwrap();
        let touches = apercu_cascade(&budgets, cible);
        let debuts: Vec<_> = touches.iter().map(|b| dates::format_date(b.date_debut)).collect();
        assert_eq!(debuts, vec!["2025-03-01", "2025-06-01"]);
    }

    #[test]
    fn extraire_code_type_tolere_les_libelles_decores() {
        assert_eq!(extraire_code_type("Mensuel [MENSUEL]"), "MENSUEL");
        assert_eq!(extraire_code_type("MENSUEL"), "MENSUEL");
        assert_eq!(extraire_code_type("["), "[");
    }

    #[test]
    fn prefiller_recopie_la_periode() {
        let mut form = FormulaireBudget::default();
        form.prefiller(
            "Loisirs",
            &periode("Mensuel [MENSUEL]", "2025-03-01", "2025-03-31", 12_000),
        );
        assert_eq!(form.nom_reference, "Loisirs");
        assert_eq!(form.code_type_periode, "MENSUEL");
        assert_eq!(form.date_cible, "2025-03-01");
        assert_eq!(form.montant, "120.00");
    }
}
