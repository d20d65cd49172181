//! The nine specialized operation kinds and their account-role contract.
//!
//! Each kind owns a fixed set of mandatory account fields and one creation
//! endpoint. Both are plain table lookups: adding a kind means one more
//! row in each table and nothing else changes.

use api_types::operation::OperationSpecialeRequest;

use crate::{Centimes, EngineError, dates, util};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperation {
    Transfert,
    Depense,
    Recette,
    Vente,
    Achat,
    Retrait,
    Liquidation,
    Depot,
    Investissement,
}

/// Account roles a specialized creation form can require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChampCompte {
    CompteExterne,
    CompteCourant,
    CompteCourantRecette,
    CompteCourantDepense,
    CompteFinancier,
    CompteBien,
}

impl ChampCompte {
    /// Human label used in validation messages.
    #[must_use]
    pub const fn libelle(self) -> &'static str {
        match self {
            Self::CompteExterne => "compte externe",
            Self::CompteCourant => "compte courant",
            Self::CompteCourantRecette => "compte courant recette",
            Self::CompteCourantDepense => "compte courant dépense",
            Self::CompteFinancier => "compte financier",
            Self::CompteBien => "compte bien",
        }
    }
}

impl TypeOperation {
    pub const TOUS: [TypeOperation; 9] = [
        Self::Transfert,
        Self::Depense,
        Self::Recette,
        Self::Vente,
        Self::Achat,
        Self::Retrait,
        Self::Liquidation,
        Self::Depot,
        Self::Investissement,
    ];

    /// Canonical lowercase code, as used in endpoint paths.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Transfert => "transfert",
            Self::Depense => "depense",
            Self::Recette => "recette",
            Self::Vente => "vente",
            Self::Achat => "achat",
            Self::Retrait => "retrait",
            Self::Liquidation => "liquidation",
            Self::Depot => "depot",
            Self::Investissement => "investissement",
        }
    }

    pub fn depuis_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::TOUS.into_iter().find(|t| t.code() == code)
    }

    /// The mandatory account fields of this kind. Verbatim business rule.
    #[must_use]
    pub const fn champs_obligatoires(self) -> &'static [ChampCompte] {
        use ChampCompte::*;
        match self {
            Self::Transfert => &[CompteCourantDepense, CompteCourantRecette],
            Self::Depense | Self::Recette => &[CompteExterne, CompteCourant],
            Self::Vente | Self::Achat => &[CompteExterne, CompteBien],
            Self::Retrait | Self::Liquidation | Self::Depot | Self::Investissement => {
                &[CompteFinancier, CompteCourant]
            }
        }
    }

    /// Creation endpoint path, relative to the API base.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Transfert => "operations/transfert",
            Self::Depense => "operations/depense",
            Self::Recette => "operations/recette",
            Self::Vente => "operations/vente",
            Self::Achat => "operations/achat",
            Self::Retrait => "operations/retrait",
            Self::Liquidation => "operations/liquidation",
            Self::Depot => "operations/depot",
            Self::Investissement => "operations/investissement",
        }
    }

    /// Only dépense/recette carry a sub-category and beneficiaries.
    #[must_use]
    pub const fn details_autorises(self) -> bool {
        matches!(self, Self::Depense | Self::Recette)
    }
}

/// Raw form values for a specialized creation screen. One field per
/// account role; only the roles required by the chosen kind are read.
#[derive(Clone, Debug, Default)]
pub struct FormulaireSpecialise {
    pub numero: String,
    pub libelle: String,
    pub date_valeur: String,
    pub montant: String,
    pub compte_externe: String,
    pub compte_courant: String,
    pub compte_courant_recette: String,
    pub compte_courant_depense: String,
    pub compte_financier: String,
    pub compte_bien: String,
    pub nom_sous_categorie: String,
    pub noms_beneficiaires: String,
}

impl FormulaireSpecialise {
    #[must_use]
    pub fn valeur(&self, champ: ChampCompte) -> &str {
        match champ {
            ChampCompte::CompteExterne => &self.compte_externe,
            ChampCompte::CompteCourant => &self.compte_courant,
            ChampCompte::CompteCourantRecette => &self.compte_courant_recette,
            ChampCompte::CompteCourantDepense => &self.compte_courant_depense,
            ChampCompte::CompteFinancier => &self.compte_financier,
            ChampCompte::CompteBien => &self.compte_bien,
        }
    }
}

/// Submit verdict for a specialized form, field by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerdictSpecialise {
    pub montant_valide: bool,
    pub date_valide: bool,
    pub champs_manquants: Vec<ChampCompte>,
    /// Transfert only: both current accounts name the same account.
    pub comptes_identiques: bool,
    pub soumettable: bool,
}

/// Checks the form against the kind's contract without building a request.
#[must_use]
pub fn verifier(type_op: TypeOperation, form: &FormulaireSpecialise) -> VerdictSpecialise {
    let montant_valide = form
        .montant
        .parse::<Centimes>()
        .map(Centimes::est_positif)
        .unwrap_or(false);
    let date_valide = dates::parse_date_opt(&form.date_valeur).is_ok();

    let champs_manquants: Vec<ChampCompte> = type_op
        .champs_obligatoires()
        .iter()
        .copied()
        .filter(|champ| form.valeur(*champ).trim().is_empty())
        .collect();

    let comptes_identiques = type_op == TypeOperation::Transfert
        && !form.compte_courant_depense.trim().is_empty()
        && form.compte_courant_depense.trim() == form.compte_courant_recette.trim();

    let soumettable =
        montant_valide && date_valide && champs_manquants.is_empty() && !comptes_identiques;

    VerdictSpecialise {
        montant_valide,
        date_valide,
        champs_manquants,
        comptes_identiques,
        soumettable,
    }
}

/// Builds the creation payload for the kind's endpoint.
///
/// Exactly the account fields relevant to the kind are populated; every
/// other field is left out of the body. Category and beneficiaries are
/// only forwarded for dépense/recette.
pub fn construire_requete(
    type_op: TypeOperation,
    form: &FormulaireSpecialise,
) -> Result<OperationSpecialeRequest, EngineError> {
    let montant: Centimes = form.montant.parse()?;
    if !montant.est_positif() {
        return Err(EngineError::MontantInvalide(form.montant.trim().to_string()));
    }
    let date_valeur = dates::parse_date_opt(&form.date_valeur)?;

    let mut requete = OperationSpecialeRequest {
        numero: util::texte_optionnel(&form.numero),
        libelle: util::texte_optionnel(&form.libelle),
        date_valeur,
        montant_en_centimes: montant.centimes(),
        ..OperationSpecialeRequest::default()
    };

    for champ in type_op.champs_obligatoires() {
        let valeur = util::texte_obligatoire(form.valeur(*champ), champ.libelle())?;
        match champ {
            ChampCompte::CompteExterne => requete.identifiant_compte_externe = Some(valeur),
            ChampCompte::CompteCourant => requete.identifiant_compte_courant = Some(valeur),
            ChampCompte::CompteCourantRecette => {
                requete.identifiant_compte_courant_recette = Some(valeur);
            }
            ChampCompte::CompteCourantDepense => {
                requete.identifiant_compte_courant_depense = Some(valeur);
            }
            ChampCompte::CompteFinancier => requete.identifiant_compte_financier = Some(valeur),
            ChampCompte::CompteBien => requete.identifiant_compte_bien = Some(valeur),
        }
    }

    if type_op == TypeOperation::Transfert
        && requete.identifiant_compte_courant_depense == requete.identifiant_compte_courant_recette
    {
        return Err(EngineError::ComptesIdentiques);
    }

    if type_op.details_autorises() {
        requete.nom_sous_categorie = util::texte_optionnel(&form.nom_sous_categorie);
        let beneficiaires = util::decouper_noms(&form.noms_beneficiaires);
        requete.noms_beneficiaires = (!beneficiaires.is_empty()).then_some(beneficiaires);
    }

    Ok(requete)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formulaire_minimal() -> FormulaireSpecialise {
        FormulaireSpecialise {
            montant: "12,50".to_string(),
            ..FormulaireSpecialise::default()
        }
    }

    #[test]
    fn table_des_champs_obligatoires() {
        use ChampCompte::*;
        let attendus: [(TypeOperation, &[ChampCompte]); 9] = [
            (
                TypeOperation::Transfert,
                &[CompteCourantDepense, CompteCourantRecette],
            ),
            (TypeOperation::Depense, &[CompteExterne, CompteCourant]),
            (TypeOperation::Recette, &[CompteExterne, CompteCourant]),
            (TypeOperation::Vente, &[CompteExterne, CompteBien]),
            (TypeOperation::Achat, &[CompteExterne, CompteBien]),
            (TypeOperation::Retrait, &[CompteFinancier, CompteCourant]),
            (TypeOperation::Liquidation, &[CompteFinancier, CompteCourant]),
            (TypeOperation::Depot, &[CompteFinancier, CompteCourant]),
            (
                TypeOperation::Investissement,
                &[CompteFinancier, CompteCourant],
            ),
        ];
        for (type_op, champs) in attendus {
            assert_eq!(type_op.champs_obligatoires(), champs, "{:?}", type_op);
        }
    }

    #[test]
    fn chaque_type_a_son_endpoint() {
        for type_op in TypeOperation::TOUS {
            assert_eq!(
                type_op.endpoint(),
                format!("operations/{}", type_op.code())
            );
            assert_eq!(TypeOperation::depuis_code(type_op.code()), Some(type_op));
        }
        assert_eq!(TypeOperation::depuis_code("inconnu"), None);
    }

    #[test]
    fn vente_sans_compte_bien_non_soumettable() {
        let mut form = formulaire_minimal();
        form.compte_externe = "EXT1".to_string();

        let verdict = verifier(TypeOperation::Vente, &form);
        assert!(verdict.montant_valide);
        assert_eq!(verdict.champs_manquants, vec![ChampCompte::CompteBien]);
        assert!(!verdict.soumettable);

        form.compte_bien = "BIEN1".to_string();
        assert!(verifier(TypeOperation::Vente, &form).soumettable);
    }

    #[test]
    fn date_invalide_bloque_meme_si_comptes_remplis() {
        let mut form = formulaire_minimal();
        form.compte_externe = "EXT1".to_string();
        form.compte_courant = "CC1".to_string();
        form.date_valeur = "pas-une-date".to_string();

        let verdict = verifier(TypeOperation::Depense, &form);
        assert!(!verdict.date_valide);
        assert!(!verdict.soumettable);
    }

    #[test]
    fn transfert_vers_le_meme_compte_bloque() {
        let mut form = formulaire_minimal();
        form.compte_courant_depense = "CC1".to_string();
        form.compte_courant_recette = "CC1".to_string();

        let verdict = verifier(TypeOperation::Transfert, &form);
        assert!(verdict.comptes_identiques);
        assert!(!verdict.soumettable);
        assert_eq!(
            construire_requete(TypeOperation::Transfert, &form).unwrap_err(),
            EngineError::ComptesIdentiques
        );
    }

    #[test]
    fn la_requete_ne_porte_que_les_champs_du_type() {
        let mut form = formulaire_minimal();
        form.compte_financier = "FIN1".to_string();
        form.compte_courant = "CC1".to_string();
        // Leftovers from a previous kind selection must not leak through.
        form.compte_externe = "EXT1".to_string();
        form.nom_sous_categorie = "Courses".to_string();

        let requete = construire_requete(TypeOperation::Retrait, &form).unwrap();
        assert_eq!(requete.identifiant_compte_financier.as_deref(), Some("FIN1"));
        assert_eq!(requete.identifiant_compte_courant.as_deref(), Some("CC1"));
        assert_eq!(requete.identifiant_compte_externe, None);
        assert_eq!(requete.nom_sous_categorie, None);
        assert_eq!(requete.montant_en_centimes, 1250);
    }

    #[test]
    fn details_reserves_a_depense_et_recette() {
        let mut form = formulaire_minimal();
        form.compte_externe = "EXT1".to_string();
        form.compte_courant = "CC1".to_string();
        form.nom_sous_categorie = "Courses".to_string();
        form.noms_beneficiaires = "Alice, Bob, Alice".to_string();

        let requete = construire_requete(TypeOperation::Depense, &form).unwrap();
        assert_eq!(requete.nom_sous_categorie.as_deref(), Some("Courses"));
        assert_eq!(
            requete.noms_beneficiaires.as_deref(),
            Some(&["Alice".to_string(), "Bob".to_string()][..])
        );
    }

    #[test]
    fn champ_manquant_en_erreur_a_la_construction() {
        let mut form = formulaire_minimal();
        form.compte_externe = "EXT1".to_string();
        assert_eq!(
            construire_requete(TypeOperation::Vente, &form).unwrap_err(),
            EngineError::ChampManquant("compte bien".to_string())
        );
    }
}
