use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod erreur {
    use super::*;

    /// Structured error object returned by every Monatis endpoint on failure.
    ///
    /// `libelle` is the human-readable message; `cause` nests the upstream
    /// error (possibly several levels deep) and must be preserved for
    /// diagnostics.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ErreurDto {
        #[serde(default)]
        pub type_erreur: Option<String>,
        #[serde(default)]
        pub type_domaine: Option<String>,
        #[serde(default)]
        pub code: Option<String>,
        #[serde(default)]
        pub libelle: Option<String>,
        #[serde(default)]
        pub cause: Option<Box<ErreurDto>>,
    }

    impl ErreurDto {
        /// Walks the error and its nested causes, outermost first.
        pub fn chaine(&self) -> impl Iterator<Item = &ErreurDto> {
            let mut next = Some(self);
            std::iter::from_fn(move || {
                let current = next?;
                next = current.cause.as_deref();
                Some(current)
            })
        }

        /// One-line summary of a single level: `"DOMAINE CODE - libelle"`.
        pub fn resume(&self) -> String {
            let tete = [self.type_domaine.as_deref(), self.code.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            match (tete.is_empty(), self.libelle.as_deref()) {
                (false, Some(libelle)) => format!("{tete} - {libelle}"),
                (false, None) => tete,
                (true, Some(libelle)) => libelle.to_string(),
                (true, None) => String::new(),
            }
        }
    }
}

pub mod reference {
    use super::*;

    /// Request body for reference (name/label) entities: banks, categories,
    /// sub-categories, beneficiaries, account holders.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReferenceRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub nom: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub libelle: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Reference {
        pub nom: String,
        #[serde(default)]
        pub libelle: Option<String>,
    }

    /// A holder together with the internal accounts attached to it.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Titulaire {
        pub nom: String,
        #[serde(default)]
        pub libelle: Option<String>,
        #[serde(default)]
        pub comptes_internes: Option<Vec<super::compte::Compte>>,
        #[serde(default)]
        pub identifiants_comptes_internes: Option<Vec<String>>,
    }

    impl Titulaire {
        /// Canonical list of attached account ids, whichever wire shape the
        /// server used.
        pub fn identifiants_comptes(&self) -> Vec<&str> {
            if let Some(comptes) = &self.comptes_internes {
                return comptes.iter().map(|c| c.identifiant.as_str()).collect();
            }
            self.identifiants_comptes_internes
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(String::as_str)
                .collect()
        }
    }
}

pub mod compte {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TypeFonctionnement {
        pub code: String,
        #[serde(default)]
        pub libelle: Option<String>,
    }

    /// Request body shared by external and technical accounts.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CompteRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub libelle: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Compte {
        pub identifiant: String,
        #[serde(default)]
        pub libelle: Option<String>,
    }

    /// Internal account, with its opening balance and bank/holder links.
    ///
    /// Older deployments send the bank as a flat `nomBanque` string, newer
    /// ones as a nested reference; both are accepted and normalized through
    /// [`CompteInterne::banque_nom`].
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CompteInterne {
        pub identifiant: String,
        #[serde(default)]
        pub libelle: Option<String>,
        #[serde(default)]
        pub date_cloture: Option<NaiveDate>,
        #[serde(default)]
        pub date_solde_initial: Option<NaiveDate>,
        #[serde(default)]
        pub montant_solde_initial_en_centimes: Option<i64>,
        #[serde(default)]
        pub code_type_fonctionnement: Option<String>,
        #[serde(default)]
        pub type_fonctionnement: Option<TypeFonctionnement>,
        #[serde(default)]
        pub banque: Option<super::reference::Reference>,
        #[serde(default)]
        pub nom_banque: Option<String>,
        #[serde(default)]
        pub titulaires: Option<Vec<super::reference::Reference>>,
        #[serde(default)]
        pub noms_titulaires: Option<Vec<String>>,
    }

    impl CompteInterne {
        pub fn banque_nom(&self) -> Option<&str> {
            self.banque
                .as_ref()
                .map(|b| b.nom.as_str())
                .or(self.nom_banque.as_deref())
        }

        pub fn code_type(&self) -> Option<&str> {
            self.code_type_fonctionnement
                .as_deref()
                .or_else(|| self.type_fonctionnement.as_ref().map(|t| t.code.as_str()))
        }

        pub fn titulaire_noms(&self) -> Vec<&str> {
            if let Some(titulaires) = &self.titulaires {
                return titulaires.iter().map(|t| t.nom.as_str()).collect();
            }
            self.noms_titulaires
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(String::as_str)
                .collect()
        }
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CompteInterneRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub libelle: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_cloture: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub code_type_fonctionnement: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_solde_initial: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub montant_solde_initial_en_centimes: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub nom_banque: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub noms_titulaires: Option<Vec<String>>,
    }
}

pub mod operation {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TypeOperationInfo {
        pub code: String,
        #[serde(default)]
        pub libelle: Option<String>,
    }

    /// Request body of the nine specialized creation endpoints.
    ///
    /// Only the account fields relevant to the chosen kind are populated;
    /// every blank field is omitted from the JSON body, never sent as null.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct OperationSpecialeRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub numero: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub libelle: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_valeur: Option<NaiveDate>,
        pub montant_en_centimes: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant_compte_externe: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant_compte_courant: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant_compte_courant_recette: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant_compte_courant_depense: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant_compte_financier: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant_compte_bien: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub nom_sous_categorie: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub noms_beneficiaires: Option<Vec<String>>,
    }

    /// Request body for the generic `/operations/new` endpoint, where the
    /// caller names the type and both accounts explicitly.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct OperationCreationRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub numero: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub libelle: Option<String>,
        pub code_type_operation: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_valeur: Option<NaiveDate>,
        pub montant_en_centimes: i64,
        pub identifiant_compte_depense: String,
        pub identifiant_compte_recette: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub nom_sous_categorie: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub noms_beneficiaires: Option<Vec<String>>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct LigneModificationRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub numero_ligne: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub libelle: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_comptabilisation: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub montant_en_centimes: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub nom_sous_categorie: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub noms_beneficiaires: Option<Vec<String>>,
    }

    /// Request body for `PUT /operations/mod/{numero}`.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct OperationModificationRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub numero: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub libelle: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub code_type_operation: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_valeur: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub montant_en_centimes: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant_compte_depense: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub identifiant_compte_recette: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pointee: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub lignes: Option<Vec<LigneModificationRequest>>,
    }

    /// Detail line of an operation as returned by the server.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Ligne {
        pub numero_ligne: u32,
        #[serde(default)]
        pub libelle: Option<String>,
        #[serde(default)]
        pub date_comptabilisation: Option<NaiveDate>,
        pub montant_en_centimes: i64,
        #[serde(default)]
        pub nom_sous_categorie: Option<String>,
        #[serde(default)]
        pub noms_beneficiaires: Option<Vec<String>>,
        #[serde(default)]
        pub sous_categorie: Option<super::reference::Reference>,
        #[serde(default)]
        pub beneficiaires: Option<Vec<super::reference::Reference>>,
    }

    impl Ligne {
        pub fn sous_categorie_nom(&self) -> Option<&str> {
            self.nom_sous_categorie
                .as_deref()
                .or_else(|| self.sous_categorie.as_ref().map(|r| r.nom.as_str()))
        }

        pub fn beneficiaire_noms(&self) -> Vec<&str> {
            if let Some(noms) = &self.noms_beneficiaires {
                return noms.iter().map(String::as_str).collect();
            }
            self.beneficiaires
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|r| r.nom.as_str())
                .collect()
        }
    }

    /// An operation as returned by `/operations/get` and `/operations/all`.
    ///
    /// Account links come back either as flat ids or as nested account
    /// objects depending on the endpoint; the accessors below give the one
    /// canonical shape the rest of the system uses.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Operation {
        pub numero: String,
        #[serde(default)]
        pub libelle: Option<String>,
        pub date_valeur: NaiveDate,
        pub montant_en_centimes: i64,
        #[serde(default)]
        pub pointee: Option<bool>,
        #[serde(default)]
        pub code_type_operation: Option<String>,
        #[serde(default)]
        pub type_operation: Option<TypeOperationInfo>,
        #[serde(default)]
        pub identifiant_compte_depense: Option<String>,
        #[serde(default)]
        pub identifiant_compte_recette: Option<String>,
        #[serde(default)]
        pub compte_depense: Option<super::compte::Compte>,
        #[serde(default)]
        pub compte_recette: Option<super::compte::Compte>,
        #[serde(default)]
        pub lignes: Option<Vec<Ligne>>,
        #[serde(default)]
        pub nom_sous_categorie: Option<String>,
        #[serde(default)]
        pub noms_beneficiaires: Option<Vec<String>>,
    }

    impl Operation {
        pub fn code_type(&self) -> Option<&str> {
            self.code_type_operation
                .as_deref()
                .or_else(|| self.type_operation.as_ref().map(|t| t.code.as_str()))
        }

        pub fn depense_id(&self) -> Option<&str> {
            self.identifiant_compte_depense
                .as_deref()
                .or_else(|| self.compte_depense.as_ref().map(|c| c.identifiant.as_str()))
        }

        pub fn recette_id(&self) -> Option<&str> {
            self.identifiant_compte_recette
                .as_deref()
                .or_else(|| self.compte_recette.as_ref().map(|c| c.identifiant.as_str()))
        }

        pub fn lignes(&self) -> &[Ligne] {
            self.lignes.as_deref().unwrap_or_default()
        }
    }
}

pub mod budget {
    use super::*;

    /// The one wire shape used by all four budget lifecycle requests.
    ///
    /// Budgets have no surrogate id: the (reference name, period code,
    /// start date) tuple is the key, so which fields are required depends
    /// on the operation.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetRequest {
        pub nom_reference: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub code_type_periode: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_cible: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub montant_en_centimes: Option<i64>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetPeriode {
        pub type_periode: String,
        pub date_debut: NaiveDate,
        pub date_fin: NaiveDate,
        pub montant_en_centimes: i64,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetsParReference {
        pub reference: super::reference::Reference,
        pub budgets: Vec<BudgetPeriode>,
    }
}

pub mod rapport {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReleveCompteRequest {
        pub identifiant_compte: String,
        pub date_debut: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_fin: Option<NaiveDate>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct OperationReleve {
        pub numero: String,
        #[serde(default)]
        pub code_type_operation: Option<String>,
        pub date_valeur: NaiveDate,
        #[serde(default)]
        pub libelle: Option<String>,
        pub montant_en_euros: f64,
        #[serde(default)]
        pub identifiant_autre_compte: Option<String>,
        #[serde(default)]
        pub libelle_autre_compte: Option<String>,
        #[serde(default)]
        pub code_type_autre_compte: Option<String>,
    }

    /// Account statement: balances and the two operation buckets are
    /// computed server-side; the client only renders them.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReleveCompte {
        pub date_debut_releve: NaiveDate,
        pub date_fin_releve: NaiveDate,
        pub montant_solde_debut_releve_en_euros: f64,
        pub montant_solde_fin_releve_en_euros: f64,
        pub montant_total_operations_recette_en_euros: f64,
        pub montant_total_operations_depense_en_euros: f64,
        #[serde(default)]
        pub operations_recette: Vec<OperationReleve>,
        #[serde(default)]
        pub operations_depense: Vec<OperationReleve>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct HistoriquePlusMoinsValueRequest {
        pub identifiant_compte: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub code_type_periode: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_debut: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_fin: Option<NaiveDate>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PlusMoinsValue {
        pub date_debut_evaluation: NaiveDate,
        pub date_fin_evaluation: NaiveDate,
        pub montant_solde_initial_en_euros: f64,
        pub montant_solde_final_en_euros: f64,
        pub montant_reel_en_euros: f64,
        pub montant_technique_en_euros: f64,
        pub montant_plus_moins_value_en_euros: f64,
        pub montant_plus_moins_value_en_pourcentage: f64,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct HistoriquePlusMoinsValue {
        #[serde(default)]
        pub plus_moins_values: Vec<PlusMoinsValue>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EtatPlusMoinsValueRequest {
        pub code_type_periode: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_cible: Option<NaiveDate>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EtatPlusMoinsValue {
        pub plus_moins_value: PlusMoinsValue,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ListeCompteInterneRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_cible: Option<NaiveDate>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResumeCompteInterne {
        pub compte_interne: super::compte::Compte,
        pub date_solde: NaiveDate,
        pub montant_solde_en_euros: f64,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResumesParTypeFonctionnement {
        pub type_fonctionnement: super::compte::TypeFonctionnement,
        pub comptes_internes: Vec<ResumeCompteInterne>,
    }
}

pub mod evaluation {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EvaluationRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub cle: Option<String>,
        pub identifiant_compte_interne: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_solde: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub libelle: Option<String>,
        pub montant_solde_en_centimes: i64,
    }

    /// A balance evaluation pinning an internal account to a known value
    /// at a given date.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Evaluation {
        pub cle: String,
        pub date_solde: NaiveDate,
        pub montant_solde_en_centimes: i64,
        #[serde(default)]
        pub libelle: Option<String>,
        #[serde(default)]
        pub identifiant_compte_interne: Option<String>,
        #[serde(default)]
        pub compte_interne: Option<super::compte::Compte>,
        #[serde(default)]
        pub compte_technique: Option<super::compte::Compte>,
    }

    impl Evaluation {
        pub fn compte_interne_id(&self) -> Option<&str> {
            self.identifiant_compte_interne
                .as_deref()
                .or_else(|| self.compte_interne.as_ref().map(|c| c.identifiant.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_omit_blank_optionals() {
        let req = budget::BudgetRequest {
            nom_reference: "Loisirs".to_string(),
            code_type_periode: Some("MENSUEL".to_string()),
            date_cible: None,
            montant_en_centimes: Some(1250),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["nomReference"], "Loisirs");
        assert_eq!(json["codeTypePeriode"], "MENSUEL");
        assert_eq!(json["montantEnCentimes"], 1250);
        assert!(json.get("dateCible").is_none());
    }

    #[test]
    fn erreur_chaine_walks_causes() {
        let json = r#"{
            "typeErreur": "FONCTIONNELLE",
            "typeDomaine": "BUDGET",
            "code": "B001",
            "libelle": "Budget introuvable",
            "cause": {
                "typeErreur": "TECHNIQUE",
                "typeDomaine": "PERSISTENCE",
                "code": "P042",
                "libelle": "Cle inconnue",
                "cause": null
            }
        }"#;
        let erreur: erreur::ErreurDto = serde_json::from_str(json).unwrap();
        let niveaux: Vec<_> = erreur.chaine().collect();
        assert_eq!(niveaux.len(), 2);
        assert_eq!(niveaux[0].resume(), "BUDGET B001 - Budget introuvable");
        assert_eq!(niveaux[1].resume(), "PERSISTENCE P042 - Cle inconnue");
    }

    #[test]
    fn operation_accessors_prefer_flat_then_nested() {
        let json = r#"{
            "numero": "OP-1",
            "dateValeur": "2025-03-01",
            "montantEnCentimes": 3500,
            "typeOperation": {"code": "DEPENSE", "libelle": "Depense"},
            "compteDepense": {"identifiant": "EXT1", "libelle": null},
            "identifiantCompteRecette": "CC1"
        }"#;
        let op: operation::Operation = serde_json::from_str(json).unwrap();
        assert_eq!(op.code_type(), Some("DEPENSE"));
        assert_eq!(op.depense_id(), Some("EXT1"));
        assert_eq!(op.recette_id(), Some("CC1"));
        assert!(op.lignes().is_empty());
    }
}
