//! Detail-line editing and reconciliation for an operation.
//!
//! An operation can be split into detail lines; as soon as at least one
//! line exists the header amount is *derived* from the sum of the lines
//! and the manually typed amount only serves to warn about disagreement.

use api_types::operation::{Ligne, LigneModificationRequest};

use crate::{Centimes, EngineError, dates, util};

/// One detail line as typed by the user. Everything is raw text: the
/// reconciliation contract is about form input, parsing happens here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LigneDraft {
    /// 1-based number, stable for the whole edit session.
    pub numero_ligne: u32,
    pub libelle: String,
    pub date_comptabilisation: String,
    pub montant: String,
    pub nom_sous_categorie: String,
    pub noms_beneficiaires: String,
}

/// Editing state for the detail lines of one operation.
///
/// Line numbers are assigned once and never reused: adding takes the next
/// unused integer, removing leaves the survivors untouched.
#[derive(Clone, Debug, Default)]
pub struct LigneEditor {
    lignes: Vec<LigneDraft>,
    derniere_sous_categorie: String,
    derniers_beneficiaires: String,
}

impl LigneEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the lines of a fetched operation into an edit session.
    #[must_use]
    pub fn depuis_operation(lignes: &[Ligne]) -> Self {
        let lignes = lignes
            .iter()
            .map(|ligne| LigneDraft {
                numero_ligne: ligne.numero_ligne,
                libelle: ligne.libelle.clone().unwrap_or_default(),
                date_comptabilisation: ligne
                    .date_comptabilisation
                    .map(dates::format_date)
                    .unwrap_or_default(),
                montant: Centimes::new(ligne.montant_en_centimes).to_euros_string(),
                nom_sous_categorie: ligne.sous_categorie_nom().unwrap_or_default().to_string(),
                noms_beneficiaires: ligne.beneficiaire_noms().join(", "),
            })
            .collect();
        Self {
            lignes,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn lignes(&self) -> &[LigneDraft] {
        &self.lignes
    }

    pub fn ligne_mut(&mut self, index: usize) -> Option<&mut LigneDraft> {
        self.lignes.get_mut(index)
    }

    /// Appends a new line numbered with the next unused integer.
    ///
    /// The booking date defaults to the operation's value date and the
    /// category/beneficiary fields are seeded from the last edited line.
    pub fn ajouter(&mut self, date_valeur: &str) -> &mut LigneDraft {
        let numero = self.prochain_numero();
        self.lignes.push(LigneDraft {
            numero_ligne: numero,
            libelle: String::new(),
            date_comptabilisation: date_valeur.to_string(),
            montant: String::new(),
            nom_sous_categorie: self.derniere_sous_categorie.clone(),
            noms_beneficiaires: self.derniers_beneficiaires.clone(),
        });
        let index = self.lignes.len() - 1;
        &mut self.lignes[index]
    }

    /// Removes a line. Survivors keep their numbers.
    pub fn supprimer(&mut self, index: usize) -> Option<LigneDraft> {
        if index < self.lignes.len() {
            Some(self.lignes.remove(index))
        } else {
            None
        }
    }

    /// Records the category last typed by the user, used to seed new lines.
    pub fn noter_sous_categorie(&mut self, valeur: &str) {
        self.derniere_sous_categorie = valeur.trim().to_string();
    }

    pub fn noter_beneficiaires(&mut self, valeur: &str) {
        self.derniers_beneficiaires = valeur.trim().to_string();
    }

    fn prochain_numero(&self) -> u32 {
        self.lignes
            .iter()
            .map(|l| l.numero_ligne)
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Outcome of reconciling the typed header amount with the detail lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconciliation {
    /// The amount that would actually be submitted: the manual amount when
    /// there are no lines, the sum of the lines otherwise.
    pub montant_effectif: Option<Centimes>,
    /// False when a non-blank line amount fails to parse to a positive
    /// integer number of cents.
    pub lignes_valides: bool,
    /// Lines whose amount field is still blank. Incomplete, not invalid,
    /// but submission stays blocked until they are filled or removed.
    pub lignes_incompletes: usize,
    /// True when a manual amount is typed and differs from the derived sum.
    pub desaccord: bool,
    pub soumettable: bool,
}

/// Applies the header/lines contract to the current form state.
///
/// With no lines the manual amount is authoritative. With lines the sum of
/// the lines is authoritative and the manual amount is advisory only: a
/// disagreement raises `desaccord` and blocks submission, it is never
/// silently corrected.
#[must_use]
pub fn reconcilier(montant_saisi: &str, lignes: &[LigneDraft]) -> Reconciliation {
    let manuel = Centimes::parse_opt(montant_saisi).ok().flatten();

    if lignes.is_empty() {
        let montant_effectif = manuel.filter(|m| m.est_positif());
        return Reconciliation {
            montant_effectif,
            lignes_valides: true,
            lignes_incompletes: 0,
            desaccord: false,
            soumettable: montant_effectif.is_some(),
        };
    }

    let mut somme = Centimes::ZERO;
    let mut lignes_valides = true;
    let mut lignes_incompletes = 0;
    for ligne in lignes {
        if ligne.montant.trim().is_empty() {
            lignes_incompletes += 1;
            continue;
        }
        match ligne.montant.parse::<Centimes>() {
            Ok(montant) if montant.est_positif() => {
                somme = somme.checked_add(montant).unwrap_or(somme);
            }
            _ => lignes_valides = false,
        }
    }

    let desaccord = manuel.is_some_and(|m| m != somme);
    let soumettable =
        lignes_valides && lignes_incompletes == 0 && somme.est_positif() && !desaccord;

    Reconciliation {
        montant_effectif: Some(somme),
        lignes_valides,
        lignes_incompletes,
        desaccord,
        soumettable,
    }
}

/// Converts the drafts into the wire shape for `PUT /operations/mod`.
///
/// Fails on the first line whose amount is blank or not a positive amount,
/// so callers should only invoke this after a submittable reconciliation.
pub fn requetes_lignes(
    lignes: &[LigneDraft],
) -> Result<Vec<LigneModificationRequest>, EngineError> {
    lignes
        .iter()
        .map(|ligne| {
            if ligne.montant.trim().is_empty() {
                return Err(EngineError::LigneIncomplete(ligne.numero_ligne));
            }
            let montant: Centimes = ligne.montant.parse()?;
            if !montant.est_positif() {
                return Err(EngineError::MontantInvalide(ligne.montant.trim().to_string()));
            }
            let beneficiaires = util::decouper_noms(&ligne.noms_beneficiaires);
            Ok(LigneModificationRequest {
                numero_ligne: Some(ligne.numero_ligne),
                libelle: util::texte_optionnel(&ligne.libelle),
                date_comptabilisation: dates::parse_date_opt(&ligne.date_comptabilisation)?,
                montant_en_centimes: Some(montant.centimes()),
                nom_sous_categorie: util::texte_optionnel(&ligne.nom_sous_categorie),
                noms_beneficiaires: (!beneficiaires.is_empty()).then_some(beneficiaires),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ligne(numero: u32, montant: &str) -> LigneDraft {
        LigneDraft {
            numero_ligne: numero,
            montant: montant.to_string(),
            ..LigneDraft::default()
        }
    }

    #[test]
    fn sans_ligne_le_montant_saisi_fait_foi() {
        let resultat = reconcilier("35,00", &[]);
        assert_eq!(resultat.montant_effectif, Some(Centimes::new(3500)));
        assert!(!resultat.desaccord);
        assert!(resultat.soumettable);
    }

    #[test]
    fn sans_ligne_un_montant_invalide_bloque() {
        let resultat = reconcilier("abc", &[]);
        assert_eq!(resultat.montant_effectif, None);
        assert!(!resultat.soumettable);

        let zero = reconcilier("0", &[]);
        assert!(!zero.soumettable);
    }

    #[test]
    fn la_somme_des_lignes_fait_foi() {
        let lignes = [ligne(1, "10,00"), ligne(2, "25,00")];
        let resultat = reconcilier("", &lignes);
        assert_eq!(resultat.montant_effectif, Some(Centimes::new(3500)));
        assert!(resultat.lignes_valides);
        assert!(!resultat.desaccord);
        assert!(resultat.soumettable);
    }

    #[test]
    fn desaccord_entre_saisie_et_somme_bloque() {
        let lignes = [ligne(1, "10,00"), ligne(2, "25,00")];
        let resultat = reconcilier("34,00", &lignes);
        assert_eq!(resultat.montant_effectif, Some(Centimes::new(3500)));
        assert!(resultat.desaccord);
        assert!(!resultat.soumettable);

        let accord = reconcilier("35,00", &lignes);
        assert!(!accord.desaccord);
        assert!(accord.soumettable);
    }

    #[test]
    fn ligne_vide_est_incomplete_pas_invalide() {
        let lignes = [ligne(1, "10,00"), ligne(2, "")];
        let resultat = reconcilier("", &lignes);
        assert!(resultat.lignes_valides);
        assert_eq!(resultat.lignes_incompletes, 1);
        assert!(!resultat.soumettable);
    }

    #[test]
    fn ligne_illisible_est_invalide() {
        let lignes = [ligne(1, "10,00"), ligne(2, "n/a")];
        let resultat = reconcilier("", &lignes);
        assert!(!resultat.lignes_valides);
        assert!(!resultat.soumettable);
    }

    #[test]
    fn numerotation_stable_apres_suppression() {
        let mut editeur = LigneEditor::new();
        editeur.ajouter("2025-03-01");
        editeur.ajouter("2025-03-01");
        editeur.ajouter("2025-03-01");
        assert_eq!(
            editeur.lignes().iter().map(|l| l.numero_ligne).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        editeur.supprimer(1);
        assert_eq!(
            editeur.lignes().iter().map(|l| l.numero_ligne).collect::<Vec<_>>(),
            vec![1, 3]
        );

        editeur.ajouter("2025-03-01");
        assert_eq!(editeur.lignes().last().map(|l| l.numero_ligne), Some(4));
    }

    #[test]
    fn nouvelle_ligne_herite_des_derniers_champs() {
        let mut editeur = LigneEditor::new();
        editeur.noter_sous_categorie("Courses");
        editeur.noter_beneficiaires("Alice, Bob");
        let ligne = editeur.ajouter("2025-03-01");
        assert_eq!(ligne.nom_sous_categorie, "Courses");
        assert_eq!(ligne.noms_beneficiaires, "Alice, Bob");
        assert_eq!(ligne.date_comptabilisation, "2025-03-01");
    }

    #[test]
    fn chargement_d_une_operation_existante() {
        let serveur = [Ligne {
            numero_ligne: 2,
            libelle: Some("Essence".to_string()),
            date_comptabilisation: crate::dates::parse_date("2025-03-02").ok(),
            montant_en_centimes: 4500,
            nom_sous_categorie: Some("Voiture".to_string()),
            noms_beneficiaires: Some(vec!["Alice".to_string()]),
            sous_categorie: None,
            beneficiaires: None,
        }];
        let mut editeur = LigneEditor::depuis_operation(&serveur);
        let charge = &editeur.lignes()[0];
        assert_eq!(charge.numero_ligne, 2);
        assert_eq!(charge.montant, "45.00");
        assert_eq!(charge.date_comptabilisation, "2025-03-02");
        assert_eq!(charge.noms_beneficiaires, "Alice");

        // A line added afterwards continues the numbering.
        assert_eq!(editeur.ajouter("2025-03-02").numero_ligne, 3);
    }

    #[test]
    fn conversion_en_requete_de_modification() {
        let mut brouillon = ligne(2, "12,50");
        brouillon.libelle = "Restaurant".to_string();
        brouillon.date_comptabilisation = "2025-03-02".to_string();
        brouillon.noms_beneficiaires = "Alice, Alice, Bob".to_string();

        let requetes = requetes_lignes(&[brouillon]).unwrap();
        assert_eq!(requetes.len(), 1);
        assert_eq!(requetes[0].numero_ligne, Some(2));
        assert_eq!(requetes[0].montant_en_centimes, Some(1250));
        assert_eq!(
            requetes[0].noms_beneficiaires.as_deref(),
            Some(&["Alice".to_string(), "Bob".to_string()][..])
        );

        let incomplete = ligne(3, "  ");
        assert_eq!(
            requetes_lignes(&[incomplete]).unwrap_err(),
            EngineError::LigneIncomplete(3)
        );
    }
}
