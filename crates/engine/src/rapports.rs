//! Request shaping for the read-only reporting endpoints.
//!
//! The backend computes everything (balances, buckets, gain/loss series);
//! these builders only validate required fields and drop blank optionals
//! from the body.

use api_types::rapport::{
    EtatPlusMoinsValueRequest, HistoriquePlusMoinsValueRequest, ListeCompteInterneRequest,
    ReleveCompteRequest,
};

use crate::{EngineError, dates, util};

/// Account statement over a date range. Account id and start date are
/// mandatory; a blank end date means "up to now" and is omitted.
pub fn requete_releve(
    identifiant_compte: &str,
    date_debut: &str,
    date_fin: &str,
) -> Result<ReleveCompteRequest, EngineError> {
    let identifiant_compte = util::texte_obligatoire(identifiant_compte, "identifiant compte")?;
    let date_debut = util::texte_obligatoire(date_debut, "date début")?;
    Ok(ReleveCompteRequest {
        identifiant_compte,
        date_debut: dates::parse_date(&date_debut)?,
        date_fin: dates::parse_date_opt(date_fin)?,
    })
}

/// Historical capital gain/loss series for one account. Account id and
/// period code are mandatory, the date bounds are optional.
pub fn requete_historique(
    identifiant_compte: &str,
    code_type_periode: &str,
    date_debut: &str,
    date_fin: &str,
) -> Result<HistoriquePlusMoinsValueRequest, EngineError> {
    let identifiant_compte = util::texte_obligatoire(identifiant_compte, "identifiant compte")?;
    let code_type_periode = util::texte_obligatoire(code_type_periode, "code type période")?;
    Ok(HistoriquePlusMoinsValueRequest {
        identifiant_compte,
        code_type_periode: Some(code_type_periode),
        date_debut: dates::parse_date_opt(date_debut)?,
        date_fin: dates::parse_date_opt(date_fin)?,
    })
}

/// Point-in-time capital gain/loss, one record per account. Only the
/// period code is mandatory; a blank target date means "today" server-side.
pub fn requete_etat(
    code_type_periode: &str,
    date_cible: &str,
) -> Result<EtatPlusMoinsValueRequest, EngineError> {
    let code_type_periode = util::texte_obligatoire(code_type_periode, "code type période")?;
    Ok(EtatPlusMoinsValueRequest {
        code_type_periode,
        date_cible: dates::parse_date_opt(date_cible)?,
    })
}

/// Internal-account summary list at an optional target date.
pub fn requete_resumes(date_cible: &str) -> Result<ListeCompteInterneRequest, EngineError> {
    Ok(ListeCompteInterneRequest {
        date_cible: dates::parse_date_opt(date_cible)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releve_exige_compte_et_date_debut() {
        assert_eq!(
            requete_releve("", "2025-01-01", "").unwrap_err(),
            EngineError::ChampManquant("identifiant compte".to_string())
        );
        assert_eq!(
            requete_releve("CC1", "", "").unwrap_err(),
            EngineError::ChampManquant("date début".to_string())
        );

        let requete = requete_releve(" CC1 ", "2025-01-01", "").unwrap();
        assert_eq!(requete.identifiant_compte, "CC1");
        assert_eq!(requete.date_fin, None);
    }

    #[test]
    fn historique_exige_compte_et_code_periode() {
        assert!(requete_historique("", "MENSUEL", "", "").is_err());
        assert!(requete_historique("CC1", "", "", "").is_err());

        let requete = requete_historique("CC1", "MENSUEL", "2024-01-01", "").unwrap();
        assert_eq!(requete.code_type_periode.as_deref(), Some("MENSUEL"));
        assert!(requete.date_debut.is_some());
        assert_eq!(requete.date_fin, None);
    }

    #[test]
    fn etat_exige_le_code_periode() {
        assert_eq!(
            requete_etat("  ", "").unwrap_err(),
            EngineError::ChampManquant("code type période".to_string())
        );

        let requete = requete_etat("ANNUEL", "2025-06-30").unwrap();
        assert_eq!(requete.code_type_periode, "ANNUEL");
        assert!(requete.date_cible.is_some());
    }

    #[test]
    fn une_date_optionnelle_illisible_reste_une_erreur() {
        assert!(requete_etat("ANNUEL", "30/06/2025").is_err());
        assert!(requete_historique("CC1", "MENSUEL", "hier", "").is_err());
    }
}
