//! Client-side validation errors.
//!
//! Everything in this enum is raised *before* a request leaves the process:
//! a value of [`EngineError`] means the form is not submittable and nothing
//! was sent to the backend.
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Montant invalide : {0}")]
    MontantInvalide(String),
    #[error("Date invalide : {0}")]
    DateInvalide(String),
    #[error("Champ obligatoire manquant : {0}")]
    ChampManquant(String),
    #[error("Le total des lignes ({somme} centimes) diffère du montant saisi ({saisi} centimes)")]
    LignesIncoherentes { somme: i64, saisi: i64 },
    #[error("Ligne {0} incomplète : montant manquant")]
    LigneIncomplete(u32),
    #[error("Le type de période « {0} » ne peut être ni créé ni reconduit")]
    PeriodeReservee(String),
    #[error("Les comptes d'un transfert doivent être distincts")]
    ComptesIdentiques,
}
