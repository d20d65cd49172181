//! Request-construction core of the Monatis client.
//!
//! Everything here is pure: the engine validates form input, keeps
//! multi-line operations coherent with their declared total, decides which
//! account roles each specialized operation kind requires, governs the
//! budget period lifecycle and shapes the reporting queries. It performs
//! no I/O; the `client` crate sends what this crate builds.

pub use argent::Centimes;
pub use budget::{
    FormulaireBudget, ReferenceBudget, SuppressionBudget, TYPE_PERIODE_TECHNIQUE,
    apercu_cascade, est_periode_technique, extraire_code_type, requete_creation,
    requete_modification, requete_reconduction, requete_suppression,
};
pub use error::EngineError;
pub use lignes::{LigneDraft, LigneEditor, Reconciliation, reconcilier, requetes_lignes};
pub use types::{
    ChampCompte, FormulaireSpecialise, TypeOperation, VerdictSpecialise, construire_requete,
    verifier,
};

pub mod argent;
pub mod budget;
pub mod dates;
mod error;
pub mod lignes;
pub mod rapports;
pub mod types;
pub mod util;
