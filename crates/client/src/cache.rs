//! Per-scope fetch generations.
//!
//! Screens fire independent in-flight requests; a superseded response must
//! never overwrite the state produced by a newer one. Every fetch takes a
//! [`Jeton`] for its scope; once the response arrives the token is only
//! honored if no newer fetch or mutation has bumped the scope since.
//! Mutations bump the affected scopes so cached lists are refetched rather
//! than patched in place.

use std::collections::HashMap;

use engine::{ReferenceBudget, util::cle_reference};

use crate::{comptes::TypeCompte, references::TypeReference};

/// Structured cache scope. One variant per list or record the screens
/// hold on to; reference names go through the accent-insensitive key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CleCache {
    Operations,
    Operation(String),
    Budgets(ReferenceBudget),
    BudgetsReference(ReferenceBudget, String),
    References(TypeReference),
    Comptes(TypeCompte),
    Compte(TypeCompte, String),
    Evaluations,
    Resumes,
}

impl CleCache {
    /// Scope of the budgets attached to one reference.
    #[must_use]
    pub fn budgets_reference(kind: ReferenceBudget, nom: &str) -> Self {
        Self::BudgetsReference(kind, cle_reference(nom))
    }
}

/// Proof that a fetch was started against a given scope generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jeton {
    cle: CleCache,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Generations {
    courantes: HashMap<CleCache, u64>,
}

impl Generations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch: bumps the scope and returns the token the response
    /// must present to be applied.
    pub fn demarrer(&mut self, cle: CleCache) -> Jeton {
        let generation = self.courantes.entry(cle.clone()).or_insert(0);
        *generation += 1;
        Jeton {
            cle,
            generation: *generation,
        }
    }

    /// True while no newer fetch or invalidation superseded this token.
    #[must_use]
    pub fn est_courant(&self, jeton: &Jeton) -> bool {
        self.courantes.get(&jeton.cle) == Some(&jeton.generation)
    }

    /// Marks a scope stale after a mutation: every in-flight response for
    /// it becomes discardable and the next reader must refetch.
    pub fn invalider(&mut self, cle: &CleCache) {
        *self.courantes.entry(cle.clone()).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn une_reponse_tardive_est_ecartee() {
        let mut generations = Generations::new();
        let premier = generations.demarrer(CleCache::Operations);
        let second = generations.demarrer(CleCache::Operations);

        // The newer fetch wins; the older in-flight response is stale.
        assert!(!generations.est_courant(&premier));
        assert!(generations.est_courant(&second));
    }

    #[test]
    fn une_mutation_invalide_le_scope() {
        let mut generations = Generations::new();
        let jeton = generations.demarrer(CleCache::Budgets(ReferenceBudget::Categorie));
        generations.invalider(&CleCache::Budgets(ReferenceBudget::Categorie));
        assert!(!generations.est_courant(&jeton));
    }

    #[test]
    fn les_scopes_sont_independants() {
        let mut generations = Generations::new();
        let operations = generations.demarrer(CleCache::Operations);
        generations.invalider(&CleCache::Evaluations);
        assert!(generations.est_courant(&operations));
    }

    #[test]
    fn la_cle_de_reference_ignore_les_accents() {
        assert_eq!(
            CleCache::budgets_reference(ReferenceBudget::Categorie, "Déplacements"),
            CleCache::budgets_reference(ReferenceBudget::Categorie, "deplacements"),
        );
    }
}
