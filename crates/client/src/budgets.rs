use api_types::budget::{BudgetRequest, BudgetsParReference};
use engine::ReferenceBudget;
use reqwest::Method;

use crate::{CleCache, Client, Result};

impl Client {
    pub async fn budgets_all(
        &self,
        reference: ReferenceBudget,
    ) -> Result<Vec<BudgetsParReference>> {
        let url = self.url(&format!("budgets/{}/all", reference.segment()))?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn budgets_reference(
        &self,
        reference: ReferenceBudget,
        nom: &str,
    ) -> Result<BudgetsParReference> {
        let url = self.url_avec(&format!("budgets/{}/get", reference.segment()), nom)?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn budget_creer(
        &self,
        reference: ReferenceBudget,
        requete: &BudgetRequest,
    ) -> Result<BudgetsParReference> {
        self.mutation_budget(reference, "new", Method::POST, requete)
            .await
    }

    /// Reconducts the current period into the following one.
    pub async fn budget_reconduire(
        &self,
        reference: ReferenceBudget,
        requete: &BudgetRequest,
    ) -> Result<BudgetsParReference> {
        self.mutation_budget(reference, "next", Method::POST, requete)
            .await
    }

    pub async fn budget_modifier(
        &self,
        reference: ReferenceBudget,
        requete: &BudgetRequest,
    ) -> Result<BudgetsParReference> {
        self.mutation_budget(reference, "mod", Method::PUT, requete)
            .await
    }

    /// Cascading deletion: the backend removes the targeted period and
    /// every later one of the same reference. The body-carrying DELETE is
    /// part of the backend contract.
    pub async fn budget_supprimer(
        &self,
        reference: ReferenceBudget,
        requete: &BudgetRequest,
    ) -> Result<()> {
        let url = self.url(&format!("budgets/{}/del", reference.segment()))?;
        self.envoyer_sans_reponse(Method::DELETE, url, Some(requete))
            .await?;
        self.invalider_budgets(reference, &requete.nom_reference);
        Ok(())
    }

    async fn mutation_budget(
        &self,
        reference: ReferenceBudget,
        action: &str,
        verbe: Method,
        requete: &BudgetRequest,
    ) -> Result<BudgetsParReference> {
        let url = self.url(&format!("budgets/{}/{action}", reference.segment()))?;
        let resultat: BudgetsParReference = self.envoyer(verbe, url, Some(requete)).await?;
        self.invalider_budgets(reference, &requete.nom_reference);
        Ok(resultat)
    }

    /// Reconduction and cascade deletion can touch several records, so the
    /// whole family list goes stale along with the one reference.
    fn invalider_budgets(&self, reference: ReferenceBudget, nom: &str) {
        self.invalider([
            CleCache::Budgets(reference),
            CleCache::budgets_reference(reference, nom),
        ]);
    }
}
