use api_types::evaluation::{Evaluation, EvaluationRequest};
use reqwest::Method;

use crate::{CleCache, Client, Result};

impl Client {
    pub async fn evaluations_all(&self) -> Result<Vec<Evaluation>> {
        let url = self.url("evaluations/all")?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn evaluation_get(&self, cle: &str) -> Result<Evaluation> {
        let url = self.url_avec("evaluations/get", cle)?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn evaluation_creer(&self, requete: &EvaluationRequest) -> Result<Evaluation> {
        let url = self.url("evaluations/new")?;
        let evaluation: Evaluation = self.envoyer(Method::POST, url, Some(requete)).await?;
        self.invalider([CleCache::Evaluations, CleCache::Resumes]);
        Ok(evaluation)
    }

    pub async fn evaluation_modifier(
        &self,
        cle: &str,
        requete: &EvaluationRequest,
    ) -> Result<Evaluation> {
        let url = self.url_avec("evaluations/mod", cle)?;
        let evaluation: Evaluation = self.envoyer(Method::PUT, url, Some(requete)).await?;
        self.invalider([CleCache::Evaluations, CleCache::Resumes]);
        Ok(evaluation)
    }

    pub async fn evaluation_supprimer(&self, cle: &str) -> Result<()> {
        let url = self.url_avec("evaluations/del", cle)?;
        self.envoyer_sans_reponse(Method::DELETE, url, Client::SANS_CORPS)
            .await?;
        self.invalider([CleCache::Evaluations, CleCache::Resumes]);
        Ok(())
    }
}
