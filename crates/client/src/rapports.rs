use api_types::rapport::{
    EtatPlusMoinsValue, EtatPlusMoinsValueRequest, HistoriquePlusMoinsValue,
    HistoriquePlusMoinsValueRequest, ListeCompteInterneRequest, ReleveCompte,
    ReleveCompteRequest, ResumesParTypeFonctionnement,
};

use crate::{Client, Result};

impl Client {
    /// Account statement: opening/closing balances and the two operation
    /// buckets, all computed server-side.
    pub async fn releve_compte(&self, requete: &ReleveCompteRequest) -> Result<ReleveCompte> {
        let url = self.url("rapports/releve_compte")?;
        self.envoyer(self.rapport_method.verbe(), url, Some(requete))
            .await
    }

    pub async fn releve_compte_pdf(&self, requete: &ReleveCompteRequest) -> Result<Vec<u8>> {
        let url = self.url("rapports/releve_compte/pdf")?;
        self.telecharger(
            self.rapport_method.verbe(),
            url,
            Some(requete),
            "application/pdf",
        )
        .await
    }

    pub async fn historique_plus_moins_value(
        &self,
        requete: &HistoriquePlusMoinsValueRequest,
    ) -> Result<HistoriquePlusMoinsValue> {
        let url = self.url("rapports/plus_moins_value/historique")?;
        self.envoyer(self.rapport_method.verbe(), url, Some(requete))
            .await
    }

    /// One record per account at the target date.
    pub async fn etat_plus_moins_value(
        &self,
        requete: &EtatPlusMoinsValueRequest,
    ) -> Result<Vec<EtatPlusMoinsValue>> {
        let url = self.url("rapports/plus_moins_value/etat")?;
        self.envoyer(self.rapport_method.verbe(), url, Some(requete))
            .await
    }

    pub async fn resumes_comptes_internes(
        &self,
        requete: &ListeCompteInterneRequest,
    ) -> Result<Vec<ResumesParTypeFonctionnement>> {
        let url = self.url("rapports/resumes_comptes_internes")?;
        self.envoyer(self.rapport_method.verbe(), url, Some(requete))
            .await
    }
}
