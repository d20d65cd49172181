use api_types::reference::{Reference, ReferenceRequest, Titulaire};
use reqwest::Method;

use crate::{CleCache, Client, Result};

/// The five reference (name/label) families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeReference {
    Titulaire,
    Banque,
    Categorie,
    SousCategorie,
    Beneficiaire,
}

impl TypeReference {
    pub const TOUS: [TypeReference; 5] = [
        Self::Titulaire,
        Self::Banque,
        Self::Categorie,
        Self::SousCategorie,
        Self::Beneficiaire,
    ];

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Titulaire => "titulaire",
            Self::Banque => "banque",
            Self::Categorie => "categorie",
            Self::SousCategorie => "souscategorie",
            Self::Beneficiaire => "beneficiaire",
        }
    }

    pub fn depuis_segment(segment: &str) -> Option<Self> {
        let segment = segment.trim().to_ascii_lowercase();
        Self::TOUS.into_iter().find(|t| t.segment() == segment)
    }
}

impl Client {
    pub async fn references_all(&self, famille: TypeReference) -> Result<Vec<Reference>> {
        let url = self.url(&format!("references/{}/all", famille.segment()))?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn reference_get(
        &self,
        famille: TypeReference,
        nom: &str,
    ) -> Result<Reference> {
        let url = self.url_avec(&format!("references/{}/get", famille.segment()), nom)?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    /// Holders come back with their attached internal accounts.
    pub async fn titulaire_get(&self, nom: &str) -> Result<Titulaire> {
        let url = self.url_avec("references/titulaire/get", nom)?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn reference_creer(
        &self,
        famille: TypeReference,
        requete: &ReferenceRequest,
    ) -> Result<Reference> {
        let url = self.url(&format!("references/{}/new", famille.segment()))?;
        let reference: Reference = self.envoyer(Method::POST, url, Some(requete)).await?;
        self.invalider([CleCache::References(famille)]);
        Ok(reference)
    }

    pub async fn reference_modifier(
        &self,
        famille: TypeReference,
        nom: &str,
        requete: &ReferenceRequest,
    ) -> Result<Reference> {
        let url = self.url_avec(&format!("references/{}/mod", famille.segment()), nom)?;
        let reference: Reference = self.envoyer(Method::PUT, url, Some(requete)).await?;
        self.invalider([CleCache::References(famille)]);
        Ok(reference)
    }

    pub async fn reference_supprimer(
        &self,
        famille: TypeReference,
        nom: &str,
    ) -> Result<()> {
        let url = self.url_avec(&format!("references/{}/del", famille.segment()), nom)?;
        self.envoyer_sans_reponse(Method::DELETE, url, Client::SANS_CORPS)
            .await?;
        self.invalider([CleCache::References(famille)]);
        Ok(())
    }
}
