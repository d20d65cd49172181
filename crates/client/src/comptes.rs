use api_types::compte::{Compte, CompteInterne, CompteInterneRequest, CompteRequest};
use reqwest::Method;

use crate::{CleCache, Client, Result};

/// The three account families. Internal accounts carry the full profile
/// (bank, holders, opening balance); external and technical accounts are
/// bare id/label pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeCompte {
    Interne,
    Externe,
    Technique,
}

impl TypeCompte {
    pub const TOUS: [TypeCompte; 3] = [Self::Interne, Self::Externe, Self::Technique];

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Interne => "interne",
            Self::Externe => "externe",
            Self::Technique => "technique",
        }
    }

    pub fn depuis_segment(segment: &str) -> Option<Self> {
        let segment = segment.trim().to_ascii_lowercase();
        Self::TOUS.into_iter().find(|t| t.segment() == segment)
    }
}

impl Client {
    pub async fn comptes_internes_all(&self) -> Result<Vec<CompteInterne>> {
        let url = self.url("comptes/interne/all")?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn compte_interne_get(&self, identifiant: &str) -> Result<CompteInterne> {
        let url = self.url_avec("comptes/interne/get", identifiant)?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn compte_interne_creer(
        &self,
        requete: &CompteInterneRequest,
    ) -> Result<CompteInterne> {
        let url = self.url("comptes/interne/new")?;
        let compte: CompteInterne = self.envoyer(Method::POST, url, Some(requete)).await?;
        self.invalider([CleCache::Comptes(TypeCompte::Interne)]);
        Ok(compte)
    }

    pub async fn compte_interne_modifier(
        &self,
        identifiant: &str,
        requete: &CompteInterneRequest,
    ) -> Result<CompteInterne> {
        let url = self.url_avec("comptes/interne/mod", identifiant)?;
        let compte: CompteInterne = self.envoyer(Method::PUT, url, Some(requete)).await?;
        self.invalider([
            CleCache::Comptes(TypeCompte::Interne),
            CleCache::Compte(TypeCompte::Interne, identifiant.to_string()),
        ]);
        Ok(compte)
    }

    pub async fn compte_interne_supprimer(&self, identifiant: &str) -> Result<()> {
        let url = self.url_avec("comptes/interne/del", identifiant)?;
        self.envoyer_sans_reponse(Method::DELETE, url, Client::SANS_CORPS)
            .await?;
        self.invalider([
            CleCache::Comptes(TypeCompte::Interne),
            CleCache::Compte(TypeCompte::Interne, identifiant.to_string()),
        ]);
        Ok(())
    }

    /// External/technical account listing; for internal accounts use
    /// [`Client::comptes_internes_all`] to get the full profile.
    pub async fn comptes_all(&self, famille: TypeCompte) -> Result<Vec<Compte>> {
        let url = self.url(&format!("comptes/{}/all", famille.segment()))?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn compte_get(&self, famille: TypeCompte, identifiant: &str) -> Result<Compte> {
        let url = self.url_avec(&format!("comptes/{}/get", famille.segment()), identifiant)?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn compte_creer(
        &self,
        famille: TypeCompte,
        requete: &CompteRequest,
    ) -> Result<Compte> {
        let url = self.url(&format!("comptes/{}/new", famille.segment()))?;
        let compte: Compte = self.envoyer(Method::POST, url, Some(requete)).await?;
        self.invalider([CleCache::Comptes(famille)]);
        Ok(compte)
    }

    pub async fn compte_modifier(
        &self,
        famille: TypeCompte,
        identifiant: &str,
        requete: &CompteRequest,
    ) -> Result<Compte> {
        let url = self.url_avec(&format!("comptes/{}/mod", famille.segment()), identifiant)?;
        let compte: Compte = self.envoyer(Method::PUT, url, Some(requete)).await?;
        self.invalider([
            CleCache::Comptes(famille),
            CleCache::Compte(famille, identifiant.to_string()),
        ]);
        Ok(compte)
    }

    pub async fn compte_supprimer(
        &self,
        famille: TypeCompte,
        identifiant: &str,
    ) -> Result<()> {
        let url = self.url_avec(&format!("comptes/{}/del", famille.segment()), identifiant)?;
        self.envoyer_sans_reponse(Method::DELETE, url, Client::SANS_CORPS)
            .await?;
        self.invalider([
            CleCache::Comptes(famille),
            CleCache::Compte(famille, identifiant.to_string()),
        ]);
        Ok(())
    }
}
