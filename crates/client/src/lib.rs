//! HTTP consumer of the Monatis backend.
//!
//! One [`Client`] per backend: it joins endpoint paths onto the configured
//! base URL, serializes the request DTOs built by the `engine` crate,
//! decodes responses and the structured error object, and tracks fetch
//! generations so stale responses are discarded and mutated scopes are
//! refetched instead of patched.

use std::sync::Mutex;

use reqwest::{Method, Url};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

pub use cache::{CleCache, Generations, Jeton};
pub use comptes::TypeCompte;
pub use error::{ApiError, Result};
pub use exports::ExportCsv;
pub use references::TypeReference;

mod budgets;
mod cache;
mod comptes;
mod error;
mod evaluations;
mod exports;
mod operations;
mod rapports;
mod references;

/// Verb used for the read-only reporting endpoints.
///
/// The catalog describes them as body-carrying GETs, but some deployments
/// only accept POST; the choice is configuration, not code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RapportMethod {
    #[default]
    Get,
    Post,
}

impl RapportMethod {
    pub(crate) fn verbe(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
        }
    }

    pub fn depuis_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    rapport_method: RapportMethod,
    generations: Mutex<Generations>,
}

impl Client {
    /// Creates a client for the API root, e.g.
    /// `http://localhost:8082/monatis`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::avec_methode_rapports(base_url, RapportMethod::default())
    }

    pub fn avec_methode_rapports(
        base_url: &str,
        rapport_method: RapportMethod,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|err| ApiError::Configuration(format!("base_url invalide : {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Configuration(
                "base_url invalide : pas une URL http".to_string(),
            ));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            rapport_method,
            generations: Mutex::new(Generations::new()),
        })
    }

    /// Starts a fetch against a cache scope; the returned token tells the
    /// caller whether the response is still current once it arrives.
    pub fn jeton(&self, cle: CleCache) -> Jeton {
        self.generations_mut().demarrer(cle)
    }

    pub fn est_courant(&self, jeton: &Jeton) -> bool {
        self.generations_mut().est_courant(jeton)
    }

    pub(crate) fn invalider<I>(&self, cles: I)
    where
        I: IntoIterator<Item = CleCache>,
    {
        let mut generations = self.generations_mut();
        for cle in cles {
            generations.invalider(&cle);
        }
    }

    fn generations_mut(&self) -> std::sync::MutexGuard<'_, Generations> {
        self.generations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Joins a static endpoint path (`"operations/all"`) onto the base URL.
    pub(crate) fn url(&self, chemin: &str) -> Result<Url> {
        self.url_interne(chemin, None)
    }

    /// Same, with one trailing dynamic segment, percent-encoded whole so
    /// identifiers containing separators stay a single segment.
    pub(crate) fn url_avec(&self, chemin: &str, valeur: &str) -> Result<Url> {
        self.url_interne(chemin, Some(valeur))
    }

    fn url_interne(&self, chemin: &str, valeur: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ApiError::Configuration("base_url sans chemin".to_string())
            })?;
            segments.pop_if_empty();
            for part in chemin.split('/').filter(|p| !p.is_empty()) {
                segments.push(part);
            }
            if let Some(valeur) = valeur {
                segments.push(valeur);
            }
        }
        Ok(url)
    }

    pub(crate) async fn envoyer<TReq, TResp>(
        &self,
        verbe: Method,
        url: Url,
        corps: Option<&TReq>,
    ) -> Result<TResp>
    where
        TReq: Serialize + ?Sized,
        TResp: DeserializeOwned,
    {
        let reponse = self.executer(verbe, url, corps).await?;
        Ok(reponse.json::<TResp>().await?)
    }

    /// For endpoints answering with an empty body (deletions).
    pub(crate) async fn envoyer_sans_reponse<TReq>(
        &self,
        verbe: Method,
        url: Url,
        corps: Option<&TReq>,
    ) -> Result<()>
    where
        TReq: Serialize + ?Sized,
    {
        self.executer(verbe, url, corps).await?;
        Ok(())
    }

    /// Raw download for the CSV and PDF endpoints.
    pub(crate) async fn telecharger<TReq>(
        &self,
        verbe: Method,
        url: Url,
        corps: Option<&TReq>,
        accept: &str,
    ) -> Result<Vec<u8>>
    where
        TReq: Serialize + ?Sized,
    {
        let requete_id = Uuid::new_v4();
        tracing::debug!(%requete_id, %verbe, chemin = url.path(), accept, "téléchargement");
        let mut requete = self.http.request(verbe, url).header("Accept", accept);
        if let Some(corps) = corps {
            requete = requete.json(corps);
        }
        let reponse = requete.send().await?;
        let status = reponse.status();
        if !status.is_success() {
            let corps = reponse.text().await.unwrap_or_default();
            return Err(ApiError::depuis_reponse(status, &corps));
        }
        Ok(reponse.bytes().await?.to_vec())
    }

    async fn executer<TReq>(
        &self,
        verbe: Method,
        url: Url,
        corps: Option<&TReq>,
    ) -> Result<reqwest::Response>
    where
        TReq: Serialize + ?Sized,
    {
        let requete_id = Uuid::new_v4();
        tracing::debug!(%requete_id, %verbe, chemin = url.path(), "requête Monatis");

        let mut requete = self
            .http
            .request(verbe, url)
            .header("Accept", "application/json")
            .header("Accept-Language", "fr-FR");
        if let Some(corps) = corps {
            requete = requete.json(corps);
        }

        let reponse = requete.send().await?;
        let status = reponse.status();
        if status.is_success() {
            return Ok(reponse);
        }

        let corps = reponse.text().await.unwrap_or_default();
        let erreur = ApiError::depuis_reponse(status, &corps);
        tracing::debug!(%requete_id, %status, "échec : {erreur}");
        Err(erreur)
    }

    /// Body type for calls that send none; never instantiated.
    pub(crate) const SANS_CORPS: Option<&'static ()> = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jointure_d_url_encode_les_segments() {
        let client = Client::new("http://localhost:8082/monatis").unwrap();
        assert_eq!(
            client.url("operations/all").unwrap().as_str(),
            "http://localhost:8082/monatis/operations/all"
        );
        assert_eq!(
            client.url_avec("operations/get", "OP 2025/03").unwrap().as_str(),
            "http://localhost:8082/monatis/operations/get/OP%202025%2F03"
        );
    }

    #[test]
    fn base_url_avec_barre_finale() {
        let client = Client::new("http://localhost:8082/monatis/").unwrap();
        assert_eq!(
            client.url("budgets/categorie/all").unwrap().as_str(),
            "http://localhost:8082/monatis/budgets/categorie/all"
        );
    }

    #[test]
    fn base_url_invalide_refusee() {
        assert!(Client::new("pas une url").is_err());
    }
}
