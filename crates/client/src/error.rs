use api_types::erreur::ErreurDto;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures of a request/response cycle.
///
/// `Backend` carries the structured `ErreurDto` when the body was one, with
/// the human `libelle` as the displayed message and the nested cause chain
/// kept for diagnostics. `Transport` covers network failures and non-JSON
/// bodies. Neither is ever retried automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("configuration invalide : {0}")]
    Configuration(String),
    #[error("{message}")]
    Backend {
        status: StatusCode,
        message: String,
        erreur: Option<ErreurDto>,
    },
    #[error("serveur injoignable : {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Builds a backend error from a non-2xx body, decoding the structured
    /// error object when the body is one.
    pub(crate) fn depuis_reponse(status: StatusCode, corps: &str) -> Self {
        let erreur = serde_json::from_str::<ErreurDto>(corps)
            .ok()
            .filter(|e| e.libelle.is_some() || e.code.is_some());
        let message = erreur
            .as_ref()
            .and_then(|e| e.libelle.clone())
            .unwrap_or_else(|| format!("Erreur {status}"));
        ApiError::Backend {
            status,
            message,
            erreur,
        }
    }

    /// The structured backend error, when one was decoded.
    pub fn erreur(&self) -> Option<&ErreurDto> {
        match self {
            ApiError::Backend { erreur, .. } => erreur.as_ref(),
            _ => None,
        }
    }

    /// Multi-line rendering of the full cause chain, outermost first.
    pub fn details(&self) -> String {
        match self.erreur() {
            Some(erreur) => {
                let mut lignes = Vec::new();
                for (profondeur, niveau) in erreur.chaine().enumerate() {
                    let resume = niveau.resume();
                    if resume.is_empty() {
                        continue;
                    }
                    if profondeur == 0 {
                        lignes.push(resume);
                    } else {
                        lignes.push(format!("Cause : {resume}"));
                    }
                }
                if lignes.is_empty() {
                    self.to_string()
                } else {
                    lignes.join("\n")
                }
            }
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_l_erreur_structuree() {
        let corps = r#"{
            "typeErreur": "FONCTIONNELLE",
            "typeDomaine": "OPERATION",
            "code": "O012",
            "libelle": "Le compte n'existe pas",
            "cause": {
                "typeDomaine": "PERSISTENCE",
                "code": "P001",
                "libelle": "Identifiant inconnu"
            }
        }"#;
        let erreur = ApiError::depuis_reponse(StatusCode::UNPROCESSABLE_ENTITY, corps);
        assert_eq!(erreur.to_string(), "Le compte n'existe pas");
        assert_eq!(
            erreur.details(),
            "OPERATION O012 - Le compte n'existe pas\nCause : PERSISTENCE P001 - Identifiant inconnu"
        );
    }

    #[test]
    fn corps_non_json_donne_un_message_generique() {
        let erreur = ApiError::depuis_reponse(StatusCode::BAD_GATEWAY, "<html>boom</html>");
        assert!(erreur.erreur().is_none());
        assert_eq!(erreur.to_string(), "Erreur 502 Bad Gateway");
    }
}
