use api_types::operation::{
    Operation, OperationCreationRequest, OperationModificationRequest, OperationSpecialeRequest,
};
use engine::TypeOperation;
use reqwest::Method;

use crate::{CleCache, Client, Result};

impl Client {
    pub async fn operations_all(&self) -> Result<Vec<Operation>> {
        let url = self.url("operations/all")?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    pub async fn operation_get(&self, numero: &str) -> Result<Operation> {
        let url = self.url_avec("operations/get", numero)?;
        self.envoyer(Method::GET, url, Client::SANS_CORPS).await
    }

    /// Generic creation (`POST /operations/new`). The server may assign or
    /// override the number: use the returned operation's `numero`, never
    /// the one that was typed.
    pub async fn operation_creer(
        &self,
        requete: &OperationCreationRequest,
    ) -> Result<Operation> {
        let url = self.url("operations/new")?;
        let operation: Operation = self.envoyer(Method::POST, url, Some(requete)).await?;
        self.invalider([CleCache::Operations]);
        Ok(operation)
    }

    /// Specialized creation: one endpoint per kind, same response shape.
    pub async fn operation_creer_specialisee(
        &self,
        type_op: TypeOperation,
        requete: &OperationSpecialeRequest,
    ) -> Result<Operation> {
        let url = self.url(type_op.endpoint())?;
        let operation: Operation = self.envoyer(Method::POST, url, Some(requete)).await?;
        self.invalider([CleCache::Operations]);
        Ok(operation)
    }

    pub async fn operation_modifier(
        &self,
        numero: &str,
        requete: &OperationModificationRequest,
    ) -> Result<Operation> {
        let url = self.url_avec("operations/mod", numero)?;
        let operation: Operation = self.envoyer(Method::PUT, url, Some(requete)).await?;
        self.invalider([
            CleCache::Operations,
            CleCache::Operation(numero.to_string()),
        ]);
        Ok(operation)
    }

    pub async fn operation_supprimer(&self, numero: &str) -> Result<()> {
        let url = self.url_avec("operations/del", numero)?;
        self.envoyer_sans_reponse(Method::DELETE, url, Client::SANS_CORPS)
            .await?;
        self.invalider([
            CleCache::Operations,
            CleCache::Operation(numero.to_string()),
        ]);
        Ok(())
    }
}
