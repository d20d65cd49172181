use reqwest::Method;

use crate::{Client, Result};

/// Server-side CSV exports. The backend renders them; the client only
/// downloads the bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportCsv {
    TypesOperation,
    OperationsTypes,
    OperationsErreurs,
    ComptesTypes,
    ComptesErreurs,
    ComptesTables,
    BudgetsTypes,
    BudgetsErreurs,
    BudgetsTables,
}

impl ExportCsv {
    pub const TOUS: [ExportCsv; 9] = [
        Self::TypesOperation,
        Self::OperationsTypes,
        Self::OperationsErreurs,
        Self::ComptesTypes,
        Self::ComptesErreurs,
        Self::ComptesTables,
        Self::BudgetsTypes,
        Self::BudgetsErreurs,
        Self::BudgetsTables,
    ];

    #[must_use]
    pub const fn chemin(self) -> &'static str {
        match self {
            Self::TypesOperation => "csv/type/operation",
            Self::OperationsTypes => "csv/operations/types",
            Self::OperationsErreurs => "csv/operations/erreurs",
            Self::ComptesTypes => "csv/comptes/types",
            Self::ComptesErreurs => "csv/comptes/erreurs",
            Self::ComptesTables => "csv/comptes/tables",
            Self::BudgetsTypes => "csv/budgets/types",
            Self::BudgetsErreurs => "csv/budgets/erreurs",
            Self::BudgetsTables => "csv/budgets/tables",
        }
    }

    /// Stable name used for command-line selection and default filenames.
    #[must_use]
    pub const fn nom(self) -> &'static str {
        match self {
            Self::TypesOperation => "types-operation",
            Self::OperationsTypes => "operations-types",
            Self::OperationsErreurs => "operations-erreurs",
            Self::ComptesTypes => "comptes-types",
            Self::ComptesErreurs => "comptes-erreurs",
            Self::ComptesTables => "comptes-tables",
            Self::BudgetsTypes => "budgets-types",
            Self::BudgetsErreurs => "budgets-erreurs",
            Self::BudgetsTables => "budgets-tables",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Self> {
        let nom = nom.trim().to_ascii_lowercase();
        Self::TOUS.into_iter().find(|e| e.nom() == nom)
    }
}

impl Client {
    pub async fn csv_exporter(&self, export: ExportCsv) -> Result<Vec<u8>> {
        let url = self.url(export.chemin())?;
        self.telecharger(Method::GET, url, Client::SANS_CORPS, "text/csv")
            .await
    }
}
