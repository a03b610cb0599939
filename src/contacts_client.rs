//! Client for the external email-marketing API (Brevo compatible) that keeps
//! the list of contacts leads are registered in.

use crate::{configuration::ContactsSettings, domain::LeadEmail};
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};

#[derive(Debug)]
pub struct ContactsClient {
    base_url: Url,
    http_client: Client,
    api_key: Option<Secret<String>>,
    list_id: Option<i64>,
}

impl ContactsClient {
    /// Create a new contacts client.
    pub fn new(base_url: Url, api_key: Option<Secret<String>>, list_id: Option<i64>) -> Self {
        Self {
            base_url,
            http_client: Client::new(),
            api_key,
            list_id,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn list_id(&self) -> Option<i64> {
        self.list_id
    }

    /// Register `email` as a contact without touching an existing contact's
    /// data. Any 2xx answer counts as created.
    #[tracing::instrument(name = "Create contact", skip(self), fields(contact_email = %email))]
    pub async fn create_contact(&self, email: &LeadEmail) -> Result<(), ContactsError> {
        let api_key = self.api_key.as_ref().ok_or(ContactsError::MissingApiKey)?;
        let url = self
            .base_url
            .join("contacts")
            .map_err(|e| ContactsError::InvalidUrl(e.to_string()))?;
        let request_body = CreateContactRequest {
            email: email.as_ref(),
            update_enabled: false,
            list_ids: self.list_id.map(|id| vec![id]),
        };

        let response = self
            .http_client
            .post(url)
            .header("api-key", api_key.expose_secret())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(ContactsError::Transport)?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%status, "Contact created");
            return Ok(());
        }

        let body = response.bytes().await.map_err(ContactsError::Transport)?;
        let body = ErrorBody::parse(&body)
            .map_err(|source| ContactsError::UnparseableBody { status, source })?;
        Err(ContactsError::Rejected { status, body })
    }
}

impl TryFrom<&ContactsSettings> for ContactsClient {
    type Error = String;

    fn try_from(config: &ContactsSettings) -> Result<Self, Self::Error> {
        let base_url = config.base_url().map_err(|e| {
            tracing::error!("Unable to parse contacts base url: {e}");
            "Contacts base url is invalid".to_string()
        })?;
        let api_key = config.api_key();
        if api_key.is_none() {
            tracing::warn!("No contacts API key configured, lead submissions will not reach the contact list");
        }

        Ok(Self::new(base_url, api_key, config.list_id()))
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateContactRequest<'a> {
    email: &'a str,
    update_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_ids: Option<Vec<i64>>,
}

/// The descriptive fields of a failed response. Each is optional, and any
/// non-string JSON value is kept in its textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub code: Option<String>,
}

impl ErrorBody {
    pub fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        let field = |name: &str| {
            value.get(name).and_then(|v| match v {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
        };

        Ok(Self {
            message: field("message"),
            error: field("error"),
            code: field("code"),
        })
    }

    /// The populated fields, in `message`, `error`, `code` order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [&self.message, &self.error, &self.code]
            .into_iter()
            .filter_map(|f| f.as_deref())
    }
}

#[derive(thiserror::Error)]
pub enum ContactsError {
    #[error("No API key is configured for the contacts API")]
    MissingApiKey,
    #[error("Contacts API url is invalid: {0}")]
    InvalidUrl(String),
    #[error("Failed to reach the contacts API")]
    Transport(#[source] reqwest::Error),
    #[error("Contacts API answered {status}")]
    Rejected { status: StatusCode, body: ErrorBody },
    #[error("Contacts API answered {status} with a body that is not JSON")]
    UnparseableBody {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}
