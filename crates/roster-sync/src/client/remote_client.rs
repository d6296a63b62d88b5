//! Read-only client for the remote customer feed.

use crate::{RemoteFetchError, Result as RemoteResult};

use roster_core::{User, UserRole};

use std::str::FromStr;

use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde_json::json;

/// The single query the core depends on. The response carries a continuation
/// token, but pagination is never followed: one request per fetch.
const LIST_CUSTOMERS_QUERY: &str =
    "query ListCustomers { listCustomers { items { id name email role } nextToken } }";

#[derive(Deserialize)]
struct ListCustomersResponse {
    data: Option<ListCustomersData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct ListCustomersData {
    #[serde(rename = "listCustomers")]
    list_customers: CustomerPage,
}

#[derive(Deserialize)]
struct CustomerPage {
    items: Vec<CustomerItem>,
    #[serde(rename = "nextToken")]
    next_token: Option<String>,
}

#[derive(Deserialize)]
struct CustomerItem {
    id: String,
    name: String,
    email: String,
    role: String,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// HTTP client for the remote directory endpoint
pub struct RemoteClient {
    endpoint: String,
    client: ReqwestClient,
}

impl RemoteClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `endpoint` - GraphQL endpoint URL (e.g., "http://localhost:9002/graphql")
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Fetch the complete remote customer list in a single query.
    ///
    /// Transport failures, non-2xx statuses, decode failures, query errors
    /// and unknown role values all surface as [`RemoteFetchError`].
    pub async fn fetch_customers(&self) -> RemoteResult<Vec<User>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": LIST_CUSTOMERS_QUERY }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteFetchError::http(format!(
                "remote returned {status}"
            )));
        }

        let body: ListCustomersResponse = response.json().await?;

        if let Some(errors) = body.errors
            && let Some(first) = errors.first()
        {
            return Err(RemoteFetchError::malformed(format!(
                "remote query error: {}",
                first.message
            )));
        }

        let page = body
            .data
            .ok_or_else(|| RemoteFetchError::malformed("no data returned from remote"))?
            .list_customers;

        if page.next_token.is_some() {
            debug!("remote returned a continuation token; pagination is not followed");
        }

        page.items.into_iter().map(CustomerItem::into_user).collect()
    }
}

impl CustomerItem {
    fn into_user(self) -> RemoteResult<User> {
        let role = UserRole::from_str(&self.role).map_err(|e| {
            RemoteFetchError::malformed(format!("unknown role in remote item: {e}"))
        })?;

        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
        })
    }
}
