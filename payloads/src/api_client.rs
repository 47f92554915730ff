use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    FetchOutcome, GroupDetails, GroupDirectory, GroupMember,
    directory::DirectoryError,
};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for reading groups from the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Group metadata, or `None` if the backend doesn't know the group.
    pub async fn get_group(
        &self,
        slug: &str,
    ) -> Result<Option<GroupDetails>, ClientError> {
        let response = self.empty_get(&format!("groups/{slug}")).await?;
        ok_body_if_found(response).await
    }

    pub async fn get_group_members(
        &self,
        slug: &str,
    ) -> Result<Option<Vec<GroupMember>>, ClientError> {
        let response =
            self.empty_get(&format!("groups/{slug}/members")).await?;
        ok_body_if_found(response).await
    }
}

#[async_trait(?Send)]
impl GroupDirectory for APIClient {
    async fn fetch_group(&self, slug: &str) -> FetchOutcome<GroupDetails> {
        FetchOutcome::from_lookup(self.get_group(slug).await)
    }

    async fn fetch_members(&self, slug: &str) -> FetchOutcome<Vec<GroupMember>> {
        match self.get_group_members(slug).await {
            Ok(Some(members)) => FetchOutcome::from_list(members),
            Ok(None) => FetchOutcome::Empty,
            Err(e) => FetchOutcome::Failed(DirectoryError::from(e)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful response, treating 404 as an absent resource.
pub async fn ok_body_if_found<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, ClientError> {
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(Some(response.json::<T>().await?))
}
