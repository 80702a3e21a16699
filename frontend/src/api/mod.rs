pub mod alerts;
pub mod permissions;

use std::future::Future;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    Announcement, AnnouncementsFilter, ApiError, ApiSuccess, CreateAnnouncementRequest,
    UpdateAnnouncementRequest,
};
use thiserror::Error;

use crate::config::{use_config, AnnouncementsConfig};
use crate::utils::url::encode_segment;

/// Failure of a call to the backend. The display form is the message shown
/// to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for RequestError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => RequestError::Decode(e.to_string()),
            other => RequestError::Network(other.to_string()),
        }
    }
}

/// The announcement operations the list page depends on.
pub trait AnnouncementsApi {
    fn announcements(
        &self,
        filter: &AnnouncementsFilter,
    ) -> impl Future<Output = Result<Vec<Announcement>, RequestError>>;

    fn delete_announcement_by_id(&self, id: &str) -> impl Future<Output = Result<(), RequestError>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    api_base: String,
    token_key: String,
}

impl ApiClient {
    pub fn new(api_base: &str, token_key: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token_key: token_key.to_string(),
        }
    }

    pub fn from_config(config: &AnnouncementsConfig) -> Self {
        Self::new(&config.api_base, &config.token_key)
    }

    fn get_token(&self) -> Option<String> {
        LocalStorage::get(&self.token_key).ok()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn announcement_path(id: &str) -> String {
        format!("/announcements/{}", encode_segment(id))
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<impl Serialize>,
    ) -> Result<Response, RequestError> {
        let url = self.url(path);

        let mut request: RequestBuilder = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            "DELETE" => Request::delete(&url),
            _ => return Err(RequestError::Network(format!("Invalid method {}", method))),
        };

        if let Some(token) = self.get_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = if let Some(body) = body {
            request
                .header("Content-Type", "application/json")
                .json(&body)?
                .send()
                .await?
        } else {
            request.send().await?
        };

        if response.ok() {
            Ok(response)
        } else {
            Err(Self::server_error(response).await)
        }
    }

    async fn server_error(response: Response) -> RequestError {
        let status = response.status();
        let message = match response.json::<ApiError>().await {
            Ok(error) => error.message,
            Err(_) => format!("Request failed with status {}", status),
        };
        RequestError::Server { status, message }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<impl Serialize>,
    ) -> Result<T, RequestError> {
        let response = self.send(method, path, body).await?;
        let result: ApiSuccess<T> = response.json().await?;
        Ok(result.data)
    }

    // Announcement endpoints
    pub async fn list_announcements(
        &self,
        filter: &AnnouncementsFilter,
    ) -> Result<Vec<Announcement>, RequestError> {
        self.request::<Vec<Announcement>>(
            "GET",
            &format!("/announcements{}", filter.to_query()),
            None::<()>,
        )
        .await
    }

    pub async fn announcement_by_id(&self, id: &str) -> Result<Announcement, RequestError> {
        self.request::<Announcement>("GET", &Self::announcement_path(id), None::<()>)
            .await
    }

    pub async fn create_announcement(
        &self,
        request: CreateAnnouncementRequest,
    ) -> Result<Announcement, RequestError> {
        self.request("POST", "/announcements", Some(request)).await
    }

    pub async fn update_announcement(
        &self,
        id: &str,
        request: UpdateAnnouncementRequest,
    ) -> Result<Announcement, RequestError> {
        self.request("PUT", &Self::announcement_path(id), Some(request))
            .await
    }

    pub async fn delete_announcement(&self, id: &str) -> Result<(), RequestError> {
        // The body of a successful delete carries nothing we need
        self.send("DELETE", &Self::announcement_path(id), None::<()>)
            .await
            .map(|_| ())
    }
}

impl AnnouncementsApi for ApiClient {
    async fn announcements(
        &self,
        filter: &AnnouncementsFilter,
    ) -> Result<Vec<Announcement>, RequestError> {
        self.list_announcements(filter).await
    }

    async fn delete_announcement_by_id(&self, id: &str) -> Result<(), RequestError> {
        self.delete_announcement(id).await
    }
}

pub fn use_api_client() -> ApiClient {
    ApiClient::from_config(&use_config())
}
