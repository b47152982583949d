use reqwest::RequestBuilder;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;

/// HTTP client for the Lunch4Less backend.
///
/// One instance per operation is cheap: `reqwest::Client` is a handle and the
/// token is read from storage by the caller. Authenticated requests carry
/// `Authorization: Bearer <token>`.
///
/// There are no timeouts and no retries; a stalled request stays pending.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

impl Client {
    pub fn new(config: ApiConfig, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token,
        }
    }

    /// Client without a credential, for the public endpoints.
    pub fn anonymous() -> Self {
        Self::new(ApiConfig::default(), None)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode the envelope.
    ///
    /// An HTTP error status with an envelope body still yields that envelope
    /// (the backend reports domain errors on non-2xx too); without one it is
    /// a transport error carrying the status code.
    async fn send(&self, builder: RequestBuilder) -> Result<Envelope, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => {
                Err(ApiError::Transport(format!("HTTP {}", status.as_u16())))
            }
            Err(e) => Err(ApiError::Payload(e.to_string())),
        }
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Envelope, ApiError> {
        self.send(self.http.get(self.url(path))).await
    }

    pub(crate) async fn get_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Envelope, ApiError> {
        self.send(self.http.get(self.url(path)).query(query)).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Envelope, ApiError> {
        self.send(self.http.delete(self.url(path))).await
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Envelope, ApiError> {
        self.send(self.http.post(self.url(path)).multipart(form))
            .await
    }
}
