//! REST client for making requests to the clinic services

use dioxus::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::api::endpoints::get_endpoints;
use crate::auth::SessionStore;

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Error shape every service uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Error type for REST operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Session expired or missing")]
    Unauthorized { message: Option<String> },

    #[error("Request failed with status {status}")]
    Api { status: u16, message: Option<String> },
}

impl ApiError {
    /// Server-provided message when there is one, otherwise the screen's
    /// fallback text.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized { message } | ApiError::Api { message, .. } => message
                .clone()
                .unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}

fn build_http_client() -> reqwest::Client {
    // Browser fetch has no per-request timeout knob; native builds get the
    // fixed ceiling the services expect.
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default()
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(feature = "web")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        match location.pathname() {
            // Already on the login screen, a redirect would loop.
            Ok(path) if path == "/login" => {}
            _ => {
                let _ = location.set_href("/login");
            }
        }
    }
}

/// REST client bound to one service base URL. All clients share the session
/// store, so a token stored by login is attached everywhere.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: SessionStore,
    cache_bust: bool,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: build_http_client(),
            base_url: base_url.into(),
            session,
            cache_bust: false,
        }
    }

    /// GETs carry a `_t` timestamp pair to bypass HTTP caches (the room
    /// service answers 304s otherwise).
    pub fn with_cache_busting(mut self) -> Self {
        self.cache_bust = true;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Mutation guard mirroring the screens: fail fast with a readable
    /// message when no token is stored.
    pub fn ensure_authenticated(&self) -> Result<(), ApiError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(ApiError::Unauthorized {
                message: Some("Bạn chưa đăng nhập hoặc phiên đã hết hạn".to_string()),
            })
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .client
            .request(method, url)
            .header("Accept", "application/json");
        if let Some(token) = self.session.token() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        req
    }

    fn get_request(&self, path: &str, query: &[(&str, String)]) -> reqwest::RequestBuilder {
        let mut req = self.request(reqwest::Method::GET, path).query(query);
        if self.cache_bust {
            req = req.query(&[("_t", now_millis().to_string())]);
        }
        req
    }

    pub async fn get<R>(&self, path: &str, query: &[(&str, String)]) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.run(self.get_request(path, query)).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.run(self.request(reqwest::Method::POST, path).json(body))
            .await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.run(self.request(reqwest::Method::PUT, path).json(body))
            .await
    }

    /// Bodyless PATCH, used by the status-toggle endpoints.
    pub async fn patch<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.run(self.request(reqwest::Method::PATCH, path)).await
    }

    async fn run<R>(&self, req: reqwest::RequestBuilder) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let response = req.send().await?;
        self.interpret(response).await
    }

    /// Clear the session once per expiry, redirect at most once.
    fn handle_unauthorized(&self) -> bool {
        let should_redirect = self.session.take_session();
        #[cfg(feature = "web")]
        if should_redirect {
            redirect_to_login();
        }
        should_redirect
    }

    async fn interpret<R>(&self, response: reqwest::Response) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        if status == reqwest::StatusCode::UNAUTHORIZED {
            let redirected = self.handle_unauthorized();
            tracing::warn!(redirected, "session rejected by the server");
            return Err(ApiError::Unauthorized { message });
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            tracing::error!("Không có quyền truy cập");
        } else if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Lỗi server");
        }

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// One client per backend service, provided app-wide.
#[derive(Clone)]
pub struct ApiContext {
    pub core: ApiClient,
    pub rooms: ApiClient,
    pub services: ApiClient,
    pub shifts: ApiClient,
}

impl ApiContext {
    pub fn new(session: SessionStore) -> Self {
        let endpoints = get_endpoints();
        Self {
            core: ApiClient::new(endpoints.core.clone(), session.clone()),
            rooms: ApiClient::new(endpoints.rooms.clone(), session.clone()).with_cache_busting(),
            services: ApiClient::new(endpoints.services.clone(), session.clone()),
            shifts: ApiClient::new(endpoints.shifts.clone(), session),
        }
    }
}

/// Hook to access the typed API clients
pub fn use_api() -> ApiContext {
    use_context::<ApiContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MessageResponse, User};

    fn client_with_session() -> ApiClient {
        let session = SessionStore::in_memory();
        session.set_session("tok-123", &User::default());
        ApiClient::new("http://localhost:3001/api", session)
    }

    fn response(status: u16, body: &str) -> reqwest::Response {
        http::Response::builder()
            .status(status)
            .body(body.to_string())
            .unwrap()
            .into()
    }

    #[test]
    fn bearer_header_follows_stored_token() {
        let client = client_with_session();
        let request = client
            .request(reqwest::Method::GET, "/user/all-staff")
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Bearer tok-123"
        );
        assert_eq!(request.headers().get("Accept").unwrap(), "application/json");

        let anonymous = ApiClient::new("http://localhost:3001/api", SessionStore::in_memory());
        let request = anonymous
            .request(reqwest::Method::GET, "/user/all-staff")
            .build()
            .unwrap();
        assert!(request.headers().get("Authorization").is_none());
    }

    #[test]
    fn cache_busting_appends_timestamp_pair() {
        let session = SessionStore::in_memory();
        let client = ApiClient::new("http://localhost:3002/api", session).with_cache_busting();
        let request = client
            .get_request("/room", &[("page", "1".to_string())])
            .build()
            .unwrap();
        let query = request.url().query().unwrap();
        assert!(query.contains("page=1"));
        assert!(query.contains("_t="));
    }

    #[test]
    fn plain_clients_do_not_cache_bust() {
        let client = client_with_session();
        let request = client.get_request("/shift", &[]).build().unwrap();
        assert!(request.url().query().is_none());
    }

    #[test]
    fn ensure_authenticated_requires_a_token() {
        let client = client_with_session();
        assert!(client.ensure_authenticated().is_ok());

        let anonymous = ApiClient::new("http://localhost:3001/api", SessionStore::in_memory());
        let err = anonymous.ensure_authenticated().unwrap_err();
        assert_eq!(
            err.message_or("khác"),
            "Bạn chưa đăng nhập hoặc phiên đã hết hạn"
        );
    }

    #[tokio::test]
    async fn success_body_deserializes() {
        let client = client_with_session();
        let result: MessageResponse = client
            .interpret(response(200, r#"{"message":"Đã gửi OTP"}"#))
            .await
            .unwrap();
        assert_eq!(result.message.as_deref(), Some("Đã gửi OTP"));
    }

    #[tokio::test]
    async fn unauthorized_clears_the_session() {
        let client = client_with_session();
        let result: Result<MessageResponse, _> = client.interpret(response(401, "")).await;

        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
        assert!(client.session().token().is_none());
        assert!(client.session().user().is_none());
    }

    #[test]
    fn unauthorized_handling_fires_once() {
        let client = client_with_session();
        assert!(client.handle_unauthorized());
        assert!(!client.handle_unauthorized());

        let anonymous = ApiClient::new("http://localhost:3001/api", SessionStore::in_memory());
        assert!(!anonymous.handle_unauthorized());
    }

    #[tokio::test]
    async fn server_message_is_preferred_verbatim() {
        let client = client_with_session();
        let result: Result<MessageResponse, _> = client
            .interpret(response(422, r#"{"message":"Email đã tồn tại"}"#))
            .await;

        match result {
            Err(err @ ApiError::Api { status: 422, .. }) => {
                assert_eq!(err.message_or("Có lỗi xảy ra"), "Email đã tồn tại");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn empty_error_body_falls_back_to_generic_message() {
        let client = client_with_session();
        let result: Result<MessageResponse, _> = client.interpret(response(500, "")).await;

        match result {
            Err(err @ ApiError::Api { status: 500, .. }) => {
                assert_eq!(err.message_or("Lỗi server"), "Lỗi server");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
