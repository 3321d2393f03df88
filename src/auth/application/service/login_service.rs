use crate::{
    ProxmoxAuth, ProxmoxCSRFToken, ProxmoxConnection, ProxmoxError, ProxmoxResult, ProxmoxTicket,
    auth::application::{
        request::login_request::LoginRequest,
        response::login_response::{LoginResponse, LoginResponseData},
    },
};

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::debug;

/// Exchanges the configured credentials for a ticket and CSRF token.
pub struct LoginService {
    default_headers: HeaderMap,
}

impl LoginService {
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self { default_headers }
    }

    pub async fn execute(
        &self,
        http_client: &Client,
        connection: &ProxmoxConnection,
    ) -> ProxmoxResult<ProxmoxAuth> {
        let url = connection.proxmox_url().api_endpoint(&["access", "ticket"])?;
        let request = LoginRequest {
            username: connection.login_name(),
            password: connection.proxmox_password().as_str(),
        };

        debug!(host = %connection.proxmox_host(), user = %request.username, "requesting ticket");
        let response = http_client
            .post(url)
            .headers(self.default_headers.clone())
            .json(&request)
            .send()
            .await
            .map_err(ProxmoxError::from_transport)?;

        match response.status() {
            StatusCode::OK => self.handle_successful_login(response).await,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(
                ProxmoxError::Authentication("Invalid credentials provided".to_string()),
            ),
            StatusCode::NOT_FOUND => Err(ProxmoxError::Network(
                "Login endpoint not found".to_string(),
            )),
            StatusCode::SERVICE_UNAVAILABLE => Err(ProxmoxError::Network(
                "Proxmox service is currently unavailable".to_string(),
            )),
            status => Err(ProxmoxError::Network(format!(
                "Unexpected response status: {}",
                status
            ))),
        }
    }

    async fn handle_successful_login(
        &self,
        response: reqwest::Response,
    ) -> ProxmoxResult<ProxmoxAuth> {
        let body = response
            .bytes()
            .await
            .map_err(ProxmoxError::from_transport)?;
        let login_response: LoginResponse = serde_json::from_slice(&body)
            .map_err(|e| ProxmoxError::Parse(format!("Failed to parse login response: {}", e)))?;

        let Some(LoginResponseData {
            ticket: Some(ticket),
            csrf_token: Some(csrf_token),
        }) = login_response.data
        else {
            return Err(ProxmoxError::Authentication(
                "Authentication failed: response did not contain a ticket".to_string(),
            ));
        };

        let ticket = ProxmoxTicket::new(ticket)
            .map_err(|e| ProxmoxError::Authentication(format!("Malformed ticket: {}", e)))?;
        let csrf_token = ProxmoxCSRFToken::new(csrf_token)
            .map_err(|e| ProxmoxError::Authentication(format!("Malformed CSRF token: {}", e)))?;

        Ok(ProxmoxAuth::new(ticket, csrf_token))
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}
