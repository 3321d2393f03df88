use serde::Deserialize;

/// Both members are optional so that a well-formed JSON body with the wrong
/// shape is reported as a failed login rather than a parse failure.
#[derive(Deserialize)]
pub struct LoginResponse {
    pub data: Option<LoginResponseData>,
}

#[derive(Deserialize)]
pub struct LoginResponseData {
    pub ticket: Option<String>,
    #[serde(rename = "CSRFPreventionToken")]
    pub csrf_token: Option<String>,
}
