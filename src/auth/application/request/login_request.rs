use serde::Serialize;

/// Body of `POST /api2/json/access/ticket`.
///
/// The realm travels inside the username (`root@pam`).
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: String,
    pub password: &'a str,
}
