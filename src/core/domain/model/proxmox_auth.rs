use crate::core::domain::value_object::{ProxmoxCSRFToken, ProxmoxTicket};

/// The session issued by `/access/ticket`: a ticket plus its CSRF token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxmoxAuth {
    ticket: ProxmoxTicket,
    csrf_token: ProxmoxCSRFToken,
}

impl ProxmoxAuth {
    pub fn new(ticket: ProxmoxTicket, csrf_token: ProxmoxCSRFToken) -> Self {
        Self { ticket, csrf_token }
    }

    pub fn ticket(&self) -> &ProxmoxTicket {
        &self.ticket
    }

    pub fn csrf_token(&self) -> &ProxmoxCSRFToken {
        &self.csrf_token
    }
}
