use crate::policy::AppliedPolicy;
use crate::query_type::QueryType;
use std::net::IpAddr;

/// Kind of event a resolver reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    Query,
    Response,
    OutgoingQuery,
    IncomingResponse,
    #[default]
    Unknown,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Query => "query",
            MessageType::Response => "response",
            MessageType::OutgoingQuery => "outgoing_query",
            MessageType::IncomingResponse => "incoming_response",
            MessageType::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: QueryType,
    pub qclass: u32,
}

impl Question {
    /// A zero class means the resolver left it unset; it is reported as IN (1).
    pub fn new(name: impl Into<String>, qtype: u32, qclass: u32) -> Self {
        Self {
            name: name.into(),
            qtype: QueryType(qtype),
            qclass: if qclass == 0 { 1 } else { qclass },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseInfo {
    pub rcode: Option<u32>,
    /// Name of the RPZ policy the resolver applied; empty when none fired.
    pub applied_policy: String,
    pub tags: Vec<String>,
}

/// One DNS transaction reported by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsMessage {
    pub message_type: MessageType,
    /// Address of the reporting resolver on response records.
    pub from: Option<IpAddr>,
    pub to: Option<IpAddr>,
    pub original_requestor_subnet: Option<IpAddr>,
    pub server_identity: Option<String>,
    pub requestor_id: Option<String>,
    pub question: Option<Question>,
    pub response: Option<ResponseInfo>,
}

impl DnsMessage {
    pub fn is_response(&self) -> bool {
        self.message_type == MessageType::Response
    }

    /// Textual resolver identity used as the `resolver` label.
    pub fn resolver_identity(&self) -> Option<String> {
        self.from.map(|ip| ip.to_string())
    }

    pub fn applied_policy(&self) -> AppliedPolicy {
        let name = self
            .response
            .as_ref()
            .map(|r| r.applied_policy.as_str())
            .unwrap_or_default();
        AppliedPolicy::from_name(name)
    }
}
