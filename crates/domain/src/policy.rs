use crate::dns_message::DnsMessage;
use crate::query_type::QueryType;
use std::fmt;

/// Label used when a response went through without any policy rewrite.
pub const CLEAN_POLICY: &str = "clean";

/// Outcome of RPZ evaluation on one response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppliedPolicy {
    Clean,
    Rewritten(String),
}

impl AppliedPolicy {
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() {
            AppliedPolicy::Clean
        } else {
            AppliedPolicy::Rewritten(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AppliedPolicy::Clean => CLEAN_POLICY,
            AppliedPolicy::Rewritten(name) => name,
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, AppliedPolicy::Clean)
    }
}

impl fmt::Display for AppliedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator-facing summary of a response rewritten by a policy.
///
/// Renders as `client <address>: query: <name> <type> [p=<policy>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyHit {
    pub client: String,
    pub name: String,
    pub qtype: QueryType,
    pub policy: String,
}

impl PolicyHit {
    /// Returns `None` when the record carries no question.
    pub fn from_message(message: &DnsMessage, policy: &AppliedPolicy) -> Option<Self> {
        let question = message.question.as_ref()?;

        let from = message
            .from
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let client = match message.original_requestor_subnet {
            Some(subnet) => format!("{} [{}]", subnet, from),
            None => from,
        };

        Some(Self {
            client,
            name: question.name.clone(),
            qtype: question.qtype,
            policy: policy.as_str().to_string(),
        })
    }
}

impl fmt::Display for PolicyHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client {}: query: {} {} [p={}]",
            self.client, self.name, self.qtype, self.policy
        )
    }
}
