use super::dnsmessage::{pbdns_message, PbdnsMessage};
use prost::Message;
use rpz_exporter_application::ports::MessageParser;
use rpz_exporter_domain::{
    ip_from_octets, DnsMessage, DomainError, MessageType, Question, ResponseInfo,
};
use std::net::IpAddr;
use tracing::debug;

/// Decodes PowerDNS protobuf payloads into domain records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufMessageParser;

impl ProtobufMessageParser {
    pub fn new() -> Self {
        Self
    }
}

impl MessageParser for ProtobufMessageParser {
    fn parse(&self, payload: &[u8]) -> Result<DnsMessage, DomainError> {
        let raw = PbdnsMessage::decode(payload)
            .map_err(|e| DomainError::MessageDecode(e.to_string()))?;
        to_domain(raw)
    }
}

fn to_domain(raw: PbdnsMessage) -> Result<DnsMessage, DomainError> {
    let message_type = raw
        .r#type
        .and_then(|t| pbdns_message::Type::try_from(t).ok())
        .map(|t| match t {
            pbdns_message::Type::DnsQueryType => MessageType::Query,
            pbdns_message::Type::DnsResponseType => MessageType::Response,
            pbdns_message::Type::DnsOutgoingQueryType => MessageType::OutgoingQuery,
            pbdns_message::Type::DnsIncomingResponseType => MessageType::IncomingResponse,
        })
        .unwrap_or_default();

    // The source address is the resolver identity, so a malformed one
    // invalidates the record. The other addresses are informational only.
    let from = match raw.from.as_deref() {
        Some(octets) if !octets.is_empty() => Some(ip_from_octets(octets)?),
        _ => None,
    };
    let to = lenient_address("to", raw.to.as_deref());
    let original_requestor_subnet = lenient_address(
        "original_requestor_subnet",
        raw.original_requestor_subnet.as_deref(),
    );

    let question = raw.question.map(|q| {
        Question::new(
            q.q_name.unwrap_or_default(),
            q.q_type.unwrap_or_default(),
            q.q_class.unwrap_or_default(),
        )
    });

    let response = raw.response.map(|r| ResponseInfo {
        rcode: r.rcode,
        applied_policy: r.applied_policy.unwrap_or_default(),
        tags: r.tags,
    });

    Ok(DnsMessage {
        message_type,
        from,
        to,
        original_requestor_subnet,
        server_identity: raw
            .server_identity
            .map(|id| String::from_utf8_lossy(&id).into_owned()),
        requestor_id: raw.requestor_id,
        question,
        response,
    })
}

fn lenient_address(field: &'static str, octets: Option<&[u8]>) -> Option<IpAddr> {
    let octets = octets.filter(|o| !o.is_empty())?;
    match ip_from_octets(octets) {
        Ok(ip) => Some(ip),
        Err(e) => {
            debug!(field, error = %e, "Ignoring malformed address");
            None
        }
    }
}
