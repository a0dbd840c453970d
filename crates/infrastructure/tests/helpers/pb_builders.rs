#![allow(dead_code)]

use prost::Message;
use rpz_exporter_infrastructure::protobuf::{pbdns_message, PbdnsMessage};
use std::net::IpAddr;

pub fn ip_bytes(ip: &str) -> Vec<u8> {
    match ip.parse::<IpAddr>().unwrap() {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

pub struct PbMessageBuilder {
    message: PbdnsMessage,
}

impl PbMessageBuilder {
    pub fn response() -> Self {
        Self::with_type(pbdns_message::Type::DnsResponseType)
    }

    pub fn query() -> Self {
        Self::with_type(pbdns_message::Type::DnsQueryType)
    }

    pub fn with_type(message_type: pbdns_message::Type) -> Self {
        Self {
            message: PbdnsMessage {
                r#type: Some(message_type as i32),
                ..Default::default()
            },
        }
    }

    pub fn from(mut self, ip: &str) -> Self {
        self.message.from = Some(ip_bytes(ip));
        self
    }

    pub fn raw_from(mut self, bytes: Vec<u8>) -> Self {
        self.message.from = Some(bytes);
        self
    }

    pub fn subnet(mut self, ip: &str) -> Self {
        self.message.original_requestor_subnet = Some(ip_bytes(ip));
        self
    }

    pub fn question(mut self, name: &str, qtype: u32) -> Self {
        self.message.question = Some(pbdns_message::DnsQuestion {
            q_name: Some(name.to_string()),
            q_type: Some(qtype),
            q_class: None,
        });
        self
    }

    pub fn policy(mut self, policy: &str) -> Self {
        self.message.response = Some(pbdns_message::DnsResponse {
            rcode: Some(0),
            applied_policy: Some(policy.to_string()),
            tags: vec![],
        });
        self
    }

    pub fn build(self) -> PbdnsMessage {
        self.message
    }

    pub fn encode(self) -> Vec<u8> {
        self.message.encode_to_vec()
    }

    pub fn frame(self) -> Vec<u8> {
        frame(&self.encode())
    }
}

/// Prefixes `payload` with its 2-byte big-endian length.
pub fn frame(payload: &[u8]) -> Vec<u8> {
    let len = u16::try_from(payload.len()).unwrap();
    let mut out = Vec::with_capacity(payload.len() + 2);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(payload);
    out
}
