//! PowerDNS `PBDNSMessage` (dnsmessage.proto, proto2).
//!
//! Only the fields the exporter reads are declared; prost skips the rest
//! of the wire message.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbdnsMessage {
    #[prost(enumeration = "pbdns_message::Type", optional, tag = "1")]
    pub r#type: ::core::option::Option<i32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub message_id: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub server_identity: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "6")]
    pub from: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "7")]
    pub to: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(message, optional, tag = "12")]
    pub question: ::core::option::Option<pbdns_message::DnsQuestion>,
    #[prost(message, optional, tag = "13")]
    pub response: ::core::option::Option<pbdns_message::DnsResponse>,
    #[prost(bytes = "vec", optional, tag = "14")]
    pub original_requestor_subnet: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(string, optional, tag = "15")]
    pub requestor_id: ::core::option::Option<::prost::alloc::string::String>,
}

/// Nested message and enum types in `PBDNSMessage`.
pub mod pbdns_message {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DnsQuestion {
        #[prost(string, optional, tag = "1")]
        pub q_name: ::core::option::Option<::prost::alloc::string::String>,
        #[prost(uint32, optional, tag = "2")]
        pub q_type: ::core::option::Option<u32>,
        #[prost(uint32, optional, tag = "3")]
        pub q_class: ::core::option::Option<u32>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DnsResponse {
        #[prost(uint32, optional, tag = "1")]
        pub rcode: ::core::option::Option<u32>,
        #[prost(string, optional, tag = "3")]
        pub applied_policy: ::core::option::Option<::prost::alloc::string::String>,
        #[prost(string, repeated, tag = "4")]
        pub tags: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        DnsQueryType = 1,
        DnsResponseType = 2,
        DnsOutgoingQueryType = 3,
        DnsIncomingResponseType = 4,
    }
}
