pub mod dnsmessage;
pub mod parser;

pub use dnsmessage::{pbdns_message, PbdnsMessage};
pub use parser::ProtobufMessageParser;
