pub mod pb_builders;

pub use pb_builders::{frame, ip_bytes, PbMessageBuilder};
