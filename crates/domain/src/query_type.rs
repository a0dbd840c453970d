use std::fmt;

/// Numeric DNS query type as carried in a protobuf question.
///
/// Only the handful of types seen in day-to-day policy hits get a symbolic
/// name; everything else is printed as its decimal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryType(pub u32);

impl QueryType {
    pub fn symbol(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("A"),
            28 => Some("AAAA"),
            2 => Some("NS"),
            5 => Some("CNAME"),
            6 => Some("SOA"),
            12 => Some("PTR"),
            15 => Some("MX"),
            16 => Some("TXT"),
            _ => None,
        }
    }
}

impl From<u32> for QueryType {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => f.write_str(symbol),
            None => write!(f, "{}", self.0),
        }
    }
}
