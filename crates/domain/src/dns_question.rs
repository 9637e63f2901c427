use std::fmt;
use std::sync::Arc;

pub const CLASS_IN: u16 = 1;
pub const TYPE_A: u16 = 1;
pub const TYPE_AAAA: u16 = 28;

/// A DNS question: the (class, type, name) triple used as the cache key.
///
/// The name is kept lowercase and without the trailing root dot so that
/// `Example.COM.` and `example.com` map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuestion {
    pub class: u16,
    pub record_type: u16,
    pub name: Arc<str>,
}

impl DnsQuestion {
    pub fn new(class: u16, record_type: u16, name: &str) -> Self {
        Self {
            class,
            record_type,
            name: Arc::from(Self::normalize_name(name).as_str()),
        }
    }

    pub fn normalize_name(name: &str) -> String {
        let trimmed = name.strip_suffix('.').unwrap_or(name);
        trimmed.to_ascii_lowercase()
    }
}

impl fmt::Display for DnsQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (class={}, type={})",
            self.name, self.class, self.record_type
        )
    }
}
