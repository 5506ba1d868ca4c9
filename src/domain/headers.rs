use http::HeaderMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Read-only view over a set of request headers.
///
/// Names are matched ASCII case-insensitively. When a name carries several
/// values only the first is returned.
pub trait HeaderSet {
    fn header(&self, name: &str) -> Option<&[u8]>;
}

impl HeaderSet for HeaderMap {
    fn header(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(|v| v.as_bytes())
    }
}

/// Assumes one entry per header name. If the map holds names that differ
/// only by case, which of their values is returned is unspecified.
impl<S: BuildHasher> HeaderSet for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&[u8]> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_bytes())
    }
}

impl HeaderSet for [(&str, &str)] {
    fn header(&self, name: &str) -> Option<&[u8]> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_bytes())
    }
}

impl<const N: usize> HeaderSet for [(&str, &str); N] {
    fn header(&self, name: &str) -> Option<&[u8]> {
        self.as_slice().header(name)
    }
}
