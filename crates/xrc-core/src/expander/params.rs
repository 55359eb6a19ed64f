//! Query string parameter map.

/// Ordered parameter map parsed from a raw query string.
///
/// Names are unique and kept in order of first appearance. Names and values
/// are stored exactly as written in the URL: nothing is percent-decoded, so
/// serializing the map back yields the original text for every untouched pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, String)>,
}

impl ParamMap {
    /// Parse a raw query string (without the leading `?`).
    ///
    /// - Segments are split on `&`; empty segments are skipped.
    /// - Each segment splits at its first `=`; a segment with no `=` has an empty value.
    /// - A repeated name keeps its first position and first value, but if any
    ///   occurrence is valueless the name's value becomes empty.
    pub fn parse(raw: &str) -> Self {
        let mut map = ParamMap::default();
        for segment in raw.split('&') {
            if segment.is_empty() {
                continue;
            }
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            match map.position(name) {
                Some(i) => {
                    if value.is_empty() {
                        map.entries[i].1.clear();
                    }
                }
                None => map.entries.push((name.to_string(), value.to_string())),
            }
        }
        map
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Copy of this map with `name` set to `value`. Unknown names are appended.
    pub fn replaced(&self, name: &str, value: &str) -> ParamMap {
        let mut out = self.clone();
        match out.position(name) {
            Some(i) => out.entries[i].1 = value.to_string(),
            None => out.entries.push((name.to_string(), value.to_string())),
        }
        out
    }

    /// Serialize as `name=value` pairs joined by `&`, without any encoding.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}
