//! Raw URL splitting and reassembly.
//!
//! The URL is validated with the `url` crate, but the generated candidates are
//! spliced from the original text so scheme, authority, path and fragment are
//! copied byte for byte and nothing is normalized or re-encoded.

use url::Url;

use super::ExpandError;

/// A validated URL split into the text around its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    base: &'a str,
    query: &'a str,
    fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    /// Validate `url` and split it at the first `#` and then the first `?`.
    pub fn split(url: &'a str) -> Result<Self, ExpandError> {
        Url::parse(url).map_err(|source| ExpandError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let (base, query) = rest.split_once('?').unwrap_or((rest, ""));

        Ok(Self {
            base,
            query,
            fragment,
        })
    }

    /// Everything before the `?`: scheme, authority and path.
    pub fn base(&self) -> &'a str {
        self.base
    }

    /// Raw query string, without the leading `?`.
    pub fn query(&self) -> &'a str {
        self.query
    }

    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }

    /// Reassemble the URL around a new query string. An empty query drops the `?`.
    pub fn with_query(&self, query: &str) -> String {
        let fragment_len = self.fragment.map_or(0, |f| f.len() + 1);
        let mut out = String::with_capacity(self.base.len() + query.len() + 1 + fragment_len);
        out.push_str(self.base);
        if !query.is_empty() {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_base_query_fragment() {
        let parts = UrlParts::split("https://example.com/a/b?x=1&y=2#top").unwrap();
        assert_eq!(parts.base(), "https://example.com/a/b");
        assert_eq!(parts.query(), "x=1&y=2");
        assert_eq!(parts.fragment(), Some("top"));
    }

    #[test]
    fn question_mark_inside_fragment_is_not_a_query() {
        let parts = UrlParts::split("https://example.com/p#frag?x=1").unwrap();
        assert_eq!(parts.base(), "https://example.com/p");
        assert_eq!(parts.query(), "");
        assert_eq!(parts.fragment(), Some("frag?x=1"));
    }

    #[test]
    fn keeps_text_verbatim() {
        // The url crate would add a trailing slash and lowercase the host.
        let parts = UrlParts::split("http://Example.COM?q=%41").unwrap();
        assert_eq!(parts.base(), "http://Example.COM");
        assert_eq!(parts.with_query("q=X"), "http://Example.COM?q=X");
    }

    #[test]
    fn with_query_empty_drops_question_mark() {
        let parts = UrlParts::split("http://example.com/page?x=1#f").unwrap();
        assert_eq!(parts.with_query(""), "http://example.com/page#f");
    }

    #[test]
    fn relative_or_garbage_is_invalid() {
        for line in ["not a url", "/just/a/path?x=1", "example.com/page?x=1", "http://[::1/?a=1"] {
            let err = UrlParts::split(line).unwrap_err();
            assert_eq!(err.url(), line);
        }
    }
}
