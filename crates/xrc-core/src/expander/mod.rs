//! URL parameter expansion.
//!
//! For every distinct query parameter of a URL, produces one candidate URL with
//! that parameter's value swapped for a placeholder token and every other
//! parameter left as written.

mod error;
mod params;
mod parts;

pub use error::ExpandError;
pub use params::ParamMap;
pub use parts::UrlParts;

/// Expands `url` into one candidate per distinct query parameter, in parameter order.
///
/// A URL without query parameters yields an empty list.
///
/// # Examples
///
/// - `expand_url("http://example.com/page?a=1&b=2", "{payload}")` →
///   `["http://example.com/page?a={payload}&b=2", "http://example.com/page?a=1&b={payload}"]`
/// - `expand_url("http://example.com/page?x", "{payload}")` → `["http://example.com/page?x={payload}"]`
pub fn expand_url(url: &str, placeholder: &str) -> Result<Vec<String>, ExpandError> {
    let parts = UrlParts::split(url)?;
    let params = ParamMap::parse(parts.query());

    Ok(params
        .names()
        .map(|name| parts.with_query(&params.replaced(name, placeholder).to_query_string()))
        .collect())
}
