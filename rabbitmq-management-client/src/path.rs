//! Resource path construction.

use url::form_urlencoded;

/// Percent-encode one user-supplied path segment.
///
/// Segments are encoded individually so the fixed `/` separators between
/// them stay intact, while a `/` inside an identifier (the default vhost,
/// for one) becomes `%2F`.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Render query pairs as a form-url-encoded string, without the leading `?`.
pub(crate) fn query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encodes_separator_and_space_inside_a_segment() {
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn keeps_plain_names_untouched() {
        assert_eq!(segment("orders"), "orders");
    }

    #[test]
    fn renders_query_pairs_in_order() {
        assert_eq!(
            query(vec![("state", "running"), ("page", "1")]),
            "state=running&page=1"
        );
    }
}
