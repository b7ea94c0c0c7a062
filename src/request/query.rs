use crate::types::QueryMap;

#[inline]
pub fn split_uri(uri: &str) -> (&str, Option<&str>) {
    match memchr::memchr(b'?', uri.as_bytes()) {
        Some(pos) => (&uri[..pos], Some(&uri[pos + 1..])),
        None => (uri, None),
    }
}

/// Form-decodes a query string; a repeated key keeps its last value.
pub fn parse_query(query: &str) -> QueryMap {
    let mut out = QueryMap::new();
    if query.is_empty() {
        return out;
    }
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        out.insert(key.into_owned(), value.into_owned());
    }
    out
}

/// A query value counts as set when it is neither empty nor `"0"`.
#[inline]
pub(crate) fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_uri_strips_query() {
        assert_eq!(split_uri("/a/b?x=1&y=2"), ("/a/b", Some("x=1&y=2")));
        assert_eq!(split_uri("/a/b"), ("/a/b", None));
        assert_eq!(split_uri("/a?"), ("/a", Some("")));
    }

    #[test]
    fn parse_query_decodes_and_keeps_last_value() {
        let query = parse_query("name=John+Doe&tag=a&tag=b&path=%2Fx");
        assert_eq!(query.get("name").map(String::as_str), Some("John Doe"));
        assert_eq!(query.get("tag").map(String::as_str), Some("b"));
        assert_eq!(query.get("path").map(String::as_str), Some("/x"));
    }

    #[test]
    fn truthy_follows_form_conventions() {
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
    }
}
