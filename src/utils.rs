//! Helper functions used to take a URL apart and put it back together.
//!
//! Nothing here decodes or validates URL syntax. A "URL" is any string: the
//! part before the first `#` is split at its first `?` into a base and a query,
//! and the query is split on `&` into raw `name=value` segments. Segments keep
//! their exact spelling so the canonical form reproduces the input byte for
//! byte, apart from the parameters that were deliberately removed.

/// A string split into base, raw query segments and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub base: &'a str,
    pub params: Vec<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    /// True if any query segment is named `name`.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|segment| param_name(segment) == name)
    }

    /// The raw values of every segment named `name`, in order of appearance.
    pub fn values(&self, name: &str) -> Vec<&'a str> {
        self.params
            .iter()
            .filter(|segment| param_name(segment) == name)
            .map(|segment| param_value(*segment))
            .collect()
    }

    /// Drop every segment named `name`.
    pub fn remove_param(&mut self, name: &str) {
        self.params.retain(|segment| param_name(segment) != name);
    }

    /// The byte sequence the MAC is computed over.
    ///
    /// An empty query is written without its `?`, so `https://a/?` and
    /// `https://a/` share a canonical form.
    pub fn canonical(&self) -> String {
        let mut out = String::from(self.base);
        if !self.params.is_empty() {
            out.push('?');
            out.push_str(&self.params.join("&"));
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

/// Split `content` into base, query segments and fragment.
pub fn split_url(content: &str) -> UrlParts<'_> {
    let (before_fragment, fragment) = match content.find('#') {
        Some(idx) => (&content[..idx], Some(&content[idx + 1..])),
        None => (content, None),
    };

    let (base, query) = match before_fragment.find('?') {
        Some(idx) => (&before_fragment[..idx], &before_fragment[idx + 1..]),
        None => (before_fragment, ""),
    };

    let params = if query.is_empty() {
        Vec::new()
    } else {
        query.split('&').collect()
    };

    UrlParts {
        base,
        params,
        fragment,
    }
}

/// Append `name=value` to the query of `content`, ahead of any fragment.
///
/// Uses `?` when there is no query yet, nothing when the query is an empty
/// trailing `?`, and `&` otherwise.
pub fn append_param(content: &str, name: &str, value: &str) -> String {
    let (before_fragment, fragment) = match content.find('#') {
        Some(idx) => content.split_at(idx),
        None => (content, ""),
    };

    let separator = match before_fragment.find('?') {
        None => "?",
        Some(idx) if idx + 1 == before_fragment.len() => "",
        Some(_) => "&",
    };

    let mut out = String::with_capacity(content.len() + name.len() + value.len() + 2);
    out.push_str(before_fragment);
    out.push_str(separator);
    out.push_str(name);
    out.push('=');
    out.push_str(value);
    out.push_str(fragment);
    out
}

/// The raw name of a query segment: everything before the first `=`.
pub fn param_name(segment: &str) -> &str {
    segment.splitn(2, '=').next().unwrap_or(segment)
}

/// The raw value of a query segment, empty when there is no `=`.
pub fn param_value(segment: &str) -> &str {
    segment.splitn(2, '=').nth(1).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_splits_base_query_and_fragment() {
        let parts = split_url("https://example.com/reset?id=5&lang=en#top");
        assert_eq!(parts.base, "https://example.com/reset");
        assert_eq!(parts.params, vec!["id=5", "lang=en"]);
        assert_eq!(parts.fragment, Some("top"));
    }

    #[test]
    fn a_question_mark_inside_the_fragment_is_not_a_query() {
        let parts = split_url("https://example.com/#a?b=1");
        assert_eq!(parts.base, "https://example.com/");
        assert!(parts.params.is_empty());
        assert_eq!(parts.fragment, Some("a?b=1"));
    }

    #[test]
    fn canonical_form_keeps_empty_segments_and_order() {
        let url = "https://example.com/?b=2&&a=1#frag";
        assert_eq!(split_url(url).canonical(), url);
    }

    #[test]
    fn canonical_form_drops_a_bare_question_mark() {
        assert_eq!(
            split_url("https://example.com/?").canonical(),
            "https://example.com/"
        );
    }

    #[test]
    fn it_appends_with_the_right_separator() {
        assert_eq!(append_param("/a", "x", "1"), "/a?x=1");
        assert_eq!(append_param("/a?", "x", "1"), "/a?x=1");
        assert_eq!(append_param("/a?b=2", "x", "1"), "/a?b=2&x=1");
        assert_eq!(append_param("/a?b=2#f", "x", "1"), "/a?b=2&x=1#f");
        assert_eq!(append_param("/a#f", "x", "1"), "/a?x=1#f");
    }

    #[test]
    fn removing_an_appended_param_restores_the_canonical_form() {
        for content in &["/a", "/a?", "/a?b=2", "/a?b=2#f", "/a#f", "", "?", "#"] {
            let appended = append_param(content, "_hash", "abc");
            let mut parts = split_url(&appended);
            parts.remove_param("_hash");
            assert_eq!(parts.canonical(), split_url(content).canonical());
        }
    }

    #[test]
    fn it_reads_names_and_values() {
        assert_eq!(param_name("a=1=2"), "a");
        assert_eq!(param_value("a=1=2"), "1=2");
        assert_eq!(param_name("flag"), "flag");
        assert_eq!(param_value("flag"), "");

        let parts = split_url("/p?x=1&y=2&x=3");
        assert_eq!(parts.values("x"), vec!["1", "3"]);
        assert!(parts.has_param("y"));
        assert!(!parts.has_param("z"));
    }
}
