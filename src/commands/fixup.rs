//! Repeated-parameter serialization fix-up.
//!
//! List-valued identifiers must reach the wire as repeated bare keys
//! (`id=1&id=2`), not as the indexed form (`id[0]=1&id[1]=2`) the naive
//! query encoder produces.

use url::form_urlencoded;

/// Rewrite indexed occurrences of `name[N]=` in the URL's query string into
/// bare `name=`, preserving values, pair order, and all other pairs.
///
/// Idempotent; a URL with no indexed occurrences of `name` is returned
/// unchanged in meaning. Both literal and percent-encoded brackets are
/// recognized.
pub fn fix_repeated_params(url: &str, name: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if !pairs.iter().any(|(k, _)| is_indexed_key(k, name)) {
        return url.to_string();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        if is_indexed_key(key, name) {
            serializer.append_pair(name, value);
        } else {
            serializer.append_pair(key, value);
        }
    }

    format!("{}?{}", base, serializer.finish())
}

/// Whether a decoded query key has the shape `name[N]` with N all digits
fn is_indexed_key(key: &str, name: &str) -> bool {
    key.strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('['))
        .and_then(|rest| rest.strip_suffix(']'))
        .map(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rewrites_encoded_brackets() {
        let fixed = fix_repeated_params(
            "https://app.example.com/rest/v1/lists.json?id%5B0%5D=1&id%5B1%5D=2",
            "id",
        );
        assert_eq!(fixed, "https://app.example.com/rest/v1/lists.json?id=1&id=2");
    }

    #[test]
    fn test_rewrites_literal_brackets() {
        let fixed = fix_repeated_params("https://x.test/a.json?id[0]=1&id[1]=2", "id");
        assert_eq!(fixed, "https://x.test/a.json?id=1&id=2");
    }

    #[test]
    fn test_idempotent() {
        let once = fix_repeated_params("https://x.test/a.json?id%5B0%5D=1&id%5B1%5D=2", "id");
        let twice = fix_repeated_params(&once, "id");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_leaves_clean_url_unchanged() {
        let url = "https://x.test/a.json?id=1&id=2&name=foo";
        assert_eq!(fix_repeated_params(url, "id"), url);
    }

    #[test]
    fn test_no_query_string() {
        let url = "https://x.test/a.json";
        assert_eq!(fix_repeated_params(url, "id"), url);
    }

    #[test]
    fn test_other_pairs_and_order_preserved() {
        let fixed = fix_repeated_params(
            "https://x.test/a.json?listId=100&id%5B0%5D=1&batchSize=10&id%5B1%5D=2",
            "id",
        );
        assert_eq!(
            fixed,
            "https://x.test/a.json?listId=100&id=1&batchSize=10&id=2"
        );
    }

    #[test]
    fn test_only_named_param_rewritten() {
        let fixed = fix_repeated_params("https://x.test/a.json?ids%5B0%5D=1&id%5B0%5D=2", "id");
        assert_eq!(fixed, "https://x.test/a.json?ids%5B0%5D=1&id=2");
    }

    #[test]
    fn test_non_numeric_index_left_alone() {
        let url = "https://x.test/a.json?id%5Bfoo%5D=1";
        assert_eq!(fix_repeated_params(url, "id"), url);
    }
}
