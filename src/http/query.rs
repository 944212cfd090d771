//! Query string decoding

/// Name of the query parameter carrying the requested sub-path
pub const PATH_PARAM: &str = "path";

/// Extract the decoded `path` parameter from a raw query string.
///
/// A missing query or missing parameter yields an empty string, which resolves
/// to the root directory. The first `path` pair wins. `+` decodes to a space;
/// invalid UTF-8 is replaced and malformed `%` escapes are kept literally.
pub fn extract_path_param(query: Option<&str>) -> String {
    query
        .into_iter()
        .flat_map(|q| q.split('&'))
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(key) == PATH_PARAM).then(|| form_decode(value))
        })
        .unwrap_or_default()
}

fn form_decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_is_empty() {
        assert_eq!(extract_path_param(None), "");
        assert_eq!(extract_path_param(Some("")), "");
    }

    #[test]
    fn test_missing_param_is_empty() {
        assert_eq!(extract_path_param(Some("sort=name")), "");
    }

    #[test]
    fn test_empty_value_equals_missing() {
        assert_eq!(extract_path_param(Some("path=")), extract_path_param(None));
        assert_eq!(extract_path_param(Some("path")), "");
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        assert_eq!(
            extract_path_param(Some("path=My%20Files%2Fnotes+2024.txt")),
            "My Files/notes 2024.txt"
        );
        assert_eq!(extract_path_param(Some("path=%E6%96%87%E4%BB%B6")), "文件");
        assert_eq!(extract_path_param(Some("path=a%2Bb")), "a+b");
    }

    #[test]
    fn test_param_position_and_first_wins() {
        assert_eq!(extract_path_param(Some("v=1&path=docs&path=other")), "docs");
    }

    #[test]
    fn test_malformed_escapes_are_kept() {
        assert_eq!(extract_path_param(Some("path=100%")), "100%");
        assert_eq!(extract_path_param(Some("path=%zz")), "%zz");
        assert_eq!(extract_path_param(Some("path=%FF")), "\u{FFFD}");
    }
}
