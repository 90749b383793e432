//! Rewriting native file URIs into URLs the webview can serve.
//!
//! The webview cannot load `file://` URLs directly. It serves local files
//! from its own origin under a fixed prefix instead:
//! `file:///data/1000.jpg` becomes
//! `capacitor://localhost/_capacitor_file_/data/1000.jpg`.

const FILE_SCHEME: &str = "file://";
const CONTENT_SCHEME: &str = "content:/";
const FILE_PREFIX: &str = "/_capacitor_file_";
const CONTENT_PREFIX: &str = "/_capacitor_content_";

/// Rewrite `uri` into a URL served from `origin`.
///
/// `file://` URIs and absolute paths are served from the file prefix,
/// `content://` URIs from the content prefix. Anything else (http, blob,
/// data URIs) is already loadable and is returned unchanged.
pub fn convert_file_src(origin: &str, uri: &str) -> String {
    let origin = origin.trim_end_matches('/');

    if let Some(path) = uri.strip_prefix(FILE_SCHEME) {
        format!("{}{}{}", origin, FILE_PREFIX, path)
    } else if uri.starts_with('/') {
        format!("{}{}{}", origin, FILE_PREFIX, uri)
    } else if let Some(rest) = uri.strip_prefix(CONTENT_SCHEME) {
        format!("{}{}{}", origin, CONTENT_PREFIX, rest)
    } else {
        uri.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "file:///data/1000.jpg",
        "capacitor://localhost/_capacitor_file_/data/1000.jpg"
    )]
    #[case("/data/1000.jpg", "capacitor://localhost/_capacitor_file_/data/1000.jpg")]
    #[case(
        "content://media/external/images/42",
        "capacitor://localhost/_capacitor_content_/media/external/images/42"
    )]
    #[case("blob:localhost/abc", "blob:localhost/abc")]
    #[case("https://example.com/a.jpg", "https://example.com/a.jpg")]
    fn test_convert_file_src(#[case] uri: &str, #[case] expected: &str) {
        assert_eq!(convert_file_src("capacitor://localhost", uri), expected);
    }

    #[test]
    fn test_origin_trailing_slash() {
        assert_eq!(
            convert_file_src("http://localhost/", "file:///data/1.jpg"),
            "http://localhost/_capacitor_file_/data/1.jpg"
        );
    }
}
