//! Last path segment extraction.

/// Returns the part of the URL path after its final `/`.
///
/// Query and fragment are not part of the path, so they never end up in the
/// result. Returns `None` when that part is empty. Input that does not parse
/// as a URL is split as a plain string.
pub fn last_path_segment(url: &str) -> Option<String> {
    let segment = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().rsplit('/').next().unwrap_or("").to_string(),
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            url[..end].rsplit('/').next().unwrap_or("").to_string()
        }
    };
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            last_path_segment("https://example.com/a/b/file.deb").as_deref(),
            Some("file.deb")
        );
        assert_eq!(
            last_path_segment("https://example.com/single").as_deref(),
            Some("single")
        );
    }

    #[test]
    fn root_or_empty() {
        assert_eq!(last_path_segment("https://example.com/"), None);
        assert_eq!(last_path_segment("https://example.com"), None);
        assert_eq!(last_path_segment("https://example.com/dir/"), None);
    }

    #[test]
    fn query_and_fragment_not_included() {
        assert_eq!(
            last_path_segment("https://example.com/file.zip?token=abc").as_deref(),
            Some("file.zip")
        );
        assert_eq!(
            last_path_segment("https://example.com/file.zip#part").as_deref(),
            Some("file.zip")
        );
    }

    #[test]
    fn unparsable_input_split_as_string() {
        assert_eq!(
            last_path_segment("downloads/file.bin?x=1").as_deref(),
            Some("file.bin")
        );
        assert_eq!(last_path_segment("downloads/"), None);
    }
}
