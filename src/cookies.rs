use std::fs;
use std::path::Path;

/// Extracts a cookie value from a `k=v; k2=v2` cookie string. Same parsing
/// as the browser original: split on `;`, trim, match on the `name=` prefix,
/// percent-decode the value.
pub fn get_cookie(header: &str, name: &str) -> Option<String> {
    for part in header.split(';') {
        let part = part.trim();
        if let Some(raw) = part.strip_prefix(name).and_then(|r| r.strip_prefix('=')) {
            let value = urlencoding::decode(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            return Some(value);
        }
    }
    None
}

/// Reads the CSRF token out of a local cookies file. A missing file or a
/// missing `csrftoken` entry is not an error here; the request simply goes
/// out without the header and the server rejects it.
pub fn load_csrf_token(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    raw.lines().find_map(|line| get_cookie(line, "csrftoken"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_get_cookie_basic() {
        let header = "sessionid=abc123; csrftoken=tok456; theme=dark";
        assert_eq!(get_cookie(header, "csrftoken").as_deref(), Some("tok456"));
        assert_eq!(get_cookie(header, "sessionid").as_deref(), Some("abc123"));
    }

    #[test]
    fn test_get_cookie_missing() {
        assert_eq!(get_cookie("sessionid=abc123", "csrftoken"), None);
        assert_eq!(get_cookie("", "csrftoken"), None);
    }

    #[test]
    fn test_get_cookie_no_prefix_collision() {
        // "xcsrftoken" and "csrftoken2" must not match "csrftoken".
        assert_eq!(get_cookie("xcsrftoken=nope", "csrftoken"), None);
        assert_eq!(get_cookie("csrftoken2=nope", "csrftoken"), None);
    }

    #[test]
    fn test_get_cookie_percent_decodes() {
        assert_eq!(
            get_cookie("csrftoken=a%2Fb%3Dc", "csrftoken").as_deref(),
            Some("a/b=c")
        );
    }

    #[test]
    fn test_load_csrf_token_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "sessionid=abc; csrftoken=filetok").unwrap();

        assert_eq!(load_csrf_token(&path).as_deref(), Some("filetok"));
    }

    #[test]
    fn test_load_csrf_token_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_csrf_token(&dir.path().join("absent.txt")), None);
    }
}
