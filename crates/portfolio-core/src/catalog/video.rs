//! YouTube link normalization

use url::Url;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Convert a YouTube watch or short link into its embeddable form.
///
/// Handles `youtube.com/watch?v=ID` (any subdomain) and `youtu.be/ID`.
/// A watch link's `v` parameter is percent-decoded; a short link's path is
/// used as is. Anything else comes back unchanged; empty input stays empty.
pub fn to_embed_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };
    let host = parsed.host_str().unwrap_or_default();

    let id = if host.contains("youtube.com") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
    } else if host == "youtu.be" {
        parsed.path().get(1..).map(str::to_string)
    } else {
        None
    };

    match id {
        Some(id) if !id.is_empty() => format!("{EMBED_BASE}{id}"),
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_links_are_embedded() {
        assert_eq!(
            to_embed_url("https://www.youtube.com/watch?v=4CMdh4ahHq4"),
            "https://www.youtube.com/embed/4CMdh4ahHq4"
        );
        assert_eq!(
            to_embed_url("https://youtube.com/watch?list=abc&v=PMFyZR_8rm8"),
            "https://www.youtube.com/embed/PMFyZR_8rm8"
        );
    }

    #[test]
    fn short_links_are_embedded() {
        assert_eq!(
            to_embed_url("https://youtu.be/pj1mnLXYDjI"),
            "https://www.youtube.com/embed/pj1mnLXYDjI"
        );
        assert_eq!(
            to_embed_url("https://youtu.be/pj1mnLXYDjI?t=42"),
            "https://www.youtube.com/embed/pj1mnLXYDjI"
        );
    }

    #[test]
    fn percent_encoded_ids_are_decoded() {
        assert_eq!(
            to_embed_url("https://www.youtube.com/watch?v=abc%2Ddef"),
            "https://www.youtube.com/embed/abc-def"
        );
    }

    #[test]
    fn other_links_pass_through() {
        assert_eq!(to_embed_url(""), "");
        assert_eq!(to_embed_url("not a url"), "not a url");
        assert_eq!(to_embed_url("https://vimeo.com/1234"), "https://vimeo.com/1234");
        assert_eq!(
            to_embed_url("https://www.youtube.com/channel/xyz"),
            "https://www.youtube.com/channel/xyz"
        );
        assert_eq!(to_embed_url("https://youtu.be/"), "https://youtu.be/");
    }
}
