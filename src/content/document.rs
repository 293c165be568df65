// Markdown documents and their front matter.

use serde::Deserialize;

/// A loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub body: String,
}

/// Recognized front matter keys. Anything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    title: Option<String>,
    description: Option<String>,
    name: Option<String>,
}

impl Document {
    /// Parse markdown with an optional `---` delimited YAML front matter block.
    ///
    /// Book pages use `name` as a subtitle when there is no description. The
    /// title falls back to the first `# ` heading, then to the slug. A block
    /// that is not valid YAML is logged and ignored.
    pub fn parse(slug: &str, source: &str) -> Self {
        let source = source.trim_start_matches('\u{feff}');
        let (front, body) = split_front_matter(source);
        let front = parse_front_matter(slug, front);

        let title = non_empty(front.title)
            .or_else(|| {
                body.lines()
                    .find_map(|line| line.strip_prefix("# "))
                    .map(|heading| heading.trim().to_string())
            })
            .unwrap_or_else(|| slug.to_string());

        Self {
            slug: slug.to_string(),
            title,
            description: non_empty(front.description).or_else(|| non_empty(front.name)),
            body: body.trim_start_matches(['\r', '\n']).to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_front_matter(slug: &str, yaml: &str) -> FrontMatter {
    if yaml.trim().is_empty() {
        return FrontMatter::default();
    }
    match serde_yaml::from_str(yaml) {
        Ok(front) => front,
        Err(e) => {
            tracing::warn!(slug, error = %e, "ignoring malformed front matter");
            FrontMatter::default()
        }
    }
}

/// Split `source` into (front matter, body).
fn split_front_matter(source: &str) -> (&str, &str) {
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return ("", source);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return (&rest[..offset], &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    // Unterminated block is treated as plain markdown
    ("", source)
}

/// Content slug for a navigation href.
///
/// External URLs have no slug; the site root maps to `index`.
pub fn slug_for_href(href: &str) -> Option<String> {
    if href.contains("://") || href.starts_with("mailto:") {
        return None;
    }
    let path = href.split(['#', '?']).next().unwrap_or_default();
    let slug = path.trim_matches('/');
    if slug.is_empty() {
        Some("index".to_string())
    } else {
        Some(slug.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_matter() {
        let doc = Document::parse(
            "notes/html",
            "---\ntitle: \"Html 入门\"\ndescription: Elements and attributes\n---\n\n# Ignored\nBody\n",
        );
        assert_eq!(doc.title, "Html 入门");
        assert_eq!(doc.description.as_deref(), Some("Elements and attributes"));
        assert_eq!(doc.body, "# Ignored\nBody\n");
    }

    #[test]
    fn test_escaped_quotes_and_comments() {
        let doc = Document::parse(
            "x",
            "---\ntitle: \"Say \\\"hi\\\"\" # greeting\ndescription: >-\n  A folded\n  description\n---\nbody\n",
        );
        assert_eq!(doc.title, "Say \"hi\"");
        assert_eq!(doc.description.as_deref(), Some("A folded description"));
        assert_eq!(doc.body, "body\n");
    }

    #[test]
    fn test_literal_block_and_bom() {
        let doc = Document::parse(
            "x",
            "\u{feff}---\ntitle: Closures\ndescription: |\n  Line one\n  Line two\ntags: [js, scope]\n---\n",
        );
        assert_eq!(doc.title, "Closures");
        assert_eq!(doc.description.as_deref(), Some("Line one\nLine two"));
    }

    #[test]
    fn test_malformed_front_matter_falls_back() {
        let doc = Document::parse("x", "---\ntitle: [unclosed\n---\n# Heading\n");
        assert_eq!(doc.title, "Heading");
        assert!(doc.description.is_none());
        assert_eq!(doc.body, "# Heading\n");
    }

    #[test]
    fn test_heading_and_slug_fallbacks() {
        let doc = Document::parse("a/b", "intro\n# Heading\ntext");
        assert_eq!(doc.title, "Heading");
        assert!(doc.description.is_none());

        let doc = Document::parse("a/b", "no heading");
        assert_eq!(doc.title, "a/b");
    }

    #[test]
    fn test_name_used_as_description() {
        let doc = Document::parse("details", "---\ntitle: YDKJS\nname: 'Kyle'\n---\n");
        assert_eq!(doc.description.as_deref(), Some("Kyle"));
    }

    #[test]
    fn test_unterminated_front_matter() {
        let doc = Document::parse("x", "---\ntitle: nope\n");
        assert_eq!(doc.title, "x");
        assert!(doc.body.starts_with("---"));
    }

    #[test]
    fn test_slug_for_href() {
        assert_eq!(
            slug_for_href("/notes/web-introduction/html"),
            Some("notes/web-introduction/html".to_string())
        );
        assert_eq!(
            slug_for_href("/docs/getting-started/#install"),
            Some("docs/getting-started".to_string())
        );
        assert_eq!(slug_for_href("/"), Some("index".to_string()));
        assert_eq!(slug_for_href("https://pomb.us/build-your-own-react/"), None);
    }
}
