use std::collections::{HashMap, HashSet};

/// Strip everything but inline formatting and simple block markup.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "u", "sub", "sup", "code", "pre",
        "blockquote", "ul", "ol", "li", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("td", ["colspan", "rowspan"].into_iter().collect());
    attributes.insert("th", ["colspan", "rowspan"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

/// Server text that may mix markup and bare line breaks.
#[must_use]
pub fn rich_text(text: &str) -> String {
    sanitize_html(&text.replace("\r\n", "\n").replace('\n', "<br>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_and_handlers_are_removed() {
        let clean = sanitize_html(r#"<p onclick="x()">Texto<script>alert(1)</script></p>"#);
        assert_eq!(clean, "<p>Texto</p>");
    }

    #[test]
    fn line_breaks_become_br() {
        assert_eq!(rich_text("a\nb"), "a<br>b");
    }

    #[test]
    fn formatting_survives() {
        assert_eq!(
            sanitize_html("<strong>x</strong><sub>2</sub>"),
            "<strong>x</strong><sub>2</sub>"
        );
    }
}
