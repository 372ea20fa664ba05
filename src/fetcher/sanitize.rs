//! Markup-to-plain-text conversion for search results.
//!
//! Results come from an external aggregation source that embeds markup
//! (highlighting spans, entities, the odd `<br>`). Everything the shell
//! renders must be plain text, so every text field of every record goes
//! through [`strip_html`] before it reaches state.

/// Elements whose contents are never text.
const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

/// Elements that start a new line in rendered text.
const BREAKING_TAGS: [&str; 12] = [
    "br", "p", "div", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote",
];

/// Strips HTML markup, keeping only the text content.
///
/// - Tags and comments are removed; `<script>`/`<style>` lose their contents too.
/// - Line-breaking elements become newlines.
/// - Entities are decoded after tags are gone, so `&lt;b&gt;` stays visible text.
/// - Whitespace runs collapse to one space per line; blank lines are dropped.
/// - A `<` that does not open a tag (`3 < 5`) is kept.
/// - Control characters are removed, so no escape sequence survives.
///
/// # Examples
///
/// ```
/// use custom_board::fetcher::strip_html;
///
/// assert_eq!(strip_html("<b>Gold</b> prices rise"), "Gold prices rise");
/// assert_eq!(strip_html("Fed &amp; rates"), "Fed & rates");
/// ```
#[must_use]
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        if !opens_markup(after) {
            text.push('<');
            rest = after;
            continue;
        }

        if let Some(comment) = after.strip_prefix("!--") {
            rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
            continue;
        }

        // Unterminated tag at the end of input: dropped, as a browser would.
        let Some(end) = after.find('>') else {
            rest = "";
            break;
        };

        let tag = &after[..end];
        rest = &after[end + 1..];

        let name = tag_name(tag);
        if !tag.starts_with('/') && RAW_TEXT_TAGS.contains(&name.as_str()) {
            rest = skip_raw_text(rest, &name);
        }
        if BREAKING_TAGS.contains(&name.as_str()) {
            text.push('\n');
        }
    }
    text.push_str(rest);

    let decoded = html_escape::decode_html_entities(&text);
    normalize_whitespace(&drop_control_chars(&decoded))
}

fn opens_markup(after_lt: &str) -> bool {
    after_lt
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Returns the input after the closing tag of a raw-text element, or the
/// empty string if it is never closed.
fn skip_raw_text<'a>(rest: &'a str, name: &str) -> &'a str {
    // ASCII lowercasing keeps byte offsets identical.
    let lower = rest.to_ascii_lowercase();
    let closing = format!("</{name}");
    lower
        .find(&closing)
        .and_then(|pos| rest[pos..].find('>').map(|gt| &rest[pos + gt + 1..]))
        .unwrap_or("")
}

/// Terminal control characters (ESC, BEL, ...) must never reach the
/// renderer. Newlines are kept, tabs become spaces.
fn drop_control_chars(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_markup_is_removed_and_text_kept() {
        assert_eq!(strip_html("<b>Gold</b> prices rise"), "Gold prices rise");
        assert_eq!(
            strip_html(r#"<span class="hl">Seoul</span> stocks"#),
            "Seoul stocks"
        );
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            strip_html("&quot;Fed&quot; &amp; rates &#39;hold&#39;"),
            "\"Fed\" & rates 'hold'"
        );
    }

    #[test]
    fn escaped_tags_stay_visible_as_text() {
        assert_eq!(strip_html("use &lt;b&gt; for bold"), "use <b> for bold");
    }

    #[test]
    fn script_and_style_contents_are_dropped() {
        assert_eq!(
            strip_html("a<script>alert('x')</script>b<STYLE>p{}</STYLE>c"),
            "abc"
        );
        assert_eq!(strip_html("before<script>never closed"), "before");
    }

    #[test]
    fn comments_are_dropped() {
        assert_eq!(strip_html("one<!-- hidden -->two"), "onetwo");
    }

    #[test]
    fn stray_less_than_is_text() {
        assert_eq!(strip_html("3 < 5 and 7 <= 8"), "3 < 5 and 7 <= 8");
    }

    #[test]
    fn line_breaks_become_newlines() {
        assert_eq!(
            strip_html("<p>first</p><p>second<br/>third</p>"),
            "first\nsecond\nthird"
        );
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(strip_html("  many\t\tspaces   here "), "many spaces here");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(strip_html("https://news.example.com/a?b=1"), "https://news.example.com/a?b=1");
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn unterminated_tag_is_dropped() {
        assert_eq!(strip_html("text <b"), "text");
    }

    #[test]
    fn terminal_control_sequences_are_removed() {
        assert_eq!(
            strip_html("<b>Gold</b>\u{1b}[2J prices\u{7}"),
            "Gold[2J prices"
        );
        assert_eq!(
            strip_html("<b>Gold</b>&#27;[2J\u{1b}]0;pwned\u{7}"),
            "Gold&#27;[2J]0;pwned"
        );
        assert_eq!(strip_html("Gold\tprices\r\nrise"), "Gold prices\nrise");
    }
}
