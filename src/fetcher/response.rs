//! Search response parsing and normalization.

use super::sanitize::strip_html;
use crate::domain::error::{BoardError, Result};
use crate::domain::{Article, RawArticle};

/// Parses a search response into normalized articles.
///
/// # Errors
///
/// - [`BoardError::Http`] for a status outside `200..300`
/// - [`BoardError::MalformedResponse`] if the body is not a JSON array of
///   article records
///
/// # Examples
///
/// ```
/// use custom_board::fetcher::parse_response;
///
/// let body = br#"[{"title": "<b>Gold</b> prices rise", "imageUrls": []}]"#;
/// let articles = parse_response(200, body)?;
/// assert_eq!(articles[0].title, "Gold prices rise");
/// # Ok::<(), custom_board::BoardError>(())
/// ```
pub fn parse_response(status: u16, body: &[u8]) -> Result<Vec<Article>> {
    if !(200..300).contains(&status) {
        return Err(BoardError::Http { status });
    }

    let records: Vec<RawArticle> = serde_json::from_slice(body)
        .map_err(|e| BoardError::MalformedResponse(e.to_string()))?;

    tracing::debug!(record_count = records.len(), "search response parsed");

    Ok(records.into_iter().map(normalize).collect())
}

/// Converts a wire record into an [`Article`].
///
/// Every text field is stripped to plain text; image URLs pass through
/// untouched and in order.
#[must_use]
pub fn normalize(raw: RawArticle) -> Article {
    Article {
        title: strip_html(&raw.title),
        description: strip_html(&raw.description),
        pub_date: strip_html(&raw.pub_date),
        original_link: strip_html(&raw.original_link),
        image_urls: raw.image_urls,
        article_text: strip_html(&raw.article_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_text_field_is_sanitized_and_images_kept_in_order() {
        let body = br#"[{
            "title": "<b>Gold</b> prices rise",
            "description": "<i>Spot</i> &amp; futures",
            "pubDate": "<span>Mon, 14 Oct 2024 10:00:00 +0900</span>",
            "originallink": "<a>https://news.example.com/1</a>",
            "imageUrls": ["https://img.example.com/b.png?x=<b>", "https://img.example.com/a.png"],
            "articleText": "<p>Para one</p><p>Para two</p>"
        }]"#;

        let articles = parse_response(200, body).unwrap();

        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.title, "Gold prices rise");
        assert_eq!(article.description, "Spot & futures");
        assert_eq!(article.pub_date, "Mon, 14 Oct 2024 10:00:00 +0900");
        assert_eq!(article.original_link, "https://news.example.com/1");
        assert_eq!(
            article.image_urls,
            vec![
                "https://img.example.com/b.png?x=<b>".to_string(),
                "https://img.example.com/a.png".to_string(),
            ]
        );
        assert_eq!(article.article_text, "Para one\nPara two");
    }

    #[test]
    fn empty_array_is_a_valid_empty_result() {
        assert_eq!(parse_response(200, b"[]").unwrap(), Vec::<Article>::new());
    }

    #[test]
    fn error_status_is_reported() {
        assert!(matches!(
            parse_response(503, b"[]"),
            Err(BoardError::Http { status: 503 })
        ));
        assert!(matches!(
            parse_response(500, br#"[{"title": "stale"}]"#),
            Err(BoardError::Http { status: 500 })
        ));
    }

    #[test]
    fn non_array_body_is_malformed() {
        assert!(matches!(
            parse_response(200, br#"{"error": "nope"}"#),
            Err(BoardError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response(200, b"<html>gateway</html>"),
            Err(BoardError::MalformedResponse(_))
        ));
    }
}
