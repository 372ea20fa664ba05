//! Article records as they arrive on the wire and as the shell keeps them.
//!
//! [`RawArticle`] mirrors the JSON the aggregation endpoint returns, field
//! names included. [`Article`] is the normalized, plain-text form produced by
//! the fetcher; nothing else in the crate constructs it from raw input.

use serde::{Deserialize, Deserializer, Serialize};

/// One search result exactly as the endpoint sends it.
///
/// Text fields may contain markup (highlighting spans, entities). Missing or
/// `null` fields deserialize to empty values so a sparse record still
/// normalizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawArticle {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "pubDate", deserialize_with = "null_as_default")]
    pub pub_date: String,
    #[serde(rename = "originallink", deserialize_with = "null_as_default")]
    pub original_link: String,
    #[serde(rename = "imageUrls", deserialize_with = "null_as_default")]
    pub image_urls: Vec<String>,
    #[serde(rename = "articleText", deserialize_with = "null_as_default")]
    pub article_text: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A normalized search result. All text fields are plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub pub_date: String,
    pub original_link: String,
    pub image_urls: Vec<String>,
    pub article_text: String,
}

impl Article {
    /// Returns the publication date in `YYYY-MM-DD HH:MM` form.
    ///
    /// The endpoint sends RFC 2822 dates (`Mon, 14 Oct 2024 10:00:00 +0900`).
    /// Anything that does not parse is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use custom_board::domain::Article;
    ///
    /// let article = Article {
    ///     pub_date: "Mon, 14 Oct 2024 10:00:00 +0900".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(article.display_date(), "2024-10-14 10:00");
    /// ```
    #[must_use]
    pub fn display_date(&self) -> String {
        chrono::DateTime::parse_from_rfc2822(self.pub_date.trim()).map_or_else(
            |_| self.pub_date.clone(),
            |date| date.format("%Y-%m-%d %H:%M").to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_article_uses_wire_field_names() {
        let json = r#"{
            "title": "t",
            "description": "d",
            "pubDate": "p",
            "originallink": "https://example.com/a",
            "imageUrls": ["https://example.com/1.png"],
            "articleText": "body"
        }"#;
        let raw: RawArticle = serde_json::from_str(json).unwrap();
        assert_eq!(raw.pub_date, "p");
        assert_eq!(raw.original_link, "https://example.com/a");
        assert_eq!(raw.image_urls, vec!["https://example.com/1.png".to_string()]);
        assert_eq!(raw.article_text, "body");
    }

    #[test]
    fn raw_article_tolerates_missing_fields() {
        let raw: RawArticle = serde_json::from_str(r#"{"title": "only"}"#).unwrap();
        assert_eq!(raw.title, "only");
        assert!(raw.image_urls.is_empty());
        assert!(raw.description.is_empty());
    }

    #[test]
    fn raw_article_treats_null_as_empty() {
        let raw: RawArticle =
            serde_json::from_str(r#"{"title": null, "imageUrls": null, "articleText": "x"}"#).unwrap();
        assert_eq!(raw.title, "");
        assert!(raw.image_urls.is_empty());
        assert_eq!(raw.article_text, "x");
    }

    #[test]
    fn unparseable_date_is_shown_raw() {
        let article = Article {
            pub_date: "yesterday".to_string(),
            ..Article::default()
        };
        assert_eq!(article.display_date(), "yesterday");
    }
}
