use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A property's photo field as it arrives from upstream records.
///
/// Upstream data carries this field in several shapes: missing/null, a
/// single URL string, an array of URL strings, or a JSON-encoded string
/// that decodes to either of the previous two. The ambiguity is resolved
/// exactly once, when the record is deserialized; downstream code only
/// ever sees these canonical variants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhotoSource {
    /// No photo data on the record.
    #[default]
    Missing,
    /// A single URL, or URL-like text kept verbatim from a malformed encoding.
    Raw(String),
    /// An ordered list of URLs.
    List(Vec<String>),
}

impl PhotoSource {
    /// Classify a textual photo field.
    ///
    /// Text that parses as JSON is decoded and the decoded value is
    /// classified instead; text that does not parse is kept verbatim as a
    /// single URL candidate.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(decoded) => Self::from_decoded(decoded, text),
            Err(err) => {
                tracing::debug!("photo field is not JSON ({}), keeping literal text", err);
                Self::Raw(text)
            }
        }
    }

    fn from_decoded(decoded: Value, original: String) -> Self {
        match decoded {
            Value::Null => Self::Missing,
            Value::String(url) => Self::Raw(url),
            Value::Array(entries) => Self::List(collect_urls(entries)),
            other => {
                tracing::debug!(
                    "photo field decoded to unexpected JSON {}, keeping literal text",
                    other
                );
                Self::Raw(original)
            }
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing) || self.as_slice().is_empty()
    }

    /// All URL candidates in priority order.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Missing => &[],
            Self::Raw(url) => std::slice::from_ref(url),
            Self::List(urls) => urls,
        }
    }

    /// The first URL candidate, if any.
    pub fn first(&self) -> Option<&str> {
        self.as_slice().first().map(String::as_str)
    }
}

fn collect_urls(entries: Vec<Value>) -> Vec<String> {
    let mut urls = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            Value::String(url) => urls.push(url),
            other => tracing::debug!("skipping non-string photo entry {}", other),
        }
    }
    urls
}

impl Serialize for PhotoSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Missing => serializer.serialize_none(),
            Self::Raw(url) => serializer.serialize_str(url),
            Self::List(urls) => urls.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PhotoSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => Self::Missing,
            Value::String(text) => Self::from_text(text),
            Value::Array(entries) => Self::List(collect_urls(entries)),
            other => {
                tracing::debug!("photo field has unexpected JSON {}, treating as missing", other);
                Self::Missing
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(field: &str) -> PhotoSource {
        serde_json::from_str(field).unwrap()
    }

    #[test]
    fn null_is_missing() {
        assert_eq!(from_json("null"), PhotoSource::Missing);
    }

    #[test]
    fn plain_url_string_is_raw() {
        assert_eq!(
            from_json(r#""http://x/y.jpg""#),
            PhotoSource::Raw("http://x/y.jpg".into())
        );
    }

    #[test]
    fn array_is_list() {
        assert_eq!(
            from_json(r#"["p1.jpg","p2.jpg"]"#),
            PhotoSource::List(vec!["p1.jpg".into(), "p2.jpg".into()])
        );
    }

    #[test]
    fn json_encoded_array_string_is_decoded_once() {
        assert_eq!(
            from_json(r#""[\"p1.jpg\",\"p2.jpg\"]""#),
            PhotoSource::List(vec!["p1.jpg".into(), "p2.jpg".into()])
        );
    }

    #[test]
    fn json_encoded_string_is_decoded_once() {
        assert_eq!(from_json(r#""\"p1.jpg\"""#), PhotoSource::Raw("p1.jpg".into()));
    }

    #[test]
    fn malformed_json_text_is_kept_verbatim() {
        assert_eq!(from_json(r#""[p1.jpg""#), PhotoSource::Raw("[p1.jpg".into()));
    }

    #[test]
    fn encoded_null_is_missing() {
        assert_eq!(from_json(r#""null""#), PhotoSource::Missing);
    }

    #[test]
    fn non_string_array_entries_are_skipped() {
        assert_eq!(
            from_json(r#"["a.jpg", 7, null, "b.jpg"]"#),
            PhotoSource::List(vec!["a.jpg".into(), "b.jpg".into()])
        );
    }

    #[test]
    fn unexpected_field_type_is_missing() {
        assert_eq!(from_json("42"), PhotoSource::Missing);
        assert_eq!(from_json(r#"{"url":"a.jpg"}"#), PhotoSource::Missing);
    }

    #[test]
    fn text_decoding_to_unexpected_type_is_kept_verbatim() {
        assert_eq!(from_json(r#""42""#), PhotoSource::Raw("42".into()));
    }

    #[test]
    fn empty_list_is_missing() {
        assert!(from_json("[]").is_missing());
        assert!(!from_json(r#"["a.jpg"]"#).is_missing());
    }

    #[test]
    fn first_follows_priority_order() {
        assert_eq!(from_json(r#"["a.jpg","b.jpg"]"#).first(), Some("a.jpg"));
        assert_eq!(from_json(r#""a.jpg""#).first(), Some("a.jpg"));
        assert_eq!(from_json("null").first(), None);
    }

    #[test]
    fn serializes_in_canonical_form() {
        let encoded: PhotoSource = from_json(r#""[\"p1.jpg\"]""#);
        assert_eq!(serde_json::to_string(&encoded).unwrap(), r#"["p1.jpg"]"#);
        assert_eq!(
            serde_json::to_string(&PhotoSource::Missing).unwrap(),
            "null"
        );
        assert_eq!(
            serde_json::to_string(&PhotoSource::Raw("a.jpg".into())).unwrap(),
            r#""a.jpg""#
        );
    }
}
