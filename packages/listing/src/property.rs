use chrono::{DateTime, Utc};
use media::PhotoSource;
use serde::{Deserialize, Serialize};

/// A property listing as fetched from the upstream data source.
///
/// Display fields are pass-through data for rendering collaborators. Only
/// `photos` is interpreted here: its shape ambiguity is resolved while the
/// record is deserialized (see [`PhotoSource`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Upstream identifier, opaque.
    pub id: String,
    pub name: String,
    pub price: i64,
    pub address: String,
    /// Property type label (house, apartment, ...).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub size_sqm: Option<f64>,
    #[serde(default)]
    pub photos: PhotoSource,
    #[serde(default)]
    pub listed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_photos_absent() {
        let record: PropertyRecord = serde_json::from_str(
            r#"{"id":"p-1","name":"Sea View","price":250000,"address":"1 Shore Rd","type":"house"}"#,
        )
        .unwrap();
        assert_eq!(record.photos, PhotoSource::Missing);
        assert!(record.size_sqm.is_none());
        assert!(record.listed_at.is_none());
    }

    #[test]
    fn deserializes_each_photo_shape() {
        let base = |photos: &str| {
            format!(
                r#"{{"id":"p-1","name":"n","price":1,"address":"a","type":"flat","photos":{photos}}}"#
            )
        };
        let single: PropertyRecord = serde_json::from_str(&base(r#""a.jpg""#)).unwrap();
        assert_eq!(single.photos, PhotoSource::Raw("a.jpg".into()));

        let list: PropertyRecord = serde_json::from_str(&base(r#"["a.jpg","b.jpg"]"#)).unwrap();
        assert_eq!(
            list.photos,
            PhotoSource::List(vec!["a.jpg".into(), "b.jpg".into()])
        );

        let encoded: PropertyRecord =
            serde_json::from_str(&base(r#""[\"a.jpg\"]""#)).unwrap();
        assert_eq!(encoded.photos, PhotoSource::List(vec!["a.jpg".into()]));

        let null: PropertyRecord = serde_json::from_str(&base("null")).unwrap();
        assert_eq!(null.photos, PhotoSource::Missing);
    }

    #[test]
    fn kind_maps_to_upstream_type_key() {
        let record: PropertyRecord = serde_json::from_str(
            r#"{"id":"p-1","name":"n","price":1,"address":"a","type":"apartment"}"#,
        )
        .unwrap();
        assert_eq!(record.kind, "apartment");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""type":"apartment""#));
    }
}
