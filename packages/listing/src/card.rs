use media::{PhotoResolver, ResolvedPhoto};
use serde::Serialize;

use crate::property::PropertyRecord;

/// Display projection of a property for list and card views.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyCard {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size_sqm: Option<f64>,
    /// Resolved display image. `None` when the record has no photo; the
    /// rendering collaborator chooses the fallback visual.
    pub photo_url: Option<String>,
}

impl PropertyCard {
    /// Build the card for one record.
    ///
    /// `external` is a pre-fetched photo list for this property, when the
    /// caller has one; it takes precedence over the record's own field.
    pub fn build(
        record: &PropertyRecord,
        resolver: &PhotoResolver,
        external: Option<&[String]>,
    ) -> Self {
        let photo = resolver.resolve(&record.photos, external);
        if photo == ResolvedPhoto::Absent {
            tracing::debug!("property {} has no displayable photo", record.id);
        }
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            price: record.price,
            address: record.address.clone(),
            kind: record.kind.clone(),
            size_sqm: record.size_sqm,
            photo_url: photo.into_url(),
        }
    }

    /// Build cards for a whole fetched page of records.
    pub fn build_all(records: &[PropertyRecord], resolver: &PhotoResolver) -> Vec<Self> {
        records
            .iter()
            .map(|record| Self::build(record, resolver, None))
            .collect()
    }
}
