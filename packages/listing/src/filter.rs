use serde::Deserialize;

use crate::error::ListingError;
use crate::property::PropertyRecord;

/// Browse-page filter criteria.
///
/// All criteria are optional; an empty filter matches every record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingFilter {
    /// Inclusive lower price bound.
    pub min_price: Option<i64>,
    /// Inclusive upper price bound.
    pub max_price: Option<i64>,
    /// Exact property type, matched case-insensitively.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Substring search over name and address, case-insensitive.
    pub search: Option<String>,
}

impl ListingFilter {
    /// Validate criteria before applying them.
    pub fn validate(&self) -> Result<(), ListingError> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && min > max
        {
            return Err(ListingError::Validation(format!(
                "min_price {min} is greater than max_price {max}"
            )));
        }
        Ok(())
    }

    /// Whether a single record satisfies every present criterion.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if let Some(min) = self.min_price
            && record.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && record.price > max
        {
            return false;
        }
        if let Some(kind) = &self.kind
            && !record.kind.eq_ignore_ascii_case(kind)
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !record.name.to_lowercase().contains(&needle)
                && !record.address.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }

    /// Apply the filter over a fetched record set, preserving input order.
    pub fn apply<'a>(&self, records: &'a [PropertyRecord]) -> Vec<&'a PropertyRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}
