use serde::Serialize;

/// A canonical datacenter after group filtering and metro deduplication.
///
/// `price_group_id` is absent when no "Location Group" price group was
/// attached upstream; price resolution then falls back to
/// location-independent rows.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub provider: String,
    pub dc: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_group_id: Option<i64>,
}

impl Location {
    /// First 3 characters of the datacenter code, identifying the metro.
    pub fn metro_prefix(&self) -> &str {
        let end = self.dc.len().min(3);
        &self.dc[..end]
    }
}
