/// Error types for catalog and billing operations
use thiserror::Error;

/// Errors that can occur while loading or normalizing catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),

    /// SoftLayer API returned a non-success status
    #[error("API error: HTTP {status}: {body}")]
    Api {
        /// HTTP status code of the terminal response
        status: u16,
        /// Response body, as returned by the API
        body: String,
    },

    /// A payload did not decode into the expected shape
    #[error("Failed to decode {what}: {source}")]
    Decode {
        /// Which payload was being decoded
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A payload decoded, but not into anything usable
    #[error("Unexpected {what} payload: {payload}")]
    UnexpectedPayload {
        /// Which payload was being read
        what: &'static str,
        /// The offending payload, rendered as JSON
        payload: String,
    },

    /// Preset key does not encode CPUxMEMORYxDISK dimensions
    #[error("Preset key '{0}' does not encode instance dimensions")]
    MalformedPresetKey(String),

    /// Fewer than 3 of the 4 component categories resolved for a preset
    #[error("Preset '{key}' resolved only {resolved} component categories (need at least 3)")]
    IncompleteConfiguration {
        /// Preset key name
        key: String,
        /// Number of categories that did resolve
        resolved: usize,
    },

    /// A preset lacks the compute group its product type comes from
    #[error("Preset '{0}' has no compute group")]
    MissingComputeGroup(String),

    /// A preset configuration references a price id no item carries
    #[error("No '{category}' item carries price id {price_id}")]
    DanglingPriceReference {
        /// Component category code
        category: &'static str,
        /// The unresolvable price id
        price_id: i64,
    },

    /// A price row carries a fee that does not parse as a decimal
    #[error("Price {price_id} carries unparsable fee '{fee}'")]
    InvalidFee {
        /// Price id of the offending row
        price_id: i64,
        /// The raw fee string
        fee: String,
    },

    /// An OS item prices no tiers at all
    #[error("OS item for software description {0} has an empty price list")]
    EmptyPriceList(i64),

    /// A multi-tier price row is missing its capacity bound
    #[error("Price {0} has no capacity restriction maximum to key its tier")]
    MissingTierBound(i64),

    /// A datacenter record carries no region description
    #[error("Datacenter '{0}' has no region description")]
    MissingRegion(String),

    /// A region description does not contain a country segment
    #[error("Region description '{0}' does not contain a country segment")]
    MalformedRegion(String),

    /// No storage price row matched a location's price group
    #[error("No storage price resolved for datacenter '{0}'")]
    MissingStoragePrice(String),

    /// The OS catalog came back empty after filtering
    #[error("OS catalog is empty after filtering; upstream shape has drifted")]
    EmptyOsCatalog,

    /// The storage package query returned nothing
    #[error("Storage package query returned no items")]
    MissingStoragePackage,

    /// An invoice date did not parse
    #[error("Invoice {id} carries unparsable create date '{date}'")]
    InvalidInvoiceDate {
        /// Invoice id
        id: i64,
        /// The raw date string
        date: String,
    },
}
