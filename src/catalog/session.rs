//! Session-lifetime catalog state.
//!
//! A session owns the API client plus the four collections every catalog
//! operation shares. Each collection is loaded lazily on first use behind
//! an initialize-once barrier and is immutable afterwards; derived records
//! are computed fresh per request.

use std::collections::BTreeMap;

use tokio::sync::OnceCell;

use crate::api::{self, SlClient};
use crate::error::CatalogError;
use crate::models::{
    Item, Location, OsRecord, Preset, PresetRecord, RegionRecord, StoragePackage, StorageRecord,
    TransferRecord,
};

use super::locations::resolve_locations;
use super::os::normalize_os_catalog;
use super::presets::aggregate_presets;
use super::storage::storage_prices;
use super::transfer::transfer_prices;

pub struct Session {
    client: SlClient,
    items: OnceCell<Vec<Item>>,
    presets: OnceCell<Vec<Preset>>,
    locations: OnceCell<Vec<Location>>,
    storage: OnceCell<StoragePackage>,
}

impl Session {
    pub fn new(client: SlClient) -> Self {
        Self {
            client,
            items: OnceCell::new(),
            presets: OnceCell::new(),
            locations: OnceCell::new(),
            storage: OnceCell::new(),
        }
    }

    /// Build a session from `SL_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(SlClient::from_env())
    }

    pub fn client(&self) -> &SlClient {
        &self.client
    }

    async fn items(&self) -> Result<&Vec<Item>, CatalogError> {
        self.items
            .get_or_try_init(|| async {
                let items = api::load_items(&self.client).await?;
                tracing::debug!(count = items.len(), "loaded package items");
                Ok(items)
            })
            .await
    }

    async fn presets(&self) -> Result<&Vec<Preset>, CatalogError> {
        self.presets
            .get_or_try_init(|| async {
                let presets = api::load_presets(&self.client).await?;
                tracing::debug!(count = presets.len(), "loaded package presets");
                Ok(presets)
            })
            .await
    }

    async fn locations(&self) -> Result<&Vec<Location>, CatalogError> {
        self.locations
            .get_or_try_init(|| async {
                let datacenters = api::load_datacenters(&self.client).await?;
                let locations = resolve_locations(datacenters)?;
                tracing::debug!(count = locations.len(), "resolved canonical locations");
                Ok(locations)
            })
            .await
    }

    async fn storage(&self) -> Result<&StoragePackage, CatalogError> {
        self.storage
            .get_or_try_init(|| async {
                let storage = api::load_storage_package(&self.client).await?;
                tracing::debug!(prices = storage.prices.len(), "loaded storage package");
                Ok(storage)
            })
            .await
    }

    /// Normalized per-datacenter preset pricing.
    pub async fn preset_records(&self) -> Result<Vec<PresetRecord>, CatalogError> {
        let items = self.items().await?;
        let presets = self.presets().await?;
        let locations = self.locations().await?;
        aggregate_presets(items, presets, locations, api::PUBLIC_CLOUD_PACKAGE)
    }

    /// Filtered OS catalog, with tier pricing when requested.
    pub async fn os_records(&self, with_prices: bool) -> Result<Vec<OsRecord>, CatalogError> {
        let descriptions = api::load_software_descriptions(&self.client).await?;
        let items = if with_prices {
            Some(self.items().await?.as_slice())
        } else {
            None
        };
        normalize_os_catalog(&descriptions, items)
    }

    /// Block-storage price per datacenter.
    pub async fn storage_records(&self) -> Result<Vec<StorageRecord>, CatalogError> {
        let storage = self.storage().await?;
        let locations = self.locations().await?;
        storage_prices(storage, locations)
    }

    /// Data-transfer price per datacenter.
    pub async fn transfer_records(&self) -> Result<Vec<TransferRecord>, CatalogError> {
        Ok(transfer_prices(self.locations().await?))
    }

    /// One region record per canonical location.
    pub async fn region_records(&self) -> Result<Vec<RegionRecord>, CatalogError> {
        Ok(self
            .locations()
            .await?
            .iter()
            .map(|location| RegionRecord {
                provider: location.provider.clone(),
                region: location.dc.clone(),
                country: location.country.clone(),
            })
            .collect())
    }

    /// Country → datacenter-code map.
    pub async fn datacenter_map(&self) -> Result<BTreeMap<String, String>, CatalogError> {
        Ok(self
            .locations()
            .await?
            .iter()
            .map(|location| (location.country.clone(), location.dc.clone()))
            .collect())
    }
}
