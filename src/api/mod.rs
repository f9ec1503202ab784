// Atomic API modules
pub mod account;
pub mod catalog;
pub mod client;
pub mod software;

// Re-export commonly used functions
pub use account::{invoice_total, load_account, next_invoice_total};
pub use catalog::{
    load_datacenters, load_items, load_presets, load_storage_package, PUBLIC_CLOUD_PACKAGE,
};
pub use client::{set_silent, SlClient};
pub use software::load_software_descriptions;
