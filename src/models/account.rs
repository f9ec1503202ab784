use serde::Deserialize;

/// The billing account, fetched with its invoice headers.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

/// An invoice header. `type_code` distinguishes RECURRING invoices from
/// one-time and credit entries; `create_date` is the only usable key for
/// month filtering.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    #[serde(default)]
    pub type_code: String,
    #[serde(default)]
    pub create_date: String,
}
