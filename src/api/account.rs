use serde_json::Value;

use crate::error::CatalogError;
use crate::models::Account;

use super::client::SlClient;

const ACCOUNT_MASK: &str = "mask[invoices]";

/// Load the billing account with its invoice headers.
pub async fn load_account(client: &SlClient) -> Result<Account, CatalogError> {
    let params = vec![("objectMask".to_string(), ACCOUNT_MASK.to_string())];
    let payload = client.get("SoftLayer_Account/getObject.json", &params).await?;
    serde_json::from_value(payload).map_err(|e| CatalogError::Decode {
        what: "account",
        source: e,
    })
}

/// Total amount of one invoice.
pub async fn invoice_total(client: &SlClient, invoice_id: i64) -> Result<f64, CatalogError> {
    let endpoint = format!(
        "SoftLayer_Billing_Invoice/{}/getInvoiceTotalAmount.json",
        invoice_id
    );
    let payload = client.get(&endpoint, &[]).await?;
    decode_amount(&payload)
}

/// Projected total of the account's next invoice.
pub async fn next_invoice_total(client: &SlClient) -> Result<f64, CatalogError> {
    let payload = client
        .get("SoftLayer_Account/getNextInvoiceTotalAmount.json", &[])
        .await?;
    decode_amount(&payload)
}

// Amounts come back as a bare JSON string ("123.45") or number.
fn decode_amount(payload: &Value) -> Result<f64, CatalogError> {
    let parsed = match payload {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| CatalogError::UnexpectedPayload {
        what: "invoice amount",
        payload: payload.to_string(),
    })
}
