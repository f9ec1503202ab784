//! Recurring-invoice summaries.
//!
//! The API exposes invoices per creation date only; a recurring invoice
//! created in a month bills the previous month's usage, and one month may
//! carry several of them, so totals are summed across matches.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::api::{self, SlClient};
use crate::error::CatalogError;

const RECURRING_TYPE: &str = "RECURRING";

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub account: String,
    pub account_id: i64,
    pub invoice_ids: Vec<i64>,
    pub total_amount: f64,
}

/// Sum the account's RECURRING invoices, optionally restricted to a
/// creation month.
pub async fn recurring_summary(
    client: &SlClient,
    month: Option<(i32, u32)>,
) -> Result<InvoiceSummary, CatalogError> {
    let account = api::load_account(client).await?;
    tracing::debug!(account = %account.company_name, id = account.id, "loaded account");

    let mut invoice_ids = Vec::new();
    let mut total_amount = 0.0;

    for invoice in &account.invoices {
        if invoice.type_code != RECURRING_TYPE {
            continue;
        }
        if let Some((year, mon)) = month {
            let created = DateTime::parse_from_rfc3339(&invoice.create_date).map_err(|_| {
                CatalogError::InvalidInvoiceDate {
                    id: invoice.id,
                    date: invoice.create_date.clone(),
                }
            })?;
            if created.year() != year || created.month() != mon {
                continue;
            }
        }

        let amount = api::invoice_total(client, invoice.id).await?;
        tracing::debug!(invoice = invoice.id, amount, "recurring invoice matched");
        invoice_ids.push(invoice.id);
        total_amount += amount;
    }

    Ok(InvoiceSummary {
        account: account.company_name,
        account_id: account.id,
        invoice_ids,
        total_amount,
    })
}

/// Summary for the current month — the invoice billing last month's usage.
pub async fn last_recurring_summary(client: &SlClient) -> Result<InvoiceSummary, CatalogError> {
    let now = Utc::now();
    recurring_summary(client, Some((now.year(), now.month()))).await
}

/// Projected total of the account's next invoice.
pub async fn next_invoice_total(client: &SlClient) -> Result<f64, CatalogError> {
    api::next_invoice_total(client).await
}
