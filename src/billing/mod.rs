pub mod invoices;

pub use invoices::{last_recurring_summary, next_invoice_total, recurring_summary, InvoiceSummary};
