//! Invoices.

use std::convert::identity;

use monnify_proto::invoices::{AttachReservedAccount, CreateInvoice};
use monnify_proto::{Page, paths};
use reqwest::Method;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

use crate::client::MonnifyClient;
use crate::outcome::{Data, Outcome, conclude};

impl MonnifyClient {
    /// Creates an invoice.
    ///
    /// `POST /api/v1/invoice/create`, scoped to the merchant contract.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.create_invoice",
            skip_all,
            fields(
                invoice_reference = %request.invoice_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn create_invoice(&self, request: &CreateInvoice) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::INVOICE_CREATE,
                &[],
                "Failed to create invoice",
                |r| r.json(&self.scoped(request)),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Lists invoices, one page at a time.
    ///
    /// `GET /api/v1/invoice/all?page=&size=`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.list_invoices",
            skip_all,
            fields(
                page = page.page,
                size = page.size,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn list_invoices(&self, page: Page) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::INVOICES,
                &[],
                "Failed to fetch invoices",
                |r| r.query(&page),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Fetches one invoice.
    ///
    /// `GET /api/v1/invoice/{invoiceReference}/details`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.invoice_details",
            skip_all,
            fields(
                invoice_reference = %invoice_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn invoice_details(&self, invoice_reference: &str) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::INVOICE_DETAILS,
                &[invoice_reference],
                "Failed to fetch invoice details",
                identity,
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Cancels an unpaid invoice.
    ///
    /// `DELETE /api/v1/invoice/{invoiceReference}/cancel`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.cancel_invoice",
            skip_all,
            fields(
                invoice_reference = %invoice_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn cancel_invoice(&self, invoice_reference: &str) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::DELETE,
                paths::INVOICE_CANCEL,
                &[invoice_reference],
                "Failed to cancel invoice",
                identity,
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Binds a new invoice to an existing invoice reserved account.
    ///
    /// Posts to the invoice-create path with the account reference in the
    /// body, scoped to the merchant contract.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.attach_reserved_account_to_invoice",
            skip_all,
            fields(
                invoice_reference = %request.invoice_reference,
                account_reference = %request.account_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn attach_reserved_account_to_invoice(
        &self,
        request: &AttachReservedAccount,
    ) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::INVOICE_CREATE,
                &[],
                "Failed to attach reserved account to invoice",
                |r| r.json(&self.scoped(request)),
            )
            .await;
        conclude(result.map(Data::from))
    }
}
