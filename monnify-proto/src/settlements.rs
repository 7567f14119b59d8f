//! Settlement lookups.

use serde::{Deserialize, Serialize};

use crate::Page;

/// Query of `GET /api/v1/transactions/find-by-settlement-reference`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTransactions {
    /// Settlement reference.
    pub reference: String,
    /// Zero-based page index.
    pub page: u32,
    /// Page size.
    pub size: u32,
}

impl SettlementTransactions {
    /// Default page size for settlement listings.
    pub const DEFAULT_SIZE: u32 = 20;

    /// Creates a query for the first page of twenty transactions.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self::paged(reference, Page::new(0, Self::DEFAULT_SIZE))
    }

    /// Creates a query for an explicit page.
    #[must_use]
    pub fn paged(reference: impl Into<String>, page: Page) -> Self {
        Self {
            reference: reference.into(),
            page: page.page,
            size: page.size,
        }
    }
}

/// Query of `GET /api/v1/settlement-detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementDetail {
    /// Monnify transaction reference.
    pub transaction_reference: String,
}
