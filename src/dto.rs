use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dates::parse_date;
use crate::error::{Error, Result};

pub const COMPLETED: &str = "completed";

/// One row of the payment-processor export. Only the columns the report
/// needs are mapped; the rest of the export is ignored.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ExportRow {
    #[serde(rename = "Transaction Status")]
    pub status: String,
    #[serde(rename = "Date Requested")]
    pub date_requested: String,
    #[serde(rename = "Transaction Amount")]
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl Transaction {
    /// Validates an export row. `row` is the 1-based data row number used in errors.
    pub fn from_export_row(row: usize, export: ExportRow) -> Result<Self> {
        if export.status != COMPLETED {
            return Err(Error::InvalidState {
                row,
                status: export.status,
            });
        }

        let amount: Decimal = export
            .amount
            .trim()
            .parse()
            .map_err(|_| Error::MalformedAmount {
                row,
                amount: export.amount.clone(),
            })?;
        if amount != amount.trunc() {
            return Err(Error::InvalidAmount { row, amount });
        }

        let date = parse_date(&export.date_requested).ok_or_else(|| Error::InvalidDate {
            row,
            date: export.date_requested.clone(),
        })?;

        Ok(Self { date, amount })
    }
}

/// A single line of the report. Field names double as the table header and
/// as the keys of the persisted snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Amount $")]
    pub amount_usd: Decimal,
    #[serde(rename = "Rate")]
    pub rate: Decimal,
    #[serde(rename = "Amount GEL")]
    pub amount_gel: Decimal,
    #[serde(rename = "Amount GEL (rounded)")]
    pub amount_gel_rounded: Decimal,
    #[serde(rename = "Total by year")]
    pub total_by_year: Decimal,
    #[serde(rename = "New")]
    pub new: Option<bool>,
}

impl ReportRow {
    pub const HEADERS: [&'static str; 7] = [
        "Date",
        "Amount $",
        "Rate",
        "Amount GEL",
        "Amount GEL (rounded)",
        "Total by year",
        "New",
    ];

    /// Compares every field except the New marker.
    pub fn same_entry(&self, other: &ReportRow) -> bool {
        self.date == other.date
            && self.amount_usd == other.amount_usd
            && self.rate == other.rate
            && self.amount_gel == other.amount_gel
            && self.amount_gel_rounded == other.amount_gel_rounded
            && self.total_by_year == other.total_by_year
    }
}
