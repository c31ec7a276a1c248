//! Finance CSV parsing, the `POST /files/parse-finance` collaborator.
//!
//! Consumes a bank-export CSV and produces the `{ "transactions": [...] }`
//! wrapper the finance page renders. Unparsable rows are dropped with a
//! warning, same recovery policy as malformed scan entries.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// One finance transaction row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// The wrapper shape the finance page expects.
#[derive(Debug, Clone, Serialize)]
pub struct FinanceReport {
    pub transactions: Vec<Transaction>,
}

/// Parse a finance CSV from any reader. The header row must carry
/// `date` and `amount`; `category` and `description` are optional.
pub fn parse_finance<R: Read>(reader: R) -> Result<FinanceReport> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut transactions = Vec::new();
    for row in csv_reader.deserialize::<Transaction>() {
        match row {
            Ok(transaction) => transactions.push(transaction),
            Err(e) => warn!("dropping transaction row: {e}"),
        }
    }
    Ok(FinanceReport { transactions })
}

/// Parse a finance CSV file from disk.
pub fn parse_finance_file(path: &Path) -> Result<FinanceReport> {
    let file = std::fs::File::open(path)?;
    parse_finance(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_transactions() {
        let csv = "date,amount,category,description\n\
                   2024-01-05,-42.50,groceries,weekly shop\n\
                   2024-01-06,1500.00,salary,january\n";
        let report = parse_finance(csv.as_bytes()).unwrap();
        assert_eq!(report.transactions.len(), 2);
        assert_eq!(report.transactions[0].amount, -42.50);
        assert_eq!(report.transactions[1].category, "salary");
    }

    #[test]
    fn optional_columns_default_to_empty() {
        let csv = "date,amount\n2024-01-05,-42.50\n";
        let report = parse_finance(csv.as_bytes()).unwrap();
        assert_eq!(report.transactions[0].category, "");
        assert_eq!(report.transactions[0].description, "");
    }

    #[test]
    fn bad_rows_are_dropped() {
        let csv = "date,amount,category,description\n\
                   2024-01-05,not-a-number,x,y\n\
                   2024-01-06,10.00,x,y\n";
        let report = parse_finance(csv.as_bytes()).unwrap();
        assert_eq!(report.transactions.len(), 1);
        assert_eq!(report.transactions[0].amount, 10.00);
    }

    #[test]
    fn report_serializes_with_transactions_wrapper() {
        let report = parse_finance("date,amount\n2024-01-05,1.0\n".as_bytes()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.starts_with("{\"transactions\":["));
    }
}
