use serde::Serialize;

/// A row-labeled financial statement table.
///
/// `periods` holds the reporting period labels (newest first, as the source
/// delivers them); each row carries one value per period, `None` where the
/// source reported nothing for that label/period pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Statement {
    pub periods: Vec<String>,
    pub rows: Vec<StatementRow>,
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a row by its source label, e.g. `"totalRevenue"`.
    pub fn row(&self, label: &str) -> Option<&StatementRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

/// One labeled line item across all reported periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementRow {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

/// The three statement tables for one symbol.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FinancialReports {
    pub balance_sheet: Statement,
    pub income_statement: Statement,
    pub cash_flow: Statement,
}
