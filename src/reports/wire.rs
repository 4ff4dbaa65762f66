use serde::Deserialize;
use serde_json::{Map, Value};

/// The statement tables are deliberately opaque: every line item the source
/// reports is kept, so the period objects stay as raw JSON maps and only the
/// wrapping nodes are typed.
#[derive(Deserialize)]
pub(crate) struct V10Modules {
    #[serde(rename = "balanceSheetHistory")]
    pub(crate) balance_sheet_history: Option<BalanceHistoryNode>,
    #[serde(rename = "incomeStatementHistory")]
    pub(crate) income_statement_history: Option<IncomeHistoryNode>,
    #[serde(rename = "cashflowStatementHistory")]
    pub(crate) cashflow_statement_history: Option<CashflowHistoryNode>,
}

#[derive(Deserialize)]
pub(crate) struct BalanceHistoryNode {
    #[serde(rename = "balanceSheetStatements", default)]
    pub(crate) statements: Vec<Map<String, Value>>,
}

#[derive(Deserialize)]
pub(crate) struct IncomeHistoryNode {
    #[serde(rename = "incomeStatementHistory", default)]
    pub(crate) statements: Vec<Map<String, Value>>,
}

#[derive(Deserialize)]
pub(crate) struct CashflowHistoryNode {
    #[serde(rename = "cashflowStatements", default)]
    pub(crate) statements: Vec<Map<String, Value>>,
}
