use serde_json::{Map, Value};

use crate::{
    core::{CacheMode, DashClient, DashError, client::RetryConfig, summary},
    reports::{
        model::{FinancialReports, Statement, StatementRow},
        wire::V10Modules,
    },
};

const MODULES: &str = "balanceSheetHistory,incomeStatementHistory,cashflowStatementHistory";

pub(super) async fn fetch_reports(
    client: &DashClient,
    symbol: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<FinancialReports, DashError> {
    let root = summary::fetch_modules(client, symbol, MODULES, cache_mode, retry_override).await?;

    let Some(root) = root else {
        // No statements on file for this symbol: empty tables, not an error.
        return Ok(FinancialReports::default());
    };

    let modules: V10Modules = serde_json::from_value(root)?;

    Ok(FinancialReports {
        balance_sheet: build_statement(
            modules
                .balance_sheet_history
                .map(|n| n.statements)
                .unwrap_or_default(),
        ),
        income_statement: build_statement(
            modules
                .income_statement_history
                .map(|n| n.statements)
                .unwrap_or_default(),
        ),
        cash_flow: build_statement(
            modules
                .cashflow_statement_history
                .map(|n| n.statements)
                .unwrap_or_default(),
        ),
    })
}

/// Pivot a list of period objects into a row-labeled table.
///
/// Every key except the period metadata becomes a row; values are the `raw`
/// numbers, `None` where a period lacks that line item.
fn build_statement(periods_wire: Vec<Map<String, Value>>) -> Statement {
    let mut periods = Vec::with_capacity(periods_wire.len());
    let mut labels: Vec<String> = Vec::new();

    for obj in &periods_wire {
        periods.push(period_label(obj));
        for key in obj.keys() {
            if key == "endDate" || key == "maxAge" {
                continue;
            }
            if !labels.iter().any(|l| l == key) {
                labels.push(key.clone());
            }
        }
    }

    let rows = labels
        .into_iter()
        .map(|label| {
            let values = periods_wire
                .iter()
                .map(|obj| raw_num(obj.get(&label)))
                .collect();
            StatementRow { label, values }
        })
        .collect();

    Statement { periods, rows }
}

fn period_label(obj: &Map<String, Value>) -> String {
    let end_date = obj.get("endDate");
    end_date
        .and_then(|d| d.get("fmt"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .or_else(|| {
            end_date
                .and_then(|d| d.get("raw"))
                .and_then(Value::as_i64)
                .map(|ts| ts.to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

fn raw_num(value: Option<&Value>) -> Option<f64> {
    value?.get("raw")?.as_f64()
}
