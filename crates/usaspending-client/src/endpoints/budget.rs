//! Budget response shapes
//!
//! Returned by the budget function and budgetary resources endpoints on
//! [`AgencyApi`](crate::endpoints::AgencyApi).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Budget functions an agency obligated against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetFunctionList {
    pub toptier_code: Option<String>,
    pub fiscal_year: Option<i32>,
    #[serde(default, deserialize_with = "crate::endpoints::null_elements::deserialize")]
    pub results: Option<Vec<BudgetFunction>>,
    pub messages: Option<Vec<Value>>,
    pub page_metadata: Option<PageMetadata>,
}

/// One budget function with its sub-functions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetFunction {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::endpoints::null_elements::deserialize")]
    pub children: Option<Vec<BudgetSubFunction>>,
    pub obligated_amount: Option<f64>,
    pub gross_outlay_amount: Option<f64>,
}

/// Budget sub-function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSubFunction {
    pub name: Option<String>,
    pub obligated_amount: Option<f64>,
    pub gross_outlay_amount: Option<f64>,
}

/// Paging block of a list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub page: Option<i64>,
    pub total: Option<i64>,
    pub limit: Option<i64>,
    /// Next page number, or null on the last page
    pub next: Option<Value>,
    /// Previous page number, or null on the first page
    pub previous: Option<Value>,
    #[serde(rename = "hasNext")]
    pub has_next: Option<bool>,
    #[serde(rename = "hasPrevious")]
    pub has_previous: Option<bool>,
}

/// Budget function and sub-function counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetFunctionCount {
    pub toptier_code: Option<String>,
    pub fiscal_year: Option<i32>,
    pub budget_function_count: Option<i64>,
    pub budget_sub_function_count: Option<i64>,
    pub messages: Option<Vec<Value>>,
}

/// Budgetary resources for an agency across fiscal years
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetaryResources {
    pub toptier_code: Option<String>,
    #[serde(default, deserialize_with = "crate::endpoints::null_elements::deserialize")]
    pub agency_data_by_year: Option<Vec<AgencyYearData>>,
    pub messages: Option<Vec<Value>>,
}

/// Budgetary resources and obligations for a single fiscal year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgencyYearData {
    pub fiscal_year: Option<i32>,
    pub agency_budgetary_resources: Option<f64>,
    pub agency_total_obligated: Option<f64>,
    pub total_budgetary_resources: Option<f64>,
    #[serde(default, deserialize_with = "crate::endpoints::null_elements::deserialize")]
    pub agency_obligation_by_period: Option<Vec<ObligationPeriod>>,
}

/// Cumulative obligations at the end of a reporting period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObligationPeriod {
    pub period: Option<i32>,
    pub obligated: Option<f64>,
}

impl BudgetaryResources {
    /// Data for one fiscal year, if reported
    #[must_use]
    pub fn year(&self, fiscal_year: i32) -> Option<&AgencyYearData> {
        self.agency_data_by_year
            .as_deref()?
            .iter()
            .find(|y| y.fiscal_year == Some(fiscal_year))
    }
}
