//! Agency API endpoints
//!
//! Every endpoint here is rooted at `/agency/{id}` where `id` is a toptier
//! code (e.g. `"020"`) or a numeric agency ID:
//! - Agency overview
//! - Award summary and new award count
//! - Budget function list and count
//! - Budgetary resources by fiscal year

use crate::client::UsaSpendingClient;
use crate::endpoints::budget::{BudgetFunctionCount, BudgetFunctionList, BudgetaryResources};
use crate::error::ApiResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Agency API interface
#[derive(Debug, Clone)]
pub struct AgencyApi {
    client: UsaSpendingClient,
}

impl AgencyApi {
    /// Create a new agency API interface
    pub(crate) fn new(client: UsaSpendingClient) -> Self {
        Self { client }
    }

    /// Get an agency overview
    ///
    /// GET /agency/{id}
    pub async fn get(&self, id: &str) -> ApiResult<Agency> {
        self.fetch(AgencyEndpoint::Overview, id).await
    }

    /// Get the award summary for an agency
    ///
    /// GET /agency/{id}/awards
    pub async fn awards(&self, id: &str) -> ApiResult<AgencyAwards> {
        self.fetch(AgencyEndpoint::Awards, id).await
    }

    /// Get the count of new awards for an agency
    ///
    /// GET /agency/{id}/awards/new/count
    pub async fn new_awards_count(&self, id: &str) -> ApiResult<NewAwardsCount> {
        self.fetch(AgencyEndpoint::NewAwardsCount, id).await
    }

    /// List the budget functions an agency obligated against
    ///
    /// GET /agency/{id}/budget_function
    pub async fn budget_functions(&self, id: &str) -> ApiResult<BudgetFunctionList> {
        self.fetch(AgencyEndpoint::BudgetFunctions, id).await
    }

    /// Count budget functions and sub-functions for an agency
    ///
    /// GET /agency/{id}/budget_function/count
    pub async fn budget_function_count(&self, id: &str) -> ApiResult<BudgetFunctionCount> {
        self.fetch(AgencyEndpoint::BudgetFunctionCount, id).await
    }

    /// Get budgetary resources and obligations per fiscal year
    ///
    /// GET /agency/{id}/budgetary_resources
    pub async fn budgetary_resources(&self, id: &str) -> ApiResult<BudgetaryResources> {
        self.fetch(AgencyEndpoint::BudgetaryResources, id).await
    }

    /// Absolute URL an endpoint would request for `id`
    #[must_use]
    pub fn url_for(&self, endpoint: AgencyEndpoint, id: &str) -> String {
        self.client.url(&endpoint.path(id))
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: AgencyEndpoint, id: &str) -> ApiResult<T> {
        self.client.get(endpoint.operation(), &endpoint.path(id)).await
    }
}

/// Endpoints under `/agency/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgencyEndpoint {
    /// `/agency/{id}`
    Overview,
    /// `/agency/{id}/awards`
    Awards,
    /// `/agency/{id}/awards/new/count`
    NewAwardsCount,
    /// `/agency/{id}/budget_function`
    BudgetFunctions,
    /// `/agency/{id}/budget_function/count`
    BudgetFunctionCount,
    /// `/agency/{id}/budgetary_resources`
    BudgetaryResources,
}

impl AgencyEndpoint {
    /// All agency endpoints
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Awards,
        Self::NewAwardsCount,
        Self::BudgetFunctions,
        Self::BudgetFunctionCount,
        Self::BudgetaryResources,
    ];

    /// Operation name used in errors and logs
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Overview => "agency",
            Self::Awards => "agency_awards",
            Self::NewAwardsCount => "new_awards_count",
            Self::BudgetFunctions => "budget_function_list",
            Self::BudgetFunctionCount => "budget_function_count",
            Self::BudgetaryResources => "budgetary_resources",
        }
    }

    /// Path segments after `/agency/{id}`
    #[must_use]
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Overview => None,
            Self::Awards => Some("awards"),
            Self::NewAwardsCount => Some("awards/new/count"),
            Self::BudgetFunctions => Some("budget_function"),
            Self::BudgetFunctionCount => Some("budget_function/count"),
            Self::BudgetaryResources => Some("budgetary_resources"),
        }
    }

    /// Path relative to the API base URL
    #[must_use]
    pub fn path(self, id: &str) -> String {
        match self.suffix() {
            Some(suffix) => format!("agency/{id}/{suffix}"),
            None => format!("agency/{id}"),
        }
    }
}

impl fmt::Display for AgencyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation())
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Agency overview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub fiscal_year: Option<i32>,
    pub toptier_code: Option<String>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub agency_id: Option<i64>,
    pub icon_filename: Option<String>,
    pub mission: Option<String>,
    pub website: Option<String>,
    pub congressional_justification_url: Option<String>,
    /// Free-form agency metadata, kept as received
    pub about_agency_data: Option<Value>,
    pub subtier_agency_count: Option<i64>,
    /// Disaster/emergency funding codes that apply to the agency
    #[serde(default, deserialize_with = "crate::endpoints::null_elements::deserialize")]
    pub def_codes: Option<Vec<DefCode>>,
    pub messages: Option<Vec<Value>>,
}

/// Disaster/emergency funding (DEF) code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefCode {
    pub code: Option<String>,
    pub public_law: Option<String>,
    pub title: Option<String>,
    pub urls: Option<String>,
    pub disaster: Option<String>,
}

/// Award summary for an agency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgencyAwards {
    pub fiscal_year: Option<i32>,
    pub latest_action_date: Option<String>,
    pub toptier_code: Option<String>,
    pub transaction_count: Option<i64>,
    pub obligations: Option<f64>,
    pub messages: Option<Vec<Value>>,
}

/// Number of new awards for an agency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAwardsCount {
    pub toptier_code: Option<String>,
    pub fiscal_year: Option<i32>,
    pub agency_type: Option<String>,
    /// Award type codes the count was filtered on
    pub award_type_codes: Option<Value>,
    pub new_award_count: Option<i64>,
}
