//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a set of USAspending v2 endpoints.
//!
//! | Module | Endpoints | Description |
//! |--------|-----------|-------------|
//! | `agency` | `/agency/{id}[/...]` | Agency overview, awards, budget functions, budgetary resources |
//! | `budget` | (shapes only) | Response shapes for the budget endpoints |

pub mod agency;
pub mod budget;

pub use agency::{Agency, AgencyApi, AgencyAwards, AgencyEndpoint, DefCode, NewAwardsCount};
pub use budget::{
    AgencyYearData, BudgetFunction, BudgetFunctionCount, BudgetFunctionList, BudgetSubFunction,
    BudgetaryResources, ObligationPeriod, PageMetadata,
};

/// Lists of records where a `null` element decodes to an empty record
pub(crate) mod null_elements {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
        Ok(items.map(|items| items.into_iter().map(Option::unwrap_or_default).collect()))
    }
}
