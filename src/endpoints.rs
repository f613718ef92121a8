//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/v1/delete-income/{record_id}',
//! use [format_endpoint].

use crate::record::RecordKind;

/// The route for creating an income.
pub const ADD_INCOME: &str = "/api/v1/add-income";
/// The route for listing all incomes.
pub const GET_INCOMES: &str = "/api/v1/get-incomes";
/// The route for deleting an income.
pub const DELETE_INCOME: &str = "/api/v1/delete-income/{record_id}";
/// The route for updating an income.
pub const UPDATE_INCOME: &str = "/api/v1/update-income/{record_id}";

/// The route for creating an expense.
pub const ADD_EXPENSE: &str = "/api/v1/add-expense";
/// The route for listing all expenses.
pub const GET_EXPENSES: &str = "/api/v1/get-expenses";
/// The route for deleting an expense.
pub const DELETE_EXPENSE: &str = "/api/v1/delete-expense/{record_id}";
/// The route for updating an expense.
pub const UPDATE_EXPENSE: &str = "/api/v1/update-expense/{record_id}";

/// The route for the totals and recent history of all records.
pub const SUMMARY: &str = "/api/v1/get-summary";

/// The route for creating a record of `kind`.
pub fn add_endpoint(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Income => ADD_INCOME,
        RecordKind::Expense => ADD_EXPENSE,
    }
}

/// The route for listing records of `kind`.
pub fn list_endpoint(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Income => GET_INCOMES,
        RecordKind::Expense => GET_EXPENSES,
    }
}

/// The route for deleting a record of `kind`.
pub fn delete_endpoint(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Income => DELETE_INCOME,
        RecordKind::Expense => DELETE_EXPENSE,
    }
}

/// The route for updating a record of `kind`.
pub fn update_endpoint(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Income => UPDATE_INCOME,
        RecordKind::Expense => UPDATE_EXPENSE,
    }
}

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/delete-income/{record_id}', '{record_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
