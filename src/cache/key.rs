//! Cache key derivation for filtered attendance views.

use crate::models::AttendanceFilter;

/// Build the cache key for one employee/filter combination.
///
/// The base segment is `emp:<id>` for a specific employee, or the literal
/// `all` for the unscoped list. Present filter fields are appended as
/// `key=value` pairs joined by `&`, in the filter struct's declared field
/// order, so identical inputs always yield byte-identical keys.
pub fn cache_key(employee_id: &str, filter: &AttendanceFilter) -> String {
    let base = if employee_id.is_empty() {
        "all".to_string()
    } else {
        format!("emp:{}", employee_id)
    };

    let extras = filter
        .pairs()
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    if extras.is_empty() {
        base
    } else {
        format!("{}?{}", base, extras)
    }
}
