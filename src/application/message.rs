//! Outcome messages attached to view objects

/// Resource name used in role messages
pub const ROLE: &str = "role";

pub const CREATE: &str = "Create";
pub const INDEX: &str = "Index";
pub const SHOW: &str = "Show";
pub const UPDATE: &str = "Update";
pub const DELETE: &str = "Delete";

/// Format an outcome message such as `Create role success.`
pub fn success(action: &str, resource: &str) -> String {
    format!("{} {} success.", action, resource)
}
