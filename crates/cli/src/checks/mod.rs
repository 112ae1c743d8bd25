//! Check registry.
//!
//! All 3 built-in checks are registered here, in the order they run
//! and print:
//! - password: length and character-class requirements
//! - emails: institutional email extraction
//! - doubles: repeated capital letter detection

pub mod doubles;
pub mod emails;
pub mod password;

use std::sync::Arc;

use crate::check::Check;

/// All registered check names in canonical order.
pub const CHECK_NAMES: &[&str] = &["password", "emails", "doubles"];

/// Create all registered checks.
pub fn all_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(password::PasswordCheck),
        Arc::new(emails::EmailsCheck),
        Arc::new(doubles::DoublesCheck),
    ]
}

/// Get a check by name.
pub fn get_check(name: &str) -> Option<Arc<dyn Check>> {
    all_checks().into_iter().find(|c| c.name() == name)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
