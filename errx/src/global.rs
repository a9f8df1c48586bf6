//! Process-wide default registry
//!
//! Convenience for callers that do not thread a [`Registry`] through their code.
//! The shared instance is created on first use with the predefined status table
//! and can be swapped wholesale with [`set_global`]. All mutation still goes
//! through the registry's own locked operations.

use crate::registry::{read_lock, write_lock, Registry};
use std::error::Error as StdError;
use std::sync::{Arc, OnceLock, RwLock};

static GLOBAL_REGISTRY: OnceLock<RwLock<Arc<Registry>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Registry>> {
    GLOBAL_REGISTRY.get_or_init(|| RwLock::new(Arc::new(Registry::with_defaults())))
}

/// Handle to the current process-wide registry
pub fn registry() -> Arc<Registry> {
    Arc::clone(&read_lock(slot()))
}

/// Replace the process-wide registry, returning the previous one
///
/// Handles obtained earlier from [`registry`] keep pointing at the old instance.
pub fn set_global(registry: Arc<Registry>) -> Arc<Registry> {
    log::debug!("replacing process-wide registry");
    std::mem::replace(&mut *write_lock(slot()), registry)
}

/// [`Registry::resolve_http`] against the process-wide registry
pub fn resolve_http(err: Option<&(dyn StdError + 'static)>, language: &str) -> (u16, String) {
    registry().resolve_http(err, language)
}

/// [`Registry::resolve_rpc`] against the process-wide registry
pub fn resolve_rpc(err: Option<&(dyn StdError + 'static)>, language: &str) -> (u32, String) {
    registry().resolve_rpc(err, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::predefined;

    // Single test so swapping the shared instance never races another test.
    #[test]
    fn test_global_registry_lifecycle() {
        let initial = registry();
        assert!(initial.status_for(predefined::codes::INTERNAL).is_some());
        assert!(Arc::ptr_eq(&initial, &registry()));

        let replacement = Arc::new(Registry::new());
        replacement.register_http_status("COUNTER_NOT_FOUND", 404);
        replacement.register_message("COUNTER_NOT_FOUND", "en", "Counter not found");

        let previous = set_global(Arc::clone(&replacement));
        assert!(Arc::ptr_eq(&previous, &initial));
        assert!(Arc::ptr_eq(&registry(), &replacement));

        let err = Error::new("missing counter").with_code("COUNTER_NOT_FOUND");
        assert_eq!(
            resolve_http(Some(&err), "en"),
            (404, "Counter not found".to_string())
        );
        assert_eq!(resolve_rpc(Some(&err), "en").1, "Counter not found");

        // Mutations through a handle are visible to later lookups
        registry().register_message("COUNTER_NOT_FOUND", "vi", "Không tìm thấy bộ đếm");
        assert_eq!(
            resolve_http(Some(&err), "vi"),
            (404, "Không tìm thấy bộ đếm".to_string())
        );

        let restored = set_global(previous);
        assert!(Arc::ptr_eq(&restored, &replacement));
        assert!(Arc::ptr_eq(&registry(), &initial));
    }
}
