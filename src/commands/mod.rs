//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs against an inventory location.

pub mod browse;
pub mod export;
pub mod search;
pub mod show;
pub mod url;
pub mod validate;

pub use browse::execute as browse;
pub use search::execute as search;
pub use show::execute as show;
pub use url::execute as url;
pub use validate::execute as validate;

use crate::VitrineError;
use crate::config::VitrineConfig;

/// Pick the inventory location: explicit flag first, then the config
///
/// # Errors
/// Returns `InvalidInput` when neither names an inventory.
pub fn resolve_inventory(
    flag: Option<&str>,
    config: &VitrineConfig,
) -> Result<String, VitrineError> {
    flag.map(str::to_string)
        .or_else(|| config.inventory.clone())
        .filter(|location| !location.trim().is_empty())
        .ok_or_else(|| {
            VitrineError::InvalidInput(
                "No inventory configured. Pass --inventory <PATH|URL> or run 'vitrine config set-inventory <PATH|URL>'.".into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config() {
        let config = VitrineConfig {
            inventory: Some("configured.json".into()),
            ..VitrineConfig::default()
        };
        assert_eq!(
            resolve_inventory(Some("flag.json"), &config).unwrap(),
            "flag.json"
        );
        assert_eq!(resolve_inventory(None, &config).unwrap(), "configured.json");
    }

    #[test]
    fn test_missing_inventory_is_an_error() {
        let err = resolve_inventory(None, &VitrineConfig::default()).unwrap_err();
        assert!(matches!(err, VitrineError::InvalidInput(_)));
    }
}
