//! Multiplier selection logic.

use strassen_core::{DynMultiplier, MatrixError, MultiplierFactory};

/// Get multipliers to run based on algorithm selection.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<DynMultiplier>, MatrixError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strassen_core::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let multipliers = get_multipliers_to_run("all", &factory).unwrap();
        assert_eq!(multipliers.len(), 3);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let multipliers = get_multipliers_to_run("naive", &factory).unwrap();
        assert_eq!(multipliers.len(), 1);
        assert_eq!(multipliers[0].name(), "Naive");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            get_multipliers_to_run("unknown", &factory),
            Err(MatrixError::Config(_))
        ));
    }
}
