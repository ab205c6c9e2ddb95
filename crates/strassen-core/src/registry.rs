//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::MatrixError;
use crate::multiplier::{Multiplier, NaiveMultiplier};
use crate::options::Options;
use crate::strassen::StrassenMultiplier;

/// Shared handle to a multiplier over `f64` matrices.
pub type DynMultiplier = Arc<dyn Multiplier<f64>>;

/// Factory trait for creating multipliers by name.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<DynMultiplier, MatrixError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    options: Options,
    cache: RwLock<HashMap<String, DynMultiplier>>,
}

impl DefaultFactory {
    /// Create a factory using default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a factory whose Strassen multipliers use `options`.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options: options.normalize(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<DynMultiplier, MatrixError> {
        match name {
            "strassen" => Ok(Arc::new(StrassenMultiplier::new(
                self.options.clone().with_parallel(false),
            ))),
            "parallel" => Ok(Arc::new(StrassenMultiplier::new(
                self.options.clone().with_parallel(true),
            ))),
            "naive" => Ok(Arc::new(NaiveMultiplier::new())),
            _ => Err(MatrixError::Config(format!("unknown multiplier: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<DynMultiplier, MatrixError> {
        if let Some(m) = self.cache.read().get(name) {
            return Ok(Arc::clone(m));
        }

        let m = self.create_multiplier(name)?;
        self.cache.write().insert(name.to_string(), Arc::clone(&m));
        Ok(m)
    }

    fn available(&self) -> Vec<&str> {
        vec!["strassen", "parallel", "naive"]
    }
}
