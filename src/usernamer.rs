use std::path::Path;
use crate::config::Config;
use crate::error::NameError;
use crate::generator;

pub struct Usernamer {
    config: Config,
}

impl Usernamer {
    pub fn new(config_path: Option<&Path>) -> eyre::Result<Usernamer> {
        let config = Config::load(config_path)?;

        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Usernamer {
        Usernamer { config }
    }

    pub fn force_lowercase(&mut self) {
        self.config.lowercase = true;
    }

    /// Candidates for `name` in generation order, minus configured exclusions.
    pub fn candidates(&self, name: &str) -> Result<Vec<String>, NameError> {
        let mut candidates = if self.config.lowercase {
            generator::generate(&name.to_lowercase())?
        } else {
            generator::generate(name)?
        };

        if !self.config.excludes.is_empty() {
            let generated = candidates.len();
            candidates.retain(|candidate| !self.config.is_excluded(candidate));
            tracing::debug!(
                excluded = generated - candidates.len(),
                remaining = candidates.len(),
                "Applied exclusions"
            );
        }

        Ok(candidates)
    }
}
