//! Tunables shared by the engines.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;

/// Depth used when the caller does not choose one.
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

/// Deepest search accepted; the tree grows roughly thirtyfold per ply.
pub const MAX_SEARCH_DEPTH: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub depth: u8,
    /// Seed for tie-breaking. `None` draws a fresh seed for every search.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_depth(self, depth: u8) -> Self {
        Self {
            depth: depth.min(MAX_SEARCH_DEPTH),
            ..self
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Sets an option by name, case-insensitively.
    ///
    /// `Depth` takes an integer up to [`MAX_SEARCH_DEPTH`]. `Seed` takes an
    /// integer, or `random`/`none` to go back to unseeded searches.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        let invalid = || ChessErrors::InvalidEngineOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let value_trimmed = value.trim();

        match name.trim().to_ascii_lowercase().as_str() {
            "depth" => {
                let depth: u8 = value_trimmed.parse().map_err(|_| invalid())?;
                if depth > MAX_SEARCH_DEPTH {
                    return Err(invalid());
                }
                self.depth = depth;
            }
            "seed" => {
                self.seed = match value_trimmed.to_ascii_lowercase().as_str() {
                    "random" | "none" => None,
                    _ => Some(value_trimmed.parse().map_err(|_| invalid())?),
                };
            }
            _ => return Err(invalid()),
        }
        tracing::debug!(name, value, "engine option set");
        Ok(())
    }

    /// RNG for one search.
    pub fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
