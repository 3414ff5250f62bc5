//! Construction-time configuration errors

use crate::region::Region;
use crate::Game;

/// Invalid game, region, or game/region combination
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Game must be either sc2 or wow, given: {given}")]
    InvalidGame { given: String },

    #[error("Region must be one of: {allowed}, given: {given}")]
    InvalidRegion { given: String, allowed: String },

    #[error("{region} region is only available for sc2, given: {game}")]
    UnsupportedRegion { region: Region, game: Game },
}

impl ConfigurationError {
    pub(crate) fn invalid_region(given: &str) -> Self {
        let allowed = Region::ALL
            .iter()
            .map(Region::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        ConfigurationError::InvalidRegion {
            given: given.to_string(),
            allowed,
        }
    }
}
