//! Region resolution
//!
//! Battle.net's regional routing does not follow the region codes: the APAC
//! authorization cluster serves both `kr` and `tw`, and China lives on its own
//! domain. The table below is kept explicit rather than derived from the code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigurationError;

/// Battle.net regions
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Us,
    Eu,
    Kr,
    Tw,
    Cn,
    /// Southeast Asia, StarCraft II only
    Sea,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Us,
        Region::Eu,
        Region::Kr,
        Region::Tw,
        Region::Cn,
        Region::Sea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::Kr => "kr",
            Region::Tw => "tw",
            Region::Cn => "cn",
            Region::Sea => "sea",
        }
    }

    /// Resolve the authorization and game-data hosts for this region
    pub fn endpoints(&self) -> RegionEndpoints {
        resolve(*self)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ConfigurationError::invalid_region(s))
    }
}

/// Base hosts for a region
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegionEndpoints {
    /// Host serving `/oauth/*`
    pub auth_base_url: String,
    /// Host serving the game-data and profile APIs
    pub game_data_base_url: String,
}

/// Map a region to its authorization and game-data hosts
pub fn resolve(region: Region) -> RegionEndpoints {
    match region {
        Region::Cn => RegionEndpoints {
            auth_base_url: "https://www.battlenet.com.cn".to_string(),
            game_data_base_url: "https://gateway.battlenet.com.cn".to_string(),
        },
        Region::Kr | Region::Tw => RegionEndpoints {
            auth_base_url: "https://apac.battle.net".to_string(),
            game_data_base_url: format!("https://{}.api.blizzard.com", region),
        },
        Region::Us | Region::Eu | Region::Sea => RegionEndpoints {
            auth_base_url: format!("https://{}.battle.net", region),
            game_data_base_url: format!("https://{}.api.blizzard.com", region),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_china_uses_dedicated_domain() {
        let endpoints = resolve(Region::Cn);
        assert_eq!(endpoints.auth_base_url, "https://www.battlenet.com.cn");
        assert_eq!(
            endpoints.game_data_base_url,
            "https://gateway.battlenet.com.cn"
        );
    }

    #[test]
    fn test_apac_regions_share_auth_host() {
        let kr = resolve(Region::Kr);
        let tw = resolve(Region::Tw);
        assert_eq!(kr.auth_base_url, "https://apac.battle.net");
        assert_eq!(kr.auth_base_url, tw.auth_base_url);
        assert_eq!(kr.game_data_base_url, "https://kr.api.blizzard.com");
        assert_eq!(tw.game_data_base_url, "https://tw.api.blizzard.com");
    }

    #[test]
    fn test_default_regions_use_region_subdomain() {
        assert_eq!(resolve(Region::Us).auth_base_url, "https://us.battle.net");
        assert_eq!(resolve(Region::Eu).auth_base_url, "https://eu.battle.net");
        assert_eq!(
            resolve(Region::Sea).game_data_base_url,
            "https://sea.api.blizzard.com"
        );
    }

    #[test]
    fn test_region_parsing() {
        assert_eq!("tw".parse::<Region>().unwrap(), Region::Tw);

        let err = "oce".parse::<Region>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Region must be one of: us, eu, kr, tw, cn, sea, given: oce"
        );
    }
}
