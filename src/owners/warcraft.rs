use crate::owners::ResourceOwner;
use crate::region::Region;
use crate::Game;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Battle.net account, as returned by the user-info endpoint
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarcraftUser {
    pub id: u64,
    pub battletag: String,
    #[serde(default)]
    pub region: Region,
}

impl ResourceOwner for WarcraftUser {
    fn get_id(&self) -> u64 {
        self.id
    }

    fn get_display_name(&self) -> &str {
        &self.battletag
    }

    fn get_region(&self) -> Region {
        self.region
    }

    fn get_game(&self) -> Game {
        Game::Warcraft
    }

    fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
