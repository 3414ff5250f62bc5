use crate::owners::ResourceOwner;
use crate::region::Region;
use crate::Game;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A StarCraft II character, as returned by the SC2 profile endpoint
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StarCraftUser {
    pub id: u64,
    pub realm: u32,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub clan_name: Option<String>,
    #[serde(default)]
    pub clan_tag: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub region: Region,
}

impl ResourceOwner for StarCraftUser {
    fn get_id(&self) -> u64 {
        self.id
    }

    fn get_display_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    fn get_region(&self) -> Region {
        self.region
    }

    fn get_game(&self) -> Game {
        Game::StarCraft
    }

    fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
