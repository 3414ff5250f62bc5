mod starcraft;
mod warcraft;

pub use starcraft::StarCraftUser;
pub use warcraft::WarcraftUser;

use serde_json::Value;

use crate::region::Region;
use crate::Game;

/// Core trait - every decoded resource owner implements this
pub trait ResourceOwner: Send + Sync {
    fn get_id(&self) -> u64;
    fn get_display_name(&self) -> &str;
    fn get_region(&self) -> Region;
    fn get_game(&self) -> Game;
    fn to_value(&self) -> Value;
}
