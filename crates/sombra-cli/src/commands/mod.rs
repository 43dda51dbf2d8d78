pub mod check;
pub mod init;
pub mod play;
pub mod rooms;

use std::path::Path;

use sombra_world::World;

/// Load a world file, turning any configuration error into a message.
fn load_world(path: &Path) -> Result<World, String> {
    World::load(path).map_err(|e| e.to_string())
}
