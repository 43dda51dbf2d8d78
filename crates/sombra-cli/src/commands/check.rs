use std::path::Path;

use colored::Colorize;

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(path)?;

    println!("  {} '{}'", "All checks passed for".green(), world.meta.title);
    println!(
        "  {} rooms, {} objects, {} puzzles",
        world.room_count(),
        world.object_count(),
        world.puzzle_count()
    );
    println!("  start room: {}", world.meta.start_room);
    if !world.starting_inventory().is_empty() {
        let names: Vec<_> = world
            .starting_inventory()
            .iter()
            .map(|item| world.item_name(item))
            .collect();
        println!("  starting inventory: {}", names.join(", "));
    }

    Ok(())
}
