use std::fs;
use std::path::Path;

const TEMPLATE: &str = include_str!("../../templates/game_data.json");

pub fn run(dir: &Path) -> Result<(), String> {
    if dir.exists() {
        return Err(format!("directory '{}' already exists", dir.display()));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;
    fs::write(dir.join("game_data.json"), TEMPLATE)
        .map_err(|e| format!("cannot write game_data.json: {e}"))?;

    println!("Created {}/game_data.json", dir.display());
    println!();
    println!("Get started:");
    println!("  cd {}", dir.display());
    println!("  sombra check    # Validate the world");
    println!("  sombra rooms    # List rooms and objects");
    println!("  sombra play     # Play in the terminal");

    Ok(())
}
