use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use sombra_engine::{Frame, GameSession, InputEvent};
use sombra_world::Point;
use tracing::debug;

/// One parsed line of terminal input.
#[derive(Debug, PartialEq)]
enum Line {
    /// Forwarded to the session.
    Input(InputEvent),
    Look,
    Inventory,
    Help,
    Quit,
}

pub fn run(path: &Path, room: Option<&str>) -> Result<(), String> {
    let world = Arc::new(super::load_world(path)?);
    let mut session = match room {
        Some(room) => GameSession::at_room(world, room).map_err(|e| e.to_string())?,
        None => GameSession::new(world),
    };

    println!("  {}", session.world().meta.title.bold());
    println!("  Type a verb to act, or @help for directives.\n");
    print_room(&session.frame());
    if session.show_instructions() {
        print_instructions(&session);
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match parse_line(input) {
            Ok(Line::Quit) => break,
            Ok(Line::Look) => print_room(&session.frame()),
            Ok(Line::Inventory) => println!("  {}\n", session.frame().inventory_line()),
            Ok(Line::Help) => print_help(),
            Ok(Line::Input(event)) => step(&mut session, event),
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

fn step(session: &mut GameSession, event: InputEvent) {
    match event {
        InputEvent::PointerMoved(_) => {
            session.handle(event);
            match session.tooltip() {
                Some(tooltip) => println!("  {}\n", tooltip.text.cyan()),
                None => println!("  {}\n", "(nothing here)".dimmed()),
            }
        }
        InputEvent::ToggleInstructions => {
            session.handle(event);
            if session.show_instructions() {
                print_instructions(session);
            } else {
                println!("  {}\n", "(instructions hidden)".dimmed());
            }
        }
        InputEvent::ToggleMenu => {
            session.handle(event);
        }
        InputEvent::Click(_) | InputEvent::Command(_) => {
            if session.handle(event).is_none() {
                debug!("input resolved to nothing");
            }
            for message in session.visible_messages() {
                println!("  {message}");
            }
            println!();
        }
    }
}

fn parse_line(input: &str) -> Result<Line, String> {
    let Some(directive) = input.strip_prefix('@') else {
        return Ok(Line::Input(InputEvent::command(input)));
    };

    let mut parts = directive.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = parts.collect();

    match name.as_str() {
        "click" => parse_point(&args).map(|p| Line::Input(InputEvent::Click(p))),
        "hover" => parse_point(&args).map(|p| Line::Input(InputEvent::PointerMoved(p))),
        "look" => Ok(Line::Look),
        "inventory" | "inv" => Ok(Line::Inventory),
        "help" => Ok(Line::Help),
        "instructions" => Ok(Line::Input(InputEvent::ToggleInstructions)),
        "menu" => Ok(Line::Input(InputEvent::ToggleMenu)),
        "quit" | "q" => Ok(Line::Quit),
        other => Err(format!("unknown directive '@{other}', try @help")),
    }
}

fn parse_point(args: &[&str]) -> Result<Point, String> {
    match args {
        [x, y] => {
            let x = x.parse().map_err(|_| format!("invalid x coordinate '{x}'"))?;
            let y = y.parse().map_err(|_| format!("invalid y coordinate '{y}'"))?;
            Ok(Point::new(x, y))
        }
        _ => Err("expected two coordinates, e.g. @click 120 80".to_string()),
    }
}

fn print_room(frame: &Frame) {
    println!("  {}", frame.room_name.bold());
    println!("  {}", frame.description);
    for object in &frame.objects {
        let b = object.bounds;
        println!(
            "    {} {}",
            object.name,
            format!("at {},{} size {}x{}", b.x, b.y, b.width, b.height).dimmed()
        );
    }
    println!("  {}\n", frame.inventory_line());
}

fn print_instructions(session: &GameSession) {
    let verbs: BTreeSet<&str> = session
        .room()
        .map(|room| room.objects.iter().flat_map(|o| o.verbs()).collect())
        .unwrap_or_default();

    println!("  {}", "Instrucciones:".bold());
    println!("  1. @click X Y to examine what is there");
    println!("  2. Type a Spanish verb: {}", verbs.into_iter().collect::<Vec<_>>().join(", "));
    println!("  3. @instructions to hide or show this panel");
    println!("  4. @quit to leave\n");
}

fn print_help() {
    println!("  Any line not starting with @ is a command verb.");
    println!("  @click X Y     click at a screen position");
    println!("  @hover X Y     show the name of the object at a position");
    println!("  @look          describe the room");
    println!("  @inventory     list held items");
    println!("  @instructions  toggle the instructions panel");
    println!("  @menu          open the menu");
    println!("  @quit          leave the game\n");
}
