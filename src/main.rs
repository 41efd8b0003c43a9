// Non-interactive Sokoban rules runner.
// Usage:
//   sokoban-rules check <level-file>
//   sokoban-rules replay <level-file> <moves>
// Moves use LURD letters (u/d/l/r, any case), '-' to undo and '+' to redo.
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

use std::fs::File;
use std::io::{self, BufReader, Write};
use log::info;
use sokoban_rules::core::{Grid, MoveEngine};
use sokoban_rules::replay::{parse_steps, replay};
use sokoban_rules::report::{get_json_data, LevelReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let switch = args.next().unwrap_or("check".to_string());
    let Some(level_path) = args.next() else {
        return Err(usage().into());
    };

    let mut grid = Grid::load(BufReader::new(File::open(&level_path)?))?;
    info!("loaded {} ({}x{})", level_path, grid.width(), grid.height());

    match switch.as_str() {
        "check" => {
            let engine = MoveEngine::new(&mut grid);
            print_result(&engine, 0)?;
        }
        "replay" => {
            let moves = args.next().unwrap_or_default();
            let steps = parse_steps(&moves)?;
            let mut engine = MoveEngine::new(&mut grid);
            let ignored = replay(&mut engine, &steps);
            print_result(&engine, ignored)?;
        }
        _ => {
            return Err(format!("Unknown mode: {}. {}", switch, usage()).into());
        }
    }

    Ok(())
}

fn print_result(engine: &MoveEngine<'_>, ignored: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = io::stdout().lock();
    engine.grid().save(&mut out)?;
    writeln!(out)?;
    let report = LevelReport::new(engine.grid(), engine.history(), ignored);
    writeln!(out, "{}", get_json_data(&report)?)?;
    Ok(())
}

fn usage() -> String {
    "Use 'check <level-file>' or 'replay <level-file> <moves>'".to_string()
}
