//! Headless autoplay driver.
//!
//! Stands in for a UI: each round runs one animation step and then clicks a
//! randomly chosen tile, until the game is over or the step budget runs out.

use log::{debug, info};

use clear_cell_core::{Engine, GameError, RandomSource, StepOutcome};

/// Summary of an autoplay run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriverReport {
    pub steps: u32,
    pub clicks: u32,
    pub cleared: u32,
    pub game_over: bool,
}

/// Pick a random non-empty cell, or `None` if the board is clear
pub fn pick_tile<R, P>(engine: &Engine<R>, picker: &mut P) -> Option<(usize, usize)>
where
    R: RandomSource,
    P: RandomSource + ?Sized,
{
    let cols = engine.cols();
    let tiles: Vec<usize> = engine
        .board()
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| !cell.is_empty())
        .map(|(idx, _)| idx)
        .collect();

    if tiles.is_empty() {
        return None;
    }
    let idx = tiles[picker.next_index(tiles.len()) % tiles.len()];
    Some((idx / cols, idx % cols))
}

/// Alternate animation steps and clicks for at most `max_steps` rounds
pub fn autoplay<R, P>(
    engine: &mut Engine<R>,
    picker: &mut P,
    max_steps: u32,
) -> Result<DriverReport, GameError>
where
    R: RandomSource,
    P: RandomSource + ?Sized,
{
    let mut report = DriverReport::default();

    while report.steps < max_steps {
        if engine.next_animation_step() == StepOutcome::Halted {
            break;
        }
        report.steps += 1;

        if let Some((row, col)) = pick_tile(engine, picker) {
            let outcome = engine.process_cell(row as i32, col as i32)?;
            report.clicks += 1;
            report.cleared += outcome.cleared;
        }

        debug!(
            "[Driver] step {} score {} game_over {}",
            report.steps,
            engine.score(),
            engine.is_game_over()
        );
    }

    report.game_over = engine.is_game_over();
    info!(
        "[Driver] finished after {} steps, {} clicks, score {}{}",
        report.steps,
        report.clicks,
        engine.score(),
        if report.game_over { " (game over)" } else { "" }
    );
    Ok(report)
}
