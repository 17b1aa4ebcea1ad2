//! Terminal 2048 runner (default binary).
//!
//! Two flows of control cooperate: an input thread reads keys, plays turns and
//! redraws the grid, while the main thread blocks on the game's finished
//! signal and reports the outcome once it fires.

mod args;

use std::fs::File;
use std::sync::Mutex;
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_2048::core::{FinishSignal, GameState};
use tui_2048::input::handle_key_event;
use tui_2048::term::{GridView, TerminalRenderer};
use tui_2048::types::{GameAction, GameOutcome};

use args::Args;

const CONTROLS: &str = "Controls: wasd or arrow keys to play, enter to exit.";

fn main() -> Result<()> {
    let args = Args::parse();
    let rules = args
        .game_config()
        .validate()
        .context("invalid configuration")?;
    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        size = rules.size,
        goal = rules.goal.value(),
        lucky = rules.spawn.lucky,
        "starting game"
    );
    let mut game = GameState::new(rules, seed);
    let finished = game.finished();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &finished);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        GameOutcome::Won => println!("\nCongratulations!"),
        GameOutcome::Lost => println!("\nYou lose."),
        GameOutcome::Quit => {}
    }
    Ok(())
}

fn log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("invalid --log filter {directives:?}"))
}

fn init_logging(args: &Args) -> Result<()> {
    // Logging to the terminal would tear the grid apart in raw mode.
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = log_filter(&args.log)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    finished: &FinishSignal,
) -> Result<GameOutcome> {
    let view = GridView::default();
    term.print_line(CONTROLS)?;
    term.draw(&view.render(&game.snapshot()))?;

    thread::scope(|s| -> Result<GameOutcome> {
        let listener = s.spawn(|| {
            let _quit = QuitOnDrop(finished);
            listen(term, game, &view)
        });

        let outcome = finished.wait();
        debug!(?outcome, "finished signal received");
        listener
            .join()
            .map_err(|_| anyhow!("input thread panicked"))??;
        Ok(outcome)
    })
}

/// Input flow: read keys and play turns until the game ends or the player quits.
fn listen(term: &mut TerminalRenderer, game: &mut GameState, view: &GridView) -> Result<()> {
    let mut lines = Vec::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match handle_key_event(key) {
            Some(GameAction::Quit) => {
                info!(score = game.score(), moves = game.moves(), "player quit");
                return Ok(());
            }
            Some(GameAction::Move(dir)) => {
                if game.play(dir) {
                    view.render_into(&game.snapshot(), &mut lines);
                    term.draw(&lines)?;
                }
                if game.is_finished() {
                    return Ok(());
                }
            }
            None => {}
        }
    }
}

/// Makes sure the waiting flow is released however the input flow exits.
/// Does nothing if the game already fired a win or loss.
struct QuitOnDrop<'a>(&'a FinishSignal);

impl Drop for QuitOnDrop<'_> {
    fn drop(&mut self) {
        self.0.fire(GameOutcome::Quit);
    }
}
