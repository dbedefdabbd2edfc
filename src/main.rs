use std::fs::File;
use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use log::{debug, info};
use simplelog::{LevelFilter, WriteLogger};

use grid_chase::config::{read_render_fps, Args};
use grid_chase::game::{Game, GameEvent};
use grid_chase::input::command_for;
use grid_chase::level::create_level;
use grid_chase::progression::Progression;
use grid_chase::render::{render, Renderer};
use grid_chase::session::Session;
use grid_chase::store::JsonFileStore;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args)?;

    let game = Game::new(&create_level(), args.difficulty).context("built-in level is invalid")?;
    let store = JsonFileStore::open(&args.store);
    info!("progress file {}", store.path().display());
    let progression = Progression::load(store);
    let mut session = Session::start(game, progression, Instant::now());

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    stdout.execute(Clear(ClearType::All))?;

    let result = run(&mut stdout, &mut session);
    session.stop();

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result.context("terminal I/O failed")
}

fn setup_logging(args: &Args) -> Result<()> {
    if args.debug {
        let file = File::create(&args.log_file)
            .with_context(|| format!("cannot create log file {}", args.log_file.display()))?;
        WriteLogger::init(
            LevelFilter::Debug,
            simplelog::ConfigBuilder::new()
                .set_target_level(LevelFilter::Error)
                .build(),
            file,
        )?;
    }
    Ok(())
}

fn run(stdout: &mut Stdout, session: &mut Session<JsonFileStore>) -> io::Result<()> {
    let mut renderer = Renderer::new(session.game().maze().cell_count());
    let frame_time = Duration::from_micros(1_000_000 / read_render_fps());

    while session.is_running() {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(command) = command_for(key) {
                        debug!("{command:?}");
                        session.handle(command, Instant::now());
                    }
                }
                Event::Resize(..) => {
                    stdout.execute(Clear(ClearType::All))?;
                    renderer = Renderer::new(session.game().maze().cell_count());
                }
                _ => {}
            }
        }
        if !session.is_running() {
            break;
        }

        session.poll(Instant::now());
        for cue in session.take_cues() {
            play_cue(stdout, cue)?;
        }
        render(stdout, session, &mut renderer)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
    Ok(())
}

fn play_cue(stdout: &mut Stdout, cue: GameEvent) -> io::Result<()> {
    match cue {
        GameEvent::GameOver { .. } => {
            stdout.execute(Print('\u{7}'))?;
        }
        GameEvent::PelletEaten { cell, earned } => debug!("pellet at {cell} (+{earned})"),
        GameEvent::LifeLost { lives } => debug!("life lost, {lives} left"),
    }
    Ok(())
}
