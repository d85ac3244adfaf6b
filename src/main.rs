use std::io::{stdout, Write};
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use tracing::debug;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use chomp::config::GameConfig;
use chomp::constants::LOOP_TIME;
use chomp::events::GameCommand;
use chomp::game::Game;
use chomp::render;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .init();

    let mut out = stdout();
    enable_raw_mode().context("enabling raw mode")?;
    execute!(out, EnterAlternateScreen, Hide).context("entering alternate screen")?;

    let result = run(&mut out);

    execute!(out, Show, LeaveAlternateScreen).ok();
    disable_raw_mode().ok();
    result
}

fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let mut game = Game::new(GameConfig::default()).context("building game")?;

    loop {
        let frame_start = Instant::now();

        // Drain all pending input before simulating.
        while event::poll(std::time::Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                let Some(command) = GameCommand::from_key(key.code) else {
                    continue;
                };
                debug!(?command, "input");
                if command == GameCommand::Exit {
                    return Ok(());
                }
                game.handle(command);
            }
        }

        game.tick();
        render::draw(out, &game).context("rendering frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < LOOP_TIME {
            spin_sleep::sleep(LOOP_TIME - elapsed);
        }
    }
}
