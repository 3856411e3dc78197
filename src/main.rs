use std::io;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lifegrid::camera::Camera;
use lifegrid::command::Command;
use lifegrid::command::Outcome;
use lifegrid::config::Config;
use lifegrid::simulation::Simulation;

use crate::input::Input;

mod input;

const HELP: &str = "space start/stop  n step  r random  c clear  p pattern  +/- speed  [/] cell size  q quit";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    let mut sim = Simulation::new(config).context("Failed to create simulation")?;

    if let Some(name) = std::env::args().nth(1) {
        sim.load_pattern(&name)
            .with_context(|| format!("Failed to load pattern \"{name}\""))?;
    }

    info!(rows = sim.rows(), cols = sim.cols(), "starting driver");

    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let res = run(&mut sim, &mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

/// Redraw, wait for input until the next generation is due, and advance
fn run<W: Write>(sim: &mut Simulation, out: &mut W) -> anyhow::Result<()> {
    let mut cam = Camera::for_grid(sim.state());
    let mut next_pattern = 0;
    let mut last_tick = Instant::now();

    loop {
        draw(out, &mut cam, sim)?;

        let interval = Duration::from_millis(sim.speed() as u64);
        let timeout = if sim.is_running() {
            interval.saturating_sub(last_tick.elapsed())
        } else {
            interval
        };

        if !event::poll(timeout)? {
            if sim.advance() {
                last_tick = Instant::now();
            }
            continue;
        }

        let Some(key) = input::convert_event(event::read()?) else {
            continue;
        };

        let command = match key {
            Input::Command(command) => command,
            Input::StartStop if sim.is_running() => Command::Stop,
            Input::StartStop => Command::Start,
            Input::NextPattern => {
                let Some(name) = sim.catalog().names().nth(next_pattern) else {
                    continue;
                };
                next_pattern = (next_pattern + 1) % sim.catalog().len();

                Command::LoadPattern(name.to_string())
            }
            Input::Speed(steps) => Command::SetSpeed(input::adjust_speed(sim.speed(), steps)),
        };

        let starting = command == Command::Start;

        match sim.apply(command) {
            Ok(Outcome::Exit) => return Ok(()),
            Ok(_) => {}
            Err(e) => warn!("{e}"),
        }

        if starting {
            last_tick = Instant::now();
        }

        // the cell size may have changed
        if cam.width() != sim.cols() || cam.height() != sim.rows() {
            cam = Camera::for_grid(sim.state());
        }
    }
}

fn draw<W: Write>(out: &mut W, cam: &mut Camera, sim: &Simulation) -> io::Result<()> {
    let status = format!(
        "gen {} | pop {} | {} | {} ms | cell {} ({}x{})",
        sim.generation(),
        sim.population(),
        if sim.is_running() { "running" } else { "stopped" },
        sim.speed(),
        sim.cell_size(),
        sim.rows(),
        sim.cols(),
    );

    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        style::Print(status),
        cursor::MoveTo(0, 1),
        style::Print(HELP),
    )?;

    cam.draw(sim.state());

    // Raw mode doesn't return the carriage on '\n', so place every line ourselves
    for (y, line) in cam.render().lines().enumerate() {
        queue!(out, cursor::MoveTo(0, y as u16 + 3), style::Print(line))?;
    }

    out.flush()
}
