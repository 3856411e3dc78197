use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use lifegrid::command::Command;

/// Slowest and fastest speeds reachable from the keyboard, in milliseconds
pub const MIN_SPEED_MS: u32 = 10;
pub const MAX_SPEED_MS: u32 = 1000;
const SPEED_STEP_MS: u32 = 10;

/// Keys that need driver state to become a [`Command`]
pub enum Input {
    Command(Command),

    /// Start if stopped, stop if running
    StartStop,

    /// Load the next pattern of the catalog
    NextPattern,

    /// Change the delay between generations by this many steps
    Speed(i32),
}

/// Converts a crossterm event into a driver input
pub fn convert_event(event: CrossTermEvent) -> Option<Input> {
    let CrossTermEvent::Key(key_event) = event else {
        return None;
    };

    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match key_event {
        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Input::Command(Command::Exit)),

        KeyEvent { code, .. } => match code {
            KeyCode::Char(' ') => Some(Input::StartStop),
            KeyCode::Char('n') => Some(Input::Command(Command::Step)),
            KeyCode::Char('r') => Some(Input::Command(Command::Randomize)),
            KeyCode::Char('c') => Some(Input::Command(Command::Clear)),
            KeyCode::Char('p') => Some(Input::NextPattern),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Input::Speed(1)),
            KeyCode::Char('-') => Some(Input::Speed(-1)),
            KeyCode::Char(']') => Some(Input::Command(Command::Resize(1))),
            KeyCode::Char('[') => Some(Input::Command(Command::Resize(-1))),
            _ => None,
        },
    }
}

/// Adjust `speed_ms` by `steps` increments, staying within the keyboard range
pub fn adjust_speed(speed_ms: u32, steps: i32) -> u32 {
    let delta = steps.unsigned_abs() * SPEED_STEP_MS;

    let speed = if steps < 0 {
        speed_ms.saturating_sub(delta)
    } else {
        speed_ms.saturating_add(delta)
    };

    speed.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}
