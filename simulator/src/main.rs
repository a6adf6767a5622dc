//! Uncertainty Time desktop simulator.
//!
//! Hosts the watchface the way the watch firmware would: it owns the event
//! loop, delivers minute ticks, persists settings and redraws the window when
//! the watchface invalidates it.
//!
//! # Key Controls
//!
//! - **I** / **O**: Send inversion "on" / "off" (companion app message)
//! - **H**: Toggle 12/24h clock
//! - **Left** / **Right**: Shift clock by one minute
//! - **Down** / **Up**: Shift clock by one hour
//! - **R**: Restart the watchface
//! - **Esc** / **Q**: Quit
//!
//! # Environment
//!
//! - `UNCERTAINTY_STORE`: store file (default `uncertainty-time.store`)
//! - `UNCERTAINTY_24H`: `1` or `0` (default `1`)
//! - `UNCERTAINTY_SCALE`: window scale (default `3`)
//! - `RUST_LOG`: log filter (default `info`)

mod clock;
mod host;
mod input;
mod settings;
mod store;
mod timing;

use std::thread;
use std::time::Instant;

use anyhow::Result;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::info;
use uncertainty_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use uncertainty_common::{Host, WatchApp, Watchface};

use crate::clock::SimClock;
use crate::host::SimHost;
use crate::input::{action_for_key, apply_action};
use crate::settings::Settings;
use crate::store::FileStore;
use crate::timing::FRAME_TIME;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let store = FileStore::open(&settings.store_path);
    info!("using store {}", store.path().display());
    let mut host = SimHost::new(store, SimClock::new(), settings.clock_24h);

    let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .scale(settings.scale)
        .theme(BinaryColorTheme::Default)
        .build();
    let mut window = Window::new("Uncertainty Time", &output_settings);

    let mut app = WatchApp::new();
    app.on_start(&mut host);

    // The SDL window only exists after the first update
    advance_frame(&mut app, &mut host, &mut display);
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            let action = match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => action_for_key(keycode, repeat),
                _ => None,
            };
            if let Some(action) = action {
                if !apply_action(&mut app, &mut host, action) {
                    break 'running;
                }
            }
        }

        advance_frame(&mut app, &mut host, &mut display);
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    app.on_stop(&mut host);
    Ok(())
}

/// Deliver a pending minute tick, then redraw if any layer was invalidated.
///
/// Returns whether the display was redrawn.
fn advance_frame<D>(
    app: &mut WatchApp,
    host: &mut SimHost,
    display: &mut D,
) -> bool
where
    D: DrawTarget<Color = BinaryColor>,
{
    if let Some(now) = host.poll_tick() {
        app.on_tick(host, now);
    }

    if !host.take_dirty() {
        return false;
    }
    app.draw(display, host.local_time());
    true
}
