//! Keyboard actions and their effect on the watchface.
//!
//! The simulator has no companion app, so key presses deliver the same
//! configuration messages the phone would send.

use embedded_graphics_simulator::sdl2::Keycode;
use log::info;
use uncertainty_common::config::{INVERT_OFF, INVERT_ON, MESSAGE_KEY_INVERT};
use uncertainty_common::{ConfigMessage, Host, WatchApp, Watchface};

use crate::host::SimHost;

/// Something the user asked the simulator to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Companion message `KEY_INVERT = "on"`.
    InvertOn,
    /// Companion message `KEY_INVERT = "off"`.
    InvertOff,
    /// Flip the host's 12/24h preference.
    ToggleClockFormat,
    /// Move the simulated clock by a number of minutes.
    ShiftClock(i32),
    /// Unload and reload the watchface with the same store.
    Restart,
    Quit,
}

/// Map a key press to an action. Only clock shifts repeat while held.
pub fn action_for_key(
    keycode: Keycode,
    repeat: bool,
) -> Option<Action> {
    let action = match keycode {
        Keycode::I => Action::InvertOn,
        Keycode::O => Action::InvertOff,
        Keycode::H => Action::ToggleClockFormat,
        Keycode::Right => Action::ShiftClock(1),
        Keycode::Left => Action::ShiftClock(-1),
        Keycode::Up => Action::ShiftClock(60),
        Keycode::Down => Action::ShiftClock(-60),
        Keycode::R => Action::Restart,
        Keycode::Escape | Keycode::Q => Action::Quit,
        _ => return None,
    };
    if repeat && !matches!(action, Action::ShiftClock(_)) {
        return None;
    }
    Some(action)
}

/// Apply `action`. Returns `false` when the simulator should exit.
pub fn apply_action(
    app: &mut WatchApp,
    host: &mut SimHost,
    action: Action,
) -> bool {
    match action {
        Action::InvertOn => {
            app.on_config_message(host, &ConfigMessage::new(MESSAGE_KEY_INVERT, INVERT_ON));
        }
        Action::InvertOff => {
            app.on_config_message(host, &ConfigMessage::new(MESSAGE_KEY_INVERT, INVERT_OFF));
        }
        Action::ToggleClockFormat => {
            let is_24h = host.toggle_24h();
            info!("clock format: {}", if is_24h { "24h" } else { "12h" });
            app.refresh_hour_text(host);
        }
        Action::ShiftClock(minutes) => {
            host.shift_clock(minutes);
            info!("clock offset {} min, now {:?}", host.clock().offset_minutes(), host.local_time());
        }
        Action::Restart => {
            info!("restarting watchface");
            app.on_stop(host);
            app.on_start(host);
        }
        Action::Quit => return false,
    }
    true
}
