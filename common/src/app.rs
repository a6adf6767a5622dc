//! Watchface application state and host callbacks.
//!
//! The host firmware drives the watchface through the four callbacks of
//! [`Watchface`]. All state the callbacks share lives in [`WatchApp`], which
//! the host owns and passes back on every call.
//!
//! # Lifecycle
//!
//! ```text
//! on_start ──► on_tick* / on_config_message* / draw* ──► on_stop
//! ```
//!
//! `on_start` creates the [`MainWindow`] and its layers, `on_stop` drops it,
//! so each layer is released exactly once. Ticks after `on_stop` are ignored.
//!
//! # Redraws
//!
//! Callbacks never draw. They invalidate layers through
//! [`Host::mark_dirty`] and the host calls [`WatchApp::draw`] before its next
//! frame.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use log::{debug, info, warn};

use crate::colors::BACKGROUND;
use crate::geometry::MinutePaths;
use crate::host::{ConfigMessage, Host, LayerId, PersistentStore};
use crate::hour_text::HourTextUpdater;
use crate::inversion::{Inversion, load_inversion, parse_invert_message, store_inversion};
use crate::render::RenderState;
use crate::segment::segment_for_minute;
use crate::time::WallTime;
use crate::widgets::{Inverted, draw_hour_text, draw_minute_segment};

/// Callbacks the host firmware delivers to a watchface.
pub trait Watchface {
    /// Window load: create layers, read settings, subscribe to ticks.
    fn on_start<H>(
        &mut self,
        host: &mut H,
    ) where
        H: Host + PersistentStore + ?Sized;

    /// Window unload: unsubscribe and release layers.
    fn on_stop<H>(
        &mut self,
        host: &mut H,
    ) where
        H: Host + PersistentStore + ?Sized;

    /// Minute tick with the current wall time.
    fn on_tick<H>(
        &mut self,
        host: &mut H,
        now: WallTime,
    ) where
        H: Host + PersistentStore + ?Sized;

    /// Key/value pair from the companion app.
    fn on_config_message<H>(
        &mut self,
        host: &mut H,
        msg: &ConfigMessage<'_>,
    ) where
        H: Host + PersistentStore + ?Sized;
}

/// Full-screen inversion overlay. Present only while inverted.
#[derive(Debug)]
struct InverterLayer;

/// Layers owned by the main window.
#[derive(Debug)]
pub struct MainWindow {
    hour_text: HourTextUpdater,
    minute_paths: MinutePaths,
    inverter: Option<InverterLayer>,
}

impl MainWindow {
    fn new(inversion: Inversion) -> Self {
        let mut window = Self {
            hour_text: HourTextUpdater::new(),
            minute_paths: MinutePaths::new(),
            inverter: None,
        };
        window.set_inversion(inversion);
        window
    }

    fn set_inversion(
        &mut self,
        inversion: Inversion,
    ) {
        self.inverter = inversion.is_inverted().then_some(InverterLayer);
    }

    fn draw_layers<D>(
        &mut self,
        display: &mut D,
        now: WallTime,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        display.clear(BACKGROUND).ok();
        draw_hour_text(display, self.hour_text.text());
        let path = self.minute_paths.place(segment_for_minute(now.minute()));
        draw_minute_segment(display, path);
    }
}

/// State shared by all watchface callbacks.
#[derive(Debug)]
pub struct WatchApp {
    window: Option<MainWindow>,
    render_state: RenderState,
    inversion: Inversion,
}

impl WatchApp {
    pub const fn new() -> Self {
        Self {
            window: None,
            render_state: RenderState::new(),
            inversion: Inversion::factory_default(),
        }
    }

    /// Whether the window is loaded (between `on_start` and `on_stop`).
    #[inline]
    pub const fn is_loaded(&self) -> bool { self.window.is_some() }

    #[inline]
    pub const fn inversion(&self) -> Inversion { self.inversion }

    /// Whether the inversion overlay currently exists.
    pub fn overlay_visible(&self) -> bool { self.window.as_ref().is_some_and(|w| w.inverter.is_some()) }

    /// Text of the hour layer, `None` while unloaded.
    pub fn hour_text(&self) -> Option<&str> { self.window.as_ref().map(|w| w.hour_text.text()) }

    /// Reformat the hour text even if the hour did not change.
    ///
    /// Used by hosts when the 12/24h preference changes.
    pub fn refresh_hour_text<H>(
        &mut self,
        host: &mut H,
    ) where
        H: Host + ?Sized,
    {
        if let Some(window) = self.window.as_mut() {
            window.hour_text.invalidate();
        }
        let now = host.local_time();
        self.update_hour_text(host, now);
    }

    /// Render the whole window for `now`.
    ///
    /// Does nothing while the window is unloaded.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
        now: WallTime,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        if window.inverter.is_some() {
            window.draw_layers(&mut Inverted::new(display), now);
        } else {
            window.draw_layers(display, now);
        }
    }

    fn update_hour_text<H>(
        &mut self,
        host: &mut H,
        now: WallTime,
    ) where
        H: Host + ?Sized,
    {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        if window.hour_text.update(now, host.clock_is_24h()) {
            debug!("hour text -> {}", window.hour_text.text());
            host.mark_dirty(LayerId::HourText);
        }
    }
}

impl Default for WatchApp {
    fn default() -> Self { Self::new() }
}

impl Watchface for WatchApp {
    fn on_start<H>(
        &mut self,
        host: &mut H,
    ) where
        H: Host + PersistentStore + ?Sized,
    {
        if self.window.is_some() {
            warn!("window already loaded");
            return;
        }

        self.inversion = load_inversion(host);
        self.window = Some(MainWindow::new(self.inversion));

        let now = host.local_time();
        self.render_state.reset();
        self.render_state.check_segment_dirty(segment_for_minute(now.minute()));

        host.tick_subscribe();
        self.update_hour_text(host, now);
        host.mark_dirty(LayerId::Window);

        info!("watchface started, inversion {:?}", self.inversion);
    }

    fn on_stop<H>(
        &mut self,
        host: &mut H,
    ) where
        H: Host + PersistentStore + ?Sized,
    {
        host.tick_unsubscribe();
        if self.window.take().is_some() {
            info!("watchface stopped");
        }
        self.render_state.reset();
    }

    fn on_tick<H>(
        &mut self,
        host: &mut H,
        now: WallTime,
    ) where
        H: Host + PersistentStore + ?Sized,
    {
        if self.window.is_none() {
            debug!("tick while unloaded");
            return;
        }

        let segment = segment_for_minute(now.minute());
        if self.render_state.check_segment_dirty(segment) {
            debug!("segment -> {}", segment.index());
            host.mark_dirty(LayerId::MinuteSegment);
        }

        self.update_hour_text(host, now);
    }

    fn on_config_message<H>(
        &mut self,
        host: &mut H,
        msg: &ConfigMessage<'_>,
    ) where
        H: Host + PersistentStore + ?Sized,
    {
        let Some(requested) = parse_invert_message(msg) else {
            debug!("ignoring message key {} value {:?}", msg.key, msg.value);
            return;
        };

        if let Err(e) = store_inversion(host, requested) {
            warn!("failed to persist inversion: {}", e);
        }

        if requested == self.inversion {
            return;
        }
        self.inversion = requested;

        if let Some(window) = self.window.as_mut() {
            window.set_inversion(requested);
            host.mark_dirty(LayerId::Window);
        }
        info!("inversion -> {:?}", requested);
    }
}
