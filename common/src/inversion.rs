//! Persisted display inversion setting.
//!
//! The companion app toggles a full-screen inversion overlay by sending
//! `KEY_INVERT` with `"on"` or `"off"`. The choice is kept in the persistent
//! store next to a schema version so a later release can tell stale data apart.
//!
//! # Cold Start
//!
//! | Stored version | Result                                        |
//! |----------------|-----------------------------------------------|
//! | missing        | write version + default, use default          |
//! | mismatched     | write version + default, use default          |
//! | current        | use stored flag (default if the flag is gone) |

use log::{debug, info, warn};

use crate::config::{
    DEFAULT_INVERTED,
    INVERT_OFF,
    INVERT_ON,
    MESSAGE_KEY_INVERT,
    PERSIST_KEY_INVERT,
    PERSIST_KEY_VERSION,
    STORAGE_VERSION,
};
use crate::host::{ConfigMessage, PersistentStore, StorageError};

/// Whether the inversion overlay is shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Inversion {
    /// Overlay present: light content on a dark background.
    Inverted,
    /// No overlay.
    Normal,
}

impl Inversion {
    pub const fn from_flag(inverted: bool) -> Self { if inverted { Self::Inverted } else { Self::Normal } }

    #[inline]
    pub const fn is_inverted(self) -> bool { matches!(self, Self::Inverted) }

    /// Factory default.
    pub const fn factory_default() -> Self { Self::from_flag(DEFAULT_INVERTED) }
}

impl Default for Inversion {
    fn default() -> Self { Self::factory_default() }
}

/// Parse an inbound message into the requested inversion state.
///
/// Returns `None` for any other key and for values other than `"on"`/`"off"`.
pub fn parse_invert_message(msg: &ConfigMessage<'_>) -> Option<Inversion> {
    if msg.key != MESSAGE_KEY_INVERT {
        return None;
    }
    match msg.value {
        INVERT_ON => Some(Inversion::Inverted),
        INVERT_OFF => Some(Inversion::Normal),
        _ => None,
    }
}

/// Read the inversion setting, initialising the store on first run.
pub fn load_inversion<S>(store: &mut S) -> Inversion
where
    S: PersistentStore + ?Sized,
{
    let version = if store.exists(PERSIST_KEY_VERSION) { store.read_int(PERSIST_KEY_VERSION) } else { None };
    if version != Some(STORAGE_VERSION) {
        info!("storage version {:?} != {}, resetting settings", version, STORAGE_VERSION);
        let inversion = Inversion::factory_default();
        if let Err(e) = store.write_int(PERSIST_KEY_VERSION, STORAGE_VERSION) {
            warn!("failed to persist storage version: {}", e);
        }
        if let Err(e) = store_inversion(store, inversion) {
            warn!("failed to persist inversion: {}", e);
        }
        return inversion;
    }

    if !store.exists(PERSIST_KEY_INVERT) {
        debug!("inversion flag missing, using default");
        return Inversion::factory_default();
    }
    match store.read_bool(PERSIST_KEY_INVERT) {
        Some(flag) => Inversion::from_flag(flag),
        None => {
            warn!("inversion flag is not a bool, using default");
            Inversion::factory_default()
        }
    }
}

/// Persist the inversion setting.
pub fn store_inversion<S>(
    store: &mut S,
    inversion: Inversion,
) -> Result<(), StorageError>
where
    S: PersistentStore + ?Sized,
{
    store.write_bool(PERSIST_KEY_INVERT, inversion.is_inverted())
}
