//! In-memory game subsystem state the panel binds to.
//!
//! These stand in for the game's real inventory, interaction, spawn,
//! and audio managers; each implements the matching overlay capability
//! trait. Writes are logged so cheat activity shows up in the debug
//! output.

use overlay::{AudioStore, CurrencyStore, DummyActorToggle, InteractionStore, PanelBindings};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub(crate) struct InventoryState {
    currency: i32,
}

impl CurrencyStore for InventoryState {
    fn currency(&self) -> i32 {
        self.currency
    }

    fn set_currency(&mut self, value: i32) {
        self.currency = value;
        debug!(currency = value, "currency_set");
    }
}

#[derive(Debug, Default)]
pub(crate) struct InteractionState {
    interactive_mode: bool,
}

impl InteractionStore for InteractionState {
    fn interactive_mode(&self) -> bool {
        self.interactive_mode
    }

    fn set_interactive_mode(&mut self, enabled: bool) {
        self.interactive_mode = enabled;
        debug!(enabled, "interactive_mode_set");
    }
}

#[derive(Debug, Default)]
pub(crate) struct DummyActorState {
    enabled: bool,
}

impl DummyActorState {
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl DummyActorToggle for DummyActorState {
    fn toggle_dummy_actor(&mut self) {
        self.enabled = !self.enabled;
        info!(enabled = self.enabled, "dummy_actor_toggled");
    }
}

#[derive(Debug)]
pub(crate) struct AudioState {
    master_volume_db: f32,
    master_muted: bool,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            master_volume_db: 0.0,
            master_muted: false,
        }
    }
}

impl AudioStore for AudioState {
    fn master_volume_db(&self) -> f32 {
        self.master_volume_db
    }

    fn set_master_volume_db(&mut self, db: f32) {
        self.master_volume_db = db;
        debug!(volume_db = db, "master_volume_set");
    }

    fn master_muted(&self) -> bool {
        self.master_muted
    }

    fn set_master_muted(&mut self, muted: bool) {
        self.master_muted = muted;
        debug!(muted, "master_muted_set");
    }
}

/// All subsystems the sandbox host owns, borrowed disjointly into the
/// panel's bindings once per frame.
#[derive(Debug, Default)]
pub(crate) struct GameState {
    pub(crate) inventory: InventoryState,
    pub(crate) interaction: InteractionState,
    pub(crate) dummy_actor: DummyActorState,
    pub(crate) audio: AudioState,
}

impl GameState {
    pub(crate) fn panel_bindings(&mut self) -> PanelBindings<'_> {
        PanelBindings {
            currency: Some(&mut self.inventory),
            interaction: Some(&mut self.interaction),
            audio: Some(&mut self.audio),
            dummy_actor: Some(&mut self.dummy_actor),
        }
    }
}
