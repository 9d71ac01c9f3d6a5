//! Capability traits for the game subsystems the panel can reach.
//!
//! The panel never looks subsystems up globally; the host hands it a
//! [`PanelBindings`] each frame. A `None` binding means the subsystem is
//! absent: the control shows its fallback value and suppresses writes.

/// Currency balance of the player inventory.
pub trait CurrencyStore {
    fn currency(&self) -> i32;
    fn set_currency(&mut self, value: i32);
}

/// Whether mouse interaction with the scene is enabled.
pub trait InteractionStore {
    fn interactive_mode(&self) -> bool;
    fn set_interactive_mode(&mut self, enabled: bool);
}

/// Master audio controls. Volume is in decibels and may be set at any time.
pub trait AudioStore {
    fn master_volume_db(&self) -> f32;
    fn set_master_volume_db(&mut self, db: f32);
    fn master_muted(&self) -> bool;
    fn set_master_muted(&mut self, muted: bool);
}

/// Zero-argument toggle for the dummy debug character.
pub trait DummyActorToggle {
    fn toggle_dummy_actor(&mut self);
}

/// Per-frame view of the subsystems available to the panel's controls.
#[derive(Default)]
pub struct PanelBindings<'a> {
    pub currency: Option<&'a mut dyn CurrencyStore>,
    pub interaction: Option<&'a mut dyn InteractionStore>,
    pub audio: Option<&'a mut dyn AudioStore>,
    pub dummy_actor: Option<&'a mut dyn DummyActorToggle>,
}
