//! Cheat Console overlay: a draggable, screen-clamped debug window with
//! live controls bound to game subsystems through explicit capability
//! traits. Backend independent; the host feeds pointer input in and
//! draws the resulting scene into its own RGBA framebuffer.

mod bindings;
mod draw;
mod geom;
mod input;
mod layout;
mod panel;
mod widgets;

pub use bindings::{AudioStore, CurrencyStore, DummyActorToggle, InteractionStore, PanelBindings};
pub use draw::draw_panel;
pub use geom::{screen_area_of_viewport, Rect, Vec2, ViewportFraction};
pub use input::PanelInput;
pub use layout::Layout;
pub use panel::{
    ButtonVisual, CheatPanel, Label, PanelScene, SliderVisual, ToggleVisual, PANEL_HEIGHT,
    PANEL_WIDTH,
};
