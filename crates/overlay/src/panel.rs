use tracing::debug;

use crate::bindings::PanelBindings;
use crate::geom::{Rect, Vec2};
use crate::input::PanelInput;
use crate::layout::Layout;
use crate::widgets::{approximately, slider_position_of, slider_value_at};

pub const PANEL_WIDTH: f32 = 320.0;
pub const PANEL_HEIGHT: f32 = 240.0;

const BASE_PADDING: f32 = 8.0;
const TITLE_BAR_HEIGHT: f32 = 2.0 * BASE_PADDING;
const ROW_HEIGHT: f32 = 16.0;
const ROW_SPACING: f32 = 6.0;
const LABEL_WIDTH: f32 = PANEL_WIDTH / 4.0;
const MUTE_BUTTON_WIDTH: f32 = 24.0;
const VOLUME_READOUT_WIDTH: f32 = 56.0;
const ACTION_BUTTON_HEIGHT: f32 = 18.0;

const CURRENCY_MIN: f32 = 0.0;
const CURRENCY_MAX: f32 = 1000.0;
const VOLUME_MIN_DB: f32 = -80.0;
const VOLUME_MAX_DB: f32 = 20.0;

const WINDOW_TITLE: &str = "Cheat Console";
const CURRENCY_LABEL: &str = "Currency:";
const INTERACT_LABEL: &str = "Interact";
const INTERACT_TOGGLE_LABEL: &str = "Enable Mouse";
const VOLUME_LABEL: &str = "Volume dB";
const SPAWN_BUTTON_LABEL: &str = "Enable Dummy Character";
const MUTE_GLYPH_UNMUTED: &str = "m";
const MUTE_GLYPH_MUTED: &str = "M";

/// A positioned text run inside the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderVisual {
    pub track: Rect,
    pub knob_x: f32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleVisual {
    pub box_rect: Rect,
    pub checked: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonVisual {
    pub rect: Rect,
    pub label: String,
}

/// Retained description of one rendered frame of the panel, consumed by
/// [`crate::draw::draw_panel`]. Everything is in final screen
/// coordinates, after drag and clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelScene {
    pub window: Rect,
    pub title_bar: Rect,
    pub title: &'static str,
    pub labels: Vec<Label>,
    pub currency: SliderVisual,
    pub interact: ToggleVisual,
    pub volume: SliderVisual,
    pub mute: Option<ButtonVisual>,
    pub spawn: ButtonVisual,
}

/// Which control grabbed the pointer on the press edge. A captured
/// slider keeps following the cursor until release, even when the
/// cursor leaves the track.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Capture {
    DragWindow { grab: Vec2 },
    CurrencySlider,
    VolumeSlider,
}

struct ControlRects {
    title_bar: Rect,
    currency_label: Rect,
    currency_track: Rect,
    interact_label: Rect,
    toggle_box: Rect,
    toggle_label: Rect,
    volume_label: Rect,
    volume_track: Rect,
    mute_button: Option<Rect>,
    volume_readout: Rect,
    spawn_button: Rect,
}

/// The debug overlay window: a draggable 320x240 rect clamped to the
/// screen area, binding live controls to whatever subsystems the host
/// passes in each frame.
#[derive(Debug)]
pub struct CheatPanel {
    screen_area: Rect,
    rect: Rect,
    visible: bool,
    capture: Option<Capture>,
}

impl CheatPanel {
    /// Places the window flush with the screen area's top-right corner.
    pub fn new(screen_area: Rect) -> Self {
        let rect = Rect::new(
            screen_area.x + screen_area.width - PANEL_WIDTH,
            screen_area.y,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        );
        Self {
            screen_area,
            rect,
            visible: false,
            capture: None,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn screen_area(&self) -> Rect {
        self.screen_area
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            debug!(visible, "panel_visibility");
        }
        if !visible {
            self.capture = None;
        }
    }

    pub fn toggle_visible(&mut self) {
        self.set_visible(!self.visible);
    }

    /// Runs one frame of the panel: interaction, write-backs, drag,
    /// clamp. Returns the render description, or `None` while hidden.
    /// A hidden frame touches neither the input nor the bindings.
    pub fn frame(&mut self, input: &PanelInput, bindings: &mut PanelBindings) -> Option<PanelScene> {
        if !self.visible {
            return None;
        }

        if !input.left_down {
            self.capture = None;
        }

        let rects = control_rects(self.rect, bindings.audio.is_some());

        if input.left_pressed {
            if let Some(cursor) = input.cursor {
                self.handle_press(cursor, &rects, bindings);
            }
        }

        if input.left_down {
            if let Some(cursor) = input.cursor {
                self.apply_capture(cursor, &rects, bindings);
            }
        }

        // Clamp runs after any drag movement.
        self.rect.clamp_position_within(&self.screen_area);

        Some(self.build_scene(bindings))
    }

    fn handle_press(&mut self, cursor: Vec2, rects: &ControlRects, bindings: &mut PanelBindings) {
        if !self.rect.contains(cursor) {
            return;
        }

        if rects.currency_track.contains(cursor) {
            self.capture = Some(Capture::CurrencySlider);
        } else if rects.volume_track.contains(cursor) {
            self.capture = Some(Capture::VolumeSlider);
        } else if rects.toggle_box.contains(cursor) || rects.toggle_label.contains(cursor) {
            if let Some(interaction) = bindings.interaction.as_deref_mut() {
                let enabled = !interaction.interactive_mode();
                interaction.set_interactive_mode(enabled);
            }
        } else if rects
            .mute_button
            .is_some_and(|button| button.contains(cursor))
        {
            if let Some(audio) = bindings.audio.as_deref_mut() {
                let muted = !audio.master_muted();
                audio.set_master_muted(muted);
            }
        } else if rects.spawn_button.contains(cursor) {
            if let Some(actor) = bindings.dummy_actor.as_deref_mut() {
                actor.toggle_dummy_actor();
            }
        } else {
            // Any part of the window not covered by a control drags it.
            self.capture = Some(Capture::DragWindow {
                grab: Vec2 {
                    x: cursor.x - self.rect.x,
                    y: cursor.y - self.rect.y,
                },
            });
        }
    }

    fn apply_capture(&mut self, cursor: Vec2, rects: &ControlRects, bindings: &mut PanelBindings) {
        match self.capture {
            Some(Capture::DragWindow { grab }) => {
                self.rect.x = cursor.x - grab.x;
                self.rect.y = cursor.y - grab.y;
            }
            Some(Capture::CurrencySlider) => {
                // Float-to-int truncation; the range is non-negative.
                let value =
                    slider_value_at(rects.currency_track, cursor.x, CURRENCY_MIN, CURRENCY_MAX)
                        as i32;
                if let Some(store) = bindings.currency.as_deref_mut() {
                    if value != store.currency() {
                        store.set_currency(value);
                    }
                }
            }
            Some(Capture::VolumeSlider) => {
                let value =
                    slider_value_at(rects.volume_track, cursor.x, VOLUME_MIN_DB, VOLUME_MAX_DB);
                if let Some(audio) = bindings.audio.as_deref_mut() {
                    // Tolerance compare; the volume is continuous.
                    if !approximately(value, audio.master_volume_db()) {
                        audio.set_master_volume_db(value);
                    }
                }
            }
            None => {}
        }
    }

    fn build_scene(&self, bindings: &PanelBindings) -> PanelScene {
        let rects = control_rects(self.rect, bindings.audio.is_some());

        let currency_value = bindings
            .currency
            .as_deref()
            .map(|store| store.currency())
            .unwrap_or(0);
        let interactive = bindings
            .interaction
            .as_deref()
            .map(|store| store.interactive_mode())
            .unwrap_or(false);
        let volume_db = bindings
            .audio
            .as_deref()
            .map(|audio| audio.master_volume_db())
            .unwrap_or(0.0);
        let muted = bindings
            .audio
            .as_deref()
            .map(|audio| audio.master_muted())
            .unwrap_or(false);

        let labels = vec![
            Label {
                text: CURRENCY_LABEL.to_string(),
                rect: rects.currency_label,
            },
            Label {
                text: INTERACT_LABEL.to_string(),
                rect: rects.interact_label,
            },
            Label {
                text: INTERACT_TOGGLE_LABEL.to_string(),
                rect: rects.toggle_label,
            },
            Label {
                text: VOLUME_LABEL.to_string(),
                rect: rects.volume_label,
            },
            Label {
                text: format!("{volume_db:.1} dB"),
                rect: rects.volume_readout,
            },
        ];

        PanelScene {
            window: self.rect,
            title_bar: rects.title_bar,
            title: WINDOW_TITLE,
            labels,
            currency: SliderVisual {
                track: rects.currency_track,
                knob_x: slider_position_of(
                    rects.currency_track,
                    currency_value as f32,
                    CURRENCY_MIN,
                    CURRENCY_MAX,
                ),
                enabled: bindings.currency.is_some(),
            },
            interact: ToggleVisual {
                box_rect: rects.toggle_box,
                checked: interactive,
                enabled: bindings.interaction.is_some(),
            },
            volume: SliderVisual {
                track: rects.volume_track,
                knob_x: slider_position_of(
                    rects.volume_track,
                    volume_db,
                    VOLUME_MIN_DB,
                    VOLUME_MAX_DB,
                ),
                enabled: bindings.audio.is_some(),
            },
            mute: rects.mute_button.map(|rect| ButtonVisual {
                rect,
                label: if muted {
                    MUTE_GLYPH_MUTED.to_string()
                } else {
                    MUTE_GLYPH_UNMUTED.to_string()
                },
            }),
            spawn: ButtonVisual {
                rect: rects.spawn_button,
                label: SPAWN_BUTTON_LABEL.to_string(),
            },
        }
    }
}

fn control_rects(window: Rect, audio_present: bool) -> ControlRects {
    let title_bar = Rect::new(window.x, window.y, window.width, TITLE_BAR_HEIGHT);
    let content = Rect::new(
        window.x + BASE_PADDING,
        window.y + TITLE_BAR_HEIGHT,
        window.width - 2.0 * BASE_PADDING,
        window.height - TITLE_BAR_HEIGHT - BASE_PADDING,
    );

    let mut layout = Layout::new(content, ROW_SPACING);

    let (currency_label, currency_track) = layout.row(ROW_HEIGHT, |row| {
        let label = row.slot(LABEL_WIDTH);
        let track = row.fill();
        (label, track)
    });

    let (interact_label, toggle_box, toggle_label) = layout.row(ROW_HEIGHT, |row| {
        let label = row.slot(LABEL_WIDTH);
        let box_rect = row.slot(ROW_HEIGHT);
        let toggle_label = row.fill();
        (label, box_rect, toggle_label)
    });

    let (volume_label, volume_track, mute_button, volume_readout) = layout.row(ROW_HEIGHT, |row| {
        let label = row.slot(LABEL_WIDTH);
        let reserved = if audio_present {
            MUTE_BUTTON_WIDTH + ROW_SPACING + VOLUME_READOUT_WIDTH + ROW_SPACING
        } else {
            VOLUME_READOUT_WIDTH + ROW_SPACING
        };
        let track = row.slot((row.remaining() - reserved).max(0.0));
        let mute = audio_present.then(|| row.slot(MUTE_BUTTON_WIDTH));
        let readout = row.fill();
        (label, track, mute, readout)
    });

    let spawn_button = layout.row(ACTION_BUTTON_HEIGHT, |row| row.fill());

    ControlRects {
        title_bar,
        currency_label,
        currency_track,
        interact_label,
        toggle_box,
        toggle_label,
        volume_label,
        volume_track,
        mute_button,
        volume_readout,
        spawn_button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{AudioStore, CurrencyStore, DummyActorToggle, InteractionStore};

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 640.0, 480.0)
    }

    fn shown_panel() -> CheatPanel {
        let mut panel = CheatPanel::new(screen());
        panel.set_visible(true);
        panel
    }

    fn center(rect: Rect) -> Vec2 {
        Vec2 {
            x: rect.x + rect.width / 2.0,
            y: rect.y + rect.height / 2.0,
        }
    }

    #[derive(Default)]
    struct FakeInventory {
        currency: i32,
        writes: usize,
    }

    impl CurrencyStore for FakeInventory {
        fn currency(&self) -> i32 {
            self.currency
        }

        fn set_currency(&mut self, value: i32) {
            self.currency = value;
            self.writes += 1;
        }
    }

    #[derive(Default)]
    struct FakeInteraction {
        interactive: bool,
        writes: usize,
    }

    impl InteractionStore for FakeInteraction {
        fn interactive_mode(&self) -> bool {
            self.interactive
        }

        fn set_interactive_mode(&mut self, enabled: bool) {
            self.interactive = enabled;
            self.writes += 1;
        }
    }

    #[derive(Default)]
    struct FakeAudio {
        volume_db: f32,
        muted: bool,
        volume_writes: usize,
        mute_writes: usize,
    }

    impl AudioStore for FakeAudio {
        fn master_volume_db(&self) -> f32 {
            self.volume_db
        }

        fn set_master_volume_db(&mut self, db: f32) {
            self.volume_db = db;
            self.volume_writes += 1;
        }

        fn master_muted(&self) -> bool {
            self.muted
        }

        fn set_master_muted(&mut self, muted: bool) {
            self.muted = muted;
            self.mute_writes += 1;
        }
    }

    #[derive(Default)]
    struct FakeSpawner {
        toggles: usize,
    }

    impl DummyActorToggle for FakeSpawner {
        fn toggle_dummy_actor(&mut self) {
            self.toggles += 1;
        }
    }

    /// Fails the test on any access; used to prove a frame is inert.
    struct Untouchable;

    impl CurrencyStore for Untouchable {
        fn currency(&self) -> i32 {
            panic!("currency read during an inert frame")
        }

        fn set_currency(&mut self, _value: i32) {
            panic!("currency write during an inert frame")
        }
    }

    impl AudioStore for Untouchable {
        fn master_volume_db(&self) -> f32 {
            panic!("volume read during an inert frame")
        }

        fn set_master_volume_db(&mut self, _db: f32) {
            panic!("volume write during an inert frame")
        }

        fn master_muted(&self) -> bool {
            panic!("mute read during an inert frame")
        }

        fn set_master_muted(&mut self, _muted: bool) {
            panic!("mute write during an inert frame")
        }
    }

    fn probe_scene(panel: &mut CheatPanel, bindings: &mut PanelBindings) -> PanelScene {
        panel
            .frame(&PanelInput::idle(), bindings)
            .expect("visible panel produces a scene")
    }

    #[test]
    fn initial_rect_is_flush_with_top_right_corner() {
        let area = Rect::new(64.0, 48.0, 800.0, 600.0);
        let panel = CheatPanel::new(area);

        assert_eq!(panel.rect().x, area.x + area.width - PANEL_WIDTH);
        assert_eq!(panel.rect().y, area.y);
        assert_eq!(panel.rect().width, PANEL_WIDTH);
        assert_eq!(panel.rect().height, PANEL_HEIGHT);
    }

    #[test]
    fn panel_starts_hidden() {
        assert!(!CheatPanel::new(screen()).is_visible());
    }

    #[test]
    fn hidden_frame_is_inert() {
        let mut panel = CheatPanel::new(screen());
        let mut untouchable_currency = Untouchable;
        let mut untouchable_audio = Untouchable;
        let mut bindings = PanelBindings {
            currency: Some(&mut untouchable_currency),
            audio: Some(&mut untouchable_audio),
            ..PanelBindings::default()
        };

        let scene = panel.frame(&PanelInput::press_at(500.0, 100.0), &mut bindings);
        assert!(scene.is_none());
    }

    #[test]
    fn drag_beyond_bounds_is_clamped_back_per_axis() {
        let mut panel = shown_panel();
        let title = center(probe_scene(&mut panel, &mut PanelBindings::default()).title_bar);

        panel.frame(
            &PanelInput::press_at(title.x, title.y),
            &mut PanelBindings::default(),
        );
        panel.frame(
            &PanelInput::hold_at(-2000.0, 3000.0),
            &mut PanelBindings::default(),
        );

        let rect = panel.rect();
        let area = panel.screen_area();
        assert!(rect.x >= area.x);
        assert!(rect.y >= area.y);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
        // The drag escaped on both axes, so the clamp pinned each one.
        assert_eq!(rect.x, area.x);
        assert_eq!(rect.bottom(), area.bottom());
    }

    #[test]
    fn drag_within_bounds_moves_the_window() {
        let mut panel = shown_panel();
        let start = panel.rect();
        let title = center(probe_scene(&mut panel, &mut PanelBindings::default()).title_bar);

        panel.frame(
            &PanelInput::press_at(title.x, title.y),
            &mut PanelBindings::default(),
        );
        panel.frame(
            &PanelInput::hold_at(title.x - 100.0, title.y + 50.0),
            &mut PanelBindings::default(),
        );

        assert_eq!(panel.rect().x, start.x - 100.0);
        assert_eq!(panel.rect().y, start.y + 50.0);
    }

    #[test]
    fn press_outside_the_window_does_not_drag() {
        let mut panel = shown_panel();
        let start = panel.rect();

        panel.frame(
            &PanelInput::press_at(5.0, 400.0),
            &mut PanelBindings::default(),
        );
        panel.frame(
            &PanelInput::hold_at(200.0, 200.0),
            &mut PanelBindings::default(),
        );

        assert_eq!(panel.rect(), start);
    }

    #[test]
    fn currency_slider_writes_truncated_track_value() {
        let mut panel = shown_panel();
        let mut inventory = FakeInventory::default();
        let track = {
            let mut bindings = PanelBindings {
                currency: Some(&mut inventory),
                ..PanelBindings::default()
            };
            probe_scene(&mut panel, &mut bindings).currency.track
        };

        let mut bindings = PanelBindings {
            currency: Some(&mut inventory),
            ..PanelBindings::default()
        };
        let cursor = center(track);
        panel.frame(&PanelInput::press_at(cursor.x, cursor.y), &mut bindings);

        assert_eq!(inventory.currency, 500);
        assert_eq!(inventory.writes, 1);
    }

    #[test]
    fn currency_slider_does_not_rewrite_an_unchanged_value() {
        let mut panel = shown_panel();
        let mut inventory = FakeInventory::default();
        let track = {
            let mut bindings = PanelBindings {
                currency: Some(&mut inventory),
                ..PanelBindings::default()
            };
            probe_scene(&mut panel, &mut bindings).currency.track
        };

        let cursor = center(track);
        for input in [
            PanelInput::press_at(cursor.x, cursor.y),
            PanelInput::hold_at(cursor.x, cursor.y),
            PanelInput::hold_at(cursor.x, cursor.y),
        ] {
            let mut bindings = PanelBindings {
                currency: Some(&mut inventory),
                ..PanelBindings::default()
            };
            panel.frame(&input, &mut bindings);
        }

        assert_eq!(inventory.writes, 1);
    }

    #[test]
    fn absent_currency_shows_zero_and_never_writes() {
        let mut panel = shown_panel();
        let scene = probe_scene(&mut panel, &mut PanelBindings::default());

        assert!(!scene.currency.enabled);
        assert_eq!(scene.currency.knob_x, scene.currency.track.x);

        // Dragging the slider with no store behind it is a no-op.
        let cursor = center(scene.currency.track);
        panel.frame(
            &PanelInput::press_at(cursor.x, cursor.y),
            &mut PanelBindings::default(),
        );
        panel.frame(
            &PanelInput::hold_at(cursor.x + 40.0, cursor.y),
            &mut PanelBindings::default(),
        );
    }

    #[test]
    fn captured_slider_follows_cursor_off_the_track() {
        let mut panel = shown_panel();
        let mut inventory = FakeInventory::default();
        let track = {
            let mut bindings = PanelBindings {
                currency: Some(&mut inventory),
                ..PanelBindings::default()
            };
            probe_scene(&mut panel, &mut bindings).currency.track
        };

        let cursor = center(track);
        let mut bindings = PanelBindings {
            currency: Some(&mut inventory),
            ..PanelBindings::default()
        };
        panel.frame(&PanelInput::press_at(cursor.x, cursor.y), &mut bindings);
        let mut bindings = PanelBindings {
            currency: Some(&mut inventory),
            ..PanelBindings::default()
        };
        panel.frame(
            &PanelInput::hold_at(track.right() + 500.0, cursor.y - 200.0),
            &mut bindings,
        );

        assert_eq!(inventory.currency, 1000);
    }

    #[test]
    fn volume_change_beyond_tolerance_writes_exactly_once() {
        let mut panel = shown_panel();
        let mut audio = FakeAudio::default();
        let track = {
            let mut bindings = PanelBindings {
                audio: Some(&mut audio),
                ..PanelBindings::default()
            };
            probe_scene(&mut panel, &mut bindings).volume.track
        };

        let cursor = center(track);
        let mut bindings = PanelBindings {
            audio: Some(&mut audio),
            ..PanelBindings::default()
        };
        panel.frame(&PanelInput::press_at(cursor.x, cursor.y), &mut bindings);
        assert_eq!(audio.volume_writes, 1);
        assert!((audio.volume_db - (-30.0)).abs() < 0.5);

        // Holding at the same spot maps to the same value: no rewrite.
        let mut bindings = PanelBindings {
            audio: Some(&mut audio),
            ..PanelBindings::default()
        };
        panel.frame(&PanelInput::hold_at(cursor.x, cursor.y), &mut bindings);
        assert_eq!(audio.volume_writes, 1);
    }

    #[test]
    fn volume_within_tolerance_never_writes() {
        let mut panel = shown_panel();
        let mut audio = FakeAudio {
            volume_db: -80.0,
            ..FakeAudio::default()
        };
        let track = {
            let mut bindings = PanelBindings {
                audio: Some(&mut audio),
                ..PanelBindings::default()
            };
            probe_scene(&mut panel, &mut bindings).volume.track
        };

        // The track's left edge maps exactly to the stored -80 dB.
        let mut bindings = PanelBindings {
            audio: Some(&mut audio),
            ..PanelBindings::default()
        };
        panel.frame(
            &PanelInput::press_at(track.x, track.y + 2.0),
            &mut bindings,
        );

        assert_eq!(audio.volume_writes, 0);
    }

    #[test]
    fn mute_button_toggles_once_per_click() {
        let mut panel = shown_panel();
        let mut audio = FakeAudio::default();
        let mute_rect = {
            let mut bindings = PanelBindings {
                audio: Some(&mut audio),
                ..PanelBindings::default()
            };
            probe_scene(&mut panel, &mut bindings)
                .mute
                .expect("mute button present with audio bound")
                .rect
        };

        let cursor = center(mute_rect);
        for _ in 0..2 {
            let mut bindings = PanelBindings {
                audio: Some(&mut audio),
                ..PanelBindings::default()
            };
            panel.frame(&PanelInput::press_at(cursor.x, cursor.y), &mut bindings);
            let mut bindings = PanelBindings {
                audio: Some(&mut audio),
                ..PanelBindings::default()
            };
            panel.frame(&PanelInput::hold_at(cursor.x, cursor.y), &mut bindings);
            let mut bindings = PanelBindings {
                audio: Some(&mut audio),
                ..PanelBindings::default()
            };
            panel.frame(&PanelInput::release_at(cursor.x, cursor.y), &mut bindings);
        }

        assert_eq!(audio.mute_writes, 2);
        assert!(!audio.muted);
    }

    #[test]
    fn mute_label_reflects_state() {
        let mut panel = shown_panel();

        let mut audio = FakeAudio::default();
        let mut bindings = PanelBindings {
            audio: Some(&mut audio),
            ..PanelBindings::default()
        };
        let scene = probe_scene(&mut panel, &mut bindings);
        assert_eq!(scene.mute.expect("mute button").label, "m");

        let mut audio = FakeAudio {
            muted: true,
            ..FakeAudio::default()
        };
        let mut bindings = PanelBindings {
            audio: Some(&mut audio),
            ..PanelBindings::default()
        };
        let scene = probe_scene(&mut panel, &mut bindings);
        assert_eq!(scene.mute.expect("mute button").label, "M");
    }

    #[test]
    fn mute_button_is_omitted_without_audio() {
        let mut panel = shown_panel();
        let scene = probe_scene(&mut panel, &mut PanelBindings::default());
        assert!(scene.mute.is_none());
        assert!(!scene.volume.enabled);
    }

    #[test]
    fn interact_toggle_flips_the_flag_per_click() {
        let mut panel = shown_panel();
        let mut interaction = FakeInteraction::default();
        let box_rect = {
            let mut bindings = PanelBindings {
                interaction: Some(&mut interaction),
                ..PanelBindings::default()
            };
            probe_scene(&mut panel, &mut bindings).interact.box_rect
        };

        let cursor = center(box_rect);
        let mut bindings = PanelBindings {
            interaction: Some(&mut interaction),
            ..PanelBindings::default()
        };
        panel.frame(&PanelInput::press_at(cursor.x, cursor.y), &mut bindings);

        assert!(interaction.interactive);
        assert_eq!(interaction.writes, 1);

        // Holding does not retrigger; the toggle is edge-driven.
        let mut bindings = PanelBindings {
            interaction: Some(&mut interaction),
            ..PanelBindings::default()
        };
        panel.frame(&PanelInput::hold_at(cursor.x, cursor.y), &mut bindings);
        assert_eq!(interaction.writes, 1);
    }

    #[test]
    fn spawn_button_fires_once_per_click_edge() {
        let mut panel = shown_panel();
        let mut spawner = FakeSpawner::default();
        let button = {
            let mut bindings = PanelBindings {
                dummy_actor: Some(&mut spawner),
                ..PanelBindings::default()
            };
            probe_scene(&mut panel, &mut bindings).spawn.rect
        };

        let cursor = center(button);
        let mut bindings = PanelBindings {
            dummy_actor: Some(&mut spawner),
            ..PanelBindings::default()
        };
        panel.frame(&PanelInput::press_at(cursor.x, cursor.y), &mut bindings);
        let mut bindings = PanelBindings {
            dummy_actor: Some(&mut spawner),
            ..PanelBindings::default()
        };
        panel.frame(&PanelInput::hold_at(cursor.x, cursor.y), &mut bindings);

        assert_eq!(spawner.toggles, 1);
    }

    #[test]
    fn spawn_click_without_collaborator_is_a_no_op() {
        let mut panel = shown_panel();
        let button = probe_scene(&mut panel, &mut PanelBindings::default())
            .spawn
            .rect;
        let cursor = center(button);

        panel.frame(
            &PanelInput::press_at(cursor.x, cursor.y),
            &mut PanelBindings::default(),
        );
    }

    #[test]
    fn scene_reflects_bound_values() {
        let mut panel = shown_panel();
        let mut inventory = FakeInventory {
            currency: 1000,
            ..FakeInventory::default()
        };
        let mut interaction = FakeInteraction {
            interactive: true,
            ..FakeInteraction::default()
        };
        let mut audio = FakeAudio {
            volume_db: 20.0,
            ..FakeAudio::default()
        };
        let mut bindings = PanelBindings {
            currency: Some(&mut inventory),
            interaction: Some(&mut interaction),
            audio: Some(&mut audio),
            ..PanelBindings::default()
        };

        let scene = probe_scene(&mut panel, &mut bindings);

        assert_eq!(scene.title, "Cheat Console");
        assert_eq!(scene.currency.knob_x, scene.currency.track.right());
        assert!(scene.interact.checked);
        assert_eq!(scene.volume.knob_x, scene.volume.track.right());
        assert!(scene
            .labels
            .iter()
            .any(|label| label.text == "20.0 dB"));
    }

    #[test]
    fn controls_stay_inside_the_window() {
        let mut panel = shown_panel();
        let mut audio = FakeAudio::default();
        let mut bindings = PanelBindings {
            audio: Some(&mut audio),
            ..PanelBindings::default()
        };
        let scene = probe_scene(&mut panel, &mut bindings);

        let window = scene.window;
        for rect in [
            scene.title_bar,
            scene.currency.track,
            scene.interact.box_rect,
            scene.volume.track,
            scene.mute.expect("mute").rect,
            scene.spawn.rect,
        ] {
            assert!(rect.x >= window.x, "{rect:?} left of window");
            assert!(rect.right() <= window.right() + 0.01, "{rect:?} overflows");
            assert!(rect.y >= window.y);
            assert!(rect.bottom() <= window.bottom() + 0.01);
        }
    }

    #[test]
    fn hiding_the_panel_releases_any_capture() {
        let mut panel = shown_panel();
        let title = center(probe_scene(&mut panel, &mut PanelBindings::default()).title_bar);
        panel.frame(
            &PanelInput::press_at(title.x, title.y),
            &mut PanelBindings::default(),
        );

        panel.set_visible(false);
        panel.set_visible(true);

        let before = panel.rect();
        panel.frame(
            &PanelInput::hold_at(50.0, 50.0),
            &mut PanelBindings::default(),
        );
        assert_eq!(panel.rect(), before);
    }
}
