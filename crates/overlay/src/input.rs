use crate::geom::Vec2;

/// Pointer state sampled by the host once per frame.
///
/// `left_pressed` is an edge: true only on the frame where the button
/// transitioned from up to down. The host's input collector is
/// responsible for producing single-frame edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelInput {
    pub cursor: Option<Vec2>,
    pub left_down: bool,
    pub left_pressed: bool,
}

impl PanelInput {
    /// A frame with no cursor over the window and no button activity.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn cursor_at(x: f32, y: f32) -> Self {
        Self {
            cursor: Some(Vec2 { x, y }),
            ..Self::default()
        }
    }

    pub fn press_at(x: f32, y: f32) -> Self {
        Self {
            cursor: Some(Vec2 { x, y }),
            left_down: true,
            left_pressed: true,
        }
    }

    pub fn hold_at(x: f32, y: f32) -> Self {
        Self {
            cursor: Some(Vec2 { x, y }),
            left_down: true,
            left_pressed: false,
        }
    }

    pub fn release_at(x: f32, y: f32) -> Self {
        Self::cursor_at(x, y)
    }
}
