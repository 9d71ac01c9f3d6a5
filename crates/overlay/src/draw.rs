//! Software rendering of a [`PanelScene`] into an RGBA framebuffer.
//!
//! Everything is clip-safe: out-of-bounds rects and text degrade to
//! partial or no output, never to a panic or an out-of-range write.

use crate::geom::Rect;
use crate::panel::{ButtonVisual, PanelScene, SliderVisual, ToggleVisual};

const GLYPH_WIDTH: i32 = 3;
const GLYPH_HEIGHT: i32 = 5;
const TEXT_SCALE: i32 = 2;
const GLYPH_ADVANCE: i32 = (GLYPH_WIDTH + 1) * TEXT_SCALE;
const TEXT_HEIGHT: i32 = GLYPH_HEIGHT * TEXT_SCALE;
const TEXT_INSET: i32 = 4;

const PANEL_BG_COLOR: [u8; 4] = [14, 16, 22, 235];
const PANEL_BORDER_COLOR: [u8; 4] = [82, 94, 112, 255];
const TITLE_BG_COLOR: [u8; 4] = [28, 34, 46, 255];
const TITLE_TEXT_COLOR: [u8; 4] = [232, 226, 164, 255];
const LABEL_TEXT_COLOR: [u8; 4] = [214, 224, 236, 255];
const DISABLED_TEXT_COLOR: [u8; 4] = [122, 130, 142, 255];
const TRACK_GROOVE_COLOR: [u8; 4] = [38, 44, 58, 255];
const KNOB_COLOR: [u8; 4] = [198, 218, 145, 255];
const KNOB_DISABLED_COLOR: [u8; 4] = [96, 104, 116, 255];
const TOGGLE_CHECK_COLOR: [u8; 4] = [198, 218, 145, 255];
const BUTTON_BG_COLOR: [u8; 4] = [34, 40, 52, 255];
const BUTTON_BORDER_COLOR: [u8; 4] = [92, 106, 130, 255];

const TRACK_GROOVE_HEIGHT: i32 = 4;
const KNOB_WIDTH: i32 = 6;

#[derive(Debug, Clone, Copy)]
struct PxRect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl PxRect {
    fn of(rect: Rect) -> Self {
        Self {
            left: rect.x.round() as i32,
            top: rect.y.round() as i32,
            width: rect.width.round() as i32,
            height: rect.height.round() as i32,
        }
    }

    fn right(self) -> i32 {
        self.left + self.width
    }

    fn bottom(self) -> i32 {
        self.top + self.height
    }
}

/// Draws one frame of the panel over whatever is already in `frame`.
pub fn draw_panel(frame: &mut [u8], width: u32, height: u32, scene: &PanelScene) {
    if width == 0 || height == 0 {
        return;
    }

    let window = PxRect::of(scene.window);
    fill_rect(frame, width, height, window, PANEL_BG_COLOR);

    let title_bar = PxRect::of(scene.title_bar);
    fill_rect(frame, width, height, title_bar, TITLE_BG_COLOR);
    draw_text(
        frame,
        width,
        height,
        title_bar.left + TEXT_INSET,
        title_bar.top + (title_bar.height - TEXT_HEIGHT) / 2,
        scene.title,
        TITLE_TEXT_COLOR,
    );

    outline_rect(frame, width, height, window, PANEL_BORDER_COLOR);

    for label in &scene.labels {
        let rect = PxRect::of(label.rect);
        draw_text(
            frame,
            width,
            height,
            rect.left,
            rect.top + (rect.height - TEXT_HEIGHT) / 2,
            &label.text,
            LABEL_TEXT_COLOR,
        );
    }

    draw_slider(frame, width, height, &scene.currency);
    draw_toggle(frame, width, height, &scene.interact);
    draw_slider(frame, width, height, &scene.volume);
    if let Some(mute) = &scene.mute {
        draw_button(frame, width, height, mute);
    }
    draw_button(frame, width, height, &scene.spawn);
}

fn draw_slider(frame: &mut [u8], width: u32, height: u32, slider: &SliderVisual) {
    let track = PxRect::of(slider.track);
    let groove = PxRect {
        left: track.left,
        top: track.top + (track.height - TRACK_GROOVE_HEIGHT) / 2,
        width: track.width,
        height: TRACK_GROOVE_HEIGHT,
    };
    fill_rect(frame, width, height, groove, TRACK_GROOVE_COLOR);

    let knob_center = slider.knob_x.round() as i32;
    let knob = PxRect {
        left: knob_center - KNOB_WIDTH / 2,
        top: track.top,
        width: KNOB_WIDTH,
        height: track.height,
    };
    let knob_color = if slider.enabled {
        KNOB_COLOR
    } else {
        KNOB_DISABLED_COLOR
    };
    fill_rect(frame, width, height, knob, knob_color);
}

fn draw_toggle(frame: &mut [u8], width: u32, height: u32, toggle: &ToggleVisual) {
    let box_rect = PxRect::of(toggle.box_rect);
    let border = if toggle.enabled {
        BUTTON_BORDER_COLOR
    } else {
        KNOB_DISABLED_COLOR
    };
    fill_rect(frame, width, height, box_rect, BUTTON_BG_COLOR);
    outline_rect(frame, width, height, box_rect, border);
    if toggle.checked {
        let inset = PxRect {
            left: box_rect.left + 3,
            top: box_rect.top + 3,
            width: (box_rect.width - 6).max(0),
            height: (box_rect.height - 6).max(0),
        };
        fill_rect(frame, width, height, inset, TOGGLE_CHECK_COLOR);
    }
}

fn draw_button(frame: &mut [u8], width: u32, height: u32, button: &ButtonVisual) {
    let rect = PxRect::of(button.rect);
    fill_rect(frame, width, height, rect, BUTTON_BG_COLOR);
    outline_rect(frame, width, height, rect, BUTTON_BORDER_COLOR);
    draw_text(
        frame,
        width,
        height,
        rect.left + TEXT_INSET,
        rect.top + (rect.height - TEXT_HEIGHT) / 2,
        &button.label,
        LABEL_TEXT_COLOR,
    );
}

fn fill_rect(frame: &mut [u8], width: u32, height: u32, rect: PxRect, color: [u8; 4]) {
    let start_x = rect.left.max(0);
    let start_y = rect.top.max(0);
    let end_x = rect.right().min(width as i32);
    let end_y = rect.bottom().min(height as i32);
    if end_x <= start_x || end_y <= start_y {
        return;
    }

    let width_usize = width as usize;
    for py in start_y..end_y {
        for px in start_x..end_x {
            write_pixel(frame, width_usize, px as usize, py as usize, color);
        }
    }
}

fn outline_rect(frame: &mut [u8], width: u32, height: u32, rect: PxRect, color: [u8; 4]) {
    if rect.width <= 1 || rect.height <= 1 {
        return;
    }
    let top_edge = PxRect {
        height: 1,
        ..rect
    };
    let bottom_edge = PxRect {
        top: rect.bottom() - 1,
        height: 1,
        ..rect
    };
    let left_edge = PxRect { width: 1, ..rect };
    let right_edge = PxRect {
        left: rect.right() - 1,
        width: 1,
        ..rect
    };
    fill_rect(frame, width, height, top_edge, color);
    fill_rect(frame, width, height, bottom_edge, color);
    fill_rect(frame, width, height, left_edge, color);
    fill_rect(frame, width, height, right_edge, color);
}

fn draw_text(
    frame: &mut [u8],
    width: u32,
    height: u32,
    mut x: i32,
    y: i32,
    text: &str,
    color: [u8; 4],
) {
    for ch in text.chars() {
        let rows = glyph_rows(ch).unwrap_or_else(|| glyph_rows('?').unwrap_or([0; 5]));
        draw_glyph(frame, width, height, x, y, rows, color);
        x += GLYPH_ADVANCE;
    }
}

fn draw_glyph(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, rows: [u8; 5], color: [u8; 4]) {
    if width == 0 || height == 0 {
        return;
    }

    let width_i32 = width as i32;
    let height_i32 = height as i32;

    for (row_index, row_bits) in rows.iter().enumerate() {
        let glyph_y = y + row_index as i32 * TEXT_SCALE;
        for col in 0..GLYPH_WIDTH {
            if (row_bits & (1 << (GLYPH_WIDTH - 1 - col))) == 0 {
                continue;
            }
            let glyph_x = x + col * TEXT_SCALE;
            for sy in 0..TEXT_SCALE {
                let pixel_y = glyph_y + sy;
                if pixel_y < 0 || pixel_y >= height_i32 {
                    continue;
                }
                for sx in 0..TEXT_SCALE {
                    let pixel_x = glyph_x + sx;
                    if pixel_x < 0 || pixel_x >= width_i32 {
                        continue;
                    }
                    write_pixel(
                        frame,
                        width as usize,
                        pixel_x as usize,
                        pixel_y as usize,
                        color,
                    );
                }
            }
        }
    }
}

fn write_pixel(frame: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 4]) {
    let Some(pixel_offset) = y.checked_mul(width).and_then(|row| row.checked_add(x)) else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    let Some(end) = byte_offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }

    frame[byte_offset..end].copy_from_slice(&color);
}

/// 3x5 bitmap rows for the printable ASCII range, indexed from `' '`.
/// Each byte holds one row in its low three bits, leftmost pixel in the
/// highest of the three.
#[rustfmt::skip]
const GLYPH_TABLE: [[u8; 5]; 95] = [
    [0b000, 0b000, 0b000, 0b000, 0b000], // ' '
    [0b010, 0b010, 0b010, 0b000, 0b010], // '!'
    [0b101, 0b101, 0b000, 0b000, 0b000], // '"'
    [0b101, 0b111, 0b101, 0b111, 0b101], // '#'
    [0b111, 0b110, 0b111, 0b011, 0b111], // '$'
    [0b101, 0b001, 0b010, 0b100, 0b101], // '%'
    [0b010, 0b101, 0b010, 0b101, 0b011], // '&'
    [0b010, 0b010, 0b000, 0b000, 0b000], // '\''
    [0b001, 0b010, 0b010, 0b010, 0b001], // '('
    [0b100, 0b010, 0b010, 0b010, 0b100], // ')'
    [0b000, 0b101, 0b010, 0b101, 0b000], // '*'
    [0b000, 0b010, 0b111, 0b010, 0b000], // '+'
    [0b000, 0b000, 0b000, 0b010, 0b100], // ','
    [0b000, 0b000, 0b111, 0b000, 0b000], // '-'
    [0b000, 0b000, 0b000, 0b000, 0b010], // '.'
    [0b001, 0b001, 0b010, 0b100, 0b100], // '/'
    [0b111, 0b101, 0b101, 0b101, 0b111], // '0'
    [0b010, 0b110, 0b010, 0b010, 0b111], // '1'
    [0b111, 0b001, 0b111, 0b100, 0b111], // '2'
    [0b111, 0b001, 0b111, 0b001, 0b111], // '3'
    [0b101, 0b101, 0b111, 0b001, 0b001], // '4'
    [0b111, 0b100, 0b111, 0b001, 0b111], // '5'
    [0b111, 0b100, 0b111, 0b101, 0b111], // '6'
    [0b111, 0b001, 0b010, 0b010, 0b010], // '7'
    [0b111, 0b101, 0b111, 0b101, 0b111], // '8'
    [0b111, 0b101, 0b111, 0b001, 0b111], // '9'
    [0b000, 0b010, 0b000, 0b010, 0b000], // ':'
    [0b000, 0b010, 0b000, 0b010, 0b100], // ';'
    [0b001, 0b010, 0b100, 0b010, 0b001], // '<'
    [0b000, 0b111, 0b000, 0b111, 0b000], // '='
    [0b100, 0b010, 0b001, 0b010, 0b100], // '>'
    [0b111, 0b001, 0b011, 0b000, 0b010], // '?'
    [0b111, 0b101, 0b111, 0b100, 0b111], // '@'
    [0b010, 0b101, 0b111, 0b101, 0b101], // 'A'
    [0b110, 0b101, 0b110, 0b101, 0b110], // 'B'
    [0b111, 0b100, 0b100, 0b100, 0b111], // 'C'
    [0b110, 0b101, 0b101, 0b101, 0b110], // 'D'
    [0b111, 0b100, 0b110, 0b100, 0b111], // 'E'
    [0b111, 0b100, 0b110, 0b100, 0b100], // 'F'
    [0b111, 0b100, 0b101, 0b101, 0b111], // 'G'
    [0b101, 0b101, 0b111, 0b101, 0b101], // 'H'
    [0b111, 0b010, 0b010, 0b010, 0b111], // 'I'
    [0b111, 0b001, 0b001, 0b101, 0b111], // 'J'
    [0b101, 0b101, 0b110, 0b101, 0b101], // 'K'
    [0b100, 0b100, 0b100, 0b100, 0b111], // 'L'
    [0b101, 0b111, 0b111, 0b101, 0b101], // 'M'
    [0b101, 0b111, 0b111, 0b111, 0b101], // 'N'
    [0b111, 0b101, 0b101, 0b101, 0b111], // 'O'
    [0b110, 0b101, 0b110, 0b100, 0b100], // 'P'
    [0b111, 0b101, 0b101, 0b111, 0b001], // 'Q'
    [0b110, 0b101, 0b110, 0b101, 0b101], // 'R'
    [0b111, 0b100, 0b111, 0b001, 0b111], // 'S'
    [0b111, 0b010, 0b010, 0b010, 0b010], // 'T'
    [0b101, 0b101, 0b101, 0b101, 0b111], // 'U'
    [0b101, 0b101, 0b101, 0b101, 0b010], // 'V'
    [0b101, 0b101, 0b111, 0b111, 0b101], // 'W'
    [0b101, 0b101, 0b010, 0b101, 0b101], // 'X'
    [0b101, 0b101, 0b010, 0b010, 0b010], // 'Y'
    [0b111, 0b001, 0b010, 0b100, 0b111], // 'Z'
    [0b110, 0b100, 0b100, 0b100, 0b110], // '['
    [0b100, 0b100, 0b010, 0b001, 0b001], // '\\'
    [0b011, 0b001, 0b001, 0b001, 0b011], // ']'
    [0b010, 0b101, 0b000, 0b000, 0b000], // '^'
    [0b000, 0b000, 0b000, 0b000, 0b111], // '_'
    [0b100, 0b010, 0b000, 0b000, 0b000], // '`'
    [0b000, 0b111, 0b001, 0b111, 0b111], // 'a'
    [0b100, 0b100, 0b110, 0b101, 0b110], // 'b'
    [0b000, 0b111, 0b100, 0b100, 0b111], // 'c'
    [0b001, 0b001, 0b111, 0b101, 0b111], // 'd'
    [0b000, 0b111, 0b110, 0b100, 0b111], // 'e'
    [0b011, 0b100, 0b110, 0b100, 0b100], // 'f'
    [0b000, 0b111, 0b101, 0b111, 0b001], // 'g'
    [0b100, 0b100, 0b110, 0b101, 0b101], // 'h'
    [0b010, 0b000, 0b010, 0b010, 0b010], // 'i'
    [0b001, 0b000, 0b001, 0b101, 0b010], // 'j'
    [0b100, 0b101, 0b110, 0b101, 0b101], // 'k'
    [0b100, 0b100, 0b100, 0b100, 0b111], // 'l'
    [0b000, 0b110, 0b111, 0b101, 0b101], // 'm'
    [0b000, 0b110, 0b101, 0b101, 0b101], // 'n'
    [0b000, 0b111, 0b101, 0b101, 0b111], // 'o'
    [0b000, 0b110, 0b101, 0b110, 0b100], // 'p'
    [0b000, 0b111, 0b101, 0b111, 0b001], // 'q'
    [0b000, 0b110, 0b101, 0b100, 0b100], // 'r'
    [0b000, 0b111, 0b110, 0b001, 0b111], // 's'
    [0b010, 0b111, 0b010, 0b010, 0b011], // 't'
    [0b000, 0b101, 0b101, 0b101, 0b111], // 'u'
    [0b000, 0b101, 0b101, 0b101, 0b010], // 'v'
    [0b000, 0b101, 0b101, 0b111, 0b010], // 'w'
    [0b000, 0b101, 0b010, 0b010, 0b101], // 'x'
    [0b000, 0b101, 0b101, 0b111, 0b001], // 'y'
    [0b000, 0b111, 0b001, 0b010, 0b111], // 'z'
    [0b011, 0b010, 0b110, 0b010, 0b011], // '{'
    [0b010, 0b010, 0b010, 0b010, 0b010], // '|'
    [0b110, 0b010, 0b011, 0b010, 0b110], // '}'
    [0b000, 0b011, 0b110, 0b000, 0b000], // '~'
];

fn glyph_rows(ch: char) -> Option<[u8; 5]> {
    let code = ch as u32;
    let first = ' ' as u32;
    let last = '~' as u32;
    if code < first || code > last {
        return None;
    }
    Some(GLYPH_TABLE[(code - first) as usize])
}
