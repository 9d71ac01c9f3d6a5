//! Scoped layout cursor for the panel's content area.
//!
//! Rows and columns are entered through closures, so every scope is
//! closed exactly where it opened; there is no unmatched begin/end pair
//! to get wrong. Slots are handed out along the active axis and never
//! overlap within a scope.

use crate::geom::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    rect: Rect,
    axis: Axis,
    cursor: f32,
}

impl Frame {
    fn extent(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.rect.width,
            Axis::Vertical => self.rect.height,
        }
    }

    fn remaining(&self) -> f32 {
        (self.extent() - self.cursor).max(0.0)
    }
}

/// Walks a content rectangle, allocating widget slots top-to-bottom and,
/// inside a row scope, left-to-right.
#[derive(Debug)]
pub struct Layout {
    root: Frame,
    nested: Vec<Frame>,
    spacing: f32,
}

impl Layout {
    /// Starts a vertical layout over `content`. `spacing` is inserted
    /// between consecutive slots on the same axis.
    pub fn new(content: Rect, spacing: f32) -> Self {
        Self {
            root: Frame {
                rect: content,
                axis: Axis::Vertical,
                cursor: 0.0,
            },
            nested: Vec::new(),
            spacing: spacing.max(0.0),
        }
    }

    /// Allocates a horizontal strip of `height` and lays out its
    /// children left-to-right inside the closure.
    pub fn row<R>(&mut self, height: f32, scope: impl FnOnce(&mut Layout) -> R) -> R {
        let strip = self.slot(height);
        self.enter(strip, Axis::Horizontal, scope)
    }

    /// Allocates a vertical band of `width` and lays out its children
    /// top-to-bottom inside the closure.
    pub fn column<R>(&mut self, width: f32, scope: impl FnOnce(&mut Layout) -> R) -> R {
        let band = self.slot(width);
        self.enter(band, Axis::Vertical, scope)
    }

    /// Takes `size` along the active axis, full extent across it.
    pub fn slot(&mut self, size: f32) -> Rect {
        let spacing = self.spacing;
        let frame = self.active_mut();
        let size = size.clamp(0.0, frame.remaining());
        let rect = match frame.axis {
            Axis::Horizontal => Rect::new(
                frame.rect.x + frame.cursor,
                frame.rect.y,
                size,
                frame.rect.height,
            ),
            Axis::Vertical => Rect::new(
                frame.rect.x,
                frame.rect.y + frame.cursor,
                frame.rect.width,
                size,
            ),
        };
        frame.cursor += size;
        if frame.cursor < frame.extent() {
            frame.cursor = (frame.cursor + spacing).min(frame.extent());
        }
        rect
    }

    /// Takes everything left in the active scope.
    pub fn fill(&mut self) -> Rect {
        let remaining = self.active_mut().remaining();
        self.slot(remaining)
    }

    /// Space still available along the active axis.
    pub fn remaining(&self) -> f32 {
        self.nested
            .last()
            .unwrap_or(&self.root)
            .remaining()
    }

    fn enter<R>(&mut self, rect: Rect, axis: Axis, scope: impl FnOnce(&mut Layout) -> R) -> R {
        self.nested.push(Frame {
            rect,
            axis,
            cursor: 0.0,
        });
        let result = scope(self);
        self.nested.pop();
        result
    }

    fn active_mut(&mut self) -> &mut Frame {
        self.nested.last_mut().unwrap_or(&mut self.root)
    }
}
