//! Keyboard shortcuts that change the zoom of an image canvas

use tracing::debug;

use crate::overlay::IntCoords;

/// Canvas of an image display that can change its magnification
pub trait ZoomCanvas {
    fn zoom_in(&mut self);

    /// Zoom in keeping `center` fixed on screen
    fn zoom_in_at(&mut self, center: IntCoords);

    fn zoom_out(&mut self);

    /// Zoom out keeping `center` fixed on screen
    fn zoom_out_at(&mut self, center: IntCoords);
}

/// Keys the zoom shortcuts care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Equals,
    Plus,
    Minus,
    Other,
}

/// A key press on a display, with the pointer position at the time
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPressed {
    pub code: KeyCode,
    pub character: Option<char>,
    /// Pointer position in canvas pixels, negative when outside the canvas
    pub x: i32,
    pub y: i32,
    consumed: bool,
}

impl KeyPressed {
    pub fn new(code: KeyCode, character: Option<char>, x: i32, y: i32) -> Self {
        Self {
            code,
            character,
            x,
            y,
            consumed: false,
        }
    }

    /// Mark the event handled so later tools skip it
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    fn center(&self) -> Option<IntCoords> {
        if self.x < 0 || self.y < 0 {
            None
        } else {
            Some(IntCoords::new(self.x, self.y))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    ZoomIn,
    ZoomOut,
}

fn gesture(evt: &KeyPressed) -> Option<Gesture> {
    match (evt.code, evt.character) {
        (KeyCode::Equals | KeyCode::Plus, _) | (_, Some('=' | '+')) => Some(Gesture::ZoomIn),
        (KeyCode::Minus, _) | (_, Some('-')) => Some(Gesture::ZoomOut),
        _ => None,
    }
}

/// Always-active tool mapping `+`/`=` and `-` to canvas zoom
#[derive(Debug, Default, Clone, Copy)]
pub struct ZoomHandler;

impl ZoomHandler {
    pub fn new() -> Self {
        Self
    }

    /// Handle a key press. `canvas` is `None` when the display has no
    /// zoomable canvas, in which case the event is left alone.
    ///
    /// Returns whether the event was handled.
    pub fn on_key_down(&self, evt: &mut KeyPressed, canvas: Option<&mut dyn ZoomCanvas>) -> bool {
        let Some(canvas) = canvas else {
            return false;
        };
        let Some(gesture) = gesture(evt) else {
            return false;
        };

        match (gesture, evt.center()) {
            (Gesture::ZoomIn, None) => canvas.zoom_in(),
            (Gesture::ZoomIn, Some(center)) => canvas.zoom_in_at(center),
            (Gesture::ZoomOut, None) => canvas.zoom_out(),
            (Gesture::ZoomOut, Some(center)) => canvas.zoom_out_at(center),
        }
        debug!("Handled {:?} at ({}, {})", gesture, evt.x, evt.y);
        evt.consume();
        true
    }
}
