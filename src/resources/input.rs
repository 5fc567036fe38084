//! Platform-agnostic input system
//!
//! Defines pointer input types and a state container that do not depend on
//! any GUI library. Concrete platform adapters are responsible for
//! translating platform events into these types.

use glam::Vec2;
use std::collections::HashSet;

/// Mouse button enumeration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Button state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Converts a pixel position inside a viewport of `screen_size` pixels into
/// normalized device coordinates.
///
/// The result spans `[-1, 1]` on both axes with +Y pointing up, so the
/// top-left pixel maps to `(-1, 1)`. A degenerate viewport maps everything
/// to the origin.
#[must_use]
pub fn screen_to_ndc(position: Vec2, screen_size: Vec2) -> Vec2 {
    if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (position.x / screen_size.x) * 2.0 - 1.0,
        -(position.y / screen_size.y) * 2.0 + 1.0,
    )
}

/// Platform-agnostic pointer state container
#[derive(Debug, Clone)]
pub struct Input {
    // Mouse button state
    pressed_mouse: HashSet<MouseButton>,
    just_pressed_mouse: HashSet<MouseButton>,

    // Mouse position in pixels
    mouse_position: Vec2,

    // Window state
    screen_size: Vec2,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pressed_mouse: HashSet::new(),
            just_pressed_mouse: HashSet::new(),
            mouse_position: Vec2::ZERO,
            screen_size: Vec2::ZERO,
        }
    }

    // ========== System API (called by the dispatcher / adapter) ==========

    /// Clears the just-pressed set at the start of each frame
    pub fn start_frame(&mut self) {
        self.just_pressed_mouse.clear();
    }

    /// Injects a mouse button event.
    ///
    /// Returns `true` only on the press edge: a `Pressed` for a button that
    /// was not already held. Repeated presses without a release in between
    /// (key repeat, duplicated platform events) return `false`.
    pub fn inject_mouse_button(&mut self, button: MouseButton, state: ButtonState) -> bool {
        match state {
            ButtonState::Pressed => {
                let edge = self.pressed_mouse.insert(button);
                if edge {
                    self.just_pressed_mouse.insert(button);
                }
                edge
            }
            ButtonState::Released => {
                self.pressed_mouse.remove(&button);
                false
            }
        }
    }

    /// Injects a mouse position update (pixels, origin top-left)
    pub fn inject_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = Vec2::new(x, y);
    }

    /// Injects a window resize event
    pub fn inject_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    // ========== User API ==========

    /// Checks whether a mouse button is currently held down
    #[must_use]
    pub fn get_mouse_button(&self, button: MouseButton) -> bool {
        self.pressed_mouse.contains(&button)
    }

    /// Checks whether a mouse button was just pressed this frame
    #[must_use]
    pub fn get_mouse_button_down(&self, button: MouseButton) -> bool {
        self.just_pressed_mouse.contains(&button)
    }

    /// Returns the current mouse position in pixels
    #[must_use]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Returns the current mouse position in normalized device coordinates
    #[must_use]
    pub fn mouse_ndc(&self) -> Vec2 {
        screen_to_ndc(self.mouse_position, self.screen_size)
    }

    /// Returns the window dimensions
    #[must_use]
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_and_center() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(screen_to_ndc(Vec2::ZERO, size), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(size, size), Vec2::new(1.0, -1.0));
        assert_eq!(screen_to_ndc(size * 0.5, size), Vec2::ZERO);
    }

    #[test]
    fn ndc_of_empty_viewport_is_origin() {
        assert_eq!(screen_to_ndc(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn button_press_is_reported_once_per_frame() {
        let mut input = Input::new();
        assert!(input.inject_mouse_button(MouseButton::Left, ButtonState::Pressed));
        assert!(!input.inject_mouse_button(MouseButton::Left, ButtonState::Pressed));
        assert!(input.get_mouse_button_down(MouseButton::Left));

        input.start_frame();
        assert!(!input.get_mouse_button_down(MouseButton::Left));
        assert!(input.get_mouse_button(MouseButton::Left));

        assert!(!input.inject_mouse_button(MouseButton::Left, ButtonState::Released));
        assert!(!input.get_mouse_button(MouseButton::Left));
        assert!(input.inject_mouse_button(MouseButton::Left, ButtonState::Pressed));
    }
}
