use std::collections::HashSet;

use super::types::Key;

/// Input observed since the previous tick.
///
/// The runtime fills this from the host event queue; the `input` hook reads
/// it; the runtime clears it once the tick completes.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Host asked the process to quit (window close request).
    quit_requested: bool,

    /// Keys pressed this tick.
    keys_pressed: HashSet<Key>,

    /// Keys currently held.
    keys_down: HashSet<Key>,
}

impl InputFrame {
    /// True when the host posted a quit event since the last tick.
    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// True when `key` transitioned to pressed this tick.
    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// True when `key` is currently held.
    #[inline]
    pub fn down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Records a host quit event.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Records a key press. Repeats do not re-enter `keys_pressed`.
    pub fn press(&mut self, key: Key) {
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    /// Records a key release.
    pub fn release(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    /// Drops held-key state, e.g. on focus loss. Avoids stuck keys when focus
    /// changes mid-press.
    pub fn drop_held(&mut self) {
        self.keys_down.clear();
    }

    /// Clears per-tick deltas. Held keys persist across ticks.
    pub fn end_tick(&mut self) {
        self.quit_requested = false;
        self.keys_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_both_pressed_and_down() {
        let mut frame = InputFrame::default();
        frame.press(Key::Escape);
        assert!(frame.pressed(Key::Escape));
        assert!(frame.down(Key::Escape));
    }

    #[test]
    fn repeat_press_is_not_a_new_transition() {
        let mut frame = InputFrame::default();
        frame.press(Key::Space);
        frame.end_tick();
        frame.press(Key::Space);
        assert!(!frame.pressed(Key::Space));
        assert!(frame.down(Key::Space));
    }

    #[test]
    fn end_tick_clears_deltas_but_keeps_held() {
        let mut frame = InputFrame::default();
        frame.request_quit();
        frame.press(Key::W);
        frame.end_tick();
        assert!(!frame.quit_requested());
        assert!(!frame.pressed(Key::W));
        assert!(frame.down(Key::W));
    }

    #[test]
    fn release_after_end_tick_allows_new_press() {
        let mut frame = InputFrame::default();
        frame.press(Key::A);
        frame.end_tick();
        frame.release(Key::A);
        frame.press(Key::A);
        assert!(frame.pressed(Key::A));
    }
}
