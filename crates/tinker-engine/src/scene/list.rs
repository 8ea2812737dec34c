use crate::coords::Vec2;
use crate::paint::Color;

use super::{CircleCmd, DrawCmd};

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); `clear()` keeps allocated capacity so a warmed list does
/// no per-frame allocation. Commands paint in insertion order.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in insertion (paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a filled circle.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::new(1.0, 1.0), 2.0, Color::RED);
        list.push_circle(Vec2::new(3.0, 3.0), 4.0, Color::WHITE);

        let items = list.items();
        assert_eq!(items.len(), 2);
        let DrawCmd::Circle(first) = items[0];
        let DrawCmd::Circle(second) = items[1];
        assert_eq!(first.radius, 2.0);
        assert_eq!(second.radius, 4.0);
    }

    #[test]
    fn clear_empties_but_list_stays_usable() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::zero(), 8.0, Color::RED);
        list.clear();
        assert!(list.is_empty());

        list.push_circle(Vec2::zero(), 1.0, Color::BLACK);
        assert_eq!(list.items().len(), 1);
    }
}
