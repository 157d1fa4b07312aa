//! Circular carousel core: focus bookkeeping and offset arithmetic.
//!
//! The engine is deliberately DOM-free. The Yew component in
//! `components::carousel` owns one instance, mutates it from event
//! handlers, and renders whatever `layout::compute_layout` derives from
//! the committed focus index.

pub mod layout;

/// Focus state for one carousel instance.
///
/// The item set is fixed at construction; only the focused index moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselEngine {
    item_count: usize,
    focused_index: usize,
    auto_play_active: bool,
}

impl CarouselEngine {
    /// Builds an engine over `item_count` items, focused on
    /// `default_focus` (clamped into range; an empty deck stays at 0).
    pub fn new(item_count: usize, default_focus: usize) -> Self {
        let focused_index = if item_count == 0 {
            0
        } else {
            default_focus.min(item_count - 1)
        };
        Self {
            item_count,
            focused_index,
            auto_play_active: false,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn auto_play_active(&self) -> bool {
        self.auto_play_active
    }

    pub fn set_auto_play_active(&mut self, active: bool) {
        self.auto_play_active = active;
    }

    /// Advances focus by one slot, wrapping at the end. No-op for empty
    /// or single-item decks.
    pub fn focus_next(&mut self) {
        if self.item_count > 1 {
            self.focused_index = (self.focused_index + 1) % self.item_count;
        }
    }

    /// Moves focus back by one slot, wrapping at the start.
    pub fn focus_previous(&mut self) {
        if self.item_count > 1 {
            self.focused_index = (self.focused_index + self.item_count - 1) % self.item_count;
        }
    }

    /// Jumps directly to `index` (indicator dots, non-focused card
    /// clicks). Out-of-range requests are ignored.
    pub fn focus_index(&mut self, index: usize) {
        if index < self.item_count {
            self.focused_index = index;
        }
    }

    /// Signed circular distance of `index` from the focused card,
    /// folded so its magnitude never exceeds half the deck.
    pub fn circular_offset(&self, index: usize) -> i32 {
        if self.item_count == 0 {
            return 0;
        }
        let n = self.item_count as f64;
        let mut offset = index as f64 - self.focused_index as f64;
        if offset > n / 2.0 {
            offset -= n;
        } else if offset < -n / 2.0 {
            offset += n;
        }
        offset as i32
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.item_count > 0 && index == self.focused_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut engine = CarouselEngine::new(5, 0);
        engine.focus_previous();
        assert_eq!(engine.focused_index(), 4);
    }

    #[test]
    fn three_advances_from_default_wrap() {
        let mut engine = CarouselEngine::new(5, 2);
        engine.focus_next();
        engine.focus_next();
        engine.focus_next();
        assert_eq!(engine.focused_index(), 0);
    }

    #[test]
    fn offset_folds_past_half_deck() {
        let engine = CarouselEngine::new(7, 2);
        assert_eq!(engine.circular_offset(6), -3);
        assert_eq!(engine.circular_offset(2), 0);
        assert_eq!(engine.circular_offset(5), 3);
    }

    #[test]
    fn navigation_stays_in_range() {
        let mut engine = CarouselEngine::new(4, 0);
        for _ in 0..11 {
            engine.focus_next();
            assert!(engine.focused_index() < 4);
        }
        for _ in 0..17 {
            engine.focus_previous();
            assert!(engine.focused_index() < 4);
        }
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut engine = CarouselEngine::new(0, 2);
        engine.focus_next();
        engine.focus_previous();
        engine.focus_index(3);
        assert_eq!(engine.focused_index(), 0);
        assert_eq!(engine.circular_offset(0), 0);
        assert!(!engine.is_focused(0));
    }

    #[test]
    fn single_item_never_moves() {
        let mut engine = CarouselEngine::new(1, 0);
        engine.focus_next();
        engine.focus_previous();
        assert_eq!(engine.focused_index(), 0);
        assert!(engine.is_focused(0));
    }

    #[test]
    fn default_focus_clamps_to_deck() {
        let engine = CarouselEngine::new(2, 5);
        assert_eq!(engine.focused_index(), 1);
    }

    #[test]
    fn direct_jump_ignores_out_of_range() {
        let mut engine = CarouselEngine::new(3, 1);
        engine.focus_index(7);
        assert_eq!(engine.focused_index(), 1);
        engine.focus_index(0);
        assert_eq!(engine.focused_index(), 0);
    }
}
