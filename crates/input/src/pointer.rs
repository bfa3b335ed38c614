//! Pointer mapping: terminal mouse events to canvas targets.
//!
//! Terminal coordinates are converted to canvas coordinates by the caller
//! (see [`Layout::to_canvas`]); everything here works in canvas space.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{CardIndex, GameAction, Layout, Outcome, Point};

/// Pointer activity relevant to the game, in terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Left button went down
    Press(Point),
    /// Pointer moved (with or without a button held)
    Move(Point),
}

/// What a pointer position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Card(CardIndex),
    Restart,
}

/// Keep left presses and motion; drop everything else.
pub fn map_mouse_event(ev: MouseEvent) -> Option<PointerEvent> {
    let p = Point::new(ev.column, ev.row);
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Press(p)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerEvent::Move(p)),
        _ => None,
    }
}

/// Resolve a canvas position.
///
/// The restart button overlays the grid once the round is over and takes
/// precedence there. Header band and margins resolve to `None`.
pub fn hit_test(layout: &Layout, p: Point, outcome: Outcome) -> Option<PointerTarget> {
    if outcome.is_over() && layout.restart_button().contains(p) {
        return Some(PointerTarget::Restart);
    }
    layout.card_at(p).map(PointerTarget::Card)
}

/// Action for a left press at a canvas position.
pub fn action_for_press(layout: &Layout, p: Point, outcome: Outcome) -> Option<GameAction> {
    match hit_test(layout, p, outcome)? {
        PointerTarget::Card(idx) => Some(GameAction::Flip(idx)),
        PointerTarget::Restart => Some(GameAction::Restart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_press_and_motion_are_kept() {
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 9)),
            Some(PointerEvent::Press(Point::new(4, 9)))
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Moved, 1, 2)),
            Some(PointerEvent::Move(Point::new(1, 2)))
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 3, 3)),
            Some(PointerEvent::Move(Point::new(3, 3)))
        );
    }

    #[test]
    fn test_other_buttons_are_dropped() {
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 4, 9)),
            None
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 4, 9)),
            None
        );
        assert_eq!(map_mouse_event(mouse(MouseEventKind::ScrollDown, 4, 9)), None);
    }

    #[test]
    fn test_header_maps_to_nothing() {
        let layout = Layout::default();
        assert_eq!(hit_test(&layout, Point::new(5, 1), Outcome::InProgress), None);
        assert_eq!(hit_test(&layout, Point::new(5, 1), Outcome::Lost), None);
    }

    #[test]
    fn test_grid_press_flips_card() {
        let layout = Layout::default();
        let p = Point::new(layout.tile_w() * 3 + 2, layout.header_rows());
        assert_eq!(
            action_for_press(&layout, p, Outcome::InProgress),
            Some(GameAction::Flip(CardIndex::new(3).unwrap()))
        );
    }

    #[test]
    fn test_restart_only_hit_when_round_over() {
        let layout = Layout::default();
        let button = layout.restart_button();
        let p = Point::new(button.x + 1, button.y + 1);

        // While playing, the same cells are just grid tiles.
        assert!(matches!(
            hit_test(&layout, p, Outcome::InProgress),
            Some(PointerTarget::Card(_))
        ));
        assert_eq!(
            hit_test(&layout, p, Outcome::Won),
            Some(PointerTarget::Restart)
        );
        assert_eq!(
            action_for_press(&layout, p, Outcome::Lost),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_grid_outside_button_still_maps_to_cards_when_over() {
        let layout = Layout::default();
        let p = Point::new(0, layout.header_rows());
        assert_eq!(
            action_for_press(&layout, p, Outcome::Lost),
            Some(GameAction::Flip(CardIndex::new(0).unwrap()))
        );
    }
}
