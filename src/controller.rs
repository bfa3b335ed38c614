//! Game controller: routes terminal events into the game state and renders
//! frames from it.
//!
//! The controller holds no terminal handle, so the whole input → state →
//! frame path can be driven in tests with synthetic crossterm events.

use crossterm::event::{Event, KeyEventKind};
use log::debug;

use crate::core::GameState;
use crate::input::{action_for_press, handle_key_event, map_mouse_event, should_quit, PointerEvent};
use crate::term::{FrameBuffer, GameView, Viewport};
use crate::types::{GameAction, Point};

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Terminal size changed; the next frame must be a full redraw.
    Resized,
    Quit,
}

pub struct Controller {
    state: GameState,
    view: GameView,
    viewport: Viewport,
    /// Last pointer position in terminal coordinates.
    pointer: Option<Point>,
}

impl Controller {
    pub fn new(state: GameState, viewport: Viewport) -> Self {
        Self::with_view(state, GameView::default(), viewport)
    }

    pub fn with_view(state: GameState, view: GameView, viewport: Viewport) -> Self {
        Self {
            state,
            view,
            viewport,
            pointer: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn handle_event(&mut self, event: &Event) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(*key) {
                    return Flow::Quit;
                }
                if let Some(action) = handle_key_event(*key) {
                    self.apply(action);
                }
            }
            Event::Mouse(mouse) => match map_mouse_event(*mouse) {
                Some(PointerEvent::Press(p)) => {
                    self.pointer = Some(p);
                    self.press(p);
                }
                Some(PointerEvent::Move(p)) => self.pointer = Some(p),
                None => {}
            },
            Event::Resize(w, h) => {
                self.viewport = Viewport::new(*w, *h);
                return Flow::Resized;
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Left press at a terminal position. Returns `true` when state changed.
    pub fn press(&mut self, p: Point) -> bool {
        let layout = *self.view.layout();
        let origin = layout.origin(self.viewport.width, self.viewport.height);
        let Some(local) = layout.to_canvas(origin, p) else {
            return false;
        };
        match action_for_press(&layout, local, self.state.outcome()) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    fn apply(&mut self, action: GameAction) -> bool {
        let changed = self.state.apply_action(action);
        if !changed {
            debug!("ignored {:?} ({})", action, self.state.outcome().as_str());
        }
        changed
    }

    /// Advance the round by `dt_ms` of wall-clock time.
    pub fn tick(&mut self, dt_ms: u32) {
        self.state.tick(dt_ms);
    }

    pub fn render_into(&self, fb: &mut FrameBuffer) {
        let snap = self.state.snapshot();
        self.view.render_into(&snap, self.pointer, self.viewport, fb);
    }

    pub fn render(&self) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.viewport.width, self.viewport.height);
        self.render_into(&mut fb);
        fb
    }
}
