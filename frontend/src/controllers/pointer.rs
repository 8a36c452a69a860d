use crate::animation::ease::{self, Ease};
use crate::config;

/// A section's box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerState {
    /// Position relative to the section's top left corner.
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    /// Jump straight to the position instead of gliding there.
    pub snap: bool,
}

impl PointerState {
    /// Inline style for the follow dot.
    pub fn style(&self) -> String {
        let transition = if self.snap {
            "opacity 0.3s ease".to_string()
        } else {
            format!(
                "{}, opacity 0.3s ease",
                ease::property_transition(
                    "transform",
                    config::POINTER_SMOOTHING_SECS,
                    Ease::Power3Out,
                    0.0,
                )
            )
        };
        format!(
            "transform: translate3d({}px, {}px, 0) translate(-50%, -50%); opacity: {}; transition: {};",
            self.x,
            self.y,
            if self.visible { 1 } else { 0 },
            transition,
        )
    }
}

/// Tracks the pointer over one section. Each section owns its own tracker.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerFollow {
    state: PointerState,
}

impl PointerFollow {
    /// Pointer came in: place the dot under it before showing it.
    pub fn enter(&mut self, client_x: f64, client_y: f64, bounds: SectionBox) -> PointerState {
        self.state = PointerState {
            x: client_x - bounds.left,
            y: client_y - bounds.top,
            visible: true,
            snap: true,
        };
        self.state
    }

    pub fn pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        bounds: SectionBox,
    ) -> PointerState {
        if !bounds.contains(client_x, client_y) {
            return self.leave();
        }
        if !self.state.visible {
            return self.enter(client_x, client_y, bounds);
        }
        self.state.x = client_x - bounds.left;
        self.state.y = client_y - bounds.top;
        self.state.snap = false;
        self.state
    }

    /// Hide the dot; the last position is kept.
    pub fn leave(&mut self) -> PointerState {
        self.state.visible = false;
        self.state.snap = false;
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: SectionBox = SectionBox { left: 100.0, top: 50.0, width: 800.0, height: 600.0 };

    #[test]
    fn follows_pointer_relative_to_section() {
        let mut follow = PointerFollow::default();
        follow.enter(150.0, 100.0, SECTION);
        let state = follow.pointer_move(400.0, 350.0, SECTION);
        assert_eq!((state.x, state.y), (300.0, 300.0));
        assert!(state.visible);
        assert!(!state.snap);
    }

    #[test]
    fn leaving_hides_but_keeps_coordinates() {
        let mut follow = PointerFollow::default();
        follow.enter(150.0, 100.0, SECTION);
        follow.pointer_move(400.0, 350.0, SECTION);
        let state = follow.leave();
        assert!(!state.visible);
        assert_eq!((state.x, state.y), (300.0, 300.0));
    }

    #[test]
    fn moving_outside_the_box_hides() {
        let mut follow = PointerFollow::default();
        follow.enter(150.0, 100.0, SECTION);
        let state = follow.pointer_move(950.0, 100.0, SECTION);
        assert!(!state.visible);
        assert_eq!((state.x, state.y), (50.0, 50.0));
    }

    #[test]
    fn reentering_jumps_to_the_new_position() {
        let mut follow = PointerFollow::default();
        follow.enter(150.0, 100.0, SECTION);
        follow.leave();
        let state = follow.enter(800.0, 600.0, SECTION);
        assert_eq!((state.x, state.y), (700.0, 550.0));
        assert!(state.visible);
        assert!(state.snap);
        assert!(!state.style().contains("transform 0.5s"));
    }

    #[test]
    fn move_without_enter_acts_as_enter() {
        let mut follow = PointerFollow::default();
        let state = follow.pointer_move(200.0, 200.0, SECTION);
        assert!(state.visible);
        assert!(state.snap);
    }

    #[test]
    fn gliding_uses_eased_transition() {
        let mut follow = PointerFollow::default();
        follow.enter(150.0, 100.0, SECTION);
        let style = follow.pointer_move(160.0, 110.0, SECTION).style();
        assert!(style.contains("transform 0.5s cubic-bezier(0.215, 0.61, 0.355, 1) 0s"));
        assert!(style.contains("opacity: 1"));
    }
}
