/// Easing curves the site animates with, named the way designers pass them
/// around ("power3.out").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    /// Quadratic ease-out; what a scrubbed tween gets unless told otherwise.
    Power1Out,
    #[default]
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// Closest CSS timing function, used when the browser runs the tween.
    pub fn css(self) -> &'static str {
        match self {
            Ease::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Ease::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
        }
    }
}

/// Visual state of an animated element: translation in px and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

impl Pose {
    pub const RESTING: Pose = Pose { x: 0.0, y: 0.0, opacity: 1.0 };

    /// Hidden and shifted sideways.
    pub fn from_x(x: f64) -> Self {
        Pose { x, y: 0.0, opacity: 0.0 }
    }

    /// Hidden and shifted vertically.
    pub fn from_y(y: f64) -> Self {
        Pose { x: 0.0, y, opacity: 0.0 }
    }

    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        let t = t.clamp(0.0, 1.0);
        Pose {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }

    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::RESTING
    }
}

/// CSS `transition` entry for one property.
pub fn property_transition(property: &str, duration: f64, ease: Ease, delay: f64) -> String {
    format!("{} {}s {} {}s", property, duration, ease.css(), delay)
}

/// CSS `transition` value for a tween of `duration` seconds starting after
/// `delay` seconds.
pub fn transition(duration: f64, ease: Ease, delay: f64) -> String {
    format!(
        "{}, {}",
        property_transition("transform", duration, ease, delay),
        property_transition("opacity", duration, ease, delay),
    )
}
