//! Scroll trigger geometry.
//!
//! A trigger position such as `"top 85%"` pairs a point on the trigger
//! element (its top edge) with a line across the viewport (85% of the way
//! down). The position is reached once scrolling brings the element point up
//! to, or above, that line. A [`ScrollTrigger`] tracks which side of its start
//! and end positions the page is on and reports the crossings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriggerParseError {
    #[error("trigger position is empty")]
    Empty,
    #[error("unknown trigger edge `{0}`")]
    UnknownEdge(String),
    #[error("invalid viewport offset `{0}`")]
    InvalidOffset(String),
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }
}

impl FromStr for Edge {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "center" => Ok(Edge::Center),
            "bottom" => Ok(Edge::Bottom),
            other => Err(TriggerParseError::UnknownEdge(other.to_string())),
        }
    }
}

/// Distance from the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Percent(f64),
    Pixels(f64),
}

impl FromStr for Offset {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TriggerParseError::InvalidOffset(s.to_string());
        match s {
            "top" => Ok(Offset::Percent(0.0)),
            "center" => Ok(Offset::Percent(50.0)),
            "bottom" => Ok(Offset::Percent(100.0)),
            _ => {
                if let Some(pct) = s.strip_suffix('%') {
                    pct.parse().map(Offset::Percent).map_err(|_| invalid())
                } else if let Some(px) = s.strip_suffix("px") {
                    px.parse().map(Offset::Pixels).map_err(|_| invalid())
                } else {
                    Err(invalid())
                }
            }
        }
    }
}

/// Vertical extent of an element in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPosition {
    pub edge: Edge,
    pub viewport: Offset,
}

impl TriggerPosition {
    pub const fn new(edge: Edge, viewport: Offset) -> Self {
        Self { edge, viewport }
    }

    fn viewport_line(&self, viewport_height: f64) -> f64 {
        match self.viewport {
            Offset::Percent(p) => viewport_height * p / 100.0,
            Offset::Pixels(px) => px,
        }
    }

    /// How far the element point still is below the viewport line, in px.
    /// Zero or negative once the position has been reached.
    pub fn distance(&self, bounds: Bounds, viewport_height: f64) -> f64 {
        let point = bounds.top + bounds.height * self.edge.fraction();
        point - self.viewport_line(viewport_height)
    }

    pub fn reached(&self, bounds: Bounds, viewport_height: f64) -> bool {
        self.distance(bounds, viewport_height) <= 0.0
    }
}

impl FromStr for TriggerPosition {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let edge = parts.next().ok_or(TriggerParseError::Empty)?.parse()?;
        let viewport = match parts.next() {
            Some(offset) => offset.parse()?,
            None => Offset::Percent(0.0),
        };
        let rest: Vec<&str> = parts.collect();
        if !rest.is_empty() {
            return Err(TriggerParseError::Trailing(rest.join(" ")));
        }
        Ok(Self { edge, viewport })
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        };
        match self.viewport {
            Offset::Percent(p) => write!(f, "{} {}%", edge, p),
            Offset::Pixels(px) => write!(f, "{} {}px", edge, px),
        }
    }
}

/// Default end of every trigger: the element has scrolled out through the
/// top of the viewport.
pub const BOTTOM_TOP: TriggerPosition = TriggerPosition::new(Edge::Bottom, Offset::Percent(0.0));
pub const TOP_TOP: TriggerPosition = TriggerPosition::new(Edge::Top, Offset::Percent(0.0));

/// "top N%": the element's top edge reaches N% down the viewport.
pub const fn top(percent: f64) -> TriggerPosition {
    TriggerPosition::new(Edge::Top, Offset::Percent(percent))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Start crossed scrolling down.
    Enter,
    /// End crossed scrolling down.
    Leave,
    /// End crossed scrolling up.
    EnterBack,
    /// Start crossed scrolling up.
    LeaveBack,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    start: TriggerPosition,
    end: TriggerPosition,
    zone: Zone,
}

impl ScrollTrigger {
    pub fn new(start: TriggerPosition, end: TriggerPosition) -> Self {
        Self { start, end, zone: Zone::Before }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    fn zone_at(&self, bounds: Bounds, viewport_height: f64) -> Zone {
        if self.end.reached(bounds, viewport_height) {
            Zone::After
        } else if self.start.reached(bounds, viewport_height) {
            Zone::Active
        } else {
            Zone::Before
        }
    }

    /// Recompute the zone and return the crossings since the last update, in
    /// the order they happened. A jump over the whole range reports both.
    pub fn update(&mut self, bounds: Bounds, viewport_height: f64) -> Vec<TriggerEvent> {
        let next = self.zone_at(bounds, viewport_height);
        let events = match (self.zone, next) {
            (Zone::Before, Zone::Active) => vec![TriggerEvent::Enter],
            (Zone::Before, Zone::After) => vec![TriggerEvent::Enter, TriggerEvent::Leave],
            (Zone::Active, Zone::After) => vec![TriggerEvent::Leave],
            (Zone::Active, Zone::Before) => vec![TriggerEvent::LeaveBack],
            (Zone::After, Zone::Active) => vec![TriggerEvent::EnterBack],
            (Zone::After, Zone::Before) => vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack],
            _ => Vec::new(),
        };
        self.zone = next;
        events
    }

    /// Scroll progress between start (0.0) and end (1.0).
    pub fn progress(&self, bounds: Bounds, viewport_height: f64) -> f64 {
        let to_start = self.start.distance(bounds, viewport_height);
        let to_end = self.end.distance(bounds, viewport_height);
        let span = to_end - to_start;
        if span <= 0.0 {
            return if to_start <= 0.0 { 1.0 } else { 0.0 };
        }
        (-to_start / span).clamp(0.0, 1.0)
    }
}

/// What a reveal does on each crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Replay {
    /// Play on enter, reverse when scrolled back above the start.
    #[default]
    Reversible,
    /// Play the first time only.
    Once,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    PreReveal,
    Revealed,
}

/// Toggle state of a scroll reveal. Only a real change of phase yields a
/// direction, so repeated events never restart a running tween.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealToggle {
    replay: Replay,
    phase: RevealPhase,
}

impl RevealToggle {
    pub fn new(replay: Replay) -> Self {
        Self { replay, phase: RevealPhase::PreReveal }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn on_event(&mut self, event: TriggerEvent) -> Option<Direction> {
        match (event, self.phase, self.replay) {
            (TriggerEvent::Enter, RevealPhase::PreReveal, _) => {
                self.phase = RevealPhase::Revealed;
                Some(Direction::Forward)
            }
            (TriggerEvent::LeaveBack, RevealPhase::Revealed, Replay::Reversible) => {
                self.phase = RevealPhase::PreReveal;
                Some(Direction::Reverse)
            }
            _ => None,
        }
    }
}
