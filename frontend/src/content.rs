//! Copy for every section, compiled into the binary from `content/site.json`.

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SiteContent {
    pub hero: Hero,
    pub signals: CardRow,
    pub work: Work,
    pub video: Video,
    pub principles: Principles,
    pub revenue: CardRow,
    pub colophon: Colophon,
    pub lean_canvas: LeanCanvas,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Ok(serde_json::from_str(SITE_JSON)?)
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Plain,
    Accent,
    Alert,
}

impl Tone {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Tone::Plain => None,
            Tone::Accent => Some("text-accent"),
            Tone::Alert => Some("text-alert"),
        }
    }
}

/// A run of heading text, optionally colored.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub pitch: String,
    pub side_label: String,
    pub tag: String,
    pub links: Vec<HeroLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct HeroLink {
    pub label: String,
    pub href: String,
    pub title: String,
    #[serde(default)]
    pub external: bool,
}

/// A horizontally scrolling row of numbered cards.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CardRow {
    pub id: String,
    pub label: String,
    pub heading: Vec<Span>,
    pub cards: Vec<Card>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Work {
    pub label: String,
    pub heading: Vec<Span>,
    pub aside: String,
    pub steps: Vec<Step>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub title: String,
    pub medium: String,
    pub description: String,
    pub cols: u8,
    pub rows: u8,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Video {
    pub caption: String,
    #[serde(default)]
    pub embed_url: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Principles {
    pub label: String,
    pub heading: Vec<Span>,
    pub mvps: Vec<Mvp>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Mvp {
    pub number: String,
    pub title: Vec<Span>,
    pub description: String,
    pub align: Align,
}

impl Mvp {
    /// "01 / MVP" style annotation above the title.
    pub fn annotation(&self) -> String {
        let first_word = self
            .title
            .first()
            .and_then(|span| span.text.split_whitespace().next())
            .unwrap_or_default();
        format!("{} / {}", self.number, first_word)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Colophon {
    pub label: String,
    pub heading: String,
    pub columns: Vec<CreditColumn>,
    pub footer: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CreditColumn {
    pub title: String,
    pub names: Vec<String>,
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LeanCanvas {
    pub title: String,
    pub blocks: Vec<CanvasBlock>,
}

impl LeanCanvas {
    pub fn block(&self, id: &str) -> Option<&CanvasBlock> {
        self.blocks.iter().find(|block| block.id == id)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CanvasBlock {
    pub id: String,
    pub title: String,
    pub span: u8,
    pub groups: Vec<PointGroup>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PointGroup {
    #[serde(default)]
    pub title: Option<String>,
    pub points: Vec<String>,
}

/// Points that open a paragraph are shown as headings, not bullets.
pub fn is_lead_point(point: &str) -> bool {
    point.starts_with("Key Numbers:") || point.starts_with("Why this matters:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_content_parses() {
        let site = SiteContent::load().unwrap();
        assert_eq!(site.hero.title, "EduTrack");
        assert_eq!(site.signals.cards.len(), 4);
        assert_eq!(site.work.steps.len(), 8);
        assert_eq!(site.principles.mvps.len(), 5);
        assert_eq!(site.revenue.id, "revenue");
    }

    #[test]
    fn lean_canvas_has_nine_unique_blocks() {
        let site = SiteContent::load().unwrap();
        let blocks = &site.lean_canvas.blocks;
        assert_eq!(blocks.len(), 9);
        let ids: HashSet<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), blocks.len());
        assert!(blocks.iter().all(|b| b.groups.iter().any(|g| !g.points.is_empty())));
    }

    #[test]
    fn canvas_lookup_by_id() {
        let site = SiteContent::load().unwrap();
        assert_eq!(
            site.lean_canvas.block("uvp").map(|b| b.title.as_str()),
            Some("Unique Value Proposition")
        );
        assert!(site.lean_canvas.block("nope").is_none());
    }

    #[test]
    fn mvp_annotation_uses_first_word() {
        let site = SiteContent::load().unwrap();
        assert_eq!(site.principles.mvps[1].annotation(), "02 / MVP");
        assert_eq!(site.principles.mvps[1].align, Align::Right);
    }

    #[test]
    fn heading_tones_default_to_plain() {
        let span: Span = serde_json::from_str(r#"{"text": "REVENUE "}"#).unwrap();
        assert_eq!(span.tone, Tone::Plain);
        let span: Span = serde_json::from_str(r#"{"text": "MODEL", "tone": "accent"}"#).unwrap();
        assert_eq!(span.tone.class(), Some("text-accent"));
    }

    #[test]
    fn malformed_content_is_an_error() {
        let err = serde_json::from_str::<SiteContent>("{\"hero\": 1}").map_err(ContentError::from);
        assert!(err.unwrap_err().to_string().starts_with("site content is malformed"));
    }

    #[test]
    fn lead_points_are_detected() {
        assert!(is_lead_point("Key Numbers: 40% fewer no-shows"));
        assert!(!is_lead_point("Subscription fee from clinics"));
    }
}
