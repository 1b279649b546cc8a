//! Scroll positions in the `"<element edge> <viewport edge>"` form.
//!
//! `"top 80%"` means: when the element's top reaches 80% of the viewport height
//! from the top. Each side accepts `top`, `center`, `bottom`, a percentage, or
//! a pixel offset (`120px`).

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};

/// Offset along an element or along the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Percent of the extent (top = 0, center = 50, bottom = 100)
    Percent(f32),
    Px(f32),
}

impl Anchor {
    pub const TOP: Self = Self::Percent(0.0);
    pub const CENTER: Self = Self::Percent(50.0);
    pub const BOTTOM: Self = Self::Percent(100.0);

    /// Offset in px from the start of an extent of `size` px
    pub fn resolve(&self, size: f32) -> f32 {
        match *self {
            Self::Percent(p) => size * p / 100.0,
            Self::Px(px) => px,
        }
    }

    fn parse(token: &str) -> Result<Self> {
        match token {
            "top" => return Ok(Self::TOP),
            "center" => return Ok(Self::CENTER),
            "bottom" => return Ok(Self::BOTTOM),
            _ => {}
        }
        if let Some(p) = token.strip_suffix('%') {
            let p: f32 = p.parse().with_context(|| format!("Bad percentage '{}'", token))?;
            return Ok(Self::Percent(p));
        }
        if let Some(px) = token.strip_suffix("px") {
            let px: f32 = px.parse().with_context(|| format!("Bad pixel offset '{}'", token))?;
            return Ok(Self::Px(px));
        }
        token
            .parse::<f32>()
            .map(Self::Px)
            .map_err(|_| anyhow!("Unknown anchor '{}'", token))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Percent(p) if p == 0.0 => write!(f, "top"),
            Self::Percent(p) if p == 50.0 => write!(f, "center"),
            Self::Percent(p) if p == 100.0 => write!(f, "bottom"),
            Self::Percent(p) => write!(f, "{}%", p),
            Self::Px(px) => write!(f, "{}px", px),
        }
    }
}

/// A point on the element meeting a point on the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl ScrollPosition {
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which this position is reached for an element
    /// at document offset `top` with `height`, in a viewport `viewport_height` tall.
    pub fn scroll_offset(&self, top: f32, height: f32, viewport_height: f32) -> f32 {
        top + self.element.resolve(height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for ScrollPosition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [element, viewport] = tokens[..] else {
            bail!("Scroll position needs '<element> <viewport>', got '{}'", s);
        };
        Ok(Self {
            element: Anchor::parse(element).with_context(|| format!("In scroll position '{}'", s))?,
            viewport: Anchor::parse(viewport).with_context(|| format!("In scroll position '{}'", s))?,
        })
    }
}

impl fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

/// Start/end pair for observers and scrubs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: ScrollPosition,
    pub end: ScrollPosition,
}

impl ScrollRange {
    /// `top bottom` .. `bottom top`: the whole time the element is on screen
    pub const ON_SCREEN: Self = Self {
        start: ScrollPosition::new(Anchor::TOP, Anchor::BOTTOM),
        end: ScrollPosition::new(Anchor::BOTTOM, Anchor::TOP),
    };

    pub fn new(start: &str, end: &str) -> Result<Self> {
        Ok(Self { start: start.parse()?, end: end.parse()? })
    }

    /// Custom start with the default end
    pub fn from_start(start: ScrollPosition) -> Self {
        Self { start, ..Self::ON_SCREEN }
    }

    /// Scroll offsets `(start, end)` for one element
    pub fn offsets(&self, top: f32, height: f32, viewport_height: f32) -> (f32, f32) {
        (
            self.start.scroll_offset(top, height, viewport_height),
            self.end.scroll_offset(top, height, viewport_height),
        )
    }

    /// Linear progress of `scroll_y` through the range, clamped to `0..=1`
    pub fn progress(&self, scroll_y: f32, top: f32, height: f32, viewport_height: f32) -> f32 {
        let (start, end) = self.offsets(top, height, viewport_height);
        if end <= start {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self::ON_SCREEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positions() {
        let p: ScrollPosition = "top 80%".parse().unwrap();
        assert_eq!(p, ScrollPosition::new(Anchor::TOP, Anchor::Percent(80.0)));
        let p: ScrollPosition = "center 120px".parse().unwrap();
        assert_eq!(p, ScrollPosition::new(Anchor::CENTER, Anchor::Px(120.0)));
        let p: ScrollPosition = "bottom top".parse().unwrap();
        assert_eq!(p.to_string(), "bottom top");

        assert!("top".parse::<ScrollPosition>().is_err());
        assert!("top sideways".parse::<ScrollPosition>().is_err());
        assert!("top 8x%".parse::<ScrollPosition>().is_err());
    }

    #[test]
    fn test_scroll_offset() {
        // element at 2000px, viewport 1000px: top hits 80% at scroll 1200
        let p: ScrollPosition = "top 80%".parse().unwrap();
        assert_eq!(p.scroll_offset(2000.0, 400.0, 1000.0), 1200.0);
    }

    #[test]
    fn test_range_progress() {
        let range = ScrollRange::default();
        // on screen from 1000 (top meets bottom) to 2400 (bottom meets top)
        assert_eq!(range.offsets(2000.0, 400.0, 1000.0), (1000.0, 2400.0));
        assert_eq!(range.progress(500.0, 2000.0, 400.0, 1000.0), 0.0);
        assert_eq!(range.progress(1700.0, 2000.0, 400.0, 1000.0), 0.5);
        assert_eq!(range.progress(9000.0, 2000.0, 400.0, 1000.0), 1.0);
    }

    #[test]
    fn test_range_new() {
        let r = ScrollRange::new("top bottom", "bottom top").unwrap();
        assert_eq!(r, ScrollRange::ON_SCREEN);
        assert!(ScrollRange::new("top bottom", "nowhere").is_err());
    }
}
