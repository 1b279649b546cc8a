//! Hero banner slides.
//!
//! Slides are built once at first access and never change. Index and id
//! invariants are checked by [`validate_slides`] (the CLI `validate` command and
//! the tests below run it against the shipped data).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::design::env::Breakpoint;
use crate::design::tokens::{AccentColor, SlideColor};

/// Stable hero slide identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideId {
    Intro,
    Role,
    Mentor,
    Skills,
}

impl SlideId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Role => "role",
            Self::Mentor => "mentor",
            Self::Skills => "skills",
        }
    }
}

/// Fields every decoration carries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecorationBase {
    pub id: String,
    /// Position classes
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
    /// Degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    /// Hidden below this breakpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_below: Option<Breakpoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconName {
    Python,
    ReactLogo,
    GraduationCap,
    Cursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketSide {
    Open,
    Close,
}

/// Decorative element placed on a hero banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Decoration {
    /// 4-point star; `variant` staggers the twinkle
    Sparkle {
        #[serde(flatten)]
        base: DecorationBase,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<u8>,
    },
    Icon {
        #[serde(flatten)]
        base: DecorationBase,
        icon: IconName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon_size: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_width: Option<f32>,
    },
    Cross {
        #[serde(flatten)]
        base: DecorationBase,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        svg_size: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_width: Option<f32>,
    },
    Dot {
        #[serde(flatten)]
        base: DecorationBase,
    },
    TechLogo {
        #[serde(flatten)]
        base: DecorationBase,
        src: String,
        alt: String,
    },
    CodeBracket {
        #[serde(flatten)]
        base: DecorationBase,
        variant: BracketSide,
    },
}

impl Decoration {
    pub fn base(&self) -> &DecorationBase {
        match self {
            Self::Sparkle { base, .. }
            | Self::Icon { base, .. }
            | Self::Cross { base, .. }
            | Self::Dot { base }
            | Self::TechLogo { base, .. }
            | Self::CodeBracket { base, .. } => base,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sparkle { .. } => "sparkle",
            Self::Icon { .. } => "icon",
            Self::Cross { .. } => "cross",
            Self::Dot { .. } => "dot",
            Self::TechLogo { .. } => "tech-logo",
            Self::CodeBracket { .. } => "code-bracket",
        }
    }

    /// Whether the decoration renders at the given viewport breakpoint
    pub fn visible_at(&self, breakpoint: Breakpoint) -> bool {
        self.base().hide_below.is_none_or(|min| breakpoint >= min)
    }

    /// Selector used to animate this decoration
    pub fn selector(&self) -> String {
        format!("[data-decoration=\"{}\"]", self.base().id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Faint text echoing other slides behind the title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTextHint {
    pub side: Side,
    pub lines: Vec<String>,
}

/// Complete hero banner slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub id: SlideId,
    pub index: usize,
    pub label: String,
    pub bg: SlideColor,
    pub accent: AccentColor,
    pub title_lines: Vec<String>,
    pub subtitle: String,
    #[serde(default)]
    pub decorations: Vec<Decoration>,
    #[serde(default)]
    pub background_text: Vec<BackgroundTextHint>,
}

impl HeroSlide {
    pub fn bg_class(&self) -> String {
        self.bg.class()
    }

    pub fn accent_class(&self) -> String {
        self.accent.class()
    }

    /// Selector for the slide's title lines
    pub fn title_selector(&self) -> String {
        format!("[data-slide=\"{}\"] .slide-title", self.id.as_str())
    }

    /// Selector for the slide's subtitle
    pub fn subtitle_selector(&self) -> String {
        format!("[data-slide=\"{}\"] .slide-subtitle", self.id.as_str())
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn hint(side: Side, items: &[&str]) -> BackgroundTextHint {
    BackgroundTextHint { side, lines: lines(items) }
}

#[allow(clippy::too_many_arguments)]
fn slide(
    id: SlideId,
    index: usize,
    label: &str,
    bg: SlideColor,
    accent: AccentColor,
    title: &[&str],
    subtitle: &str,
    background_text: Vec<BackgroundTextHint>,
) -> HeroSlide {
    HeroSlide {
        id,
        index,
        label: label.to_string(),
        bg,
        accent,
        title_lines: lines(title),
        subtitle: subtitle.to_string(),
        decorations: Vec::new(),
        background_text,
    }
}

/// Shipped hero slides, in display order
pub static HERO_SLIDES: Lazy<Vec<HeroSlide>> = Lazy::new(|| {
    vec![
        slide(
            SlideId::Intro,
            0,
            "Introduction",
            SlideColor::Pink,
            AccentColor::Pink,
            &["Hi! I'm", "Tania Tello"],
            "Always passionate about crafting experiences that are engaging, accessible, and user-centric.",
            vec![
                hint(Side::Left, &["Oh boy, can", "I code"]),
                hint(Side::Right, &["Sr. Front End", "Engineer"]),
            ],
        ),
        slide(
            SlideId::Role,
            1,
            "Role",
            SlideColor::Blue,
            AccentColor::Blue,
            &["Sr. Front End", "Engineer"],
            "7+ years of experience, specializing in dynamic and user-friendly web applications, \
             e-commerce platforms, and recently mobile apps using React-Native",
            vec![
                hint(Side::Left, &["Technology", "Mentor"]),
                hint(Side::Right, &["Oh boy, can", "I code"]),
            ],
        ),
        slide(
            SlideId::Mentor,
            2,
            "Mentor",
            SlideColor::Beige,
            AccentColor::Purple,
            &["Technology", "Mentor"],
            "One of my motivations for technology is to encourage and mentor women to learn about \
             various technological disciplines, given the need for more women in the sector.",
            vec![
                hint(Side::Left, &["Oh boy, can", "I code"]),
                hint(Side::Right, &["Hi! I'm", "Tania Tello"]),
            ],
        ),
        slide(
            SlideId::Skills,
            3,
            "Skills",
            SlideColor::Orange,
            AccentColor::Orange,
            &["Oh boy,", "can I code"],
            "Expert in React-Native. Highly skilled at React.js, JavaScript, and Redux. Also experienced \
             in Next.js, styled-components, Typescript GraphQL, and Flex-Box. Characterized by sticking \
             to good practices with frameworks such as React-Testing Library, Jest and E2E testing with Cypress.",
            vec![
                hint(Side::Left, &["Technology", "Mentor"]),
                hint(Side::Right, &["Hi! I'm", "Tania Tello"]),
            ],
        ),
    ]
});

/// Check index contiguity and id uniqueness. Returns one message per problem.
pub fn validate_slides(slides: &[HeroSlide]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for (pos, slide) in slides.iter().enumerate() {
        if slide.index != pos {
            problems.push(format!(
                "slide '{}' has index {} but sits at position {}",
                slide.id.as_str(),
                slide.index,
                pos
            ));
        }
        if !seen.insert(slide.id) {
            problems.push(format!("duplicate slide id '{}'", slide.id.as_str()));
        }
        let mut decoration_ids = std::collections::HashSet::new();
        for decoration in &slide.decorations {
            if !decoration_ids.insert(decoration.base().id.as_str()) {
                problems.push(format!(
                    "slide '{}' repeats decoration id '{}'",
                    slide.id.as_str(),
                    decoration.base().id
                ));
            }
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::tokens::SLIDES;

    #[test]
    fn test_shipped_slides_valid() {
        assert_eq!(HERO_SLIDES.len(), 4);
        assert!(validate_slides(&HERO_SLIDES).is_empty());
    }

    #[test]
    fn test_slides_match_token_meta() {
        for (slide, meta) in HERO_SLIDES.iter().zip(SLIDES.iter()) {
            assert_eq!(slide.id.as_str(), meta.id);
            assert_eq!(slide.index, meta.index);
            assert_eq!(slide.label, meta.label);
            assert_eq!(slide.bg_class(), meta.bg_class());
            assert_eq!(slide.accent_class(), meta.accent_class());
        }
    }

    #[test]
    fn test_validate_detects_bad_index_and_duplicates() {
        let mut slides = HERO_SLIDES.clone();
        slides[1].index = 5;
        slides[2].id = SlideId::Intro;
        let problems = validate_slides(&slides);
        assert_eq!(problems.len(), 2, "{:?}", problems);
    }

    #[test]
    fn test_decoration_tagged_json() {
        let json = r#"[
            {"type": "sparkle", "id": "s1", "position": "top-4 left-8", "variant": 2},
            {"type": "icon", "id": "i1", "position": "top-0", "icon": "Python", "icon_size": 48},
            {"type": "cross", "id": "c1", "position": "bottom-2", "hide_below": "md"},
            {"type": "dot", "id": "d1", "position": "left-0"},
            {"type": "tech-logo", "id": "t1", "position": "right-0", "src": "/react.svg", "alt": "React"},
            {"type": "code-bracket", "id": "b1", "position": "right-4", "variant": "close"}
        ]"#;
        let decorations: Vec<Decoration> = serde_json::from_str(json).unwrap();
        let kinds: Vec<_> = decorations.iter().map(|d| d.kind()).collect();
        assert_eq!(kinds, ["sparkle", "icon", "cross", "dot", "tech-logo", "code-bracket"]);

        match &decorations[0] {
            Decoration::Sparkle { variant, .. } => assert_eq!(*variant, Some(2)),
            other => panic!("unexpected {:?}", other),
        }
        match &decorations[5] {
            Decoration::CodeBracket { variant, .. } => assert_eq!(*variant, BracketSide::Close),
            other => panic!("unexpected {:?}", other),
        }

        let cross = &decorations[2];
        assert!(!cross.visible_at(Breakpoint::Sm));
        assert!(cross.visible_at(Breakpoint::Md));
        assert!(decorations[3].visible_at(Breakpoint::Xs));
        assert_eq!(decorations[3].selector(), "[data-decoration=\"d1\"]");
    }
}
