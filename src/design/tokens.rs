//! Design tokens - single source of truth for design values.
//!
//! Colors, typography, spacing, motion constants, z-index layers, breakpoints
//! and hero slide metadata. Everything here is `const`/`static` and safe to read
//! from anywhere without synchronization.
//!
//! Typed keys (`BrandColor`, `FontSize`, ...) carry an `ALL` table and an
//! `as_str()` name so the CLI can look tokens up by dotted path:
//!
//! ```ignore
//! assert_eq!(tokens::lookup("color.accent.blue").as_deref(), Some("#61dafb"));
//! ```

use const_format::concatcp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Colors
// ============================================================================

/// Brand palette keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrandColor {
    Brown,
    Dark,
    Charcoal,
    Gray,
    Orange,
}

impl BrandColor {
    pub const ALL: [BrandColor; 5] = [Self::Brown, Self::Dark, Self::Charcoal, Self::Gray, Self::Orange];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brown => "brown",
            Self::Dark => "dark",
            Self::Charcoal => "charcoal",
            Self::Gray => "gray",
            Self::Orange => "orange",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Brown => "#673437",
            Self::Dark => "#1d1d1e",
            Self::Charcoal => "#231f20",
            Self::Gray => "#304659",
            Self::Orange => "#f58120",
        }
    }
}

/// Slide background keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideColor {
    Pink,
    Blue,
    Beige,
    Orange,
}

impl SlideColor {
    pub const ALL: [SlideColor; 4] = [Self::Pink, Self::Blue, Self::Beige, Self::Orange];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Beige => "beige",
            Self::Orange => "orange",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Pink => "#f7ebec",
            Self::Blue => "#e0f4f5",
            Self::Beige => "#f5f0e6",
            Self::Orange => "#f7e8d7",
        }
    }

    /// Tailwind background class (`bg-slide-pink`)
    pub fn class(self) -> String {
        format!("bg-slide-{}", self.as_str())
    }
}

/// Accent keys (pagination dots, highlights)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccentColor {
    Pink,
    Blue,
    Purple,
    Yellow,
    Orange,
}

impl AccentColor {
    pub const ALL: [AccentColor; 5] = [Self::Pink, Self::Blue, Self::Purple, Self::Yellow, Self::Orange];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Pink => "#ffc4c8",
            Self::Blue => "#61dafb",
            Self::Purple => "#413fd9",
            Self::Yellow => "#eeb700",
            Self::Orange => "#feb25e",
        }
    }

    /// Tailwind background class (`bg-accent-blue`)
    pub fn class(self) -> String {
        format!("bg-accent-{}", self.as_str())
    }
}

/// Semantic text color roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextRole {
    Primary,
    Secondary,
    Heading,
    Muted,
    Inverse,
}

impl TextRole {
    pub const ALL: [TextRole; 5] = [Self::Primary, Self::Secondary, Self::Heading, Self::Muted, Self::Inverse];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Heading => "heading",
            Self::Muted => "muted",
            Self::Inverse => "inverse",
        }
    }
}

/// Neutral scale
pub mod neutral {
    pub const WHITE: &str = "#ffffff";
    pub const BLACK: &str = "#000000";

    /// Gray ramp as (step, hex), lightest first
    pub const GRAY: [(u16, &str); 9] = [
        (100, "#f5f5f5"),
        (200, "#e5e5e5"),
        (300, "#d4d4d4"),
        (400, "#a3a3a3"),
        (500, "#737373"),
        (600, "#525252"),
        (700, "#404040"),
        (800, "#262626"),
        (900, "#171717"),
    ];

    pub fn gray(step: u16) -> Option<&'static str> {
        GRAY.iter().find(|(s, _)| *s == step).map(|(_, hex)| *hex)
    }
}

/// CSS custom property references for colors
pub mod css_var {
    use super::{AccentColor, BrandColor, SlideColor, TextRole};

    pub fn brand(color: BrandColor) -> String {
        format!("var(--color-brand-{})", color.as_str())
    }

    pub fn slide(color: SlideColor) -> String {
        format!("var(--color-slide-{})", color.as_str())
    }

    pub fn accent(color: AccentColor) -> String {
        format!("var(--color-accent-{})", color.as_str())
    }

    pub fn text(role: TextRole) -> String {
        format!("var(--color-text-{})", role.as_str())
    }
}

/// 8-bit RGB parsed from a `#rrggbb` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or `#rgb`. Returns None on malformed input.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Some(Self { r: expand(0)?, g: expand(1)?, b: expand(2)? })
            }
            _ => None,
        }
    }

    /// Relative luminance (WCAG 2.x), 0.0..=1.0
    pub fn luminance(&self) -> f32 {
        fn lin(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
        }
        0.2126 * lin(self.r) + 0.7152 * lin(self.g) + 0.0722 * lin(self.b)
    }

    /// WCAG contrast ratio between two colors (1.0..=21.0)
    pub fn contrast(&self, other: &Rgb) -> f32 {
        let (a, b) = (self.luminance(), other.luminance());
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }
}

// ============================================================================
// Typography
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontFamily {
    Sans,
    Display,
    Mono,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [Self::Sans, Self::Display, Self::Mono];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Display => "display",
            Self::Mono => "mono",
        }
    }

    pub fn stack(self) -> &'static str {
        match self {
            Self::Sans => "'GT Planar', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
            Self::Display => "'Stacion', Georgia, 'Times New Roman', serif",
            Self::Mono => "'SF Mono', 'Fira Code', 'Fira Mono', Consolas, monospace",
        }
    }
}

/// Type scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
    Xl6,
    Xl7,
    Xl8,
    Hero,
    HeroFluid,
}

impl FontSize {
    pub const ALL: [FontSize; 14] = [
        Self::Xs, Self::Sm, Self::Base, Self::Lg, Self::Xl, Self::Xl2, Self::Xl3,
        Self::Xl4, Self::Xl5, Self::Xl6, Self::Xl7, Self::Xl8, Self::Hero, Self::HeroFluid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
            Self::Xl3 => "3xl",
            Self::Xl4 => "4xl",
            Self::Xl5 => "5xl",
            Self::Xl6 => "6xl",
            Self::Xl7 => "7xl",
            Self::Xl8 => "8xl",
            Self::Hero => "hero",
            Self::HeroFluid => "hero-fluid",
        }
    }

    /// CSS value (rem, or a clamp() expression for the fluid hero size)
    pub fn css(self) -> &'static str {
        match self {
            Self::Xs => "0.75rem",
            Self::Sm => "0.8125rem",
            Self::Base => "1rem",
            Self::Lg => "1.0625rem",
            Self::Xl => "1.25rem",
            Self::Xl2 => "1.5rem",
            Self::Xl3 => "2rem",
            Self::Xl4 => "2.5rem",
            Self::Xl5 => "3rem",
            Self::Xl6 => "4rem",
            Self::Xl7 => "5rem",
            Self::Xl8 => "6rem",
            Self::Hero => "8rem",
            Self::HeroFluid => "clamp(2.5rem, 8vw, 8rem)",
        }
    }

    /// Pixel size at a 16px root. None for the fluid size.
    pub fn px(self) -> Option<f32> {
        self.css()
            .strip_suffix("rem")
            .and_then(|rem| rem.parse::<f32>().ok())
            .map(|rem| rem * ROOT_FONT_PX)
    }
}

/// Root font size the rem values are authored against
pub const ROOT_FONT_PX: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontWeight {
    Light,
    Normal,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 5] = [Self::Light, Self::Normal, Self::Medium, Self::Semibold, Self::Bold];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
        }
    }

    pub fn value(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }
}

pub mod line_height {
    pub const NONE: f32 = 1.0;
    pub const TIGHT: f32 = 1.1;
    pub const SNUG: f32 = 1.2;
    pub const NORMAL: f32 = 1.4;
    pub const RELAXED: f32 = 1.5;
    pub const LOOSE: f32 = 1.625;

    pub const ALL: [(&str, f32); 6] = [
        ("none", NONE),
        ("tight", TIGHT),
        ("snug", SNUG),
        ("normal", NORMAL),
        ("relaxed", RELAXED),
        ("loose", LOOSE),
    ];
}

pub mod letter_spacing {
    pub const TIGHTER: &str = "-0.05em";
    pub const TIGHT: &str = "-0.025em";
    pub const NORMAL: &str = "0";
    pub const WIDE: &str = "0.025em";
    pub const WIDER: &str = "0.05em";
    pub const WIDEST: &str = "0.1em";
    /// For uppercase text
    pub const CAPS: &str = "0.08em";

    pub const ALL: [(&str, &str); 7] = [
        ("tighter", TIGHTER),
        ("tight", TIGHT),
        ("normal", NORMAL),
        ("wide", WIDE),
        ("wider", WIDER),
        ("widest", WIDEST),
        ("caps", CAPS),
    ];
}

// ============================================================================
// Spacing & layout
// ============================================================================

/// Spacing scale on an 8px grid: (key, rem)
pub const SPACING: [(u8, &str); 14] = [
    (0, "0"),
    (1, "0.25rem"),
    (2, "0.5rem"),
    (3, "0.75rem"),
    (4, "1rem"),
    (5, "1.25rem"),
    (6, "1.5rem"),
    (8, "2rem"),
    (10, "2.5rem"),
    (12, "3rem"),
    (16, "4rem"),
    (20, "5rem"),
    (24, "6rem"),
    (32, "8rem"),
];

pub fn spacing(key: u8) -> Option<&'static str> {
    SPACING.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub mod layout {
    pub const MAX_WIDTH_CONTENT: &str = "1440px";
    pub const MAX_WIDTH_TEXT: &str = "666px";
    pub const MAX_WIDTH_TEXT_WIDE: &str = "845px";
    pub const HEADER_HEIGHT: &str = "85px";
    pub const HEADER_HEIGHT_MOBILE: &str = "70px";
}

// ============================================================================
// Borders & shadows
// ============================================================================

pub const BORDER_RADIUS: [(&str, &str); 8] = [
    ("none", "0"),
    ("sm", "0.25rem"),
    ("md", "0.5rem"),
    ("lg", "1rem"),
    ("xl", "1.5rem"),
    ("2xl", "2rem"),
    ("full", "9999px"),
    ("button", "2.25rem"),
];

pub const BOX_SHADOW: [(&str, &str); 5] = [
    ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
    ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1)"),
    ("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.1)"),
    ("xl", "0 20px 25px -5px rgba(0, 0, 0, 0.1)"),
    ("button", "0 4px 4px 0 rgba(0, 0, 0, 0.25)"),
];

// ============================================================================
// Motion
// ============================================================================

/// CSS transition durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DurationToken {
    Fast,
    Normal,
    Slow,
    Slower,
}

impl DurationToken {
    pub const ALL: [DurationToken; 4] = [Self::Fast, Self::Normal, Self::Slow, Self::Slower];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Normal => "normal",
            Self::Slow => "slow",
            Self::Slower => "slower",
        }
    }

    pub fn millis(self) -> u64 {
        match self {
            Self::Fast => 150,
            Self::Normal => 300,
            Self::Slow => 500,
            Self::Slower => 700,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::from_millis(self.millis())
    }
}

/// CSS easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EasingToken {
    Default,
    In,
    Out,
    InOut,
    Bounce,
}

impl EasingToken {
    pub const ALL: [EasingToken; 5] = [Self::Default, Self::In, Self::Out, Self::InOut, Self::Bounce];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "in-out",
            Self::Bounce => "bounce",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "cubic-bezier(0.4, 0, 0.2, 1)",
            Self::In => "cubic-bezier(0.4, 0, 1, 1)",
            Self::Out => "cubic-bezier(0, 0, 0.2, 1)",
            Self::InOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            Self::Bounce => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Tween ease names understood by `motion::Ease::parse`
pub mod ease {
    pub const ENTRANCE: &str = "power3.out";
    pub const EXIT: &str = "power2.in";
    pub const TRANSITION: &str = "power2.inOut";
    pub const BOUNCE: &str = "back.out(1.7)";
    pub const ELASTIC: &str = "elastic.out(1, 0.3)";
    pub const SMOOTH: &str = "sine.inOut";

    pub const ALL: [(&str, &str); 6] = [
        ("entrance", ENTRANCE),
        ("exit", EXIT),
        ("transition", TRANSITION),
        ("bounce", BOUNCE),
        ("elastic", ELASTIC),
        ("smooth", SMOOTH),
    ];
}

/// Tween durations in seconds (recipe defaults)
pub mod tween_duration {
    pub const FAST: f32 = 0.3;
    pub const NORMAL: f32 = 0.6;
    pub const SLOW: f32 = 0.8;
    pub const SLOWER: f32 = 1.0;
}

// ============================================================================
// Z-index
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ZLayer {
    Base,
    Dropdown,
    Sticky,
    Fixed,
    ModalBackdrop,
    Modal,
    Popover,
    Tooltip,
}

impl ZLayer {
    pub const ALL: [ZLayer; 8] = [
        Self::Base, Self::Dropdown, Self::Sticky, Self::Fixed,
        Self::ModalBackdrop, Self::Modal, Self::Popover, Self::Tooltip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Dropdown => "dropdown",
            Self::Sticky => "sticky",
            Self::Fixed => "fixed",
            Self::ModalBackdrop => "modal-backdrop",
            Self::Modal => "modal",
            Self::Popover => "popover",
            Self::Tooltip => "tooltip",
        }
    }

    pub fn value(self) -> i32 {
        match self {
            Self::Base => 0,
            Self::Dropdown => 10,
            Self::Sticky => 20,
            Self::Fixed => 30,
            Self::ModalBackdrop => 40,
            Self::Modal => 50,
            Self::Popover => 60,
            Self::Tooltip => 70,
        }
    }
}

// ============================================================================
// Breakpoints & media queries
// ============================================================================

pub mod breakpoints {
    pub const SM: u32 = 640;
    pub const MD: u32 = 768;
    pub const LG: u32 = 1024;
    pub const XL: u32 = 1280;
    pub const XXL: u32 = 1536;
}

pub mod media_query {
    use super::{breakpoints, concatcp};

    pub const SM: &str = concatcp!("(min-width: ", breakpoints::SM, "px)");
    pub const MD: &str = concatcp!("(min-width: ", breakpoints::MD, "px)");
    pub const LG: &str = concatcp!("(min-width: ", breakpoints::LG, "px)");
    pub const XL: &str = concatcp!("(min-width: ", breakpoints::XL, "px)");
    pub const XXL: &str = concatcp!("(min-width: ", breakpoints::XXL, "px)");
    pub const REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";
    pub const DARK: &str = "(prefers-color-scheme: dark)";
}

// ============================================================================
// Hero slides
// ============================================================================

/// Default autoplay interval for the hero slider
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(6000);

/// Static per-slide styling metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideMeta {
    pub id: &'static str,
    pub index: usize,
    pub label: &'static str,
    pub bg: SlideColor,
    pub accent: AccentColor,
}

impl SlideMeta {
    pub fn bg_class(&self) -> String {
        self.bg.class()
    }

    pub fn accent_class(&self) -> String {
        self.accent.class()
    }

    pub fn accent_hex(&self) -> &'static str {
        self.accent.hex()
    }
}

/// Slides in display order
pub const SLIDES: [SlideMeta; 4] = [
    SlideMeta { id: "intro", index: 0, label: "Introduction", bg: SlideColor::Pink, accent: AccentColor::Pink },
    SlideMeta { id: "role", index: 1, label: "Role", bg: SlideColor::Blue, accent: AccentColor::Blue },
    SlideMeta { id: "mentor", index: 2, label: "Mentor", bg: SlideColor::Beige, accent: AccentColor::Purple },
    SlideMeta { id: "skills", index: 3, label: "Skills", bg: SlideColor::Orange, accent: AccentColor::Orange },
];

pub const TOTAL_SLIDES: usize = SLIDES.len();

// ============================================================================
// Lookup by dotted path
// ============================================================================

/// Resolve a dotted token path to its CSS-facing value.
///
/// Paths: `color.{brand,slide,accent}.<name>`, `color.neutral.<white|black|gray-N>`,
/// `color.var.<group>.<name>`, `font.{family,size,weight}.<name>`,
/// `line-height.<name>`, `letter-spacing.<name>`, `spacing.<n>`, `radius.<name>`,
/// `shadow.<name>`, `duration.<name>`, `easing.<name>`, `ease.<name>`,
/// `z.<layer>`, `breakpoint.<name>`, `media.<name>`.
pub fn lookup(path: &str) -> Option<String> {
    let parts: Vec<&str> = path.split('.').collect();
    match parts.as_slice() {
        ["color", "brand", name] => find(&BrandColor::ALL, |c| c.as_str(), name).map(|c| c.hex().to_string()),
        ["color", "slide", name] => find(&SlideColor::ALL, |c| c.as_str(), name).map(|c| c.hex().to_string()),
        ["color", "accent", name] => find(&AccentColor::ALL, |c| c.as_str(), name).map(|c| c.hex().to_string()),
        ["color", "neutral", "white"] => Some(neutral::WHITE.to_string()),
        ["color", "neutral", "black"] => Some(neutral::BLACK.to_string()),
        ["color", "neutral", gray] => gray
            .strip_prefix("gray-")
            .and_then(|step| step.parse().ok())
            .and_then(neutral::gray)
            .map(str::to_string),
        ["color", "var", "brand", name] => find(&BrandColor::ALL, |c| c.as_str(), name).map(css_var::brand),
        ["color", "var", "slide", name] => find(&SlideColor::ALL, |c| c.as_str(), name).map(css_var::slide),
        ["color", "var", "accent", name] => find(&AccentColor::ALL, |c| c.as_str(), name).map(css_var::accent),
        ["color", "var", "text", name] => find(&TextRole::ALL, |c| c.as_str(), name).map(css_var::text),
        ["font", "family", name] => find(&FontFamily::ALL, |f| f.as_str(), name).map(|f| f.stack().to_string()),
        ["font", "size", name] => find(&FontSize::ALL, |f| f.as_str(), name).map(|f| f.css().to_string()),
        ["font", "weight", name] => find(&FontWeight::ALL, |f| f.as_str(), name).map(|f| f.value().to_string()),
        ["line-height", name] => pair(&line_height::ALL, name).map(|v| v.to_string()),
        ["letter-spacing", name] => pair(&letter_spacing::ALL, name).map(str::to_string),
        ["spacing", key] => key.parse().ok().and_then(spacing).map(str::to_string),
        ["radius", name] => pair(&BORDER_RADIUS, name).map(str::to_string),
        ["shadow", name] => pair(&BOX_SHADOW, name).map(str::to_string),
        ["duration", name] => find(&DurationToken::ALL, |d| d.as_str(), name).map(|d| format!("{}ms", d.millis())),
        ["easing", name] => find(&EasingToken::ALL, |e| e.as_str(), name).map(|e| e.css().to_string()),
        ["ease", name] => pair(&ease::ALL, name).map(str::to_string),
        ["z", name] => find(&ZLayer::ALL, |z| z.as_str(), name).map(|z| z.value().to_string()),
        ["breakpoint", name] => match *name {
            "sm" => Some(breakpoints::SM),
            "md" => Some(breakpoints::MD),
            "lg" => Some(breakpoints::LG),
            "xl" => Some(breakpoints::XL),
            "2xl" => Some(breakpoints::XXL),
            _ => None,
        }
        .map(|px| format!("{}px", px)),
        ["media", name] => match *name {
            "sm" => Some(media_query::SM),
            "md" => Some(media_query::MD),
            "lg" => Some(media_query::LG),
            "xl" => Some(media_query::XL),
            "2xl" => Some(media_query::XXL),
            "reduced-motion" => Some(media_query::REDUCED_MOTION),
            "dark" => Some(media_query::DARK),
            _ => None,
        }
        .map(str::to_string),
        _ => None,
    }
}

fn find<T: Copy>(all: &[T], name_of: impl Fn(T) -> &'static str, name: &str) -> Option<T> {
    all.iter().copied().find(|item| name_of(*item) == name)
}

fn pair<V: Copy>(table: &[(&str, V)], name: &str) -> Option<V> {
    table.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
}
