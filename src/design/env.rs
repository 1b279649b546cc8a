//! Host environment capability: viewport size and user media preferences.
//!
//! Everything that used to poke at the browser window goes through the
//! [`Environment`] trait instead, so utilities and recipes can be driven by a
//! [`StaticEnvironment`] in tests and in the CLI simulation.

use std::sync::RwLock;

use super::tokens::breakpoints;

/// Read-only queries against the host environment.
pub trait Environment: Send + Sync {
    /// Viewport width in CSS pixels
    fn viewport_width(&self) -> u32;
    /// Viewport height in CSS pixels
    fn viewport_height(&self) -> u32;
    /// `(prefers-reduced-motion: reduce)`
    fn prefers_reduced_motion(&self) -> bool;
    /// `(prefers-color-scheme: dark)`
    fn prefers_dark(&self) -> bool {
        false
    }
}

/// Named viewport-width thresholds, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Breakpoint {
    /// Below `sm`
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// Thresholded breakpoints, smallest first (`Xs` has no threshold)
    pub const ASCENDING: [Breakpoint; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Minimum width in px; 0 for `Xs`
    pub fn min_width(self) -> u32 {
        match self {
            Self::Xs => 0,
            Self::Sm => breakpoints::SM,
            Self::Md => breakpoints::MD,
            Self::Lg => breakpoints::LG,
            Self::Xl => breakpoints::XL,
            Self::Xxl => breakpoints::XXL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl]
            .into_iter()
            .find(|bp| bp.as_str() == name)
    }

    /// Largest breakpoint whose threshold `width` reaches
    pub fn for_width(width: u32) -> Self {
        Self::ASCENDING
            .iter()
            .rev()
            .copied()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Self::Xs)
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current breakpoint of the environment's viewport
pub fn current_breakpoint(env: &dyn Environment) -> Breakpoint {
    Breakpoint::for_width(env.viewport_width())
}

/// True if the viewport is at or above `breakpoint`
pub fn matches_breakpoint(env: &dyn Environment, breakpoint: Breakpoint) -> bool {
    env.viewport_width() >= breakpoint.min_width()
}

/// True if the user asked for reduced motion
pub fn prefers_reduced_motion(env: &dyn Environment) -> bool {
    env.prefers_reduced_motion()
}

#[derive(Debug, Clone, Copy)]
struct EnvState {
    width: u32,
    height: u32,
    reduced_motion: bool,
    dark: bool,
}

/// Settable environment for tests, the CLI simulation and server-side rendering.
///
/// Interior mutability so a shared `Arc<StaticEnvironment>` can be resized or
/// have its preferences flipped while recipes hold on to it.
#[derive(Debug)]
pub struct StaticEnvironment {
    state: RwLock<EnvState>,
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::new(1440, 900)
    }
}

impl StaticEnvironment {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: RwLock::new(EnvState {
                width,
                height,
                reduced_motion: false,
                dark: false,
            }),
        }
    }

    /// Builder-style reduced motion toggle
    pub fn with_reduced_motion(self, reduced: bool) -> Self {
        self.set_reduced_motion(reduced);
        self
    }

    pub fn resize(&self, width: u32, height: u32) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.width = width;
        state.height = height;
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.state.write().unwrap_or_else(|e| e.into_inner()).reduced_motion = reduced;
    }

    pub fn set_dark(&self, dark: bool) {
        self.state.write().unwrap_or_else(|e| e.into_inner()).dark = dark;
    }

    fn snapshot(&self) -> EnvState {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl Environment for StaticEnvironment {
    fn viewport_width(&self) -> u32 {
        self.snapshot().width
    }

    fn viewport_height(&self) -> u32 {
        self.snapshot().height
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.snapshot().reduced_motion
    }

    fn prefers_dark(&self) -> bool {
        self.snapshot().dark
    }
}
