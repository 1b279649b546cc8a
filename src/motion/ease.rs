//! Easing curves.
//!
//! Tween ease names use the `family.direction(params)` form the design tokens
//! store (`power3.out`, `back.out(1.7)`, `elastic.out(1, 0.3)`, `sine.inOut`,
//! `none`). CSS easing tokens (`cubic-bezier(0.4, 0, 0.2, 1)`) parse into
//! [`CubicBezier`].

use std::f32::consts::PI;

use anyhow::{Context, Result, anyhow, bail};
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseDir {
    In,
    Out,
    InOut,
}

/// An easing curve mapping progress `0..=1` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    /// `powerN`: polynomial of degree N+1
    Power(u8, EaseDir),
    Sine(EaseDir),
    Back { overshoot: f32, dir: EaseDir },
    Elastic { amplitude: f32, period: f32, dir: EaseDir },
    Bezier(CubicBezier),
}

impl Default for Ease {
    fn default() -> Self {
        Self::Power(1, EaseDir::Out)
    }
}

impl Ease {
    /// Parse an ease name. Errors on unknown families or bad parameters.
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        if name == "none" || name == "linear" {
            return Ok(Self::Linear);
        }
        if name.starts_with("cubic-bezier") {
            return CubicBezier::parse(name).map(Self::Bezier);
        }

        let (head, params) = match name.split_once('(') {
            Some((head, rest)) => {
                let inner = rest
                    .strip_suffix(')')
                    .filter(|inner| !inner.contains(['(', ')']))
                    .ok_or_else(|| anyhow!("Malformed parameters in ease '{}'", name))?;
                (head, parse_params(inner)?)
            }
            None if name.contains(')') => bail!("Unopened ')' in ease '{}'", name),
            None => (name, Vec::new()),
        };
        let (family, dir) = match head.split_once('.') {
            Some((family, dir)) => (family, parse_dir(dir)?),
            None => (head, EaseDir::Out),
        };

        let ease = match family {
            "power0" => Self::Linear,
            "power1" | "quad" => Self::Power(1, dir),
            "power2" | "cubic" => Self::Power(2, dir),
            "power3" | "quart" => Self::Power(3, dir),
            "power4" | "quint" | "strong" => Self::Power(4, dir),
            "sine" => Self::Sine(dir),
            "back" => Self::Back {
                overshoot: params.first().copied().unwrap_or(1.70158),
                dir,
            },
            "elastic" => Self::Elastic {
                amplitude: params.first().copied().unwrap_or(1.0),
                period: params.get(1).copied().unwrap_or(0.3),
                dir,
            },
            other => bail!("Unknown ease family '{}'", other),
        };
        Ok(ease)
    }

    /// Parse, falling back to linear (with a warning) on bad input.
    pub fn named(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|e| {
            warn!("{:#}; using linear", e);
            Self::Linear
        })
    }

    /// Eased progress. Input is clamped to `0..=1`; output may overshoot.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::Bezier(curve) => curve.solve(t),
            Self::Power(n, dir) => directed(dir, t, |x| x.powi(n as i32 + 1)),
            Self::Sine(dir) => directed(dir, t, |x| 1.0 - (x * PI / 2.0).cos()),
            Self::Back { overshoot, dir } => directed(dir, t, |x| {
                let c3 = overshoot + 1.0;
                c3 * x * x * x - overshoot * x * x
            }),
            Self::Elastic { amplitude, period, dir } => {
                let p1 = amplitude.max(1.0);
                let p2 = period / amplitude.min(1.0);
                let p3 = p2 / (2.0 * PI) * (1.0 / p1).asin();
                directed(dir, t, |x| {
                    if x <= 0.0 || x >= 1.0 {
                        return x;
                    }
                    // ease-in form of the elastic curve
                    let x = 1.0 - x;
                    1.0 - (p1 * 2f32.powf(-10.0 * x) * ((x - p3) * (2.0 * PI / p2)).sin() + 1.0)
                })
            }
        }
    }
}

/// Build out/inOut variants from an ease-in curve.
fn directed(dir: EaseDir, t: f32, ease_in: impl Fn(f32) -> f32) -> f32 {
    match dir {
        EaseDir::In => ease_in(t),
        EaseDir::Out => 1.0 - ease_in(1.0 - t),
        EaseDir::InOut => {
            if t < 0.5 {
                ease_in(t * 2.0) / 2.0
            } else {
                1.0 - ease_in((1.0 - t) * 2.0) / 2.0
            }
        }
    }
}

fn parse_dir(dir: &str) -> Result<EaseDir> {
    match dir {
        "in" => Ok(EaseDir::In),
        "out" => Ok(EaseDir::Out),
        "inOut" | "in-out" => Ok(EaseDir::InOut),
        other => bail!("Unknown ease direction '{}'", other),
    }
}

fn parse_params(raw: &str) -> Result<Vec<f32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<f32>().with_context(|| format!("Bad ease parameter '{}'", p)))
        .collect()
}

// ============================================================================
// Cubic bezier
// ============================================================================

/// CSS `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            bail!("cubic-bezier x control points must be within [0, 1], got {} and {}", x1, x2);
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Parse `cubic-bezier(a, b, c, d)`
    pub fn parse(css: &str) -> Result<Self> {
        let inner = css
            .trim()
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| anyhow!("Expected cubic-bezier(...), got '{}'", css))?;
        let params = parse_params(inner)?;
        let [x1, y1, x2, y2] = params[..] else {
            bail!("cubic-bezier takes 4 numbers, got {}", params.len());
        };
        Self::new(x1, y1, x2, y2)
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        // Bernstein form with P0 = 0, P3 = 1
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope_x(&self, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * self.x1 + 6.0 * u * t * (self.x2 - self.x1) + 3.0 * t * t * (1.0 - self.x2)
    }

    /// y for a given x (progress)
    pub fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 || x >= 1.0 {
            return x.clamp(0.0, 1.0);
        }
        // Newton first, bisection if the slope is too flat
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-6 {
                return Self::sample(self.y1, self.y2, t);
            }
            let d = self.slope_x(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..50 {
            let sx = Self::sample(self.x1, self.x2, t);
            if (sx - x).abs() < 1e-6 {
                break;
            }
            if sx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::tokens::{EasingToken, ease};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_all_token_eases_parse() {
        for (_, name) in ease::ALL {
            let parsed = Ease::parse(name).unwrap();
            assert!(close(parsed.apply(0.0), 0.0), "{} at 0", name);
            assert!(close(parsed.apply(1.0), 1.0), "{} at 1", name);
        }
        for token in EasingToken::ALL {
            let parsed = Ease::parse(token.css()).unwrap();
            assert!(close(parsed.apply(1.0), 1.0));
        }
    }

    #[test]
    fn test_power_curves() {
        let out = Ease::parse("power3.out").unwrap();
        assert_eq!(out, Ease::Power(3, EaseDir::Out));
        // 1 - (1 - 0.5)^4
        assert!(close(out.apply(0.5), 0.9375));

        let inn = Ease::parse("power2.in").unwrap();
        assert!(close(inn.apply(0.5), 0.125));

        let io = Ease::parse("power2.inOut").unwrap();
        assert!(close(io.apply(0.5), 0.5));
        assert!(io.apply(0.25) < 0.25);
    }

    #[test]
    fn test_back_overshoots() {
        let back = Ease::parse("back.out(1.7)").unwrap();
        assert_eq!(back, Ease::Back { overshoot: 1.7, dir: EaseDir::Out });
        let peak = (1..100).map(|i| back.apply(i as f32 / 100.0)).fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_elastic_params() {
        let e = Ease::parse("elastic.out(1, 0.3)").unwrap();
        assert_eq!(e, Ease::Elastic { amplitude: 1.0, period: 0.3, dir: EaseDir::Out });
        assert!(close(e.apply(1.0), 1.0));
        let peak = (1..100).map(|i| e.apply(i as f32 / 100.0)).fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_unknown_falls_back() {
        assert!(Ease::parse("wobble.out").is_err());
        assert!(Ease::parse("power2.sideways").is_err());
        assert_eq!(Ease::named("wobble.out"), Ease::Linear);
        assert_eq!(Ease::named("none"), Ease::Linear);
    }

    #[test]
    fn test_malformed_parens_are_errors() {
        for bad in ["back)(", "back.out(1.7", "back.out1.7)", "elastic.out(1, (0.3))", "back.out(1.7)x"] {
            assert!(Ease::parse(bad).is_err(), "{}", bad);
            assert_eq!(Ease::named(bad), Ease::Linear);
        }
        assert!(CubicBezier::parse("cubic-bezier)0, 0, 1, 1(").is_err());
    }

    #[test]
    fn test_cubic_bezier() {
        let linear = CubicBezier::parse("cubic-bezier(0, 0, 1, 1)").unwrap();
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!(close(linear.solve(x), x));
        }
        let standard = CubicBezier::parse(EasingToken::Default.css()).unwrap();
        assert!(standard.solve(0.5) > 0.5);

        assert!(CubicBezier::parse("cubic-bezier(0, 0, 1)").is_err());
        assert!(CubicBezier::parse("cubic-bezier(1.5, 0, 1, 1)").is_err());
        assert!(CubicBezier::parse("ease-in").is_err());
    }
}
