//! Skill constellation: nodes placed on a percentage grid, joined by lines.
//!
//! Lines reference nodes by id. A line whose endpoint does not resolve is a
//! data problem, not a fatal one: [`Constellation::resolve`] skips it with a
//! warning and [`Constellation::validate`] reports it.

use std::collections::HashMap;

use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Testing,
    Tools,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSize {
    Sm,
    Md,
    Lg,
}

impl SkillSize {
    /// Star diameter in px
    pub fn px(self) -> f32 {
        match self {
            Self::Sm => 8.0,
            Self::Md => 12.0,
            Self::Lg => 16.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillColor {
    Gold,
    White,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    /// Percent of container width
    pub x: f32,
    /// Percent of container height
    pub y: f32,
    pub size: SkillSize,
    pub color: SkillColor,
}

impl Skill {
    /// Absolute position inside a `width` x `height` container
    pub fn position_in(&self, width: f32, height: f32) -> (f32, f32) {
        (self.x * width / 100.0, self.y * height / 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationLine {
    pub from: String,
    pub to: String,
}

/// A line whose endpoints both resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLine<'a> {
    pub from: &'a Skill,
    pub to: &'a Skill,
}

impl ResolvedLine<'_> {
    /// Length in percentage units
    pub fn length(&self) -> f32 {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Node/edge dataset
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Constellation {
    pub skills: Vec<Skill>,
    pub lines: Vec<ConstellationLine>,
}

impl Constellation {
    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn by_category(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }

    /// Lines with both endpoints resolved; malformed lines are skipped.
    pub fn resolve(&self) -> Vec<ResolvedLine<'_>> {
        let index: HashMap<&str, &Skill> = self.skills.iter().map(|s| (s.id.as_str(), s)).collect();
        self.lines
            .iter()
            .filter_map(|line| {
                match (index.get(line.from.as_str()), index.get(line.to.as_str())) {
                    (Some(&from), Some(&to)) => Some(ResolvedLine { from, to }),
                    _ => {
                        warn!("Skipping constellation line {} -> {}: unknown node", line.from, line.to);
                        None
                    }
                }
            })
            .collect()
    }

    /// Referential integrity, duplicate ids, and coordinate range problems
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut ids = std::collections::HashSet::new();
        for skill in &self.skills {
            if !ids.insert(skill.id.as_str()) {
                problems.push(format!("duplicate skill id '{}'", skill.id));
            }
            if !(0.0..=100.0).contains(&skill.x) || !(0.0..=100.0).contains(&skill.y) {
                problems.push(format!("skill '{}' sits outside the grid at ({}, {})", skill.id, skill.x, skill.y));
            }
        }
        for line in &self.lines {
            for end in [&line.from, &line.to] {
                if !ids.contains(end.as_str()) {
                    problems.push(format!("line {} -> {} references unknown skill '{}'", line.from, line.to, end));
                }
            }
        }
        problems
    }
}

fn skill(id: &str, name: &str, category: SkillCategory, x: f32, y: f32, size: SkillSize, color: SkillColor) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category,
        x,
        y,
        size,
        color,
    }
}

fn line(from: &str, to: &str) -> ConstellationLine {
    ConstellationLine { from: from.to_string(), to: to.to_string() }
}

pub static CONSTELLATION: Lazy<Constellation> = Lazy::new(|| {
    use SkillCategory::*;
    use SkillColor::*;
    use SkillSize::*;

    Constellation {
        skills: vec![
            skill("react", "React", Frontend, 58.0, 12.0, Lg, Gold),
            skill("typescript", "TypeScript", Frontend, 42.0, 22.0, Lg, Gold),
            skill("javascript", "JavaScript", Frontend, 32.0, 35.0, Md, Gold),
            skill("nextjs", "Next.js", Frontend, 68.0, 18.0, Md, Gold),
            skill("redux", "Redux", Frontend, 52.0, 28.0, Md, Gold),
            skill("reactnative", "React Native", Frontend, 60.0, 35.0, Lg, Gold),
            skill("html", "HTML5", Frontend, 28.0, 18.0, Sm, White),
            skill("css", "CSS3", Frontend, 22.0, 28.0, Sm, White),
            skill("tailwind", "Tailwind CSS", Frontend, 40.0, 42.0, Md, Gold),
            skill("graphql", "GraphQL", Frontend, 75.0, 32.0, Md, Gold),
            skill("nodejs", "Node.js", Backend, 85.0, 45.0, Lg, Gold),
            skill("python", "Python", Backend, 35.0, 55.0, Md, Gold),
            skill("jest", "Jest", Testing, 50.0, 50.0, Md, Gold),
            skill("cypress", "Cypress", Testing, 70.0, 52.0, Md, Gold),
            skill("testing-library", "Testing Library", Testing, 62.0, 60.0, Sm, Gold),
            skill("git", "Git", Tools, 80.0, 25.0, Sm, White),
            skill("figma", "Figma", Tools, 90.0, 35.0, Sm, White),
            skill("storybook", "Storybook", Tools, 25.0, 45.0, Sm, White),
            skill("styled", "Styled Components", Frontend, 48.0, 38.0, Sm, Gold),
            skill("webpack", "Webpack", Tools, 15.0, 38.0, Sm, White),
            skill("vite", "Vite", Tools, 8.0, 52.0, Sm, White),
            skill("astro", "Astro", Frontend, 92.0, 55.0, Lg, Gold),
        ],
        lines: vec![
            line("html", "typescript"),
            line("typescript", "react"),
            line("react", "nextjs"),
            line("typescript", "redux"),
            line("redux", "reactnative"),
            line("reactnative", "graphql"),
            line("graphql", "nodejs"),
            line("javascript", "tailwind"),
            line("tailwind", "styled"),
            line("styled", "jest"),
            line("jest", "cypress"),
            line("cypress", "testing-library"),
            line("nodejs", "astro"),
            line("python", "jest"),
            line("nextjs", "git"),
        ],
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_constellation_is_consistent() {
        let problems = CONSTELLATION.validate();
        assert!(problems.is_empty(), "{:?}", problems);
        assert_eq!(CONSTELLATION.resolve().len(), CONSTELLATION.lines.len());
    }

    #[test]
    fn test_malformed_line_skipped() {
        let mut data = CONSTELLATION.clone();
        data.lines.push(line("react", "reakt"));
        data.lines.push(line("nope", "jest"));

        let resolved = data.resolve();
        assert_eq!(resolved.len(), CONSTELLATION.lines.len());
        assert_eq!(data.validate().len(), 2);
    }

    #[test]
    fn test_lookup_and_category() {
        let react = CONSTELLATION.skill("react").unwrap();
        assert_eq!(react.name, "React");
        assert_eq!(react.position_in(200.0, 100.0), (116.0, 12.0));
        assert_eq!(CONSTELLATION.by_category(SkillCategory::Testing).count(), 3);
        assert_eq!(CONSTELLATION.by_category(SkillCategory::Backend).count(), 2);
    }

    #[test]
    fn test_line_length() {
        let resolved = CONSTELLATION.resolve();
        let first = resolved[0];
        assert_eq!(first.from.id, "html");
        assert_eq!(first.to.id, "typescript");
        let expected = ((42.0f32 - 28.0).powi(2) + (22.0f32 - 18.0).powi(2)).sqrt();
        assert!((first.length() - expected).abs() < 1e-4);
    }
}
