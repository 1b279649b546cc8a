//! Static site content: hero slides, hobbies, skill constellation.

pub mod hobbies;
pub mod skills;
pub mod slides;

pub use hobbies::{Hobby, HOBBIES};
pub use skills::{Constellation, ConstellationLine, Skill, SkillCategory, CONSTELLATION};
pub use slides::{Decoration, HeroSlide, SlideId, HERO_SLIDES};

/// Run every content check; returns `(dataset, problem)` pairs.
pub fn validate_all() -> Vec<(&'static str, String)> {
    let mut problems = Vec::new();
    problems.extend(slides::validate_slides(&HERO_SLIDES).into_iter().map(|p| ("slides", p)));
    problems.extend(hobbies::validate_hobbies(&HOBBIES).into_iter().map(|p| ("hobbies", p)));
    problems.extend(CONSTELLATION.validate().into_iter().map(|p| ("skills", p)));
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_content_valid() {
        assert!(validate_all().is_empty());
    }
}
