//! Hobbies shown in the vertical hobbies slider.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    pub id: String,
    pub index: usize,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub has_underline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline_color: Option<String>,
}

fn hobby(id: &str, index: usize, title: &str, description: &str) -> Hobby {
    Hobby {
        id: id.to_string(),
        index,
        title: title.to_string(),
        description: description.to_string(),
        has_underline: false,
        underline_color: None,
    }
}

pub static HOBBIES: Lazy<Vec<Hobby>> = Lazy::new(|| {
    vec![
        hobby(
            "mentoring",
            0,
            "Mentoring",
            "One of my passions outside of work is mentoring women in code. I'm actively involved with \
             organizations like Women Who Code and Laboratoria, where I have the privilege of sharing my \
             knowledge and experiences with aspiring female developers. It's incredibly rewarding to be a \
             part of these communities, helping women break into the tech industry and thrive in their \
             coding journeys.",
        ),
        hobby(
            "travel",
            1,
            "Travel",
            "I love the experience that travel leaves to my life. I've learn so much of different cultures \
             and ancient traditions and through these authentic encounters, I've embraced and celebrated \
             both our similarities and our differences.",
        ),
        hobby(
            "luna",
            2,
            "Luna",
            "Luna is the best dog in the whole world. She's my company through every adventure and new \
             experience. She's my best friend and has offered me her unconditional love, emotional support, \
             and constant cuddles.",
        ),
        hobby(
            "family",
            3,
            "Family",
            "The most important pieces of my life puzzle. Time with family is always time well spent.",
        ),
        hobby(
            "painting",
            4,
            "Painting",
            "Expressing creativity through colors and brushstrokes. Art is my way of relaxing and finding balance.",
        ),
    ]
});

/// Same contiguity/uniqueness rules as hero slides
pub fn validate_hobbies(hobbies: &[Hobby]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for (pos, h) in hobbies.iter().enumerate() {
        if h.index != pos {
            problems.push(format!("hobby '{}' has index {} but sits at position {}", h.id, h.index, pos));
        }
        if !seen.insert(h.id.as_str()) {
            problems.push(format!("duplicate hobby id '{}'", h.id));
        }
        if h.has_underline && h.underline_color.is_none() {
            problems.push(format!("hobby '{}' is underlined without an underline color", h.id));
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_hobbies_valid() {
        assert_eq!(HOBBIES.len(), 5);
        assert!(validate_hobbies(&HOBBIES).is_empty());
    }

    #[test]
    fn test_underline_needs_color() {
        let mut hobbies = HOBBIES.clone();
        hobbies[0].has_underline = true;
        assert_eq!(validate_hobbies(&hobbies).len(), 1);
        hobbies[0].underline_color = Some("accent-yellow".into());
        assert!(validate_hobbies(&hobbies).is_empty());
    }
}
