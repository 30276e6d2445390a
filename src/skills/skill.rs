//! Skill records attached to pieces.
//!
//! Skills are supplied by the host and treated as opaque payload. The engine
//! only compares them by `SkillId` and hands them back for display.

use serde::{Deserialize, Serialize};

/// Skill identifier, e.g. `"python"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkillId(pub String);

impl SkillId {
    /// Create a new skill ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A skill shown on a piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    /// Display name, e.g. `"TypeScript"`.
    pub name: String,
    /// Grouping shown under the name, e.g. `"Languages"`.
    pub category: String,
    /// Host color token, e.g. `"bg-blue-600"`.
    pub color: String,
    /// Host icon reference.
    pub icon: String,
}

impl Skill {
    /// Create a skill with an empty color and icon.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: SkillId::new(id),
            name: name.into(),
            category: category.into(),
            color: String::new(),
            icon: String::new(),
        }
    }

    /// Set the display color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the icon reference.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Two-character label drawn inside each cell of the piece.
    #[must_use]
    pub fn abbreviation(&self) -> String {
        abbreviate(&self.name)
    }
}

/// Names whose initials or prefix read badly.
const ABBREVIATION_OVERRIDES: &[(&str, &str)] = &[
    ("TypeScript", "TS"),
    ("JavaScript", "JS"),
    ("PostgreSQL", "PG"),
    ("TailwindCSS", "TW"),
    ("Next.js", "NX"),
    ("Node.js", "ND"),
    ("OpenCV", "CV"),
    ("Kubernetes", "K8"),
];

/// Shorten a skill name to at most two characters.
///
/// ```
/// use skill_blocks::skills::abbreviate;
///
/// assert_eq!(abbreviate("C#"), "C#");
/// assert_eq!(abbreviate("TypeScript"), "TS");
/// assert_eq!(abbreviate("React.js"), "RJ");
/// assert_eq!(abbreviate("Docker"), "DO");
/// ```
#[must_use]
pub fn abbreviate(name: &str) -> String {
    if name.chars().count() <= 2 {
        return name.to_string();
    }

    if let Some((_, short)) = ABBREVIATION_OVERRIDES.iter().find(|(full, _)| *full == name) {
        return (*short).to_string();
    }

    // Leading and trailing separators leave empty words; they count toward
    // the word split but contribute no initial.
    let words: Vec<&str> = name
        .split(|c: char| c.is_whitespace() || c == '.' || c == '-')
        .collect();

    if words.len() > 1 {
        return words
            .iter()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();
    }

    name.chars().take(2).flat_map(char::to_uppercase).collect()
}
