//! Generation profiles

use std::fmt;

/// The closed set of generation profiles
///
/// Profiles are a fixed tagged union, not an extension point: each variant
/// selects both a result shape and a generation strategy. `DigestTopics`
/// and `MentorSession` are computed heuristically; `LessonAnalysis`
/// delegates to an external generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Topic digest computed from lexicon matches and token frequency
    DigestTopics,
    /// Mentoring-session summary with fixed next actions
    MentorSession,
    /// Full lesson analysis produced by the external backend
    LessonAnalysis,
}

impl Profile {
    /// Parse a profile name, returning `None` for anything unsupported
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "digest_topics" => Some(Profile::DigestTopics),
            "mentor_session" => Some(Profile::MentorSession),
            "lesson_analysis" => Some(Profile::LessonAnalysis),
            _ => None,
        }
    }

    /// The canonical profile name as it appears in artifacts and events
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::DigestTopics => "digest_topics",
            Profile::MentorSession => "mentor_session",
            Profile::LessonAnalysis => "lesson_analysis",
        }
    }

    /// Whether this profile requires the external generation backend
    pub fn is_delegated(&self) -> bool {
        matches!(self, Profile::LessonAnalysis)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_profiles() {
        assert_eq!(Profile::parse("digest_topics"), Some(Profile::DigestTopics));
        assert_eq!(Profile::parse("mentor_session"), Some(Profile::MentorSession));
        assert_eq!(Profile::parse("lesson_analysis"), Some(Profile::LessonAnalysis));
    }

    #[test]
    fn test_parse_unknown_profile() {
        assert_eq!(Profile::parse("unknown"), None);
        assert_eq!(Profile::parse(""), None);
        assert_eq!(Profile::parse("Digest_Topics"), None);
    }

    #[test]
    fn test_round_trip() {
        for p in [
            Profile::DigestTopics,
            Profile::MentorSession,
            Profile::LessonAnalysis,
        ] {
            assert_eq!(Profile::parse(p.as_str()), Some(p));
        }
    }

    #[test]
    fn test_delegation() {
        assert!(Profile::LessonAnalysis.is_delegated());
        assert!(!Profile::DigestTopics.is_delegated());
        assert!(!Profile::MentorSession.is_delegated());
    }
}
