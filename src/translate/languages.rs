//! Languages and dialects offered by the form selectors.

pub const LANGUAGES: &[&str] = &[
    "Hindi",
    "Khariboli",
    "Haryanvi",
    "Braj Bhasha",
    "Bundeli",
    "Awadhi",
    "Bagheli",
    "Bhojpuri",
    "Maithili",
    "Magahi",
    "Garhwali",
    "Kumaoni",
    "Jaunsari",
    "Chhattisgarhi",
    "Marwari",
    "Kanauji",
    "Angika",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Tulu",
    "Konkani",
    "Gujarati",
];

/// Labels the detection call is told to answer with.
pub const DETECTION_LABELS: &[&str] = &["Hindi", "Telugu", "Other"];

pub const DEFAULT_SOURCE_LANGUAGE: &str = "Hindi";
pub const DEFAULT_TARGET_LANGUAGE: &str = "Telugu";

pub fn is_catalog_language(name: &str) -> bool {
    let name = name.trim();
    LANGUAGES.iter().any(|lang| lang.eq_ignore_ascii_case(name))
}
