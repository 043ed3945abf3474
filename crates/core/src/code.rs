//! Event code generation.
//!
//! An event is shared with guests as an opaque `word-word-word-word` code
//! rather than a numeric id. Codes are sampled without replacement from an
//! embedded word list, so a code never repeats a word.

use rand::seq::IndexedRandom;

/// Number of words in an event code.
pub const CODE_WORDS: usize = 4;

/// Word pool for event codes. All lowercase ASCII, no dashes.
const WORDS: &[&str] = &[
    "amber", "anchor", "apple", "aspen", "atlas", "badge", "bamboo", "basil",
    "beacon", "birch", "bison", "breeze", "brook", "canyon", "cedar", "chime",
    "cinder", "citrus", "clover", "cobalt", "comet", "coral", "cosmos", "crane",
    "cricket", "crystal", "cypress", "dahlia", "delta", "drift", "ember", "fable",
    "falcon", "fennel", "fern", "flint", "forest", "garnet", "ginger", "glacier",
    "grove", "harbor", "hazel", "heron", "hollow", "indigo", "iris", "ivory",
    "jasper", "juniper", "kestrel", "lagoon", "lantern", "lark", "laurel", "lemon",
    "lilac", "linden", "lotus", "lunar", "maple", "marble", "meadow", "mesa",
    "mistral", "morrow", "moss", "nectar", "nimbus", "oak", "ocean", "olive",
    "onyx", "opal", "orchid", "osprey", "pebble", "pine", "plume", "prairie",
    "quartz", "quill", "raven", "reef", "ridge", "river", "rowan", "saffron",
    "sage", "sequoia", "sierra", "sparrow", "spruce", "summit", "thistle", "tidal",
    "topaz", "tulip", "tundra", "umber", "vale", "velvet", "walnut", "willow",
    "winter", "wren", "yarrow", "zephyr",
];

/// Generate a new `word-word-word-word` event code.
pub fn generate_event_code() -> String {
    let mut rng = rand::rng();
    let words: Vec<&str> = WORDS
        .choose_multiple(&mut rng, CODE_WORDS)
        .copied()
        .collect();
    words.join("-")
}

/// Check whether a string has the shape of a generated event code:
/// exactly four dash-separated, non-empty, lowercase ASCII words.
///
/// This is a format check only. Whether the code names a real event is
/// answered by the database.
pub fn is_valid_event_code(code: &str) -> bool {
    let parts: Vec<&str> = code.split('-').collect();
    parts.len() == CODE_WORDS
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_lowercase()))
}
