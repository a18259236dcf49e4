//! Embedded sample dictionary
//!
//! A small mixed-length word list compiled into the binary so the tool is
//! usable without an external word file.

/// Number of words in the sample dictionary
pub const SAMPLE_COUNT: usize = 48;

/// Sample dictionary: lowercase, varied lengths and shared prefixes
pub const SAMPLE: &[&str] = &[
    "apple", "apt", "bake", "banana", "bar", "bark", "barn", "bead", "beam", "bean", "bone",
    "cab", "cable", "carrot", "cart", "cat", "dart", "deal", "dear", "dome", "door", "echo",
    "edge", "fable", "farm", "fern", "ghost", "goat", "grape", "hollow", "horse", "hotel",
    "igloo", "jolly", "kite", "lemon", "lone", "melon", "night", "ocean", "plume", "quart",
    "river", "stone", "tiger", "umber", "vexed", "wharf",
];
