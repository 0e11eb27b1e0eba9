//! Named pattern registry.
//!
//! Names are matched case-insensitively; iteration follows insertion
//! order so listings are stable.

use indexmap::IndexMap;

use crate::error::SeedError;
use crate::pattern::Pattern;

/// Registry of patterns keyed by lower-cased name.
#[derive(Clone, Debug, Default)]
pub struct PatternLibrary {
    patterns: IndexMap<String, Pattern>,
}

impl PatternLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in still lifes, oscillators, spaceships and guns.
    pub fn builtin() -> Self {
        let mut lib = Self::new();
        for (name, rows) in BUILTIN {
            lib.insert(Pattern::from_rows(*name, rows));
        }
        lib
    }

    /// Register `pattern`, replacing and returning any pattern with the
    /// same case-insensitive name.
    pub fn insert(&mut self, pattern: Pattern) -> Option<Pattern> {
        self.patterns.insert(key(pattern.name()), pattern)
    }

    /// Look up a pattern.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(&key(name))
    }

    /// Look up a pattern, failing with [`SeedError::UnknownPattern`].
    pub fn lookup(&self, name: &str) -> Result<&Pattern, SeedError> {
        self.get(name).ok_or_else(|| SeedError::UnknownPattern {
            name: name.to_owned(),
        })
    }

    /// Display names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.values().map(Pattern::name)
    }

    /// Patterns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.values()
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

const BUILTIN: &[(&str, &[&str])] = &[
    ("Glider", &[".O.", "..O", "OOO"]),
    ("Blinker", &["OOO"]),
    ("Block", &["OO", "OO"]),
    ("Toad", &[".OOO", "OOO."]),
    ("Beacon", &["OO..", "OO..", "..OO", "..OO"]),
    (
        "Pulsar",
        &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    ),
    ("R-pentomino", &[".OO", "OO.", ".O."]),
    (
        "Gosper Glider Gun",
        &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    ),
];
