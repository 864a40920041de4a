//! Random post factory.
//!
//! This module produces hacker-flavored filler posts for seeding the board:
//! a "{adjective} {noun}" title and a phrase body assembled from embedded word
//! lists. Generation is pure in-memory work over an owned RNG, so it always
//! succeeds and never blocks.
//!
//! The generator owns a [`SmallRng`] rather than reaching for a thread-local
//! RNG so tests can seed it and assert on exact output.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::post::Post;

const ADJECTIVES: &[&str] = &[
    "auxiliary",
    "primary",
    "back-end",
    "digital",
    "open-source",
    "virtual",
    "cross-platform",
    "redundant",
    "online",
    "haptic",
    "multi-byte",
    "wireless",
    "neural",
    "optical",
    "solid state",
    "mobile",
];

const NOUNS: &[&str] = &[
    "driver",
    "protocol",
    "bandwidth",
    "panel",
    "microchip",
    "program",
    "port",
    "card",
    "array",
    "interface",
    "system",
    "sensor",
    "firewall",
    "hard drive",
    "pixel",
    "alarm",
    "feed",
    "monitor",
    "application",
    "transmitter",
    "bus",
    "circuit",
    "capacitor",
    "matrix",
];

const VERBS: &[&str] = &[
    "back up",
    "bypass",
    "hack",
    "override",
    "compress",
    "copy",
    "navigate",
    "index",
    "connect",
    "generate",
    "quantify",
    "calculate",
    "synthesize",
    "input",
    "transmit",
    "program",
    "reboot",
    "parse",
];

const ING_VERBS: &[&str] = &[
    "backing up",
    "bypassing",
    "hacking",
    "overriding",
    "compressing",
    "copying",
    "navigating",
    "indexing",
    "connecting",
    "generating",
    "quantifying",
    "calculating",
    "synthesizing",
    "inputting",
    "transmitting",
    "programming",
    "rebooting",
    "parsing",
];

const ABBREVIATIONS: &[&str] = &[
    "TCP", "HTTP", "RAM", "CSS", "SSL", "SQL", "FTP", "PCI", "AI", "RSS", "XML", "EXE", "HDD",
    "SMTP", "SMS", "USB", "PNG", "SCSI", "JSON", "XSS",
];

/// Factory for random board posts.
///
/// # Examples
///
/// ```
/// use zboard::domain::PostGenerator;
///
/// let mut generator = PostGenerator::from_seed(7);
/// let post = generator.generate();
/// assert!(!post.title.is_empty());
/// assert!(!post.body.is_empty());
/// ```
#[derive(Debug)]
pub struct PostGenerator {
    rng: SmallRng,
}

impl PostGenerator {
    /// Creates a generator seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed, for deterministic output.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Produces one random post.
    ///
    /// The title is an adjective+noun pair; the body is one of a small set of
    /// phrase shapes filled from the word lists. Both are always non-empty.
    pub fn generate(&mut self) -> Post {
        let title = format!("{} {}", self.pick(ADJECTIVES), self.pick(NOUNS));
        let body = self.phrase();
        Post::new(title, body)
    }

    /// Produces `count` random posts, in generation order.
    pub fn generate_batch(&mut self, count: usize) -> Vec<Post> {
        (0..count).map(|_| self.generate()).collect()
    }

    fn phrase(&mut self) -> String {
        // Phrase shapes mirror the usual hacker-ipsum fillers.
        match self.rng.gen_range(0..4u8) {
            0 => format!(
                "If we {} the {}, we can get to the {} {} through the {} {}!",
                self.pick(VERBS),
                self.pick(NOUNS),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
                self.pick(ADJECTIVES),
                self.pick(NOUNS),
            ),
            1 => format!(
                "Use the {} {} {}, then you can {} the {} {}!",
                self.pick(ADJECTIVES),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(NOUNS),
            ),
            2 => format!(
                "The {} {} is down, {} the {} {} so we can {} the {} {}!",
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(NOUNS),
            ),
            _ => format!(
                "Try {} the {} {}, maybe it will {} the {} {}!",
                self.pick(ING_VERBS),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(NOUNS),
            ),
        }
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        // The word lists are non-empty, so choose cannot return None.
        words.choose(&mut self.rng).copied().unwrap_or(words[0])
    }
}

impl Default for PostGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_posts_have_non_empty_fields() {
        let mut generator = PostGenerator::from_seed(42);
        for _ in 0..50 {
            let post = generator.generate();
            assert!(!post.title.is_empty());
            assert!(!post.body.is_empty());
        }
    }

    #[test]
    fn batch_has_requested_length() {
        let mut generator = PostGenerator::from_seed(1);
        assert_eq!(generator.generate_batch(30).len(), 30);
        assert!(generator.generate_batch(0).is_empty());
    }

    #[test]
    fn same_seed_produces_same_posts() {
        let a = PostGenerator::from_seed(9).generate_batch(5);
        let b = PostGenerator::from_seed(9).generate_batch(5);
        assert_eq!(a, b);
    }
}
