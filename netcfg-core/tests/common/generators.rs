//! Stochastic document generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const KINDS: &[&str] = &[
    "net",
    "convolutional",
    "route",
    "shortcut",
    "upsample",
    "yolo",
    "maxpool",
];

/// A generated block with the attributes it should parse to.
#[derive(Debug, Clone)]
pub struct GeneratedBlock {
    pub kind: String,
    /// Final value per key after last-write-wins, in first-seen order.
    pub attrs: Vec<(String, String)>,
}

/// A generated architecture document and its expected content.
#[derive(Debug, Clone)]
pub struct GeneratedDoc {
    pub text: String,
    pub blocks: Vec<GeneratedBlock>,
}

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("NETCFG_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Random attribute key (never contains `anchors`, never `type`)
    pub fn key(&mut self) -> String {
        let len = 1 + self.geometric(0.7);
        let chars = b"bcdfghklmnpqrsvwxz_";
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())] as char)
            .collect()
    }

    /// Random value text without `=` or surrounding whitespace
    pub fn value(&mut self) -> String {
        let len = 1 + self.geometric(0.8);
        let chars = b"abcdefghijklmnopqrstuvwxyz0123456789-_.,/";
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())] as char)
            .collect()
    }

    /// Random run of ignorable lines: blanks, whitespace-only, comments
    pub fn noise(&mut self) -> String {
        let mut out = String::new();
        for _ in 0..self.geometric(0.3) {
            match self.rng.gen_range(0..3) {
                0 => out.push('\n'),
                1 => out.push_str("   \t\n"),
                _ => out.push_str("# comment = [noise]\n"),
            }
        }
        out
    }

    /// Random padding around tokens
    fn pad(&mut self) -> &'static str {
        if self.chance(0.3) {
            "  "
        } else {
            ""
        }
    }

    /// Random well-formed architecture document
    pub fn document(&mut self) -> GeneratedDoc {
        let mut text = self.noise();
        let mut blocks = Vec::new();

        for _ in 0..1 + self.geometric(0.8) {
            let kind = KINDS[self.rng.gen_range(0..KINDS.len())].to_string();
            let (p1, p2) = (self.pad(), self.pad());
            text.push_str(&format!("{}[{}{}{}]\n", p1, p2, kind, p2));
            text.push_str(&self.noise());

            let mut attrs: Vec<(String, String)> = Vec::new();
            if kind == "convolutional" {
                attrs.push(("batch_normalize".into(), "0".into()));
            }
            for _ in 0..self.geometric(0.75) {
                let key = self.key();
                let value = self.value();
                let (p1, p2) = (self.pad(), self.pad());
                text.push_str(&format!("{}{}{}={}{}\n", p1, key, p2, p2, value));
                text.push_str(&self.noise());
                match attrs.iter_mut().find(|(k, _)| *k == key) {
                    Some(slot) => slot.1 = value,
                    None => attrs.push((key, value)),
                }
            }
            blocks.push(GeneratedBlock { kind, attrs });
        }

        GeneratedDoc { text, blocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.document().text, g2.document().text);
        }
    }
}
