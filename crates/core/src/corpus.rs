use rand::{distr::Distribution, Rng};

/// A fixed, non-empty set of sentences that generated lines pick from.
#[derive(Clone, Copy, Debug)]
pub struct Corpus {
    sentences: &'static [&'static str],
}

/// The sentences every generated log draws from.
pub const STORIES: Corpus = Corpus {
    sentences: &[
        "Het was een donkeren, en stormachtige nacht.",
        "And they lived happily ever after.",
        "And then a hippo appeared.",
        "And then a crocodile appeared.",
        "And they all joined forces to pull the tree out of the swamp.",
    ],
};

impl Corpus {
    pub fn sentences(&self) -> &'static [&'static str] {
        self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// A corpus is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn position(&self, sentence: &str) -> Option<usize> {
        self.sentences.iter().position(|&s| s == sentence)
    }
}

/// Picks a sentence uniformly at random.
impl Distribution<&'static str> for Corpus {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.sentences[rng.random_range(0..self.sentences.len())]
    }
}
