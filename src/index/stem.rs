// src/index/stem.rs
// =============================================================================
// This module reduces words to their stems before indexing.
//
// We use the `rust-stemmers` crate, which implements the Snowball stemming
// algorithms. Stemming collapses inflected forms ("pages", "paging") into
// one root ("page"), so all variants of a word index under a single key.
//
// The crawler targets mixed Russian/English pages, so every word goes
// through the Russian stemmer first and the English stemmer second. Each
// algorithm leaves words of the other language's alphabet untouched, so
// composing them handles both languages without detecting which one a
// word belongs to.
//
// Rust concepts:
// - Cow<str>: The stemmers return "clone on write" strings - borrowed when
//   the word is already a stem, owned when a suffix was removed
// - Structs with methods: The stemmer pair is built once per crawl and
//   reused for every page
// =============================================================================

use rust_stemmers::{Algorithm, Stemmer};

// A Russian-then-English Snowball stemmer pair
//
// Construction allocates the algorithm tables, so build one of these per
// crawl and pass it around, not one per word.
pub struct WordStemmer {
    russian: Stemmer,
    english: Stemmer,
}

impl WordStemmer {
    pub fn new() -> Self {
        WordStemmer {
            russian: Stemmer::create(Algorithm::Russian),
            english: Stemmer::create(Algorithm::English),
        }
    }

    // Stems a single word: Russian pass first, English pass second
    //
    // Pure and deterministic - same word in, same stem out, no side effects
    pub fn stem(&self, word: &str) -> String {
        let russian = self.russian.stem(word);
        self.english.stem(&russian).to_string()
    }

    // Stems a whole token sequence, preserving order and duplicates
    // (duplicates are what the occurrence counts are made of)
    pub fn stem_all(&self, words: &[String]) -> Vec<String> {
        words.iter().map(|word| self.stem(word)).collect()
    }
}

impl Default for WordStemmer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_inflections_collapse() {
        let stemmer = WordStemmer::new();
        assert_eq!(stemmer.stem("page"), stemmer.stem("pages"));
        assert_eq!(stemmer.stem("running"), "run");
    }

    #[test]
    fn test_russian_inflections_collapse() {
        let stemmer = WordStemmer::new();
        // "книга" (book, nominative) and "книги" (genitive) share a stem
        assert_eq!(stemmer.stem("книга"), stemmer.stem("книги"));
    }

    #[test]
    fn test_stemming_is_deterministic() {
        let stemmer = WordStemmer::new();
        assert_eq!(stemmer.stem("crawling"), stemmer.stem("crawling"));
    }

    #[test]
    fn test_stem_all_preserves_order_and_duplicates() {
        let stemmer = WordStemmer::new();
        let words = vec!["test".to_string(), "test".to_string(), "page".to_string()];
        let stemmed = stemmer.stem_all(&words);
        assert_eq!(stemmed.len(), 3);
        assert_eq!(stemmed[0], stemmed[1]);
    }
}
