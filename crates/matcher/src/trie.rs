//! Character-level trie scan over literal phrases.

use std::collections::HashMap;

/// Result of scanning a text against a phrase library.
///
/// `texts` keeps discovery order and duplicates; `detected` is simply
/// whether anything survived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub detected: bool,
    pub texts: Vec<String>,
}

impl MatchResult {
    pub fn from_texts(texts: Vec<String>) -> Self {
        Self {
            detected: !texts.is_empty(),
            texts,
        }
    }
}

#[derive(Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word_end: bool,
}

struct Trie {
    root: TrieNode,
}

impl Trie {
    fn build(phrases: &[String]) -> Self {
        let mut trie = Self {
            root: TrieNode::default(),
        };
        for phrase in phrases {
            trie.insert(phrase);
        }
        trie
    }

    fn insert(&mut self, phrase: &str) {
        let mut node = &mut self.root;
        for ch in phrase.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_word_end = true;
    }

    fn scan(&self, text: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut node = &self.root;
        let mut current = String::new();
        for ch in text.chars() {
            match node.children.get(&ch) {
                // A mismatch resets the walk. The mismatching character is
                // consumed and is not retried as a fresh match start; this
                // matches the behavior configured libraries were tuned
                // against and must not be "fixed" to an overlap-aware scan.
                None => {
                    node = &self.root;
                    current.clear();
                },
                Some(next) => {
                    node = next;
                    current.push(ch);
                    if next.is_word_end {
                        found.push(current.clone());
                    }
                },
            }
        }
        found
    }
}

/// Scan `text` for occurrences of `phrases`.
///
/// Case-sensitive, code-point granularity. Pure: identical inputs always
/// produce identical results. An empty phrase list never detects.
pub fn match_phrases(text: &str, phrases: &[String]) -> MatchResult {
    let trie = Trie::build(phrases);
    MatchResult::from_texts(trie.scan(text))
}
