//! 26-way prefix tree over the letters A-Z.
//!
//! The trie is populated once and then shared read-only by any number of
//! searches. Absence of a child at depth `d` means no stored word starts
//! with that `d`-letter prefix, which is what lets the solver abandon a
//! branch early.

use crate::error::WordError;

/// Alphabet size
pub const ALPHABET: usize = 26;

/// Map an uppercase ASCII letter to its child slot
fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_uppercase() {
        Some((byte - b'A') as usize)
    } else {
        None
    }
}

/// A node in the trie. `terminal` marks that the path from the root spells
/// a stored word.
#[derive(Debug, Default)]
pub struct TrieNode {
    terminal: bool,
    children: [Option<Box<TrieNode>>; ALPHABET],
}

impl TrieNode {
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Descend one letter; `None` means no stored word continues this way
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        u8::try_from(letter)
            .ok()
            .and_then(letter_index)
            .and_then(|i| self.child_at(i))
    }

    /// Descend by alphabet index (A = 0)
    pub fn child_at(&self, index: usize) -> Option<&TrieNode> {
        self.children.get(index).and_then(|c| c.as_deref())
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

/// Dictionary of A-Z words stored as a prefix tree
#[derive(Debug, Default)]
pub struct WordTrie {
    root: TrieNode,
    len: usize,
}

impl WordTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a word list, failing on the first invalid word
    pub fn from_words<I, S>(words: I) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Insert a word of uppercase letters A-Z.
    ///
    /// Returns `Ok(true)` if the word was new and `Ok(false)` if it was
    /// already present. Empty words and any other character are rejected
    /// before the trie is touched.
    pub fn insert(&mut self, word: &str) -> Result<bool, WordError> {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidWord(word.to_string()));
        }

        let mut node = &mut self.root;
        for byte in word.bytes() {
            let i = (byte - b'A') as usize;
            node = &mut **node.children[i].get_or_insert_with(Default::default);
        }

        if node.terminal {
            return Ok(false);
        }
        node.terminal = true;
        self.len += 1;
        Ok(true)
    }

    /// Whether `word` was inserted. Unknown words and words with characters
    /// outside A-Z simply return false.
    pub fn contains(&self, word: &str) -> bool {
        self.node_for_prefix(word).map_or(false, TrieNode::is_terminal)
    }

    /// The node reached by spelling `prefix` from the root
    pub fn node_for_prefix(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for byte in prefix.bytes() {
            node = node.child_at(letter_index(byte)?)?;
        }
        Some(node)
    }

    /// The empty-prefix node
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every stored word in alphabetical order
    pub fn words(&self) -> WordsWithPrefix<'_> {
        self.words_with_prefix("")
    }

    /// Lazily enumerate the stored words starting with `prefix`, in
    /// alphabetical (depth-first, A before Z) order. The prefix itself is
    /// included when it is a word.
    pub fn words_with_prefix(&self, prefix: &str) -> WordsWithPrefix<'_> {
        match self.node_for_prefix(prefix) {
            Some(node) => WordsWithPrefix {
                stack: vec![(node, 0)],
                word: prefix.to_string(),
                pending: node.terminal,
            },
            None => WordsWithPrefix {
                stack: Vec::new(),
                word: String::new(),
                pending: false,
            },
        }
    }
}

/// Iterator returned by [`WordTrie::words_with_prefix`].
///
/// Walks the subtree with an explicit stack; `word` always holds the
/// letters of the path to the top frame.
#[derive(Debug, Clone)]
pub struct WordsWithPrefix<'a> {
    /// (node, next child slot to try)
    stack: Vec<(&'a TrieNode, usize)>,
    word: String,
    /// The start node is a word that has not been yielded yet
    pending: bool,
}

impl<'a> Iterator for WordsWithPrefix<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.pending {
            self.pending = false;
            return Some(self.word.clone());
        }

        loop {
            let frame = self.stack.last_mut()?;
            let node: &'a TrieNode = frame.0;

            let mut found = None;
            while frame.1 < ALPHABET {
                let i = frame.1;
                frame.1 += 1;
                if let Some(child) = node.children[i].as_deref() {
                    found = Some((i, child));
                    break;
                }
            }

            match found {
                Some((i, child)) => {
                    self.word.push((b'A' + i as u8) as char);
                    self.stack.push((child, 0));
                    if child.terminal {
                        return Some(self.word.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    if !self.stack.is_empty() {
                        self.word.pop();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordTrie {
        WordTrie::from_words(["TOAST", "TO", "TOE", "CAT", "CATS", "DOG", "TOAD"]).unwrap()
    }

    fn depth(node: &TrieNode) -> usize {
        (0..ALPHABET)
            .filter_map(|i| node.child_at(i))
            .map(|c| 1 + depth(c))
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_insert_and_contains() {
        let trie = sample();
        assert_eq!(trie.len(), 7);
        for w in ["TOAST", "TO", "TOE", "CAT", "CATS", "DOG", "TOAD"] {
            assert!(trie.contains(w), "{} missing", w);
        }
        assert!(!trie.contains("T"));
        assert!(!trie.contains("TOA"));
        assert!(!trie.contains("CATSS"));
        assert!(!trie.contains("cat"));
        assert!(!trie.contains("CA T"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_duplicate_insert_is_idempotent() {
        let mut trie = WordTrie::new();
        assert_eq!(trie.insert("WORD"), Ok(true));
        assert_eq!(trie.insert("WORD"), Ok(false));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.words().count(), 1);
    }

    #[test]
    fn test_invalid_words_rejected() {
        let mut trie = WordTrie::new();
        assert_eq!(trie.insert(""), Err(WordError::InvalidWord(String::new())));
        assert!(trie.insert("word").is_err());
        assert!(trie.insert("DON'T").is_err());
        assert!(trie.insert("ÉTÉ").is_err());
        assert!(trie.is_empty());
        assert!(!trie.root().has_children());
    }

    #[test]
    fn test_child_descent() {
        let trie = sample();
        let t = trie.root().child('T').unwrap();
        let o = t.child('O').unwrap();
        assert!(o.is_terminal());
        assert!(o.child('X').is_none());
        assert!(o.child('a').is_none());
        assert!(trie.root().child('Z').is_none());
        assert!(trie.root().child_at(99).is_none());
    }

    #[test]
    fn test_words_in_alphabetical_order() {
        let trie = sample();
        let words: Vec<String> = trie.words().collect();
        assert_eq!(
            words,
            vec!["CAT", "CATS", "DOG", "TO", "TOAD", "TOAST", "TOE"]
        );
    }

    #[test]
    fn test_words_with_prefix() {
        let trie = sample();
        let toa: Vec<String> = trie.words_with_prefix("TOA").collect();
        assert_eq!(toa, vec!["TOAD", "TOAST"]);

        let to: Vec<String> = trie.words_with_prefix("TO").collect();
        assert_eq!(to, vec!["TO", "TOAD", "TOAST", "TOE"]);

        assert_eq!(trie.words_with_prefix("DOG").collect::<Vec<_>>(), vec!["DOG"]);
        assert_eq!(trie.words_with_prefix("X").count(), 0);
        assert_eq!(trie.words_with_prefix("dog").count(), 0);
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let trie = sample();
        let iter = trie.words_with_prefix("CA");
        let first: Vec<String> = iter.clone().collect();
        let second: Vec<String> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(trie.words().count(), trie.len());
    }

    #[test]
    fn test_depth_matches_longest_word() {
        let trie = sample();
        assert_eq!(depth(trie.root()), 5);
        assert_eq!(depth(WordTrie::new().root()), 0);
    }
}
