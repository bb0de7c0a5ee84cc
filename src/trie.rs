//! Prefix tree backing command and website-name completion.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

/// A set of words supporting sorted prefix lookup.
///
/// ```
/// use passbook::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("github.com");
/// trie.insert("gitlab.com");
/// trie.insert("google.com");
///
/// assert_eq!(trie.completions("git"), vec!["github.com", "gitlab.com"]);
/// assert!(trie.contains("google.com"));
/// assert!(!trie.contains("goo"));
/// ```
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word; empty words and duplicates are ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let node = word
            .chars()
            .fold(&mut self.root, |node, ch| node.children.entry(ch).or_default());
        if !node.terminal {
            node.terminal = true;
            self.count += 1;
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.find(word).is_some_and(|node| node.terminal)
    }

    /// All words starting with `prefix`, in sorted order.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        if let Some(node) = self.find(prefix) {
            collect(node, &mut prefix.to_string(), &mut results);
        }
        results
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
    }
}

// Children are visited in key order, so results come out sorted.
fn collect(node: &TrieNode, prefix: &mut String, results: &mut Vec<String>) {
    if node.terminal {
        results.push(prefix.clone());
    }
    for (ch, child) in &node.children {
        prefix.push(*ch);
        collect(child, prefix, results);
        prefix.pop();
    }
}
