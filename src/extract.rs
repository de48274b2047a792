use crate::fold::normalize;
use crate::trie::{NodeId, TrieView};
use rustc_hash::FxHashSet;

/// Streaming keyword extractor.
///
/// Feed characters with [`consume`](Extractor::consume) and collect the clean
/// names seen with [`finish`](Extractor::finish). A character that breaks a
/// partial match resets the scan to the root and is not itself retried as the
/// start of a new keyword.
pub struct Extractor<'t> {
    trie: TrieView<'t>,
    case_sensitive: bool,
    current: NodeId,
    found: FxHashSet<String>,
}

impl<'t> Extractor<'t> {
    pub fn new(trie: TrieView<'t>, case_sensitive: bool) -> Self {
        Self {
            trie,
            case_sensitive,
            current: trie.root(),
            found: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn consume(&mut self, c: char) {
        let key = normalize(c, self.case_sensitive);
        match self.trie.child(self.current, key) {
            Some(next) => {
                self.current = next;
                if let Some(payload) = self.trie.payload(next) {
                    if !self.found.contains(payload.clean_name.as_str()) {
                        self.found.insert(payload.clean_name.clone());
                    }
                }
            }
            None => self.current = self.trie.root(),
        }
    }

    pub fn finish(self) -> FxHashSet<String> {
        self.found
    }
}
