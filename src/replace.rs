use crate::fold::normalize;
use crate::trie::{NodeId, TrieView};

/// Streaming keyword replacer.
///
/// Characters on a live trie path are held in `pending`. When the path breaks,
/// `pending` is replaced by the clean name if the path ended on a keyword and
/// copied verbatim otherwise; the breaking character is then tried again from
/// the root.
pub struct Replacer<'t> {
    trie: TrieView<'t>,
    case_sensitive: bool,
    current: NodeId,
    pending: String,
    output: String,
    replacements: u64,
}

impl<'t> Replacer<'t> {
    pub fn new(trie: TrieView<'t>, case_sensitive: bool) -> Self {
        Self::with_capacity(trie, case_sensitive, 0)
    }

    /// Pre-sizes the output buffer, typically to the input length.
    pub fn with_capacity(trie: TrieView<'t>, case_sensitive: bool, capacity: usize) -> Self {
        Self {
            trie,
            case_sensitive,
            current: trie.root(),
            pending: String::new(),
            output: String::with_capacity(capacity),
            replacements: 0,
        }
    }

    #[inline]
    pub fn consume(&mut self, c: char) {
        let key = normalize(c, self.case_sensitive);
        if let Some(next) = self.trie.child(self.current, key) {
            self.pending.push(c);
            self.current = next;
            return;
        }

        self.flush();

        match self.trie.child(self.trie.root(), key) {
            Some(next) => {
                self.pending.push(c);
                self.current = next;
            }
            None => self.output.push(c),
        }
    }

    fn flush(&mut self) {
        match self.trie.payload(self.current) {
            Some(payload) => {
                self.output.push_str(&payload.clean_name);
                self.replacements += 1;
            }
            None => self.output.push_str(&self.pending),
        }
        self.pending.clear();
        self.current = self.trie.root();
    }

    /// Keywords substituted so far.
    pub fn replacements(&self) -> u64 {
        self.replacements
    }

    pub fn finish(self) -> String {
        self.finish_with_count().0
    }

    /// Like [`finish`](Self::finish), also returning the total replacement count.
    pub fn finish_with_count(mut self) -> (String, u64) {
        self.flush();
        (self.output, self.replacements)
    }
}
