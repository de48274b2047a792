use crate::extract::Extractor;
use crate::fold::{normalize, normalize_str};
use crate::replace::Replacer;
use crate::trie::{KeywordTrie, NodeId, Payload, TrieView};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::trace;

/// A keyword dictionary that extracts or replaces keywords in a single pass.
///
/// Keywords are added with [`add_keyword`](Self::add_keyword) or
/// [`add_keyword_with_clean_name`](Self::add_keyword_with_clean_name), after
/// which [`extract_keywords`](Self::extract_keywords) and
/// [`replace`](Self::replace) can be called any number of times, from any
/// number of threads.
///
/// ```
/// use flashtext::KeywordProcessor;
///
/// let mut processor = KeywordProcessor::default();
/// processor.add_keyword_with_clean_name("Big Apple", "New York");
/// processor.add_keyword("Bay Area");
///
/// let found = processor.extract_keywords("I love big apple and bay area.");
/// assert!(found.contains("New York"));
/// assert!(found.contains("Bay Area"));
///
/// assert_eq!(processor.replace("I love big apple."), "I love New York.");
/// ```
#[derive(Debug)]
pub struct KeywordProcessor {
    case_sensitive: bool,
    trie: KeywordTrie,
    terms: usize,
}

impl Default for KeywordProcessor {
    /// A case-insensitive processor.
    fn default() -> Self {
        Self::new(false)
    }
}

impl KeywordProcessor {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            trie: KeywordTrie::new(),
            terms: 0,
        }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Adds `word` with itself as clean name.
    pub fn add_keyword(&mut self, word: &str) {
        self.add_keyword_with_clean_name(word, word);
    }

    /// Adds `word`, reported and substituted as `clean_name`.
    ///
    /// Adding a word that is already present replaces its clean name. The
    /// empty word is accepted and marks the root itself as a keyword.
    pub fn add_keyword_with_clean_name(&mut self, word: &str, clean_name: &str) {
        let keyword = normalize_str(word, self.case_sensitive);
        trace!(keyword = %keyword, clean_name, "Adding keyword");
        self.trie.insert(
            keyword.chars(),
            Payload {
                keyword: keyword.clone(),
                clean_name: clean_name.to_string(),
            },
        );
        self.terms += 1;
    }

    /// Number of `add_keyword*` calls made so far.
    ///
    /// Re-adding an existing keyword counts again, so this is not the number
    /// of distinct keywords.
    pub fn len(&self) -> usize {
        self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms == 0
    }

    /// Trie nodes allocated, root included.
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Returns the clean name stored for `word`, if `word` is a keyword.
    pub fn get(&self, word: &str) -> Option<&str> {
        let view = self.trie.view();
        let node = view.walk(word.chars().map(|c| normalize(c, self.case_sensitive)))?;
        view.payload(node).map(|p| p.clean_name.as_str())
    }

    /// Returns the clean names of all keywords found in `text`.
    pub fn extract_keywords(&self, text: &str) -> FxHashSet<String> {
        self.extract_keywords_from_chars(text.chars())
    }

    pub fn extract_keywords_from_chars<I: IntoIterator<Item = char>>(
        &self,
        chars: I,
    ) -> FxHashSet<String> {
        let mut extractor = self.extractor();
        for c in chars {
            extractor.consume(c);
        }
        extractor.finish()
    }

    /// Returns `text` with every keyword found replaced by its clean name.
    pub fn replace(&self, text: &str) -> String {
        let mut replacer = Replacer::with_capacity(self.view(), self.case_sensitive, text.len());
        for c in text.chars() {
            replacer.consume(c);
        }
        replacer.finish()
    }

    pub fn replace_chars<I: IntoIterator<Item = char>>(&self, chars: I) -> String {
        let mut replacer = self.replacer();
        for c in chars {
            replacer.consume(c);
        }
        replacer.finish()
    }

    pub fn extractor(&self) -> Extractor<'_> {
        Extractor::new(self.view(), self.case_sensitive)
    }

    pub fn replacer(&self) -> Replacer<'_> {
        Replacer::new(self.view(), self.case_sensitive)
    }

    #[inline]
    pub fn view(&self) -> TrieView<'_> {
        self.trie.view()
    }
}

/// Dumps the trie, one `char:clean name` line per node, indented by depth.
impl fmt::Display for KeywordProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node(
            f: &mut fmt::Formatter<'_>,
            view: TrieView<'_>,
            node: NodeId,
            depth: usize,
        ) -> fmt::Result {
            if let Some(payload) = view.payload(node) {
                f.write_str(&payload.clean_name)?;
            }
            writeln!(f)?;
            for (c, child) in view.sorted_children(node) {
                write!(f, "{:depth$}{}:", "", c, depth = depth)?;
                write_node(f, view, child, depth + 1)?;
            }
            Ok(())
        }

        write_node(f, self.view(), NodeId::ROOT, 0)
    }
}
