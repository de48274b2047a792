use rustc_hash::FxHashMap;

/// Index of a node inside a [`KeywordTrie`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, present in every trie.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

/// Data carried by a terminal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// The keyword as stored, after case normalization.
    pub keyword: String,
    /// Text reported by extraction and substituted by replacement.
    pub clean_name: String,
}

#[derive(Debug, Default)]
struct Node {
    children: FxHashMap<char, NodeId>,
    payload: Option<Payload>,
}

/// Character trie stored as a flat arena of nodes.
///
/// Nodes are only ever appended, so a `NodeId` stays valid for the lifetime
/// of the trie. Mutation needs `&mut self`; readers go through [`TrieView`].
#[derive(Debug)]
pub struct KeywordTrie {
    nodes: Vec<Node>,
}

impl Default for KeywordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Walks `key` from the root, creating missing children, and stores
    /// `payload` on the final node. An existing payload is overwritten.
    ///
    /// An empty `key` makes the root terminal.
    pub fn insert<I: IntoIterator<Item = char>>(&mut self, key: I, payload: Payload) -> NodeId {
        let mut current = NodeId::ROOT;
        for c in key {
            current = match self.nodes[current.index()].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.alloc();
                    self.nodes[current.index()].children.insert(c, child);
                    child
                }
            };
        }
        self.nodes[current.index()].payload = Some(payload);
        current
    }

    fn alloc(&mut self) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::default());
        NodeId(id)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn view(&self) -> TrieView<'_> {
        TrieView { nodes: &self.nodes }
    }
}

/// Read-only handle to a [`KeywordTrie`], shared freely between scans.
#[derive(Clone, Copy, Debug)]
pub struct TrieView<'t> {
    nodes: &'t [Node],
}

impl<'t> TrieView<'t> {
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Returns the node that `c`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node.index()].children.get(&c).copied()
    }

    #[inline]
    pub fn payload(&self, node: NodeId) -> Option<&'t Payload> {
        self.nodes[node.index()].payload.as_ref()
    }

    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.index()].payload.is_some()
    }

    /// Follows `key` from the root; None as soon as an edge is missing.
    pub fn walk<I: IntoIterator<Item = char>>(&self, key: I) -> Option<NodeId> {
        key.into_iter()
            .try_fold(self.root(), |node, c| self.child(node, c))
    }

    /// Children of `node` in ascending character order.
    pub fn sorted_children(&self, node: NodeId) -> Vec<(char, NodeId)> {
        let mut children: Vec<_> = self.nodes[node.index()]
            .children
            .iter()
            .map(|(&c, &id)| (c, id))
            .collect();
        children.sort_unstable_by_key(|&(c, _)| c);
        children
    }
}
