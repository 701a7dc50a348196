/// Append-only index of every filename ever inserted.
///
/// A binary search tree over lexicographic name order, kept as a node
/// arena with integer handles. Two deliberate quirks of the shape:
///
///  - Duplicate keys are routed right, so inserting the same name twice
///    grows a chain down the right branch instead of being rejected.
///  - Nothing is ever removed. Deleting an entry from a directory leaves
///    its name behind here, so `contains` answers "was this name ever
///    inserted", not "does it exist right now".
#[derive(Debug, Default)]
pub struct NameIndex {
    nodes: Vec<Node>,
}

#[derive(Debug)]
struct Node {
    key: String,
    left: Option<usize>,
    right: Option<usize>,
}

impl Node {
    fn new(key: &str) -> Self {
        Self {
            key: key.into(),
            left: None,
            right: None,
        }
    }
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total nodes, counting duplicates. Monotonically increasing.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert(&mut self, key: impl AsRef<str>) {
        let key = key.as_ref();
        if self.nodes.is_empty() {
            self.nodes.push(Node::new(key));
            return;
        }

        // Node 0 is always the root.
        let mut at = 0;
        loop {
            let go_left = key < self.nodes[at].key.as_str();
            let slot = match go_left {
                true => self.nodes[at].left,
                false => self.nodes[at].right,
            };
            match slot {
                Some(next) => at = next,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(Node::new(key));
                    match go_left {
                        true => self.nodes[at].left = Some(id),
                        false => self.nodes[at].right = Some(id),
                    }
                    return;
                }
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        let mut at = 0;
        loop {
            let node = &self.nodes[at];
            if node.key == key {
                return true;
            }
            let slot = match key < node.key.as_str() {
                true => node.left,
                false => node.right,
            };
            match slot {
                Some(next) => at = next,
                None => return false,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let idx = NameIndex::new();
        assert!(idx.is_empty());
        assert!(!idx.contains("anything"));
    }

    #[test]
    fn insert_and_find() {
        let mut idx = NameIndex::new();
        idx.insert("m.txt");
        idx.insert("a.txt");
        idx.insert("z.txt");

        assert!(idx.contains("a.txt"));
        assert!(idx.contains("m.txt"));
        assert!(idx.contains("z.txt"));
        assert!(!idx.contains("b.txt"));
    }

    #[test]
    fn duplicates_accumulate() {
        let mut idx = NameIndex::new();
        idx.insert("same.txt");
        idx.insert("same.txt");
        idx.insert("same.txt");

        // Each duplicate becomes its own node down the right branch.
        assert_eq!(idx.len(), 3);
        assert!(idx.contains("same.txt"));
    }

    #[test]
    fn grows_forever() {
        let mut idx = NameIndex::new();
        for name in ["b", "a", "c", "a", "b"] {
            idx.insert(name);
        }
        assert_eq!(idx.len(), 5);

        // There is no removal operation; the only way down is up.
        assert!(idx.contains("a"));
        assert!(idx.contains("b"));
        assert!(idx.contains("c"));
    }
}
