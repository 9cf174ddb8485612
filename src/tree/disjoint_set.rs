//! Union-find over dense indices, used to check that edge sets form trees.
//!
//! [`DisjointSet`] stores one parent index per element and compresses paths on
//! every `find`, so repeated connectivity checks stay close to linear.

/// Disjoint sets over `0..len`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Create `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Root of the set containing `idx`, with path compression.
    pub fn find(&mut self, idx: usize) -> usize {
        let mut root = idx;
        while root != self.parent[root] {
            root = self.parent[root];
        }
        // Path compression
        let mut cur = idx;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns `false` if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (small, big) = if self.size[ra] < self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}
