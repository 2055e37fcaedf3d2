//! Disjoint sets for Kruskal's cycle check.

/// Component tracking over vertices `0..len`.
///
/// `union` returns `false` when both vertices already share a component,
/// which is exactly the case in which Kruskal must reject an edge.
pub trait DisjointSets {
    fn new(len: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&mut self, x: usize) -> usize;

    fn union(&mut self, x: usize, y: usize) -> bool;

    fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

/// Every vertex stores its component label directly.
///
/// `find` is one array read. `union` relabels the members of the smaller
/// component, so each vertex is relabeled at most `log2(n)` times.
#[derive(Clone, Debug)]
pub struct ExplicitSets {
    label: Vec<u32>,
    members: Vec<Vec<u32>>,
}

impl ExplicitSets {
    #[inline]
    pub fn component_size(&self, x: usize) -> usize {
        self.members[self.label[x] as usize].len()
    }
}

impl DisjointSets for ExplicitSets {
    fn new(len: usize) -> Self {
        Self {
            label: (0..len as u32).collect(),
            members: (0..len as u32).map(|x| vec![x]).collect(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.label.len()
    }

    #[inline]
    fn find(&mut self, x: usize) -> usize {
        self.label[x] as usize
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let lx = self.label[x] as usize;
        let ly = self.label[y] as usize;
        if lx == ly {
            return false;
        }

        let (small, large) = if self.members[lx].len() < self.members[ly].len() {
            (lx, ly)
        } else {
            (ly, lx)
        };
        let moved = std::mem::take(&mut self.members[small]);
        for &m in &moved {
            self.label[m as usize] = large as u32;
        }
        self.members[large].extend(moved);
        true
    }
}

/// Parent-pointer forest with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct ImplicitSets {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSets for ImplicitSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len as u32).collect(),
            rank: vec![0; len],
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }

        let mut node = x;
        while self.parent[node] as usize != root {
            let next = self.parent[node] as usize;
            self.parent[node] = root as u32;
            node = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry as u32,
            std::cmp::Ordering::Greater => self.parent[ry] = rx as u32,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx as u32;
                self.rank[rx] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn check_basic<D: DisjointSets>() {
        let mut sets = D::new(6);
        assert_eq!(sets.len(), 6);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert!(sets.union(1, 3));
        assert!(sets.same(0, 2));
        assert!(!sets.same(0, 4));
        assert!(!sets.union(3, 0));
        assert!(!sets.union(5, 5));
    }

    #[test]
    fn explicit_basic() {
        check_basic::<ExplicitSets>();
    }

    #[test]
    fn implicit_basic() {
        check_basic::<ImplicitSets>();
    }

    #[test]
    fn explicit_relabels_smaller_side() {
        let mut sets = ExplicitSets::new(5);
        sets.union(0, 1);
        sets.union(0, 2);
        let big = sets.find(0);
        sets.union(3, 0);
        assert_eq!(sets.find(3), big);
        assert_eq!(sets.component_size(3), 4);
        assert_eq!(sets.component_size(4), 1);
    }

    #[test]
    fn variants_agree_on_random_unions() {
        let mut rng = StdRng::seed_from_u64(0xD5E7_0000);
        let n = 500;
        let mut explicit = ExplicitSets::new(n);
        let mut implicit = ImplicitSets::new(n);
        for step in 0..3_000 {
            let x = rng.random_range(0..n);
            let y = rng.random_range(0..n);
            assert_eq!(explicit.union(x, y), implicit.union(x, y), "step={step}");
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            assert_eq!(explicit.same(a, b), implicit.same(a, b), "step={step}");
        }
    }
}
