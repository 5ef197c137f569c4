/// A position in a virtual tree, expressed as the sequence of child indices
/// walked from the root. The empty path addresses the root itself.
///
/// Paths are always computed against the *old* tree of a diff, and remain
/// valid as long as edits are applied in the order the differ produced them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreePath {
    path: Vec<usize>,
}

impl TreePath {
    /// The root path.
    pub fn root() -> Self {
        TreePath { path: vec![] }
    }

    /// Construct a path from a slice of child indices.
    pub fn new(v: &[usize]) -> Self {
        TreePath { path: v.to_vec() }
    }

    /// Return a new path extended by one child index.
    pub fn child(&self, idx: usize) -> Self {
        let mut path = self.path.clone();
        path.push(idx);
        TreePath { path }
    }

    /// Does this path address the root?
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// The child indices making up this path, root first.
    pub fn indices(&self) -> &[usize] {
        &self.path
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "/{}",
            self.path
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("/")
        )
    }
}

impl From<Vec<usize>> for TreePath {
    fn from(path: Vec<usize>) -> Self {
        TreePath { path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treepath() {
        let p = TreePath::root();
        assert!(p.is_root());
        assert_eq!(p.to_string(), "/");

        let p = p.child(0).child(2);
        assert!(!p.is_root());
        assert_eq!(p.indices(), &[0, 2]);
        assert_eq!(p.to_string(), "/0/2");

        assert_eq!(TreePath::new(&[0, 2]), p);
        assert_eq!(TreePath::from(vec![0, 2]), p);
    }
}
