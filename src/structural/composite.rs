//! # Composite: leaves and groups treated uniformly in a tree.
//!
//! [`Node`] is a closed sum of the two shapes a tree position can take.
//! Every operation works on either shape, so callers never branch on
//! "is this a leaf" - and [`render_tree`] walks the whole structure the
//! same way at every level.

/// One position in the tree: a leaf or a composite with children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node.
    Leaf {
        /// Display name.
        name: String,
    },
    /// Inner node holding children in insertion order.
    Composite {
        /// Display name.
        name: String,
        /// Child nodes, insertion-ordered.
        children: Vec<Node>,
    },
}

impl Node {
    /// Creates a leaf.
    pub fn leaf(name: impl Into<String>) -> Self {
        Node::Leaf { name: name.into() }
    }

    /// Creates an empty composite.
    pub fn composite(name: impl Into<String>) -> Self {
        Node::Composite {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Display name of this node.
    pub fn name(&self) -> &str {
        match self {
            Node::Leaf { name } | Node::Composite { name, .. } => name,
        }
    }

    /// Children of this node; empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Composite { children, .. } => children,
        }
    }

    /// Appends a child. A no-op on a leaf, mirroring the uniform
    /// interface of the pattern.
    pub fn push(&mut self, child: Node) {
        if let Node::Composite { children, .. } = self {
            children.push(child);
        }
    }

    /// Number of nodes in the subtree rooted here, including this one.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Node::size).sum::<usize>()
    }
}

/// Renders the tree as an indented listing, two dashes per level.
///
/// ```text
/// root
/// --leaf
/// --branch
/// ----branch-leaf-left
/// ```
pub fn render_tree(root: &Node) -> String {
    fn traverse(node: &Node, indent: usize, out: &mut String) {
        out.push_str(&"--".repeat(indent));
        out.push_str(node.name());
        out.push('\n');
        for child in node.children() {
            traverse(child, indent + 1, out);
        }
    }

    let mut out = String::new();
    traverse(root, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Node {
        let mut tree = Node::composite("root");
        tree.push(Node::leaf("leaf"));

        let mut branch = Node::composite("branch");
        branch.push(Node::leaf("branch-leaf-left"));
        branch.push(Node::leaf("branch-leaf-right"));

        let mut branch_mid = Node::composite("branch-mid");
        branch_mid.push(Node::leaf("branch-mid-leaf-left"));
        branch_mid.push(Node::leaf("branch-mid-leaf-right"));
        branch.push(branch_mid);

        tree.push(branch);
        tree
    }

    #[test]
    fn test_render_matches_expected_layout() {
        let rendered = render_tree(&sample_tree());
        let expected = "\
root
--leaf
--branch
----branch-leaf-left
----branch-leaf-right
----branch-mid
------branch-mid-leaf-left
------branch-mid-leaf-right
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_uniform_size_over_both_shapes() {
        assert_eq!(Node::leaf("x").size(), 1);
        assert_eq!(sample_tree().size(), 8);
    }

    #[test]
    fn test_push_on_leaf_is_noop() {
        let mut leaf = Node::leaf("solo");
        leaf.push(Node::leaf("ignored"));
        assert_eq!(leaf.size(), 1);
        assert!(leaf.children().is_empty());
    }
}
