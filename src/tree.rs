//! Generic rooted tree with ordered children.
//!
//! Nodes live in an arena owned by the [`Tree`] and are addressed by
//! [`NodeId`]. Children keep insertion order; every node except the root
//! records its parent.

use std::ops::Index;

/// Handle to a node inside one [`Tree`].
///
/// Only meaningful for the tree that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its tree's arena (creation order).
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One node: payload, parent back-reference and ordered children.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode<T> {
    data: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<T> TreeNode<T> {
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed rooted tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> Tree<T> {
    /// Create a tree holding only a root node.
    pub fn new(root: T) -> Self {
        Self {
            nodes: vec![TreeNode {
                data: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node (always present).
    #[inline]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `data` as the last child of `parent` and return the new node.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, data: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(TreeNode::data)
    }

    /// Children of `id` in insertion order. Empty for unknown ids.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(TreeNode::children).unwrap_or(&[])
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(TreeNode::parent)
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order walk of the subtree rooted at `start`, yielding each node
    /// with its depth relative to `start`.
    pub fn pre_order_from(&self, start: NodeId) -> PreOrder<'_, T> {
        let stack = if self.node(start).is_some() {
            vec![(start, 0)]
        } else {
            Vec::new()
        };
        PreOrder { tree: self, stack }
    }

    /// Pre-order walk of the whole tree, root first.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        self.pre_order_from(self.root())
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.pre_order().map(|(_, depth)| depth).max().unwrap_or(0)
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        &self.nodes[id.0].data
    }
}

/// Iterator returned by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<(NodeId, usize)>,
}

impl<T> Iterator for PreOrder<'_, T> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        // Reverse so the first child is visited first.
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((id, depth))
    }
}
