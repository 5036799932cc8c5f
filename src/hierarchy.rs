use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

/// Which child slot of a staff node an insertion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Parses user-supplied side strings: case-insensitive, surrounding
    /// whitespace ignored. Anything that does not normalize to exactly
    /// "left" or "right" is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }
}

/// Tree node in the arena-based staff hierarchy.
#[derive(Debug)]
pub struct StaffNode {
    /// Staff member name, unique by convention (lookup takes the first
    /// depth-first match)
    pub name: String,
    /// Index of the left report in the arena, None while the slot is open
    pub left: Option<Index>,
    /// Index of the right report in the arena, None while the slot is open
    pub right: Option<Index>,
}

impl StaffNode {
    fn leaf(name: &str) -> Self {
        Self {
            name: name.to_string(),
            left: None,
            right: None,
        }
    }

    fn slot(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Arena-based binary tree modelling a staff reporting hierarchy.
///
/// Uses generational arena for memory-safe node references. Every failure
/// mode of `insert` is reported as `false` with the tree left untouched;
/// traversals are pure reads.
#[derive(Debug)]
pub struct HierarchyTree {
    /// Arena storage for all tree nodes
    arena: Arena<StaffNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for HierarchyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Installs the root node and returns its index. Must be called before
    /// the first `insert`; while no root exists every insert fails.
    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, name: &str) -> Index {
        let idx = self.arena.insert(StaffNode::leaf(name));
        self.root = Some(idx);
        idx
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get(&self, idx: Index) -> Option<&StaffNode> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Finds the first node carrying `name` in depth-first order, left
    /// subtree before right. Duplicate names resolve to the left-biased
    /// first match.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, name: &str) -> Option<Index> {
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                if node.name == name {
                    return Some(idx);
                }
                // Push right first so the left subtree is searched first
                if let Some(right) = node.right {
                    stack.push(right);
                }
                if let Some(left) = node.left {
                    stack.push(left);
                }
            }
        }
        None
    }

    /// Attaches `staff_name` as a new leaf under `parent_name` on `side`.
    ///
    /// Returns `false` without mutating the tree when the root is unset,
    /// `side` does not normalize to "left"/"right", no node named
    /// `parent_name` exists, or the target slot is already occupied.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, parent_name: &str, staff_name: &str, side: &str) -> bool {
        if self.root.is_none() {
            return false;
        }
        let Some(side) = Side::parse(side) else {
            return false;
        };
        let Some(parent_idx) = self.find(parent_name) else {
            return false;
        };

        // Check the slot before allocating so a rejected insert leaves the
        // arena untouched.
        match self.arena.get(parent_idx) {
            Some(parent) if parent.slot(side).is_none() => {}
            _ => return false,
        }

        let child_idx = self.arena.insert(StaffNode::leaf(staff_name));
        if let Some(parent) = self.arena.get_mut(parent_idx) {
            match side {
                Side::Left => parent.left = Some(child_idx),
                Side::Right => parent.right = Some(child_idx),
            }
        }
        true
    }

    /// Pre-order traversal (node, left subtree, right subtree) of the
    /// subtree rooted at `node`. `None` yields an empty sequence.
    ///
    /// All three traversals use explicit stacks instead of recursion so
    /// deep, unbalanced hierarchies cannot exhaust the call stack; the
    /// visitation order matches the recursive definitions exactly.
    #[instrument(level = "trace", skip(self))]
    pub fn preorder(&self, node: Option<Index>) -> Vec<String> {
        let mut names = Vec::new();
        let mut stack = Vec::new();
        if let Some(start) = node {
            stack.push(start);
        }
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                names.push(node.name.clone());
                if let Some(right) = node.right {
                    stack.push(right);
                }
                if let Some(left) = node.left {
                    stack.push(left);
                }
            }
        }
        names
    }

    /// In-order traversal (left subtree, node, right subtree).
    #[instrument(level = "trace", skip(self))]
    pub fn inorder(&self, node: Option<Index>) -> Vec<String> {
        let mut names = Vec::new();
        let mut stack: Vec<Index> = Vec::new();
        let mut current = node;
        while current.is_some() || !stack.is_empty() {
            while let Some(idx) = current {
                stack.push(idx);
                current = self.arena.get(idx).and_then(|n| n.left);
            }
            if let Some(idx) = stack.pop() {
                if let Some(node) = self.arena.get(idx) {
                    names.push(node.name.clone());
                    current = node.right;
                }
            }
        }
        names
    }

    /// Post-order traversal (left subtree, right subtree, node), driven by
    /// a visited-flag stack.
    #[instrument(level = "trace", skip(self))]
    pub fn postorder(&self, node: Option<Index>) -> Vec<String> {
        let mut names = Vec::new();
        let mut stack = Vec::new();
        if let Some(start) = node {
            stack.push((start, false));
        }
        while let Some((idx, visited)) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                if visited {
                    names.push(node.name.clone());
                } else {
                    stack.push((idx, true));
                    if let Some(right) = node.right {
                        stack.push((right, false));
                    }
                    if let Some(left) = node.left {
                        stack.push((left, false));
                    }
                }
            }
        }
        names
    }

    /// Renders the hierarchy as a termtree for diagnostic display.
    /// Returns None for an empty tree. Not a stable or parseable format.
    pub fn render(&self) -> Option<Tree<String>> {
        self.root.map(|root| self.render_node(root))
    }

    fn render_node(&self, idx: Index) -> Tree<String> {
        let Some(node) = self.arena.get(idx) else {
            return Tree::new(String::new());
        };
        let mut tree = Tree::new(node.name.clone());
        if let Some(left) = node.left {
            tree.push(self.render_node(left));
        }
        if let Some(right) = node.right {
            tree.push(self.render_node(right));
        }
        tree
    }
}
