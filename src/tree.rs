/// Indicates how a token sequence orders operators relative to operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notation {
    /// Operators follow their operands, e.g. `23*5+`.
    Postfix,
    /// Operators precede their operands, e.g. `+*235`.
    Prefix,
}

/// A node of a binary expression tree.
///
/// Each node holds exactly one token of the source expression. Leaves hold
/// operand symbols; internal nodes hold operator symbols and exclusively own
/// both of their children. A node is a leaf if and only if both children are
/// absent: [`TreeNode::leaf`] takes no children, [`TreeNode::branch`] takes
/// two, and a tree cannot be mutated after construction, so a node with
/// exactly one child never occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    value: char,
    left:  Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a childless node holding an operand symbol.
    #[must_use]
    pub const fn leaf(value: char) -> Self {
        Self { value,
               left: None,
               right: None, }
    }

    /// Creates an internal node holding an operator symbol and both of its
    /// children.
    #[must_use]
    pub fn branch(value: char, left: Self, right: Self) -> Self {
        Self { value,
               left: Some(Box::new(left)),
               right: Some(Box::new(right)), }
    }

    /// Gets the token this node holds.
    #[must_use]
    pub const fn value(&self) -> char {
        self.value
    }

    /// Gets the left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Gets the right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node is a leaf, i.e. both children are absent.
    ///
    /// ## Example
    /// ```
    /// use polix::tree::TreeNode;
    ///
    /// let node = TreeNode::branch('+', TreeNode::leaf('1'), TreeNode::leaf('2'));
    ///
    /// assert!(!node.is_leaf());
    /// assert!(node.left().is_some_and(TreeNode::is_leaf));
    /// ```
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
