//! Menu hierarchy traversal
//!
//! Menus form a tree where every node carries a payload (the command it
//! launches, or a placeholder for submenus). [`MenuIter`] walks a tree
//! depth-first in pre-order: a node's payload comes before those of its
//! children, and children are visited in order.
//!
//! Iterators are single-pass. Build a new one with [`MenuNode::iter`] for each
//! traversal. Items cannot be removed through the iterator.

use std::iter::FusedIterator;

/// A node of a menu tree
pub trait MenuNode {
    type Payload;

    fn children(&self) -> &[Self]
    where
        Self: Sized;

    fn payload(&self) -> &Self::Payload;

    /// Fresh pre-order traversal rooted at this node
    fn iter(&self) -> MenuIter<'_, Self>
    where
        Self: Sized,
    {
        MenuIter::new(self)
    }
}

/// Lazy depth-first pre-order iterator over menu payloads
#[derive(Debug)]
pub struct MenuIter<'a, N: MenuNode> {
    // Nodes still to visit, next on top
    stack: Vec<&'a N>,
}

impl<'a, N: MenuNode> MenuIter<'a, N> {
    pub fn new(root: &'a N) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, N: MenuNode> Iterator for MenuIter<'a, N> {
    type Item = &'a N::Payload;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node.payload())
    }
}

impl<N: MenuNode> FusedIterator for MenuIter<'_, N> {}

/// Plain owned menu tree
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowMenu<T> {
    payload: T,
    children: Vec<ShadowMenu<T>>,
}

impl<T> ShadowMenu<T> {
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ShadowMenu<T>) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: ShadowMenu<T>) {
        self.children.push(child);
    }

    /// Number of nodes in this subtree, root included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ShadowMenu::node_count).sum::<usize>()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T> MenuNode for ShadowMenu<T> {
    type Payload = T;

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn payload(&self) -> &T {
        &self.payload
    }
}
