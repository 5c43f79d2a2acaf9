//! Arena of reusable prefix-tree nodes.
//!
//! The trie encoder builds a fresh prefix tree for every message. Instead of
//! allocating a node per dictionary entry and dropping the whole tree at the
//! end of the call, nodes live in one flat `Vec` addressed by [`NodeId`].
//! [`NodePool::reset`] logically frees every slot without releasing the
//! backing storage, so the next call reuses the same memory.
//!
//! # Handle validity
//!
//! Each handle carries the pool generation it was issued in. `reset`
//! starts a new generation; handles from an older generation are stale and
//! must not be used. [`NodePool::is_live`] reports whether a handle is still
//! valid, and accessors check it in debug builds.

use std::collections::HashMap;

/// Handle to a node inside a [`NodePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

/// One prefix-tree node: a dictionary index plus children keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Dictionary index of the block spelled by the path to this node
    pub number: usize,
    /// Child nodes keyed by the next symbol
    children: HashMap<char, NodeId>,
}

impl Node {
    /// Number of children attached to this node.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    fn clear(&mut self) {
        self.number = 0;
        self.children.clear();
    }
}

/// Growable arena of trie nodes with bulk reset.
///
/// # Invariants
/// - Slots `0..next_free` are in use for the current generation
/// - Slots `next_free..nodes.len()` are free and may hold stale contents
#[derive(Debug, Clone)]
pub struct NodePool {
    nodes: Vec<Node>,
    next_free: usize,
    generation: u32,
}

impl NodePool {
    /// Create a pool with `capacity` pre-built free slots.
    pub fn new(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.resize_with(capacity, Node::default);
        Self {
            nodes,
            next_free: 0,
            generation: 0,
        }
    }

    /// Hand out the next free slot as a cleared node (number 0, no children).
    ///
    /// Doubles the number of slots when the pool is exhausted.
    pub fn acquire(&mut self) -> NodeId {
        if self.next_free == self.nodes.len() {
            let grow_by = self.nodes.len().max(1);
            self.nodes.resize_with(self.nodes.len() + grow_by, Node::default);
        }

        let index = self.next_free;
        self.nodes[index].clear();
        self.next_free += 1;

        NodeId {
            index: index as u32,
            generation: self.generation,
        }
    }

    /// Free every slot without deallocating.
    ///
    /// All handles issued before this call become stale.
    pub fn reset(&mut self) {
        self.next_free = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether `id` was issued since the last reset.
    pub fn is_live(&self, id: NodeId) -> bool {
        id.generation == self.generation && (id.index as usize) < self.next_free
    }

    /// Number of nodes handed out since the last reset.
    pub fn in_use(&self) -> usize {
        self.next_free
    }

    /// Number of slots backing the pool, used or free.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        debug_assert!(self.is_live(id), "stale node handle {id:?}");
        &self.nodes[id.index as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        debug_assert!(self.is_live(id), "stale node handle {id:?}");
        &mut self.nodes[id.index as usize]
    }

    /// Child of `parent` reached by `symbol`, if any.
    pub fn child(&self, parent: NodeId, symbol: char) -> Option<NodeId> {
        self.node(parent).children.get(&symbol).copied()
    }

    /// Attach `child` under `parent` at edge `symbol`.
    pub fn attach(&mut self, parent: NodeId, symbol: char, child: NodeId) {
        debug_assert!(self.is_live(child), "stale node handle {child:?}");
        self.node_mut(parent).children.insert(symbol, child);
    }
}

impl Default for NodePool {
    fn default() -> Self {
        Self::new(0)
    }
}
