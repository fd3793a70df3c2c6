// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named, reusable tooltip content.

use alloc::string::String;

use hashbrown::HashMap;

use crate::error::Error;

/// Registry of named template nodes.
///
/// Nodes are stored as given, never cloned into independent copies. Hosts are
/// expected to use shared handles (an element id, an `Rc`, …) so that later
/// mutation of a registered node is visible on subsequent opens.
#[derive(Clone, Debug)]
pub struct Templates<N> {
    entries: HashMap<String, N>,
}

impl<N> Default for Templates<N> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<N> Templates<N> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node` under `name`, as read from a host declaration.
    ///
    /// Fails with [`Error::InvalidArgument`] when the declaration carries no name,
    /// leaving the registry untouched. An existing entry with the same name is replaced.
    pub fn register(&mut self, name: Option<&str>, node: N) -> Result<(), Error> {
        let name = name.ok_or(Error::InvalidArgument {
            reason: "template name must be a string, none given",
        })?;
        self.insert(name, node);
        Ok(())
    }

    /// Register `node` under `name`, returning the node it replaced.
    pub fn insert(&mut self, name: &str, node: N) -> Option<N> {
        self.entries.insert(String::from(name), node)
    }

    /// Remove the template registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<N> {
        self.entries.remove(name)
    }

    /// Look up the template registered under `name`.
    pub fn get(&self, name: &str) -> Option<&N> {
        self.entries.get(name)
    }

    /// Whether a template is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no templates are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
