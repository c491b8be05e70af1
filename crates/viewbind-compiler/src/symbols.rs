//! Name-to-symbol resolution outside the scope object.
//!
//! A [`SymbolRegistry`] is an immutable chain of frames. Extending a
//! registry allocates a new frame on top and leaves the original untouched,
//! so nested binding contexts (each markup level contributing its own names)
//! share the outer frames structurally. Resolution walks innermost-first,
//! which gives inner frames shadowing over outer ones.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use viewbind_core::{DataType, TypeHash};

/// What a registered name stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    /// A host-supplied ambient value of a known static type.
    External {
        /// Its static type.
        data_type: DataType,
    },
    /// A type-level reference, usable as the target of static member access.
    StaticType {
        /// The referenced type.
        type_hash: TypeHash,
    },
}

#[derive(Debug)]
struct Frame {
    entries: FxHashMap<String, Symbol>,
    parent: Option<Arc<Frame>>,
}

/// An immutable, cheaply cloneable symbol table.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    top: Option<Arc<Frame>>,
}

impl SymbolRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new registry with `entries` layered on top of this one.
    ///
    /// The receiver is unchanged; compilations holding it never observe the
    /// new names.
    pub fn extend(&self, entries: impl IntoIterator<Item = (String, Symbol)>) -> Self {
        let entries: FxHashMap<String, Symbol> = entries.into_iter().collect();
        if entries.is_empty() {
            return self.clone();
        }
        Self {
            top: Some(Arc::new(Frame {
                entries,
                parent: self.top.clone(),
            })),
        }
    }

    /// A new registry with one extra name on top.
    pub fn with_symbol(&self, name: impl Into<String>, symbol: Symbol) -> Self {
        self.extend([(name.into(), symbol)])
    }

    /// Resolve a name, innermost frame first.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        let mut frame = self.top.as_deref();
        while let Some(f) = frame {
            if let Some(symbol) = f.entries.get(name) {
                return Some(symbol);
            }
            frame = f.parent.as_deref();
        }
        None
    }
}
