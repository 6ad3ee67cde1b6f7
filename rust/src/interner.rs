//! Task name interning.
//!
//! Maps string task names to dense 0-based task ids so named projects can be
//! fed to the matrix-based engine.

use rustc_hash::FxHashMap;

/// Interner that assigns ids in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TaskNameInterner {
    to_id: FxHashMap<String, usize>,
    names: Vec<String>,
}

impl TaskNameInterner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Intern a name, returning its id and whether it was newly added.
    pub fn intern(&mut self, name: &str) -> (usize, bool) {
        if let Some(&id) = self.to_id.get(name) {
            return (id, false);
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.to_id.insert(name.to_string(), id);
        (id, true)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.to_id.get(name).copied()
    }

    #[inline]
    pub fn resolve(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(|s| s.as_str())
    }

    /// Names in id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut interner = TaskNameInterner::with_capacity(3);

        assert_eq!(interner.intern("design"), (0, true));
        assert_eq!(interner.intern("build"), (1, true));
        assert_eq!(interner.intern("design"), (0, false));

        assert_eq!(interner.len(), 2);
        assert_eq!(interner.resolve(1), Some("build"));
        assert_eq!(interner.get("design"), Some(0));
        assert_eq!(interner.get("ship"), None);
        assert_eq!(interner.names(), &["design".to_string(), "build".to_string()]);
    }
}
