use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::clause::Clause;

/// A set of clauses plus a predicate-name index over them.
///
/// The index maps each predicate name appearing anywhere in the knowledge
/// base to every clause that mentions it, so the resolver can look up
/// resolution candidates for a clause without scanning the whole base.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    clauses: BTreeSet<Rc<Clause>>,
    by_name: BTreeMap<String, BTreeSet<Rc<Clause>>>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self {
            clauses: BTreeSet::new(),
            by_name: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Rc<Clause>> {
        self.clauses.iter()
    }

    /// Adds `clause` to the base and indexes it under every predicate name
    /// it mentions. A clause already present is a no-op, matching set
    /// semantics: inserting it again would not change the indexed set it
    /// belongs to.
    pub fn insert(&mut self, clause: Clause) {
        let clause = Rc::new(clause);
        if self.clauses.contains(&clause) {
            return;
        }
        for name in clause.predicate_names() {
            self.by_name.entry(name.to_string()).or_default().insert(clause.clone());
        }
        self.clauses.insert(clause);
    }

    /// Returns the union of every clause set indexed under one of `clause`'s
    /// predicate names — the candidate pool the resolver checks `clause`
    /// against.
    pub fn resolving_candidates(&self, clause: &Clause) -> BTreeSet<Rc<Clause>> {
        let mut candidates = BTreeSet::new();
        for name in clause.predicate_names() {
            if let Some(set) = self.by_name.get(name) {
                candidates.extend(set.iter().cloned());
            }
        }
        candidates
    }
}
