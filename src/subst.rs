use std::collections::BTreeMap;

use crate::term::Term;

/// A mapping from variable name to term.
///
/// Applying a [`Substitution`] to a literal's argument list replaces each
/// argument that is a key in the map with its image, as a single
/// simultaneous rewrite — there is no fixed-point iteration inside one
/// application. The unifier is the only thing that composes substitutions,
/// by threading one accumulator through successive argument pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: BTreeMap<String, Term>,
}

impl Substitution {
    pub fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, var: &str) -> Option<&Term> {
        self.bindings.get(var)
    }

    pub fn bind(&mut self, var: String, term: Term) {
        self.bindings.insert(var, term);
    }

    /// Rewrites a single term through this substitution. Constants and
    /// unbound variables pass through unchanged.
    pub fn apply_term(&self, term: &Term) -> Term {
        match term {
            Term::Var(name) => self.bindings.get(name).cloned().unwrap_or_else(|| term.clone()),
            Term::Const(_) => term.clone(),
        }
    }

    /// Rewrites an argument list, applying [`Self::apply_term`] to each.
    pub fn apply_terms(&self, terms: &[Term]) -> Vec<Term> {
        terms.iter().map(|t| self.apply_term(t)).collect()
    }
}
