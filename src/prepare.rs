use std::collections::BTreeSet;

use tracing::debug;

use crate::clause::Clause;
use crate::error::Error;
use crate::kb::KnowledgeBase;
use crate::parser::parse_cnf_clauses;
use crate::standardize::{standardize_clause, VarCounter};

/// Normalizes a batch of raw FOL sentences into a [`KnowledgeBase`]: dedup
/// identical sentence text, reduce each to CNF, standardize apart, index.
///
/// One [`VarCounter`] is shared across every sentence so no two clauses in
/// the resulting base can ever share a variable name.
pub fn prepare_knowledge_base(sentences: &[String]) -> Result<KnowledgeBase, Error> {
    let unique: BTreeSet<&String> = sentences.iter().collect();
    let mut kb = KnowledgeBase::new();
    let mut counter = VarCounter::new();
    for sentence in unique {
        for literals in parse_cnf_clauses(sentence)? {
            let clause = standardize_clause(&Clause::new(literals), &mut counter);
            kb.insert(clause);
        }
    }
    debug!(clauses = kb.len(), sentences = sentences.len(), "prepared knowledge base");
    Ok(kb)
}
