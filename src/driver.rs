use crate::clause::Clause;
use crate::kb::KnowledgeBase;
use crate::literal::Literal;
use crate::resolver;

/// Answers one ground query against `kb` by refutation: negate the query,
/// seed a working copy of the base with it, and saturate. The base itself
/// is never mutated — each query gets its own clone so queries don't leak
/// inferred clauses into one another.
pub fn prove(kb: &KnowledgeBase, query: &Literal, kill_limit: usize) -> bool {
    let mut working = kb.clone();
    let negated_query = Clause::from_literal(query.negate());
    resolver::saturate(&mut working, negated_query, kill_limit)
}
