use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::clause::{Clause, Resolution};
use crate::kb::KnowledgeBase;

/// Default clause-count cutoff: if a saturation round starts with more
/// clauses than this already in the base, resolution gives up rather than
/// running forever on an unsatisfiable-looking but divergent problem.
pub const DEFAULT_KILL_LIMIT: usize = 8000;

/// Runs set-of-support resolution: `query` (already negated by the caller)
/// seeds the support set, and each round resolves every clause in `kb`
/// against only the clauses introduced in the *previous* round, rather than
/// against the whole base. Round 1's support set is the query itself, so
/// the first pass finds everything in `kb` that resolves against it; later
/// rounds expand the frontier one layer at a time. This keeps every clause
/// pair from being checked more than once across the life of the run.
///
/// Returns `true` the moment two clauses resolve to the empty clause (a
/// contradiction, proving the original un-negated query). Returns `false`
/// if a round produces nothing new, or if `kb` ever exceeds `kill_limit`
/// clauses before that happens.
pub fn saturate(kb: &mut KnowledgeBase, query: Clause, kill_limit: usize) -> bool {
    let mut frontier = KnowledgeBase::new();
    frontier.insert(query.clone());
    kb.insert(query);

    loop {
        if kb.len() > kill_limit {
            debug!(size = kb.len(), kill_limit, "resolution cut off: knowledge base too large");
            return false;
        }

        let mut history: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut new_clauses: BTreeSet<Clause> = BTreeSet::new();

        for c1 in kb.clauses() {
            let candidates = frontier.resolving_candidates(c1);
            for c2 in &candidates {
                if c1 == c2 {
                    continue;
                }

                let s1 = c1.to_string();
                let s2 = c2.to_string();

                if let Some(partners) = history.get_mut(&s2) {
                    if partners.remove(&s1) {
                        continue;
                    }
                }
                let mut already_keyed = false;
                if let Some(partners) = history.get(&s1) {
                    already_keyed = true;
                    if partners.contains(&s2) {
                        history.get_mut(&s1).unwrap().remove(&s2);
                        continue;
                    }
                }
                if already_keyed {
                    history.get_mut(&s1).unwrap().insert(s2.clone());
                } else {
                    history.insert(s1.clone(), BTreeSet::from([s2.clone()]));
                }

                trace!(%s1, %s2, "resolving clause pair");
                match c1.resolve(c2) {
                    Resolution::Contradiction => return true,
                    Resolution::Inferred(produced) => new_clauses.extend(produced),
                }
            }
        }

        if new_clauses.iter().all(|c| kb.contains(c)) {
            return false;
        }
        new_clauses.retain(|c| !kb.contains(c));

        frontier = KnowledgeBase::new();
        for c in &new_clauses {
            frontier.insert(c.clone());
        }
        debug!(round_size = new_clauses.len(), kb_size = kb.len(), "advancing resolution frontier");
        for c in new_clauses {
            kb.insert(c);
        }
    }
}
