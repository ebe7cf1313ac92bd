use std::collections::{BTreeMap, BTreeSet};

use crate::clause::Clause;
use crate::literal::Literal;
use crate::subst::Substitution;
use crate::term::Term;

const ALPHA: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Produces the fresh-variable-name sequence `aa, ab, ..., az, ba, ...` by
/// treating `count` as a base-26 place-value number whose digits are
/// one-indexed into [`ALPHA`].
fn base26_name(count: usize) -> String {
    let mut start = count + 26;
    let mut suffix = String::new();
    while start >= 26 {
        let val = start % 26;
        suffix.insert(0, ALPHA[val]);
        start /= 26;
    }
    suffix.insert(0, ALPHA[start - 1]);
    suffix
}

/// Hands out fresh variable names, one per call, in `aa, ab, ..., az, ba,
/// ...` order. Shared across every clause standardized in one knowledge-base
/// preparation pass so no two clauses can ever collide on a variable name.
#[derive(Debug, Clone, Default)]
pub struct VarCounter {
    next: usize,
}

impl VarCounter {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next_name(&mut self) -> String {
        let name = base26_name(self.next);
        self.next += 1;
        name
    }
}

/// Renames every variable in `clause` to a fresh name drawn from `counter`,
/// consistently across all of the clause's literals — the same source
/// variable always maps to the same fresh name within one clause, and two
/// different clauses standardized from the same counter never share a name.
pub fn standardize_clause(clause: &Clause, counter: &mut VarCounter) -> Clause {
    let mut vars = BTreeSet::new();
    for lit in clause.literals() {
        for arg in lit.args() {
            if let Term::Var(name) = arg {
                vars.insert(name.clone());
            }
        }
    }

    let mut rename = BTreeMap::new();
    for var in vars {
        rename.insert(var, counter.next_name());
    }

    let mut subst = Substitution::new();
    for (old, new) in &rename {
        subst.bind(old.clone(), Term::Var(new.clone()));
    }

    let literals: BTreeSet<Literal> = clause.literals().iter().map(|l| l.substitute(&subst)).collect();
    Clause::new(literals)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn base26_sequence_matches_expected_prefix() {
        assert_eq!(base26_name(0), "aa");
        assert_eq!(base26_name(1), "ab");
        assert_eq!(base26_name(25), "az");
        assert_eq!(base26_name(26), "ba");
    }

    #[test]
    fn counter_advances_monotonically() {
        let mut counter = VarCounter::new();
        assert_eq!(counter.next_name(), "aa");
        assert_eq!(counter.next_name(), "ab");
        assert_eq!(counter.next_name(), "ac");
    }

    #[test]
    fn standardize_renames_shared_variable_consistently() {
        use crate::literal::Literal;

        let mut lits = BTreeSet::new();
        lits.insert(Literal::new("P", true, vec![Term::Var("x".to_string())]));
        lits.insert(Literal::new(
            "Q",
            false,
            vec![Term::Var("x".to_string()), Term::Const("John".to_string())],
        ));
        let clause = Clause::new(lits);

        let mut counter = VarCounter::new();
        let standardized = standardize_clause(&clause, &mut counter);

        let fresh: BTreeSet<&Term> = standardized
            .literals()
            .iter()
            .flat_map(|l| l.args())
            .filter(|t| t.is_var())
            .collect();
        assert_eq!(fresh.len(), 1, "the single source variable must map to one fresh name");
    }

    #[test]
    fn standardize_never_reuses_a_name_across_clauses() {
        let mut counter = VarCounter::new();
        let mut lits_a = BTreeSet::new();
        lits_a.insert(Literal::new("P", false, vec![Term::Var("x".to_string())]));
        let a = standardize_clause(&Clause::new(lits_a), &mut counter);

        let mut lits_b = BTreeSet::new();
        lits_b.insert(Literal::new("P", false, vec![Term::Var("x".to_string())]));
        let b = standardize_clause(&Clause::new(lits_b), &mut counter);

        assert_ne!(a, b);
    }
}
