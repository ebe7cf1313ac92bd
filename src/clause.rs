use std::collections::BTreeSet;
use std::fmt::{self, Display};

use crate::literal::Literal;

/// A disjunction of literals — one line of a CNF knowledge base.
///
/// Equality, ordering and hashing all come from the literal set itself, so
/// two clauses built from the same literals in different orders compare
/// equal regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

/// The result of attempting to resolve one clause against another.
pub enum Resolution {
    /// Both clauses consisted of exactly the complementary literal that
    /// unified, with nothing left over: the empty clause, a contradiction.
    Contradiction,
    /// Zero or more new clauses produced by resolving on every pair of
    /// complementary, unifiable literals found between the two clauses.
    Inferred(BTreeSet<Clause>),
}

impl Clause {
    pub fn new(literals: BTreeSet<Literal>) -> Self {
        Self { literals }
    }

    pub fn from_literal(literal: Literal) -> Self {
        let mut literals = BTreeSet::new();
        literals.insert(literal);
        Self { literals }
    }

    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn predicate_names(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(Literal::name)
    }

    /// Resolves `self` against `other` on every complementary, unifiable
    /// literal pair.
    ///
    /// A pair is a resolution candidate when the two literals share a name,
    /// disagree in polarity, and their argument lists unify. Finding a pair
    /// whose parent clauses are each a single literal (so nothing remains
    /// once that literal is removed) is a contradiction, and short-circuits
    /// the remaining pairs — matching the original prover's early return.
    pub fn resolve(&self, other: &Clause) -> Resolution {
        let mut inferred = BTreeSet::new();
        for l1 in &self.literals {
            for l2 in &other.literals {
                if l1.is_negated() == l2.is_negated() || l1.name() != l2.name() {
                    continue;
                }
                let Some(subst) = l1.unify_with(l2) else {
                    continue;
                };
                let rest1: BTreeSet<Literal> = self.literals.iter().cloned().filter(|l| l != l1).collect();
                let rest2: BTreeSet<Literal> = other.literals.iter().cloned().filter(|l| l != l2).collect();
                if rest1.is_empty() && rest2.is_empty() {
                    return Resolution::Contradiction;
                }
                let mut combined: BTreeSet<Literal> = rest1.iter().map(|l| l.substitute(&subst)).collect();
                combined.extend(rest2.iter().map(|l| l.substitute(&subst)));
                inferred.insert(Clause::new(combined));
            }
        }
        Resolution::Inferred(inferred)
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for lit in &self.literals {
            if !first {
                write!(f, "|")?;
            }
            first = false;
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Term;

    fn lit(name: &str, negated: bool, args: &[&str]) -> Literal {
        Literal::new(name, negated, args.iter().map(|a| Term::from_token(a)).collect())
    }

    #[test]
    fn resolving_complementary_unit_clauses_is_a_contradiction() {
        let a = Clause::from_literal(lit("P", false, &["John"]));
        let b = Clause::from_literal(lit("P", true, &["John"]));
        assert!(matches!(a.resolve(&b), Resolution::Contradiction));
    }

    #[test]
    fn resolving_on_one_literal_leaves_the_rest_behind() {
        // (~P(x) | Q(x)) resolved with P(John) leaves Q(John).
        let mut lits = BTreeSet::new();
        lits.insert(lit("P", true, &["x"]));
        lits.insert(lit("Q", false, &["x"]));
        let c1 = Clause::new(lits);
        let c2 = Clause::from_literal(lit("P", false, &["John"]));

        match c1.resolve(&c2) {
            Resolution::Inferred(set) => {
                assert_eq!(set.len(), 1);
                let only = set.iter().next().unwrap();
                assert_eq!(only.to_string(), "Q(John)");
            }
            Resolution::Contradiction => panic!("expected an inferred clause"),
        }
    }

    #[test]
    fn no_complementary_literals_infers_nothing() {
        let a = Clause::from_literal(lit("P", false, &["John"]));
        let b = Clause::from_literal(lit("Q", false, &["John"]));
        match a.resolve(&b) {
            Resolution::Inferred(set) => assert!(set.is_empty()),
            Resolution::Contradiction => panic!("should not contradict"),
        }
    }

    #[test]
    fn display_joins_literals_with_pipe() {
        let mut lits = BTreeSet::new();
        lits.insert(lit("P", false, &["x"]));
        lits.insert(lit("Q", true, &["x"]));
        let c = Clause::new(lits);
        let s = c.to_string();
        assert!(s.contains('|'));
        assert!(s.contains("P(x)"));
        assert!(s.contains("~Q(x)"));
    }
}
