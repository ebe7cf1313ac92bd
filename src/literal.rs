use std::fmt::{self, Display};

use crate::subst::Substitution;
use crate::term::Term;

/// A single predicate application, possibly negated: `Name(arg, arg, ...)`.
///
/// Literals never nest other literals — a [`Clause`](crate::clause::Clause)
/// is a flat disjunction of these.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    name: String,
    negated: bool,
    args: Vec<Term>,
}

impl Literal {
    pub fn new(name: impl Into<String>, negated: bool, args: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            negated,
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn args(&self) -> &[Term] {
        &self.args
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Returns a copy of this literal with its polarity flipped.
    pub fn negate(&self) -> Literal {
        Literal {
            name: self.name.clone(),
            negated: !self.negated,
            args: self.args.clone(),
        }
    }

    /// Rewrites this literal's arguments through `subst`, leaving name and
    /// polarity untouched.
    pub fn substitute(&self, subst: &Substitution) -> Literal {
        Literal {
            name: self.name.clone(),
            negated: self.negated,
            args: subst.apply_terms(&self.args),
        }
    }

    /// Attempts to unify this literal's arguments with `other`'s.
    ///
    /// Unification is only attempted when both literals share a name and
    /// arity; polarity is irrelevant here and is checked separately by the
    /// resolution step, which is the only caller that cares whether one
    /// side is negated and the other is not.
    pub fn unify_with(&self, other: &Literal) -> Option<Substitution> {
        if self.name != other.name || self.args.len() != other.args.len() {
            return None;
        }
        crate::unify::unify_args(&self.args, &other.args)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "~")?;
        }
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lit(name: &str, negated: bool, args: &[&str]) -> Literal {
        Literal::new(name, negated, args.iter().map(|a| Term::from_token(a)).collect())
    }

    #[test]
    fn display_matches_canonical_predicate_syntax() {
        let l = lit("Likes", false, &["x", "John"]);
        assert_eq!(l.to_string(), "Likes(x,John)");

        let n = lit("Likes", true, &["x", "John"]);
        assert_eq!(n.to_string(), "~Likes(x,John)");
    }

    #[test]
    fn negate_flips_polarity_only() {
        let l = lit("P", false, &["x"]);
        let n = l.negate();
        assert!(n.is_negated());
        assert_eq!(n.name(), l.name());
        assert_eq!(n.args(), l.args());
    }

    #[test]
    fn unify_requires_matching_name_and_arity() {
        let a = lit("P", false, &["x"]);
        let b = lit("Q", false, &["x"]);
        assert!(a.unify_with(&b).is_none());

        let c = lit("P", true, &["x", "y"]);
        assert!(a.unify_with(&c).is_none());
    }

    #[test]
    fn unify_succeeds_on_variable_to_constant_binding() {
        let a = lit("P", false, &["x"]);
        let b = lit("P", false, &["John"]);
        let subst = a.unify_with(&b).expect("should unify");
        assert_eq!(subst.apply_term(&Term::Var("x".to_string())), Term::Const("John".to_string()));
    }

    #[test]
    fn substitute_rewrites_args_without_touching_polarity_or_name() {
        let a = lit("P", true, &["x"]);
        let mut subst = Substitution::new();
        subst.bind("x".to_string(), Term::Const("A".to_string()));
        let rewritten = a.substitute(&subst);
        assert_eq!(rewritten.to_string(), "~P(A)");
    }
}
