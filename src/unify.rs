//! Robinson unification over flat term lists, with no occurs check.
//!
//! There is nothing to occurs-check against: terms are leaves, never
//! compound, so a variable can never occur inside the term it is about to
//! be bound to.

use crate::subst::Substitution;
use crate::term::Term;

/// Unifies two equal-length argument lists, threading one substitution
/// across every position. Returns `None` if any position conflicts.
pub fn unify_args(a: &[Term], b: &[Term]) -> Option<Substitution> {
    unify_list(a, b, Some(Substitution::new()))
}

fn unify_list(a: &[Term], b: &[Term], subst: Option<Substitution>) -> Option<Substitution> {
    let subst = subst?;
    match (a.split_first(), b.split_first()) {
        (None, None) => Some(subst),
        (Some((ha, ta)), Some((hb, tb))) => {
            let head = unify_term(ha, hb, Some(subst));
            unify_list(ta, tb, head)
        }
        // Mismatched lengths: callers check arity before reaching here.
        _ => Some(subst),
    }
}

fn unify_term(a: &Term, b: &Term, subst: Option<Substitution>) -> Option<Substitution> {
    let subst = subst?;
    if a == b {
        return Some(subst);
    }
    if a.is_var() {
        return unify_var(a.name(), b, subst);
    }
    if b.is_var() {
        return unify_var(b.name(), a, subst);
    }
    None
}

fn unify_var(var: &str, x: &Term, subst: Substitution) -> Option<Substitution> {
    if let Some(bound) = subst.get(var).cloned() {
        return unify_term(&bound, x, Some(subst));
    }
    if let Term::Var(xn) = x {
        if let Some(bound) = subst.get(xn).cloned() {
            return unify_term(&Term::Var(var.to_string()), &bound, Some(subst));
        }
    }
    let mut subst = subst;
    subst.bind(var.to_string(), x.clone());
    Some(subst)
}
