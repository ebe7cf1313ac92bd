pub mod coord;
pub mod lexer;
pub mod shunting;
pub mod tree;

use std::collections::BTreeSet;

use crate::error::ParseError;
use crate::literal::Literal;

/// Parses one FOL sentence and reduces it to CNF, returning its clauses as
/// literal sets. This ties together tokenizing, Shunting-Yard, tree
/// construction, and the three CNF-normalization passes.
pub fn parse_cnf_clauses(input: &str) -> Result<Vec<BTreeSet<Literal>>, ParseError> {
    let tokens = lexer::tokenize(input)?;
    let postfix = shunting::to_postfix(tokens)?;
    let tree = tree::build_tree(postfix)?;
    let tree = tree::eliminate_implications(tree);
    let tree = tree::propagate_negation(tree);
    let tree = tree::distribute(tree);
    Ok(tree::extract_clauses(&tree))
}

/// Parses a single ground query literal, such as `Likes(Jane,John)` or its
/// negation `~Likes(Jane,John)`.
pub fn parse_literal(input: &str) -> Result<Literal, ParseError> {
    let tokens = lexer::tokenize(input)?;
    match tokens.len() {
        1 => match tokens.into_iter().next().unwrap() {
            lexer::Token::Literal(lit) => Ok(lit),
            _ => Err(ParseError::new(coord::Coord::start(), format!("{input:?} is not a predicate literal"))),
        },
        2 => match (&tokens[0], &tokens[1]) {
            (lexer::Token::Not, lexer::Token::Literal(lit)) => Ok(lit.negate()),
            _ => Err(ParseError::new(coord::Coord::start(), format!("{input:?} is not a single predicate literal"))),
        },
        _ => Err(ParseError::new(coord::Coord::start(), format!("{input:?} is not a single predicate literal"))),
    }
}
