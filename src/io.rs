use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, InputError};
use crate::literal::Literal;
use crate::parser::parse_literal;
use crate::term::Term;

/// The parsed contents of an input file: the ground queries to answer, and
/// the raw FOL sentences making up the knowledge base (not yet normalized
/// to CNF — that happens once they're handed to the knowledge-base
/// preparation step).
#[derive(Debug, Clone)]
pub struct InputFile {
    pub queries: Vec<Literal>,
    pub sentences: Vec<String>,
}

fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Reads and validates `input.txt`'s line-oriented format:
///
/// ```text
/// <N>
/// <query_1>
/// ...
/// <query_N>
/// <M>
/// <sentence_1>
/// ...
/// <sentence_M>
/// ```
///
/// Every query must be a single ground predicate literal; a query
/// containing a variable is rejected before any resolution work begins.
pub fn read_input(path: &Path) -> Result<InputFile, Error> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, &e))?;
    let lines: Vec<&str> = text.lines().collect();

    let mut cursor = 0usize;
    let n_queries = parse_count(&lines, cursor, |found| InputError::BadQueryCount { found })?;
    cursor += 1;

    if lines.len() < cursor + n_queries {
        return Err(InputError::TruncatedInput {
            declared: n_queries,
            found: lines.len().saturating_sub(cursor),
            kind: "queries",
        }
        .into());
    }

    let mut queries = Vec::with_capacity(n_queries);
    for (i, raw) in lines[cursor..cursor + n_queries].iter().enumerate() {
        let cleaned = strip_whitespace(raw);
        let literal = parse_literal(&cleaned)?;
        if literal.args().iter().any(Term::is_var) {
            return Err(InputError::NonGroundQuery {
                index: i,
                literal: cleaned,
            }
            .into());
        }
        queries.push(literal);
    }
    cursor += n_queries;

    let n_sentences = parse_count(&lines, cursor, |found| InputError::BadSentenceCount {
        line: cursor + 1,
        found,
    })?;
    cursor += 1;

    if lines.len() < cursor + n_sentences {
        return Err(InputError::TruncatedInput {
            declared: n_sentences,
            found: lines.len().saturating_sub(cursor),
            kind: "sentences",
        }
        .into());
    }

    let sentences: Vec<String> = lines[cursor..cursor + n_sentences].iter().map(|l| strip_whitespace(l)).collect();

    debug!(queries = queries.len(), sentences = sentences.len(), "read input file");
    Ok(InputFile { queries, sentences })
}

fn parse_count(lines: &[&str], at: usize, err: impl FnOnce(String) -> InputError) -> Result<usize, Error> {
    let raw = lines.get(at).copied().unwrap_or("");
    raw.trim().parse::<usize>().map_err(|_| err(raw.to_string()).into())
}

/// Overwrites `path` with one `TRUE`/`FALSE` line per entry in `results`.
pub fn write_output(path: &Path, results: &[bool]) -> Result<(), Error> {
    let mut body = String::new();
    for &result in results {
        body.push_str(if result { "TRUE\n" } else { "FALSE\n" });
    }
    fs::write(path, body).map_err(|e| io_error(path, &e))?;
    Ok(())
}

fn io_error(path: &Path, e: &std::io::Error) -> Error {
    tracing::error!(path = %path.display(), error = %e, "I/O failure");
    InputError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn reads_queries_and_sentences() {
        let f = write_fixture("1\nQ(John)\n2\nP(John)\nP(x)=>Q(x)\n");
        let input = read_input(f.path()).unwrap();
        assert_eq!(input.queries.len(), 1);
        assert_eq!(input.sentences, vec!["P(John)".to_string(), "P(x)=>Q(x)".to_string()]);
    }

    #[test]
    fn accepts_a_negated_query() {
        let f = write_fixture("1\n~P(John)\n0\n");
        let input = read_input(f.path()).unwrap();
        assert_eq!(input.queries[0].to_string(), "~P(John)");
    }

    #[test]
    fn rejects_non_ground_query() {
        let f = write_fixture("1\nQ(x)\n0\n");
        assert!(read_input(f.path()).is_err());
    }

    #[test]
    fn rejects_truncated_sentence_block() {
        let f = write_fixture("0\n2\nP(John)\n");
        assert!(read_input(f.path()).is_err());
    }

    #[test]
    fn strips_embedded_whitespace_from_each_line() {
        let f = write_fixture("1\nQ( John )\n0\n");
        let input = read_input(f.path()).unwrap();
        assert_eq!(input.queries[0].to_string(), "Q(John)");
    }

    #[test]
    fn write_output_produces_one_line_per_result() {
        let f = tempfile::NamedTempFile::new().unwrap();
        write_output(f.path(), &[true, false, true]).unwrap();
        let contents = fs::read_to_string(f.path()).unwrap();
        assert_eq!(contents, "TRUE\nFALSE\nTRUE\n");
    }
}
