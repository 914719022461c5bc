//! Module `cnf` implements a strict reader for the DIMACS CNF format.
//!
//! The reader validates everything the header promises: exactly one
//! `p cnf` line, literal magnitudes bounded by the variable count, and
//! exactly as many zero-terminated clauses as announced.

use {
    crate::types::{CNFDescription, SolverError},
    std::{
        fmt,
        fs::File,
        io::{BufRead, BufReader},
        path::Path,
    },
};

/// A parsed problem: its description and the raw clauses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cnf {
    pub description: CNFDescription,
    pub clauses: Vec<Vec<i32>>,
}

/// What can go wrong while reading a DIMACS file.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// a second `p` line showed up.
    DuplicateHeader,
    /// the `p cnf <vars> <clauses>` line is malformed.
    InvalidHeader,
    /// a token which is neither a literal nor a delimiter.
    InvalidLiteral(String),
    /// a literal whose variable exceeds the header's bound.
    LiteralOutOfRange(i32, usize),
    /// fewer clauses than the header announced.
    MissingClauses(usize, usize),
    /// clause data before any header, or no header at all.
    MissingHeader,
    /// end of input in the middle of a clause.
    MissingTerminatingZero,
    /// more clauses than the header announced.
    TooManyClauses,
    /// the underlying reader failed.
    IOFailure(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::DuplicateHeader => write!(f, "duplicated 'p cnf' header"),
            ParseError::InvalidHeader => write!(f, "invalid header"),
            ParseError::InvalidLiteral(tok) => write!(f, "invalid literal '{tok}'"),
            ParseError::LiteralOutOfRange(lit, nv) => {
                write!(f, "literal '{lit}' out of range 1..={nv}")
            }
            ParseError::MissingClauses(want, got) => {
                write!(f, "clause missing ({got} of {want} clauses)")
            }
            ParseError::MissingHeader => write!(f, "expected 'c' or 'p'"),
            ParseError::MissingTerminatingZero => write!(f, "terminating zero missing"),
            ParseError::TooManyClauses => write!(f, "too many clauses"),
            ParseError::IOFailure(mes) => write!(f, "{mes}"),
        }
    }
}

impl From<ParseError> for SolverError {
    fn from(err: ParseError) -> SolverError {
        match err {
            ParseError::IOFailure(_) => SolverError::IOError,
            e => SolverError::ParseFailure(e.to_string()),
        }
    }
}

/// read a problem from a DIMACS file.
pub fn load(path: &Path) -> Result<Cnf, ParseError> {
    let file = File::open(path).map_err(|e| ParseError::IOFailure(e.to_string()))?;
    let pathname = path
        .file_name()
        .map_or("--".to_string(), |f| f.to_string_lossy().into_owned());
    parse(BufReader::new(file), &pathname)
}

/// read a problem from any buffered reader.
pub fn parse<R: BufRead>(input: R, pathname: &str) -> Result<Cnf, ParseError> {
    let mut num_vars: usize = 0;
    let mut num_clauses: usize = 0;
    let mut found_header = false;
    let mut clauses: Vec<Vec<i32>> = Vec::new();
    let mut clause: Vec<i32> = Vec::new();
    for line in input.lines() {
        let buf = line.map_err(|e| ParseError::IOFailure(e.to_string()))?;
        let body = buf.trim_start();
        if body.is_empty() || body.starts_with('c') {
            continue;
        }
        if body.starts_with('p') {
            if found_header {
                return Err(ParseError::DuplicateHeader);
            }
            let mut iter = body.split_whitespace();
            if iter.next() != Some("p") || iter.next() != Some("cnf") {
                return Err(ParseError::InvalidHeader);
            }
            num_vars = iter
                .next()
                .and_then(|s| s.parse::<usize>().ok())
                .ok_or(ParseError::InvalidHeader)?;
            num_clauses = iter
                .next()
                .and_then(|s| s.parse::<usize>().ok())
                .ok_or(ParseError::InvalidHeader)?;
            if iter.next().is_some() {
                return Err(ParseError::InvalidHeader);
            }
            found_header = true;
            clauses.reserve(num_clauses);
            continue;
        }
        if !found_header {
            return Err(ParseError::MissingHeader);
        }
        for tok in body.split_whitespace() {
            let lit = tok
                .parse::<i32>()
                .map_err(|_| ParseError::InvalidLiteral(tok.to_string()))?;
            if lit == 0 {
                if clauses.len() == num_clauses {
                    return Err(ParseError::TooManyClauses);
                }
                clauses.push(std::mem::take(&mut clause));
            } else {
                if (lit.unsigned_abs() as usize) > num_vars {
                    return Err(ParseError::LiteralOutOfRange(lit, num_vars));
                }
                clause.push(lit);
            }
        }
    }
    if !found_header {
        return Err(ParseError::MissingHeader);
    }
    if !clause.is_empty() {
        return Err(ParseError::MissingTerminatingZero);
    }
    if clauses.len() != num_clauses {
        return Err(ParseError::MissingClauses(num_clauses, clauses.len()));
    }
    Ok(Cnf {
        description: CNFDescription {
            num_of_variables: num_vars,
            num_of_clauses: num_clauses,
            pathname: pathname.to_string(),
        },
        clauses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_str(s: &str) -> Result<Cnf, ParseError> {
        parse(Cursor::new(s), "--")
    }

    #[test]
    fn test_parse_minimal() {
        let cnf = parse_str("c a comment\np cnf 3 2\n1 -3 0\n2 3 -1 0\n").expect("valid input");
        assert_eq!(cnf.description.num_of_variables, 3);
        assert_eq!(cnf.description.num_of_clauses, 2);
        assert_eq!(cnf.clauses, vec![vec![1, -3], vec![2, 3, -1]]);
    }
    #[test]
    fn test_parse_clause_split_over_lines() {
        let cnf = parse_str("p cnf 2 1\n1\n2\n0\n").expect("valid input");
        assert_eq!(cnf.clauses, vec![vec![1, 2]]);
    }
    #[test]
    fn test_parse_empty_clause_and_empty_problem() {
        assert_eq!(parse_str("p cnf 1 1\n0\n").expect("ok").clauses, vec![Vec::<i32>::new()]);
        assert!(parse_str("p cnf 0 0\n").expect("ok").clauses.is_empty());
    }
    #[test]
    fn test_parse_comment_after_header() {
        let cnf = parse_str("p cnf 1 1\nc interleaved\n1 0\n").expect("valid input");
        assert_eq!(cnf.clauses.len(), 1);
    }
    #[test]
    fn test_missing_header() {
        assert_eq!(parse_str("1 2 0\n"), Err(ParseError::MissingHeader));
        assert_eq!(parse_str(""), Err(ParseError::MissingHeader));
    }
    #[test]
    fn test_duplicate_header() {
        assert_eq!(
            parse_str("p cnf 1 1\np cnf 1 1\n1 0\n"),
            Err(ParseError::DuplicateHeader)
        );
    }
    #[test]
    fn test_invalid_header() {
        assert_eq!(parse_str("p cnf x 1\n"), Err(ParseError::InvalidHeader));
        assert_eq!(parse_str("p sat 1 1\n"), Err(ParseError::InvalidHeader));
        assert_eq!(parse_str("p cnf -3 1\n"), Err(ParseError::InvalidHeader));
    }
    #[test]
    fn test_literal_out_of_range() {
        assert_eq!(
            parse_str("p cnf 2 1\n1 3 0\n"),
            Err(ParseError::LiteralOutOfRange(3, 2))
        );
    }
    #[test]
    fn test_invalid_literal() {
        assert_eq!(
            parse_str("p cnf 2 1\n1 two 0\n"),
            Err(ParseError::InvalidLiteral("two".to_string()))
        );
    }
    #[test]
    fn test_clause_count_mismatch() {
        assert_eq!(
            parse_str("p cnf 2 2\n1 0\n"),
            Err(ParseError::MissingClauses(2, 1))
        );
        assert_eq!(
            parse_str("p cnf 2 1\n1 0\n2 0\n"),
            Err(ParseError::TooManyClauses)
        );
    }
    #[test]
    fn test_missing_terminating_zero() {
        assert_eq!(
            parse_str("p cnf 2 1\n1 2\n"),
            Err(ParseError::MissingTerminatingZero)
        );
    }
}
