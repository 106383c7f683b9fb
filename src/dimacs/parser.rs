use std::{
    fs::File,
    io::{BufRead, BufReader},
    mem,
    path::Path,
};

use anyhow::{bail, Context, Result};

use super::sat_instance::{Literal, SATInstance};

pub struct DimacsParser {
    file: File,
}

impl DimacsParser {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<DimacsParser> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        Ok(Self { file })
    }

    pub fn parse(self) -> Result<SATInstance> {
        parse_reader(BufReader::new(self.file))
    }
}

/// Reads a CNF formula in DIMACS form. The problem line may be either `p cnf <vars> <clauses>`
/// or the older `<tag> <vars> <clauses>`; exactly `<clauses>` zero-terminated clauses are read.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<SATInstance> {
    let mut lines = reader.lines();

    // Skip until not a comment
    let header = loop {
        let Some(line) = lines.next() else {
            bail!("unexpected end of input: missing problem line");
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment(trimmed) {
            continue;
        }
        break line;
    };

    // Read problem line
    let fields = header.split_whitespace().collect::<Vec<_>>();
    let (n_vars, n_clauses) = match fields.as_slice() {
        ["p", "cnf", v, c] | [_, v, c] => (
            v.parse::<usize>()
                .with_context(|| format!("invalid variable count `{v}`"))?,
            c.parse::<usize>()
                .with_context(|| format!("invalid clause count `{c}`"))?,
        ),
        _ => bail!("malformed problem line `{}`", header.trim()),
    };

    let mut clauses: Vec<Vec<Literal>> = Vec::with_capacity(n_clauses);
    let mut current = Vec::new();
    if n_clauses > 0 {
        'lines: for line in lines {
            let line = line?;
            let trimmed = line.trim_start();
            if is_comment(trimmed) {
                continue;
            }
            // SATLIB instances end the clause section with a lone '%'
            if trimmed.starts_with('%') {
                break;
            }
            for tok in trimmed.split_whitespace() {
                let lit: Literal = tok
                    .parse()
                    .with_context(|| format!("invalid literal `{tok}`"))?;
                if lit == 0 {
                    clauses.push(mem::take(&mut current));
                    if clauses.len() == n_clauses {
                        break 'lines;
                    }
                } else {
                    if lit.unsigned_abs() as usize > n_vars {
                        bail!("literal {lit} out of range (declared {n_vars} variables)");
                    }
                    current.push(lit);
                }
            }
        }
    }

    if !current.is_empty() {
        bail!("unexpected end of input: clause not terminated by 0");
    }
    if clauses.len() < n_clauses {
        bail!(
            "unexpected end of input: expected {} clauses, found {}",
            n_clauses,
            clauses.len()
        );
    }

    Ok(SATInstance::from_clauses(n_vars, clauses))
}

// A lone `c` or `c` followed by whitespace; `cnf ...` is a bare-tag problem line.
fn is_comment(line: &str) -> bool {
    match line.strip_prefix('c') {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(s: &str) -> Result<SATInstance> {
        parse_reader(s.as_bytes())
    }

    #[test]
    fn parses_comments_header_and_clauses() {
        let instance = parse_str(
            "c example\nc second comment\np cnf 3 2\n1 -3 0\n2 3\n-1 0\n",
        )
        .unwrap();
        assert_eq!(instance.n_vars, 3);
        assert_eq!(instance.n_clauses, 2);
        assert_eq!(instance.clauses[0].lits, vec![1, -3]);
        assert_eq!(instance.clauses[1].lits, vec![2, 3, -1]);
    }

    #[test]
    fn accepts_bare_tag_header() {
        let instance = parse_str("cnf 2 1\n1 2 0\n").unwrap();
        assert_eq!(instance.n_vars, 2);
        assert_eq!(instance.n_clauses, 1);
        assert_eq!(instance.clauses[0].lits, vec![1, 2]);

        let instance = parse_str("c\nc\tcomment\ncnf 3 2\n1 -3 0\nc between\n2 0\n").unwrap();
        assert_eq!(instance.n_vars, 3);
        assert_eq!(instance.clauses.len(), 2);
        assert_eq!(instance.clauses[1].lits, vec![2]);
    }

    #[test]
    fn comment_lines_need_a_separator() {
        assert!(is_comment("c"));
        assert!(is_comment("c some text"));
        assert!(is_comment("c\ttabbed"));
        assert!(!is_comment("cnf 2 1"));
        assert!(!is_comment("p cnf 2 1"));
    }

    #[test]
    fn stops_at_percent_marker_and_declared_count() {
        let instance = parse_str("p cnf 2 1\n1 -2 0\n%\n0\n").unwrap();
        assert_eq!(instance.clauses.len(), 1);

        let instance = parse_str("p cnf 2 1\n1 0\n2 0\n").unwrap();
        assert_eq!(instance.clauses.len(), 1);
    }

    #[test]
    fn keeps_empty_clause() {
        let instance = parse_str("p cnf 1 2\n0\n1 0\n").unwrap();
        assert!(instance.clauses[0].lits.is_empty());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_str("c only comments\n").is_err());
        assert!(parse_str("p cnf x 1\n1 0\n").is_err());
        assert!(parse_str("p cnf 2 1\n3 0\n").is_err());
        assert!(parse_str("p cnf 2 1\n1 a 0\n").is_err());
        assert!(parse_str("p cnf 2 2\n1 0\n").is_err());
        assert!(parse_str("p cnf 2 1\n1 2\n").is_err());
    }
}
