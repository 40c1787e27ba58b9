//! Parsers for whitespace-separated edge lists.
//!
//! Two line formats share the same files:
//!
//! ```text
//! # unweighted: origin destination [ignored...]
//! 1 2
//! 2 3
//!
//! # weighted: origin destination weight
//! 1 2 5.0
//! 2 3 2.0
//! ```
//!
//! [`parse_edges`] takes the first two tokens of every line with at least two tokens, so a
//! weighted file can be read as an unweighted one. [`parse_weighted_edges`] only accepts lines
//! with exactly three tokens. Tokens are separated by any run of whitespace and line numbers in
//! errors are 1-based.
//!
//! Lines that do not fit the format are skipped in lenient mode (the default) and rejected in
//! strict mode; see [`LoaderConfig`].

mod config;

pub use config::LoaderConfig;

use crate::{
    graph::{Edge, WeightedEdge},
    Result,
};

/// Parses an unweighted edge list.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedLine`] if one of the first two tokens of a line is not an
/// unsigned integer, or, in strict mode, if a non-blank line has fewer than two tokens.
///
/// # Examples
///
/// ```rust
/// use depscope::{graph::Edge, loader::parse_edges, LoaderConfig};
///
/// let edges = parse_edges("1 2\n\n2 3 7.5\nstray\n", &LoaderConfig::default())?;
/// assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(2, 3)]);
///
/// assert!(parse_edges("stray\n", &LoaderConfig::strict()).is_err());
/// # Ok::<(), depscope::Error>(())
/// ```
pub fn parse_edges(text: &str, config: &LoaderConfig) -> Result<Vec<Edge<u32>>> {
    let mut edges = Vec::new();
    let mut skipped = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let mut tokens = raw.split_whitespace();
        let (Some(origin), Some(destination)) = (tokens.next(), tokens.next()) else {
            if raw.trim().is_empty() {
                continue;
            }
            if config.strict {
                return Err(malformed_line!(line, "expected at least 2 tokens, found 1"));
            }
            log::warn!("skipping line {line}: expected at least 2 tokens, found 1");
            skipped += 1;
            continue;
        };

        edges.push(Edge::new(
            parse_node(origin, line)?,
            parse_node(destination, line)?,
        ));
    }

    log::debug!("loaded {} edges, skipped {} lines", edges.len(), skipped);
    Ok(edges)
}

/// Parses a weighted edge list.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedLine`] if a three-token line has a node token that is not an
/// unsigned integer or a weight token that is not a number. In strict mode, non-blank lines
/// without exactly three tokens and weights that are negative or not finite are errors too.
///
/// # Examples
///
/// ```rust
/// use depscope::{graph::WeightedEdge, loader::parse_weighted_edges, LoaderConfig};
///
/// let edges = parse_weighted_edges("1 2 5.0\n1 3\n", &LoaderConfig::default())?;
/// assert_eq!(edges, vec![WeightedEdge::new(1, 2, 5.0)]);
/// # Ok::<(), depscope::Error>(())
/// ```
pub fn parse_weighted_edges(text: &str, config: &LoaderConfig) -> Result<Vec<WeightedEdge<u32>>> {
    let mut edges = Vec::new();
    let mut skipped = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let [origin, destination, weight] = tokens.as_slice() else {
            if tokens.is_empty() {
                continue;
            }
            if config.strict {
                return Err(malformed_line!(
                    line,
                    "expected 3 tokens, found {}",
                    tokens.len()
                ));
            }
            log::warn!(
                "skipping line {line}: expected 3 tokens, found {}",
                tokens.len()
            );
            skipped += 1;
            continue;
        };

        let weight = parse_weight(weight, line)?;
        if config.strict && !(weight.is_finite() && weight >= 0.0) {
            return Err(malformed_line!(
                line,
                "weight {} must be finite and non-negative",
                weight
            ));
        }

        edges.push(WeightedEdge::new(
            parse_node(origin, line)?,
            parse_node(destination, line)?,
            weight,
        ));
    }

    log::debug!(
        "loaded {} weighted edges, skipped {} lines",
        edges.len(),
        skipped
    );
    Ok(edges)
}

fn parse_node(token: &str, line: usize) -> Result<u32> {
    token
        .parse()
        .map_err(|_| malformed_line!(line, "invalid node identifier '{}'", token))
}

fn parse_weight(token: &str, line: usize) -> Result<f64> {
    token
        .parse()
        .map_err(|_| malformed_line!(line, "invalid weight '{}'", token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_edges_basic() {
        let edges = parse_edges("1 2\n2 3\n1 3\n", &LoaderConfig::default()).unwrap();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)]);
    }

    #[test]
    fn test_parse_edges_ignores_extra_tokens() {
        let edges = parse_edges("1 2 5.0\n2 3 2.0 extra\n", &LoaderConfig::strict()).unwrap();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(2, 3)]);
    }

    #[test]
    fn test_parse_edges_whitespace_runs() {
        let edges = parse_edges("  4\t\t5  \r\n6   7", &LoaderConfig::default()).unwrap();
        assert_eq!(edges, vec![Edge::new(4, 5), Edge::new(6, 7)]);
    }

    #[test]
    fn test_parse_edges_blank_lines_always_skipped() {
        let edges = parse_edges("\n   \n1 2\n\t\n", &LoaderConfig::strict()).unwrap();
        assert_eq!(edges, vec![Edge::new(1, 2)]);
    }

    #[test]
    fn test_parse_edges_single_token_line() {
        let lenient = parse_edges("1 2\n3\n4 5\n", &LoaderConfig::lenient()).unwrap();
        assert_eq!(lenient, vec![Edge::new(1, 2), Edge::new(4, 5)]);

        let strict = parse_edges("1 2\n3\n4 5\n", &LoaderConfig::strict());
        assert!(matches!(strict, Err(Error::MalformedLine { line: 2, .. })));
    }

    #[test]
    fn test_parse_edges_invalid_token_is_error() {
        let result = parse_edges("1 2\nx 3\n", &LoaderConfig::default());
        match result {
            Err(Error::MalformedLine { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("'x'"));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(parse_edges("-1 2\n", &LoaderConfig::default()).is_err());
    }

    #[test]
    fn test_parse_weighted_edges_basic() {
        let edges = parse_weighted_edges(
            "1 2 5.0\n2 3 2\n1 3 10.0\n",
            &LoaderConfig::default(),
        )
        .unwrap();
        assert_eq!(
            edges,
            vec![
                WeightedEdge::new(1, 2, 5.0),
                WeightedEdge::new(2, 3, 2.0),
                WeightedEdge::new(1, 3, 10.0),
            ]
        );
    }

    #[test]
    fn test_parse_weighted_edges_skips_wrong_arity() {
        let text = "1 2\n1 2 3.0\n1 2 3.0 4.0\n";
        let lenient = parse_weighted_edges(text, &LoaderConfig::lenient()).unwrap();
        assert_eq!(lenient, vec![WeightedEdge::new(1, 2, 3.0)]);

        let strict = parse_weighted_edges(text, &LoaderConfig::strict());
        assert!(matches!(strict, Err(Error::MalformedLine { line: 1, .. })));
    }

    #[test]
    fn test_parse_weighted_edges_invalid_weight() {
        let result = parse_weighted_edges("1 2 heavy\n", &LoaderConfig::default());
        assert!(matches!(result, Err(Error::MalformedLine { line: 1, .. })));
    }

    #[test]
    fn test_parse_weighted_edges_negative_weight() {
        let lenient = parse_weighted_edges("1 2 -1.5\n", &LoaderConfig::lenient()).unwrap();
        assert_eq!(lenient[0].weight, -1.5);

        let strict = parse_weighted_edges("1 2 -1.5\n", &LoaderConfig::strict());
        assert!(matches!(strict, Err(Error::MalformedLine { line: 1, .. })));

        let strict = parse_weighted_edges("1 2 NaN\n", &LoaderConfig::strict());
        assert!(matches!(strict, Err(Error::MalformedLine { line: 1, .. })));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_edges("", &LoaderConfig::strict()).unwrap().is_empty());
        assert!(parse_weighted_edges("", &LoaderConfig::strict())
            .unwrap()
            .is_empty());
    }
}
