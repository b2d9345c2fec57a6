// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Reader for a small DOT subset
//!
//! Accepts `graph`/`digraph` bodies made of node statements, edge chains
//! with an optional `[label=W]` weight (default 1) and `key=value`
//! assignments, which are ignored. Undirected edges are emitted in both
//! directions so the graph model always receives a directed edge set.

use crate::error::{GraphError, ParseError};
use crate::graph::Graph;
use crate::types::{Edge, Weight};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

/// Weight used when an edge carries no label
pub const DEFAULT_WEIGHT: Weight = 1;

/// Structured result of reading a graph description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription {
    /// Whether the file declared a `digraph`
    pub directed: bool,
    /// Directed edges, both directions for undirected graphs
    pub edges: Vec<Edge>,
    /// Distinct vertex labels in lexical order
    pub vertices: Vec<String>,
}

impl GraphDescription {
    /// Build the graph model from this description
    ///
    /// # Errors
    ///
    /// Propagates construction errors from [`Graph::build`].
    pub fn into_graph(self) -> Result<Graph, GraphError> {
        Graph::build(self.vertices, self.edges, self.directed)
    }
}

/// Read and parse a DOT file
///
/// # Errors
///
/// Fails when the file cannot be read or does not parse.
pub fn read_file(path: &Path) -> Result<GraphDescription> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse DOT source text
///
/// # Errors
///
/// Returns a [`ParseError`] pointing at the offending token.
pub fn parse(input: &str) -> Result<GraphDescription, ParseError> {
    let tokens = tokenize(input)?;
    Parser::new(tokens).graph()
}

// =============================================================================
// Tokenizer
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Id(String),
    Quoted(String),
    Undirected,
    Directed,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Equals,
    Semi,
    Comma,
}

impl Kind {
    fn text(&self) -> String {
        match self {
            Self::Id(s) => s.clone(),
            Self::Quoted(s) => format!("\"{s}\""),
            Self::Undirected => "--".into(),
            Self::Directed => "->".into(),
            Self::LBrace => "{".into(),
            Self::RBrace => "}".into(),
            Self::LBracket => "[".into(),
            Self::RBracket => "]".into(),
            Self::Equals => "=".into(),
            Self::Semi => ";".into(),
            Self::Comma => ",".into(),
        }
    }
}

#[derive(Debug, Clone)]
struct Token {
    kind: Kind,
    line: usize,
    column: usize,
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.')
}

/// Whether the next char continues an id, counting `-` only when an id
/// char follows it (`n-1`), so `a--b` and `a->b` still split
fn continues_id(chars: &Peekable<Chars<'_>>) -> bool {
    let mut ahead = chars.clone();
    match ahead.next() {
        Some('-') => ahead.next().is_some_and(is_id_char),
        Some(c) => is_id_char(c),
        None => false,
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let (mut line, mut column) = (1usize, 1usize);

    macro_rules! bump {
        () => {{
            let c = chars.next();
            if c == Some('\n') {
                line += 1;
                column = 1;
            } else if c.is_some() {
                column += 1;
            }
            c
        }};
    }

    while let Some(&c) = chars.peek() {
        let (tok_line, tok_column) = (line, column);
        let push = |tokens: &mut Vec<Token>, kind: Kind| {
            tokens.push(Token {
                kind,
                line: tok_line,
                column: tok_column,
            });
        };

        match c {
            c if c.is_whitespace() => {
                bump!();
            }
            '#' => {
                while let Some(&c) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    bump!();
                }
            }
            '/' => {
                bump!();
                match chars.peek() {
                    Some('/') => {
                        while let Some(&c) = chars.peek() {
                            if c == '\n' {
                                break;
                            }
                            bump!();
                        }
                    }
                    Some('*') => {
                        bump!();
                        let mut prev = '\0';
                        loop {
                            match bump!() {
                                Some('/') if prev == '*' => break,
                                Some(c) => prev = c,
                                None => {
                                    return Err(ParseError::UnexpectedEof {
                                        expected: "end of block comment",
                                    })
                                }
                            }
                        }
                    }
                    _ => {
                        return Err(ParseError::UnexpectedToken {
                            expected: "comment",
                            found: "/".into(),
                            line: tok_line,
                            column: tok_column,
                        })
                    }
                }
            }
            '"' => {
                bump!();
                let mut value = String::new();
                loop {
                    match bump!() {
                        Some('"') => break,
                        Some('\\') => {
                            if let Some(escaped) = bump!() {
                                value.push(escaped);
                            }
                        }
                        Some(c) => value.push(c),
                        None => {
                            return Err(ParseError::UnterminatedString {
                                line: tok_line,
                                column: tok_column,
                            })
                        }
                    }
                }
                push(&mut tokens, Kind::Quoted(value));
            }
            '-' => {
                bump!();
                match chars.peek() {
                    Some('-') => {
                        bump!();
                        push(&mut tokens, Kind::Undirected);
                    }
                    Some('>') => {
                        bump!();
                        push(&mut tokens, Kind::Directed);
                    }
                    // Negative numeral
                    Some(&d) if d.is_ascii_digit() => {
                        let mut value = String::from("-");
                        while continues_id(&chars) {
                            if let Some(c) = bump!() {
                                value.push(c);
                            }
                        }
                        push(&mut tokens, Kind::Id(value));
                    }
                    _ => {
                        return Err(ParseError::UnexpectedToken {
                            expected: "'--' or '->'",
                            found: "-".into(),
                            line: tok_line,
                            column: tok_column,
                        })
                    }
                }
            }
            '{' | '}' | '[' | ']' | '=' | ';' | ',' => {
                bump!();
                let kind = match c {
                    '{' => Kind::LBrace,
                    '}' => Kind::RBrace,
                    '[' => Kind::LBracket,
                    ']' => Kind::RBracket,
                    '=' => Kind::Equals,
                    ';' => Kind::Semi,
                    _ => Kind::Comma,
                };
                push(&mut tokens, kind);
            }
            c if is_id_char(c) => {
                let mut value = String::new();
                while continues_id(&chars) {
                    if let Some(c) = bump!() {
                        value.push(c);
                    }
                }
                push(&mut tokens, Kind::Id(value));
            }
            other => {
                return Err(ParseError::UnexpectedToken {
                    expected: "identifier or punctuation",
                    found: other.to_string(),
                    line: tok_line,
                    column: tok_column,
                })
            }
        }
    }

    Ok(tokens)
}

// =============================================================================
// Parser
// =============================================================================

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    directed: bool,
    edges: Vec<Edge>,
    vertices: BTreeSet<String>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            directed: false,
            edges: Vec::new(),
            vertices: BTreeSet::new(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self, expected: &'static str) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ParseError::UnexpectedEof { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn eat(&mut self, kind: &Kind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &Kind, expected: &'static str) -> Result<(), ParseError> {
        let token = self.next(expected)?;
        if &token.kind == kind {
            Ok(())
        } else {
            Err(unexpected(expected, &token))
        }
    }

    fn id(&mut self, expected: &'static str) -> Result<String, ParseError> {
        let token = self.next(expected)?;
        match token.kind {
            Kind::Id(s) | Kind::Quoted(s) => Ok(s),
            _ => Err(unexpected(expected, &token)),
        }
    }

    /// `[strict] (graph|digraph) [ID] { stmt* }`
    fn graph(mut self) -> Result<GraphDescription, ParseError> {
        let mut header = self.next("'graph' or 'digraph'")?;
        if matches!(&header.kind, Kind::Id(s) if s.eq_ignore_ascii_case("strict")) {
            header = self.next("'graph' or 'digraph'")?;
        }
        self.directed = match &header.kind {
            Kind::Id(s) if s.eq_ignore_ascii_case("digraph") => true,
            Kind::Id(s) if s.eq_ignore_ascii_case("graph") => false,
            _ => return Err(unexpected("'graph' or 'digraph'", &header)),
        };

        if matches!(self.peek().map(|t| &t.kind), Some(Kind::Id(_) | Kind::Quoted(_))) {
            self.pos += 1;
        }
        self.expect(&Kind::LBrace, "'{'")?;

        while !self.eat(&Kind::RBrace) {
            self.statement()?;
        }

        if let Some(token) = self.peek() {
            return Err(unexpected("end of input", token));
        }

        Ok(GraphDescription {
            directed: self.directed,
            edges: self.edges,
            vertices: self.vertices.into_iter().collect(),
        })
    }

    fn statement(&mut self) -> Result<(), ParseError> {
        if self.eat(&Kind::Semi) {
            return Ok(());
        }

        let first = self.id("vertex or '}'")?;

        if self.eat(&Kind::Equals) {
            self.id("attribute value")?;
            self.eat(&Kind::Semi);
            return Ok(());
        }

        // Default attribute statements: node [...], edge [...], graph [...]
        if matches!(first.as_str(), "node" | "edge" | "graph")
            && self.peek().is_some_and(|t| t.kind == Kind::LBracket)
        {
            self.attributes(false)?;
            self.eat(&Kind::Semi);
            return Ok(());
        }

        let mut chain = vec![first];
        while let Some(token) = self.peek() {
            let (op, is_directed) = match token.kind {
                Kind::Undirected => ("--", false),
                Kind::Directed => ("->", true),
                _ => break,
            };
            if is_directed != self.directed {
                return Err(ParseError::EdgeOpMismatch {
                    op,
                    kind: if self.directed { "digraph" } else { "graph" },
                    line: token.line,
                    column: token.column,
                });
            }
            self.pos += 1;
            chain.push(self.id("vertex")?);
        }

        // Node statements may carry text labels, only edges are weighted
        let is_edge = chain.len() > 1;
        let weight = if self.peek().is_some_and(|t| t.kind == Kind::LBracket) {
            self.attributes(is_edge)?
        } else {
            None
        }
        .unwrap_or(DEFAULT_WEIGHT);
        self.eat(&Kind::Semi);

        for hop in chain.windows(2) {
            let edge = Edge::new(hop[0].clone(), hop[1].clone(), weight);
            let reverse = (!self.directed).then(|| edge.reversed());
            self.edges.push(edge);
            self.edges.extend(reverse);
        }
        self.vertices.extend(chain);

        Ok(())
    }

    /// `[ key=value (, | ;)? ... ]`
    ///
    /// With `weighted` set, a `label` or `weight` value is parsed and returned
    /// as the edge weight. Otherwise every attribute is skipped.
    fn attributes(&mut self, weighted: bool) -> Result<Option<Weight>, ParseError> {
        self.expect(&Kind::LBracket, "'['")?;
        let mut weight = None;

        while !self.eat(&Kind::RBracket) {
            let key = self.id("attribute name")?;
            self.expect(&Kind::Equals, "'='")?;
            let value_token = self.next("attribute value")?;
            let value = match &value_token.kind {
                Kind::Id(s) | Kind::Quoted(s) => s.clone(),
                _ => return Err(unexpected("attribute value", &value_token)),
            };

            if weighted && (key == "label" || key == "weight") {
                let parsed = value.trim().parse::<Weight>().map_err(|_| ParseError::InvalidWeight {
                    value: value.clone(),
                    line: value_token.line,
                    column: value_token.column,
                })?;
                weight = Some(parsed);
            }

            if !self.eat(&Kind::Comma) {
                self.eat(&Kind::Semi);
            }
        }

        Ok(weight)
    }
}

fn unexpected(expected: &'static str, token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: token.kind.text(),
        line: token.line,
        column: token.column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_undirected_with_weights() {
        let desc = parse("graph G {\n  A -- B [label=1];\n  B -- C [label=2];\n  A -- C [label=4];\n}\n").unwrap();

        assert!(!desc.directed);
        assert_eq!(desc.vertices, vec!["A", "B", "C"]);
        assert_eq!(desc.edges.len(), 6);
        assert_eq!(desc.edges[0], Edge::new("A", "B", 1));
        assert_eq!(desc.edges[1], Edge::new("B", "A", 1));
    }

    #[test]
    fn test_parse_directed_default_weight() {
        let desc = parse("digraph {\n  b -> a;\n  a -> c [label=-3]\n}").unwrap();

        assert!(desc.directed);
        assert_eq!(desc.vertices, vec!["a", "b", "c"]);
        assert_eq!(desc.edges, vec![Edge::new("b", "a", 1), Edge::new("a", "c", -3)]);
    }

    #[test]
    fn test_parse_chain_and_isolated_node() {
        let desc = parse("digraph g { x -> y -> z [weight=\"5\"]; lonely; }").unwrap();

        assert_eq!(desc.vertices, vec!["lonely", "x", "y", "z"]);
        assert_eq!(desc.edges, vec![Edge::new("x", "y", 5), Edge::new("y", "z", 5)]);
    }

    #[test]
    fn test_parse_ignores_comments_and_attributes() {
        let src = "/* header */ strict graph \"my graph\" {\n  rankdir=LR; // layout\n  # note\n  A -- B [color=red, label=7];\n}";
        let desc = parse(src).unwrap();

        assert_eq!(desc.edges, vec![Edge::new("A", "B", 7), Edge::new("B", "A", 7)]);
    }

    #[test]
    fn test_default_attribute_statements_add_no_vertices() {
        let desc = parse("graph { node [shape=circle]; edge [color=gray]; A -- B }").unwrap();

        assert_eq!(desc.vertices, vec!["A", "B"]);
    }

    #[test]
    fn test_edge_op_mismatch() {
        let err = parse("graph {\n  A -> B;\n}").unwrap_err();
        assert_eq!(
            err,
            ParseError::EdgeOpMismatch {
                op: "->",
                kind: "graph",
                line: 2,
                column: 5,
            }
        );

        assert!(matches!(
            parse("digraph { A -- B }"),
            Err(ParseError::EdgeOpMismatch { op: "--", .. })
        ));
    }

    #[test]
    fn test_invalid_weight() {
        assert!(matches!(
            parse("graph { A -- B [label=heavy] }"),
            Err(ParseError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_missing_closing_brace() {
        assert!(matches!(
            parse("graph { A -- B"),
            Err(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(
            parse("graph { \"A -- B }"),
            Err(ParseError::UnterminatedString { line: 1, column: 9 })
        ));
    }

    #[test]
    fn test_into_graph() {
        let graph = parse("graph { A -- B [label=2] }").unwrap().into_graph().unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_node_text_labels_are_not_weights() {
        let desc = parse("graph { A [label=\"Alpha\"]; A -- B [label=2]; node [label=\"n\"]; }").unwrap();

        assert_eq!(desc.vertices, vec!["A", "B"]);
        assert_eq!(desc.edges, vec![Edge::new("A", "B", 2), Edge::new("B", "A", 2)]);
    }

    #[test]
    fn test_edge_text_label_is_rejected() {
        assert!(matches!(
            parse("digraph { A -> B [label=\"Alpha\"] }"),
            Err(ParseError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_hyphenated_ids() {
        let desc = parse("digraph { n-1 -> n-2 [label=-4]; a->b; }").unwrap();

        assert_eq!(desc.vertices, vec!["a", "b", "n-1", "n-2"]);
        assert_eq!(desc.edges, vec![Edge::new("n-1", "n-2", -4), Edge::new("a", "b", 1)]);
    }

    #[test]
    fn test_unspaced_undirected_edge() {
        let desc = parse("graph { x--y }").unwrap();

        assert_eq!(desc.edges, vec![Edge::new("x", "y", 1), Edge::new("y", "x", 1)]);
    }
}
