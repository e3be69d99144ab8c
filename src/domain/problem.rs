use std::io::BufRead;

use crate::error::ParseError;

use super::edge::Edge;
use super::node::{Node, NodeId, Role};

/// Immutable MS-TOP instance: nodes, sources, depot, distance matrix, and
/// customer-customer edges. Owns all of the above for its lifetime; nothing
/// here is mutated once built.
#[derive(Debug, Clone)]
pub struct Problem {
    /// All nodes, indexed by id: sources (0..S), then customers (S..S+N),
    /// then the depot (S+N). This is a deliberate normalization of the raw
    /// instance file's line-position ids — see `from_multi_source_reader`.
    pub nodes: Vec<Node>,
    pub sources: Vec<NodeId>,
    pub customers: Vec<NodeId>,
    pub depot: NodeId,
    pub tmax: f64,
    /// Dense `(S+N+1) x (S+N+1)` Euclidean distances, indexed by node id.
    pub dist: Vec<Vec<f64>>,
    /// Directed customer-customer candidate links — one per ordered pair,
    /// never touching a source or the depot.
    pub edges: Vec<Edge>,
}

/// One instance-file body record before ids are normalized by class.
struct RawRecord {
    x: f64,
    y: f64,
    revenue: f64,
    is_source: bool,
    n_vehicles: usize,
}

fn tokenize(line: &str) -> Vec<&str> {
    line.split('\t')
        .flat_map(|chunk| chunk.split_whitespace())
        .collect()
}

fn parse_f64(tokens: &[&str], idx: usize, line: usize, field: &'static str) -> Result<f64, ParseError> {
    let raw = tokens.get(idx).ok_or(ParseError::MissingFields {
        line,
        expected: idx + 1,
        found: tokens.len(),
    })?;
    raw.parse::<f64>().map_err(|_| ParseError::NotNumeric {
        line,
        field,
        value: raw.to_string(),
    })
}

fn parse_usize(tokens: &[&str], idx: usize, line: usize, field: &'static str) -> Result<usize, ParseError> {
    let raw = tokens.get(idx).ok_or(ParseError::MissingFields {
        line,
        expected: idx + 1,
        found: tokens.len(),
    })?;
    raw.parse::<usize>().map_err(|_| ParseError::NotNumeric {
        line,
        field,
        value: raw.to_string(),
    })
}

/// Reads the three header lines: `"n" <N>`, `"m" <M>`, `"Tmax" <float>`.
/// `n` denotes the total count of body records including the depot (the
/// original parser's `linecount == n + 2` arithmetic for the depot line).
fn parse_header(lines: &[String]) -> Result<(usize, usize, f64), ParseError> {
    if lines.len() < 3 {
        return Err(ParseError::MissingFields {
            line: lines.len(),
            expected: 3,
            found: lines.len(),
        });
    }
    let n = parse_usize(&tokenize(&lines[0]), 1, 0, "n")?;
    let m = parse_usize(&tokenize(&lines[1]), 1, 1, "m")?;
    let tmax = parse_f64(&tokenize(&lines[2]), 1, 2, "Tmax")?;
    Ok((n, m, tmax))
}

fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

/// Shared tail of both readers: given raw records in file order (each
/// tagged source/customer) plus a depot record, assign dense ids by class
/// — sources first, then customers, then the depot — build the distance
/// matrix and the customer-customer edge set.
fn finish(raw: Vec<RawRecord>, depot_xyr: (f64, f64, f64), tmax: f64) -> Result<Problem, ParseError> {
    let source_records: Vec<&RawRecord> = raw.iter().filter(|r| r.is_source).collect();
    let customer_records: Vec<&RawRecord> = raw.iter().filter(|r| !r.is_source).collect();

    if source_records.is_empty() {
        return Err(ParseError::NoSources);
    }

    let s = source_records.len();
    let n = customer_records.len();
    let depot_id = s + n;

    let mut nodes = Vec::with_capacity(s + n + 1);
    let mut sources = Vec::with_capacity(s);
    let mut customers = Vec::with_capacity(n);

    for (i, rec) in source_records.iter().enumerate() {
        nodes.push(Node {
            id: i,
            x: rec.x,
            y: rec.y,
            revenue: rec.revenue,
            role: Role::Source {
                n_vehicles: rec.n_vehicles,
            },
        });
        sources.push(i);
    }
    for (i, rec) in customer_records.iter().enumerate() {
        let id = s + i;
        nodes.push(Node {
            id,
            x: rec.x,
            y: rec.y,
            revenue: rec.revenue,
            role: Role::Customer,
        });
        customers.push(id);
    }
    nodes.push(Node {
        id: depot_id,
        x: depot_xyr.0,
        y: depot_xyr.1,
        revenue: depot_xyr.2,
        role: Role::Depot,
    });

    let count = s + n + 1;
    let mut dist = vec![vec![0.0; count]; count];
    for i in 0..count {
        for j in 0..count {
            dist[i][j] = euclidean((nodes[i].x, nodes[i].y), (nodes[j].x, nodes[j].y));
        }
    }

    // One directed Edge per ordered pair of distinct customers: the merge
    // step in pjs::build only ever tries the (inode -> jnode) orientation of
    // whatever edge it draws, so both directions of a pair must exist as
    // separate candidates for the savings sort to find either merge order.
    let mut edges = Vec::new();
    for i in &customers {
        for j in &customers {
            if i != j {
                edges.push(Edge::new(*i, *j, dist[*i][*j]));
            }
        }
    }

    Ok(Problem {
        nodes,
        sources,
        customers,
        depot: depot_id,
        tmax,
        dist,
        edges,
    })
}

impl Problem {
    /// Multi-source instance format. Body lines carry
    /// `<x> <y> <revenue> <issource{0,1}> <n_vehicles>` and may interleave
    /// sources and customers in any order; the depot line is the last body
    /// line and carries `<x> <y> <revenue>`.
    pub fn from_multi_source_reader(reader: impl BufRead) -> Result<Problem, ParseError> {
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
        if lines.is_empty() {
            return Err(ParseError::EmptyFile);
        }
        let (declared, _m, tmax) = parse_header(&lines)?;
        if declared == 0 {
            return Err(ParseError::NodeCountMismatch {
                declared,
                found: 0,
            });
        }
        let body_count = declared - 1;
        let expected_lines = 3 + declared;
        if lines.len() < expected_lines {
            return Err(ParseError::NodeCountMismatch {
                declared,
                found: lines.len().saturating_sub(3),
            });
        }

        let mut raw = Vec::with_capacity(body_count);
        for i in 0..body_count {
            let line_no = 3 + i;
            let tokens = tokenize(&lines[line_no]);
            let x = parse_f64(&tokens, 0, line_no, "x")?;
            let y = parse_f64(&tokens, 1, line_no, "y")?;
            let revenue = parse_f64(&tokens, 2, line_no, "revenue")?;
            let is_source = parse_usize(&tokens, 3, line_no, "issource")? != 0;
            let n_vehicles = if is_source {
                parse_usize(&tokens, 4, line_no, "n_vehicles")?
            } else {
                0
            };
            raw.push(RawRecord {
                x,
                y,
                revenue,
                is_source,
                n_vehicles,
            });
        }

        let depot_line = 3 + body_count;
        let depot_tokens = tokenize(&lines[depot_line]);
        let depot_x = parse_f64(&depot_tokens, 0, depot_line, "x")?;
        let depot_y = parse_f64(&depot_tokens, 1, depot_line, "y")?;
        let depot_revenue = parse_f64(&depot_tokens, 2, depot_line, "revenue")?;

        finish(raw, (depot_x, depot_y, depot_revenue), tmax)
    }

    /// Single-source instance format: identical shape, but line 3 is
    /// always the unique source and receives `n_vehicles = M` (the header
    /// value). Every body line (including the source) carries only
    /// `<x> <y> <revenue>`.
    pub fn from_single_source_reader(reader: impl BufRead) -> Result<Problem, ParseError> {
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
        if lines.is_empty() {
            return Err(ParseError::EmptyFile);
        }
        let (declared, m, tmax) = parse_header(&lines)?;
        if declared == 0 {
            return Err(ParseError::NodeCountMismatch {
                declared,
                found: 0,
            });
        }
        let body_count = declared - 1;
        let expected_lines = 3 + declared;
        if lines.len() < expected_lines {
            return Err(ParseError::NodeCountMismatch {
                declared,
                found: lines.len().saturating_sub(3),
            });
        }

        let mut raw = Vec::with_capacity(body_count);
        for i in 0..body_count {
            let line_no = 3 + i;
            let tokens = tokenize(&lines[line_no]);
            let x = parse_f64(&tokens, 0, line_no, "x")?;
            let y = parse_f64(&tokens, 1, line_no, "y")?;
            let revenue = parse_f64(&tokens, 2, line_no, "revenue")?;
            let is_source = i == 0;
            raw.push(RawRecord {
                x,
                y,
                revenue,
                is_source,
                n_vehicles: if is_source { m } else { 0 },
            });
        }

        let depot_line = 3 + body_count;
        let depot_tokens = tokenize(&lines[depot_line]);
        let depot_x = parse_f64(&depot_tokens, 0, depot_line, "x")?;
        let depot_y = parse_f64(&depot_tokens, 1, depot_line, "y")?;
        let depot_revenue = parse_f64(&depot_tokens, 2, depot_line, "revenue")?;

        finish(raw, (depot_x, depot_y, depot_revenue), tmax)
    }

    pub fn from_multi_source_file(path: impl AsRef<std::path::Path>) -> Result<Problem, ParseError> {
        let file = std::fs::File::open(path)?;
        Problem::from_multi_source_reader(std::io::BufReader::new(file))
    }

    pub fn from_single_source_file(path: impl AsRef<std::path::Path>) -> Result<Problem, ParseError> {
        let file = std::fs::File::open(path)?;
        Problem::from_single_source_reader(std::io::BufReader::new(file))
    }

    pub fn n_sources(&self) -> usize {
        self.sources.len()
    }

    pub fn n_customers(&self) -> usize {
        self.customers.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn n_vehicles(&self, source_id: NodeId) -> usize {
        self.node(source_id).role.n_vehicles().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn multi_source_text() -> &'static str {
        "n 3\nm 1\nTmax 10\n0 0 0 1 1\n5 0 7 0 0\n10 0 0\n"
    }

    #[test]
    fn parses_trivial_multi_source_scenario() {
        let problem = Problem::from_multi_source_reader(Cursor::new(multi_source_text())).unwrap();
        assert_eq!(problem.n_sources(), 1);
        assert_eq!(problem.n_customers(), 1);
        assert_eq!(problem.tmax, 10.0);
        assert_eq!(problem.depot, 2);
        assert_eq!(problem.edges.len(), 0);
        assert_eq!(problem.n_vehicles(0), 1);
    }

    #[test]
    fn rejects_non_numeric_field() {
        let text = "n 3\nm 1\nTmax abc\n0 0 0 1 1\n5 0 7 0 0\n10 0 0\n";
        let err = Problem::from_multi_source_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, ParseError::NotNumeric { .. }));
    }

    #[test]
    fn rejects_missing_source() {
        let text = "n 3\nm 1\nTmax 10\n0 0 0 0 0\n5 0 7 0 0\n10 0 0\n";
        let err = Problem::from_multi_source_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, ParseError::NoSources));
    }

    #[test]
    fn single_source_assigns_header_vehicle_count() {
        let text = "n 2\nm 4\nTmax 10\n0 0 0\n5 0 7\n10 0 0\n";
        let problem = Problem::from_single_source_reader(Cursor::new(text)).unwrap();
        assert_eq!(problem.n_sources(), 1);
        assert_eq!(problem.n_vehicles(0), 4);
    }

    #[test]
    fn multi_source_partitioning_scenario() {
        // two sources, two customers, scenario 5 from the spec.
        let text = "n 5\nm 2\nTmax 50\n\
                     0 0 0 1 1\n\
                     20 0 0 1 1\n\
                     2 0 1 0 0\n\
                     18 0 1 0 0\n\
                     10 0 0\n";
        let problem = Problem::from_multi_source_reader(Cursor::new(text)).unwrap();
        assert_eq!(problem.n_sources(), 2);
        assert_eq!(problem.n_customers(), 2);
        assert_eq!(problem.depot, 4);
        assert_eq!(problem.dist[0][2], 2.0);
        assert_eq!(problem.dist[1][2], 18.0);
    }
}
