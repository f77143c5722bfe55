//! Reads node and arc lists from text and builds a [Network].
//!
//! Node files hold one label per line; each label gets the next index,
//! starting from zero. Arc files hold one `from to weight` record per
//! line, referring to nodes by index. Blank lines are skipped in both.

use digraph::{Graph, GraphError};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

use crate::WalkError;

/// Weight type used for arcs read from text.
pub type Weight = u32;

/// A graph of named nodes connected by integer-weighted arcs.
pub type Network = Graph<String, Weight>;

/// One parsed line from an arc file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcRecord {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseArcError(String);

impl FromStr for ArcRecord {
    type Err = ParseArcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*(?P<from>\d+)\s+(?P<to>\d+)\s+(?P<weight>\d+)\s*$").unwrap();
        };

        let invalid = || ParseArcError(s.to_string());
        let cap = RE.captures(s).ok_or_else(invalid)?;

        Ok(ArcRecord {
            from: cap["from"].parse().map_err(|_| invalid())?,
            to: cap["to"].parse().map_err(|_| invalid())?,
            weight: cap["weight"].parse().map_err(|_| invalid())?,
        })
    }
}

/// What happened while populating a network.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub nodes: usize,
    pub arcs: usize,
    /// Arc records the graph refused, by line number.
    pub skipped: Vec<(usize, GraphError)>,
}

/// Read one label per non-blank line.
pub fn read_labels<R: Read>(reader: R) -> Result<Vec<String>, WalkError> {
    let mut labels = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let label = line.trim();
        if !label.is_empty() {
            labels.push(label.to_string());
        }
    }
    Ok(labels)
}

/// Read one [ArcRecord] per non-blank line.
pub fn read_arcs<R: Read>(reader: R) -> Result<Vec<(usize, ArcRecord)>, WalkError> {
    let mut records = Vec::new();
    for (n, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = line
            .parse::<ArcRecord>()
            .map_err(|ParseArcError(text)| WalkError::Parse { line: n + 1, text })?;
        records.push((n + 1, record));
    }
    Ok(records)
}

/// Build a network from a node list and an arc list.
///
/// The graph holds exactly `capacity` slots, or one per label when no
/// capacity is given. Arcs which the graph rejects (unknown endpoints,
/// duplicates) are skipped and listed in the [LoadReport].
pub fn load<N, A>(
    nodes: N,
    arcs: A,
    capacity: Option<usize>,
) -> Result<(Network, LoadReport), WalkError>
where
    N: Read,
    A: Read,
{
    let labels = read_labels(nodes)?;
    let capacity = capacity.unwrap_or_else(|| labels.len());
    if labels.len() > capacity {
        return Err(WalkError::Capacity {
            capacity,
            nodes: labels.len(),
        });
    }

    let mut graph = Network::new(capacity);
    let mut report = LoadReport::default();

    for (index, label) in labels.into_iter().enumerate() {
        graph.add_node(label, index)?;
        report.nodes += 1;
    }

    for (line, record) in read_arcs(arcs)? {
        match graph.add_arc(record.from, record.to, record.weight) {
            Ok(()) => report.arcs += 1,
            Err(e) => {
                warn!(line, error = %e, "skipping arc record");
                report.skipped.push((line, e));
            }
        }
    }

    debug!(
        capacity,
        nodes = report.nodes,
        arcs = report.arcs,
        skipped = report.skipped.len(),
        "loaded network"
    );
    Ok((graph, report))
}

/// Find a node by index, or failing that by label.
pub fn resolve(graph: &Network, name: &str) -> Result<usize, WalkError> {
    if let Ok(index) = name.parse::<usize>() {
        if graph.contains_node(index) {
            return Ok(index);
        }
    }
    graph
        .find(&name.to_string())
        .ok_or_else(|| WalkError::UnknownNode(name.to_string()))
}
