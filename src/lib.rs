#![deny(clippy::all)]

//! Command line front end for [digraph]: load a network from text
//! files and run one traversal or search over it.

use clap::{value_t, App, Arg, ArgMatches, SubCommand};
use thiserror::Error;
use tracing::info;

use std::fs::File;
use std::io::{self, Read, Write};

use digraph::{GraphError, GraphPath, Node, SearchError};

pub mod loader;
mod logging;

pub use loader::{load, resolve, LoadReport, Network, Weight};

type Error = anyhow::Error;
type BoxedRead = Box<dyn Read + 'static>;

const DEFAULT_NODES: &str = "data/nodes.txt";
const DEFAULT_ARCS: &str = "data/arcs.txt";

/// A single traversal or search requested on the command line.
///
/// Nodes are named by index or by label and resolved against the
/// loaded network when the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    DepthFirst { start: String },
    BreadthFirst { start: String },
    Search { start: String, target: String },
    Path { from: String, to: Option<String> },
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let start = Arg::with_name("start")
        .short("s")
        .long("start")
        .value_name("NODE")
        .default_value("0")
        .takes_value(true);

    App::new("graphwalk")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Traverse and search directed graphs")
        .arg(
            Arg::with_name("nodes")
                .short("n")
                .long("nodes")
                .value_name("NODES")
                .help("One node label per line, or - for stdin")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("arcs")
                .short("a")
                .long("arcs")
                .value_name("ARCS")
                .help("One `from to weight` record per line")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("capacity")
                .short("c")
                .long("capacity")
                .value_name("N")
                .help("Number of node slots, defaults to the number of nodes")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, repeat for even more"),
        )
        .subcommand(
            SubCommand::with_name("dfs")
                .about("Depth-first traversal")
                .arg(start.clone()),
        )
        .subcommand(
            SubCommand::with_name("bfs")
                .about("Breadth-first traversal")
                .arg(start.clone()),
        )
        .subcommand(
            SubCommand::with_name("search")
                .about("Breadth-first search for the nearest node with a label")
                .arg(start)
                .arg(
                    Arg::with_name("target")
                        .value_name("LABEL")
                        .required(true)
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("path")
                .about("Cheapest path by arc weight (uniform-cost search)")
                .arg(
                    Arg::with_name("from")
                        .long("from")
                        .value_name("NODE")
                        .default_value("0")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("to")
                        .long("to")
                        .value_name("NODE")
                        .help("Defaults to the last node")
                        .takes_value(true),
                ),
        )
}

fn command(matches: &ArgMatches) -> Result<Command, WalkError> {
    let start = |m: &ArgMatches| m.value_of("start").unwrap_or("0").to_string();

    match matches.subcommand() {
        ("dfs", Some(m)) => Ok(Command::DepthFirst { start: start(m) }),
        ("bfs", Some(m)) => Ok(Command::BreadthFirst { start: start(m) }),
        ("search", Some(m)) => Ok(Command::Search {
            start: start(m),
            target: m.value_of("target").unwrap_or_default().to_string(),
        }),
        ("path", Some(m)) => Ok(Command::Path {
            from: m.value_of("from").unwrap_or("0").to_string(),
            to: m.value_of("to").map(str::to_string),
        }),
        ("", None) => Ok(Command::Path {
            from: "0".to_string(),
            to: None,
        }),
        (other, _) => Err(WalkError::UnknownCommand(other.to_string())),
    }
}

pub fn walker() -> Result<(), Error> {
    let matches = app().get_matches();

    logging::init_tracing(matches.occurrences_of("verbose"))?;

    let capacity = if matches.is_present("capacity") {
        Some(value_t!(matches, "capacity", usize)?)
    } else {
        None
    };

    let nodes = get_input_reader(matches.value_of("nodes"), DEFAULT_NODES)?;
    let arcs = get_input_reader(matches.value_of("arcs"), DEFAULT_ARCS)?;
    let (mut graph, report) = load(nodes, arcs, capacity)?;
    info!(
        nodes = report.nodes,
        arcs = report.arcs,
        skipped = report.skipped.len(),
        "network ready"
    );

    let command = command(&matches)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut graph, &command, &mut out)
}

/// Run `command` over `graph`, writing the visited nodes or the
/// path found to `out`.
///
/// Marks and search state are reset first, so commands can be run
/// one after another over the same network.
pub fn run<W: Write>(graph: &mut Network, command: &Command, out: &mut W) -> Result<(), Error> {
    graph.clear_marks();
    graph.reset_search_state();

    let label = |node: &Node<String, Weight>| node.payload().clone();

    match command {
        Command::DepthFirst { start } => {
            let start = resolve(graph, start)?;
            let mut visited = Vec::new();
            graph.depth_first(start, |node| visited.push(label(node)))?;
            write_visits(&visited, out)?;
        }
        Command::BreadthFirst { start } => {
            let start = resolve(graph, start)?;
            let mut visited = Vec::new();
            graph.breadth_first(start, |node| visited.push(label(node)))?;
            write_visits(&visited, out)?;
        }
        Command::Search { start, target } => {
            let start = resolve(graph, start)?;
            let path = graph.breadth_first_search(start, |_| {}, target)?;
            write_path(graph, &path, out)?;
        }
        Command::Path { from, to } => {
            let from = resolve(graph, from)?;
            let to = match to {
                Some(name) => resolve(graph, name)?,
                None => graph
                    .iter()
                    .last()
                    .map(Node::index)
                    .ok_or_else(|| WalkError::UnknownNode("last".to_string()))?,
            };
            let path = graph.uniform_cost_search(from, to)?;
            write_path(graph, &path, out)?;
        }
    }

    Ok(())
}

fn write_visits<W: Write>(visited: &[String], out: &mut W) -> io::Result<()> {
    for label in visited {
        writeln!(out, "Visiting: {}", label)?;
    }
    Ok(())
}

fn write_path<W: Write>(
    graph: &Network,
    path: &GraphPath<Weight>,
    out: &mut W,
) -> Result<(), Error> {
    for index in path.nodes() {
        writeln!(out, "{}", graph.node(*index)?.payload())?;
    }
    match path.weight() {
        Some(total) => writeln!(out, "Arcs: {}, total cost: {}", path.len(), total)?,
        None => writeln!(out, "Arcs: {}, total cost overflows", path.len())?,
    }
    Ok(())
}

pub fn get_input_reader(filename: Option<&str>, default: &str) -> Result<BoxedRead, WalkError> {
    let reader: BoxedRead = match filename {
        Some("-") => Box::new(io::stdin()),
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(
            File::open(default).map_err(|e| WalkError::DefaultInputNotFound(default.into(), e))?,
        ),
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Input not found: {0}")]
    DefaultInputNotFound(String, #[source] io::Error),

    #[error("Unable to read input")]
    Io(#[from] io::Error),

    #[error("Line {line}: expected `from to weight`, found {text:?}")]
    Parse { line: usize, text: String },

    #[error("Capacity {capacity} is too small for {nodes} nodes")]
    Capacity { capacity: usize, nodes: usize },

    #[error("No node named {0}")]
    UnknownNode(String),

    #[error("Unknown command {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
