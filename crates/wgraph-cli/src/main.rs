use serde::Serialize;
use std::io::{Read, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use wgraph::{
    AdjacencyInput, Graph, GraphOptions, format_matrix, from_adjacency_matrix_with_options,
    parse_matrix,
};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(wgraph::Error),
    Json(serde_json::Error),
    NoPath,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoPath => write!(f, "No path between the given vertices"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<wgraph::Error> for CliError {
    fn from(value: wgraph::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Command {
    #[default]
    Summary,
    Vertices,
    Edges,
    Degree(String),
    Adjacent(String),
    Dfs(String),
    Bfs(String),
    Paths(String, String),
    Shortest(String, String),
    Matrix,
    Complement,
    DeleteVertex(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum InputFormat {
    #[default]
    Auto,
    Json,
    Matrix,
}

impl FromStr for InputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "json" => Ok(Self::Json),
            "matrix" | "txt" => Ok(Self::Matrix),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Args {
    command: Command,
    format: InputFormat,
    options: GraphOptions,
    pretty: bool,
    with_weights: bool,
    breadth_first: bool,
    limit: Option<usize>,
    input: Option<String>,
}

#[derive(Serialize)]
struct SummaryOut<'a> {
    summary: String,
    vertices: usize,
    edges: usize,
    weighted: bool,
    graph: &'a Graph<String>,
}

fn usage() -> &'static str {
    "wgraph-cli\n\
\n\
USAGE:\n\
  wgraph-cli [summary] [--format auto|json|matrix] [--weighted|--unweighted] [--pretty] [<path>|-]\n\
  wgraph-cli vertices [<path>|-]\n\
  wgraph-cli edges [--weights] [<path>|-]\n\
  wgraph-cli degree <vertex> [<path>|-]\n\
  wgraph-cli adjacent <vertex> [<path>|-]\n\
  wgraph-cli dfs <start> [<path>|-]\n\
  wgraph-cli bfs <start> [<path>|-]\n\
  wgraph-cli paths <start> <finish> [--bfs] [--limit <n>] [<path>|-]\n\
  wgraph-cli shortest <start> <finish> [<path>|-]\n\
  wgraph-cli matrix [<path>|-]\n\
  wgraph-cli complement [<path>|-]\n\
  wgraph-cli delete-vertex <vertex> [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - JSON input maps each vertex to [\"B\", \"C\"] (unweighted) or [[\"B\", 3]] (weighted).\n\
  - Vertex ids are strings; numeric JSON ids such as {\"1\": [2]} are read as \"1\" and \"2\".\n\
  - Matrix input is one row per line of space-separated weights; vertices are named A, B, C, ...\n\
  - Matrix input is weighted unless --unweighted is given.\n\
  - --format auto treats input starting with '{' as JSON and anything else as a matrix.\n\
  - matrix and delete-vertex print matrix text; every other command prints JSON.\n\
  - shortest exits with status 3 when no path exists.\n\
  - Set WGRAPH_LOG (e.g. WGRAPH_LOG=debug) to log to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut positional: Vec<String> = Vec::new();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--weights" => args.with_weights = true,
            "--bfs" => args.breadth_first = true,
            "--weighted" => args.options = GraphOptions::weighted(),
            "--unweighted" => args.options = GraphOptions::unweighted(),
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<InputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--limit" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.limit = Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--" => positional.extend(it.by_ref().cloned()),
            "-" => positional.push(a.clone()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            other => positional.push(other.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    let Some(first) = positional.next() else {
        return Ok(args);
    };
    let mut operand = || positional.next().ok_or(CliError::Usage(usage()));
    args.command = match first.as_str() {
        "summary" => Command::Summary,
        "vertices" => Command::Vertices,
        "edges" => Command::Edges,
        "matrix" => Command::Matrix,
        "complement" => Command::Complement,
        "degree" => Command::Degree(operand()?),
        "adjacent" => Command::Adjacent(operand()?),
        "dfs" => Command::Dfs(operand()?),
        "bfs" => Command::Bfs(operand()?),
        "delete-vertex" => Command::DeleteVertex(operand()?),
        "paths" => Command::Paths(operand()?, operand()?),
        "shortest" => Command::Shortest(operand()?, operand()?),
        _ => {
            // No subcommand: the first positional is the input path.
            args.input = Some(first);
            if positional.next().is_some() {
                return Err(CliError::Usage(usage()));
            }
            return Ok(args);
        }
    };
    args.input = positional.next();
    if positional.next().is_some() {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_graph(
    text: &str,
    format: InputFormat,
    options: GraphOptions,
) -> Result<Graph<String>, CliError> {
    let format = match format {
        InputFormat::Auto if text.trim_start().starts_with('{') => InputFormat::Json,
        InputFormat::Auto => InputFormat::Matrix,
        other => other,
    };
    tracing::debug!(?format, "loading graph");

    match format {
        InputFormat::Json => {
            let mut value: serde_json::Value = serde_json::from_str(text)?;
            stringify_vertex_ids(&mut value);
            let input: AdjacencyInput<String> = serde_json::from_value(value)?;
            Ok(Graph::with_options(input, options))
        }
        _ => Ok(from_adjacency_matrix_with_options(&parse_matrix(text)?, options)?),
    }
}

/// Rewrites numeric neighbor ids (`2`, or the `2` in `[2, 5]`) as strings. Object keys are
/// already strings; weights are left alone.
fn stringify_vertex_ids(value: &mut serde_json::Value) {
    let serde_json::Value::Object(map) = value else {
        return;
    };
    for neighbors in map.values_mut() {
        let serde_json::Value::Array(items) = neighbors else {
            continue;
        };
        for item in items {
            let id = match item {
                serde_json::Value::Array(pair) => pair.first_mut(),
                other => Some(other),
            };
            if let Some(id) = id.filter(|id| id.is_number()) {
                *id = serde_json::Value::String(id.to_string());
            }
        }
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let mut g = load_graph(&text, args.format, args.options)?;

    match &args.command {
        Command::Summary => write_json(
            &SummaryOut {
                summary: g.to_string(),
                vertices: g.vertex_count(),
                edges: g.edge_count(),
                weighted: g.is_weighted(),
                graph: &g,
            },
            args.pretty,
        ),
        Command::Vertices => write_json(&g.vertices(), args.pretty),
        Command::Edges if args.with_weights => write_json(&g.edges(), args.pretty),
        Command::Edges => write_json(&g.edge_pairs(), args.pretty),
        Command::Degree(v) => write_json(&g.degree(v)?, args.pretty),
        Command::Adjacent(v) => write_json(&g.adjacent(v)?, args.pretty),
        Command::Dfs(start) => write_json(&g.depth_first(start)?.collect::<Vec<_>>(), args.pretty),
        Command::Bfs(start) => {
            write_json(&g.breadth_first(start)?.collect::<Vec<_>>(), args.pretty)
        }
        Command::Paths(start, finish) => {
            let limit = args.limit.unwrap_or(usize::MAX);
            let paths: Vec<Vec<String>> = if args.breadth_first {
                g.bfs_paths(start, finish)?.take(limit).collect()
            } else {
                g.dfs_paths(start, finish)?.take(limit).collect()
            };
            write_json(&paths, args.pretty)
        }
        Command::Shortest(start, finish) => match g.shortest_path(start, finish)? {
            Some(path) => write_json(&path, args.pretty),
            None => Err(CliError::NoPath),
        },
        Command::Matrix => {
            print!("{}", format_matrix(&g.adjacency_matrix()));
            Ok(())
        }
        Command::Complement => write_json(&g.complement(), args.pretty),
        Command::DeleteVertex(v) => {
            g.delete_vertex(v)?;
            print!("{}", format_matrix(&g.adjacency_matrix()));
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("WGRAPH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    init_logging();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::NoPath) => {
            eprintln!("{}", CliError::NoPath);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
