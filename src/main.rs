use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_t, values_t, App,
    AppSettings, Arg, ArgMatches, SubCommand,
};
use fgraph::{
    data::{
        data_graph_from_sqlite, DataGraph, DataView, EdgeData, EdgeFilter, GraphView,
        VertexFilter, ViewInfo,
    },
    filtered::{vertex_subset_complement_filter, vertex_subset_filter, FilteredGraph},
    front_end::{compile, Context},
    graph::{PropertyGraph, VertexListGraph},
    predicate::IsResidualEdge,
    types::VId,
};
use log::{info, warn, LevelFilter};
use std::{collections::HashSet, error::Error};

const SCHEMA: &str = r"The SQLite3 file must contain the following schema:

  CREATE TABLE vertices (vid INT, vlabel INT);
  CREATE TABLE edges (src INT, dst INT, elabel INT, capacity INT);
";

fn open_data_graph(matches: &ArgMatches) -> Result<DataGraph, Box<dyn Error>> {
    let path = value_t!(matches, "DB", String)?;
    info!("opening {}", path);
    let conn = rusqlite::Connection::open(&path)?;
    Ok(data_graph_from_sqlite(
        &conn,
        !matches.is_present("undirected"),
    )?)
}

fn print_view<G: DataView + ?Sized>(view: &G) {
    print!("{}", GraphView::of(view));
    println!("{}", ViewInfo::of(view));
}

fn handle_show(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = open_data_graph(matches)?;
    let vertex_filter = VertexFilter::new(
        &graph,
        compile(matches.value_of("vertices").unwrap_or("true"), Context::Vertex)?,
    );
    let edge_filter = EdgeFilter::new(
        &graph,
        compile(matches.value_of("edges").unwrap_or("true"), Context::Edge)?,
    );
    print_view(&FilteredGraph::with_vertex_filter(
        &graph,
        edge_filter,
        vertex_filter,
    ));
    Ok(())
}

fn handle_subset(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = open_data_graph(matches)?;
    let vids: HashSet<VId> = values_t!(matches, "VID", VId)?.into_iter().collect();
    let subset: HashSet<_> = graph
        .vertices()
        .filter(|&v| vids.contains(&graph.vertex_property(v).vid))
        .collect();
    if subset.len() < vids.len() {
        warn!(
            "{} of the given vertex ids are not in the graph",
            vids.len() - subset.len()
        );
    }
    if matches.is_present("complement") {
        print_view(&vertex_subset_complement_filter(&graph, &subset));
    } else {
        print_view(&vertex_subset_filter(&graph, &subset));
    }
    Ok(())
}

fn handle_residual(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = open_data_graph(matches)?;
    let rcap = graph.edge_map(|e: &EdgeData| e.capacity);
    print_view(&FilteredGraph::new(&graph, IsResidualEdge::new(rcap)));
    Ok(())
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn db_args<'a, 'b>(subcommand: App<'a, 'b>) -> App<'a, 'b> {
    subcommand
        .after_help(SCHEMA)
        .arg(Arg::with_name("DB").required(true))
        .arg(
            Arg::with_name("undirected")
                .help("Reads the edges as undirected")
                .long("undirected")
                .takes_value(false),
        )
}

fn main() -> Result<(), Box<dyn Error>> {
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .help("Logs more; repeat for more detail")
                .short("v")
                .multiple(true),
        )
        .subcommand(
            db_args(SubCommand::with_name("show"))
                .about("Displays the data graph through vertex and edge expressions")
                .arg(
                    Arg::with_name("vertices")
                        .help("Keeps the vertices satisfying EXPR, e.g. `vlabel == 1`")
                        .long("vertices")
                        .value_name("EXPR")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("edges")
                        .help("Keeps the edges satisfying EXPR, e.g. `capacity > 0`")
                        .long("edges")
                        .value_name("EXPR")
                        .takes_value(true),
                ),
        )
        .subcommand(
            db_args(SubCommand::with_name("subset"))
                .about("Displays the subgraph induced by the given vertex ids")
                .arg(Arg::with_name("VID").required(true).multiple(true))
                .arg(
                    Arg::with_name("complement")
                        .help("Induces on the vertices not given instead")
                        .long("complement")
                        .takes_value(false),
                ),
        )
        .subcommand(
            db_args(SubCommand::with_name("residual"))
                .about("Displays the edges with positive capacity"),
        )
        .get_matches();
    init_logger(matches.occurrences_of("verbose"));
    if let Some(matches) = matches.subcommand_matches("show") {
        handle_show(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("subset") {
        handle_subset(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("residual") {
        handle_residual(matches)?;
    }
    Ok(())
}
