use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "nestkit",
    about = "Read and edit JSON by dot/bracket path, convert query strings, generate random data",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Get the value at a path
    Get(GetArgs),
    /// Exit 0 if the path holds a non-null value, 3 otherwise
    Has(HasArgs),
    /// Set a value (raw JSON) at a path; prints or writes with --out
    Set(SetArgs),
    /// Parse the query part of a URL into a JSON object
    QueryParse(QueryParseArgs),
    /// Serialize a JSON object into a `?k=v&...` query string
    QueryBuild(QueryBuildArgs),
    /// Print a random string
    RandomString(RandomStringArgs),
    /// Print a file's JSON as indented text
    Flatten(FlattenArgs),
}

#[derive(ClapArgs, Debug)]
struct GetArgs {
    /// JSON file to load
    file: PathBuf,
    /// Path, e.g. data.items[0].name
    #[arg(long)]
    path: String,
    /// Split on this token instead of resolving dot/bracket syntax
    #[arg(long)]
    splitter: Option<String>,
    /// Segments to skip when --splitter is given
    #[arg(long, default_value_t = 0)]
    start: usize,
    /// Raw JSON printed when the path does not resolve
    #[arg(long)]
    default: Option<String>,
}

#[derive(ClapArgs, Debug)]
struct HasArgs {
    /// JSON file to load
    file: PathBuf,
    /// Path, e.g. data.items[0].name
    #[arg(long)]
    path: String,
}

#[derive(ClapArgs, Debug)]
struct SetArgs {
    /// JSON file to load
    file: PathBuf,
    /// Path, e.g. data/items/0/name with --splitter /
    #[arg(long)]
    path: String,
    /// New value as raw JSON (e.g., 123, true, "str", {"a":1})
    #[arg(long)]
    value: String,
    /// Path splitter
    #[arg(long, default_value = ".")]
    splitter: String,
    /// Optional output .json path to write; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct QueryParseArgs {
    /// URL or path with a query, e.g. "list?page=2&open=true"
    url: String,
}

#[derive(ClapArgs, Debug)]
struct QueryBuildArgs {
    /// JSON object, e.g. '{"page":2,"q":"shoes"}'
    json: String,
    /// Sort keys lexicographically
    #[arg(long, default_value_t = false)]
    sort: bool,
}

#[derive(ClapArgs, Debug)]
struct RandomStringArgs {
    /// Number of characters
    #[arg(long, default_value_t = 9)]
    len: usize,
    /// Preset name (onlyLetters, onlyNumbers, hex, letterAndNumbers, common) or literal characters
    #[arg(long, default_value = "letterAndNumbers")]
    chars: String,
}

#[derive(ClapArgs, Debug)]
struct FlattenArgs {
    /// JSON file to load
    file: PathBuf,
    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    indent: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Get(a) => cmd_get(a),
        Cmd::Has(a) => cmd_has(a),
        Cmd::Set(a) => cmd_set(a),
        Cmd::QueryParse(a) => cmd_query_parse(a),
        Cmd::QueryBuild(a) => cmd_query_build(a),
        Cmd::RandomString(a) => cmd_random_string(a),
        Cmd::Flatten(a) => cmd_flatten(a),
    }
}

fn load(path: &Path) -> serde_json::Value {
    nestkit_core::load_json_file(path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    })
}

fn parse_raw(flag: &str, raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        eprintln!("invalid {} JSON: {}", flag, e);
        std::process::exit(3);
    })
}

fn cmd_get(args: GetArgs) {
    let v = load(&args.file);
    let found = match &args.splitter {
        Some(splitter) => nestkit_core::get_deep_value(&v, &args.path, splitter, args.start),
        None => nestkit_core::get_prop(&v, &args.path),
    };
    let fallback = args.default.as_deref().map(|raw| parse_raw("--default", raw));
    match found.or(fallback.as_ref()) {
        Some(x) => println!("{}", nestkit_core::flatten(x)),
        None => {
            eprintln!("not found: {}", args.path);
            std::process::exit(3);
        }
    }
}

fn cmd_has(args: HasArgs) {
    let v = load(&args.file);
    if nestkit_core::has_prop(&v, &args.path) {
        println!("true");
    } else {
        println!("false");
        std::process::exit(3);
    }
}

fn cmd_set(args: SetArgs) {
    let mut v = load(&args.file);
    let new_val = parse_raw("--value", &args.value);
    if !nestkit_core::change_deep_value(&mut v, Some(&args.path), &args.splitter, new_val) {
        eprintln!("error: cannot set {}", args.path);
        std::process::exit(4);
    }
    if let Some(out) = args.out {
        nestkit_core::write_json_to_file(&out, &v).unwrap_or_else(|e| {
            eprintln!("error writing: {}", e);
            std::process::exit(5);
        });
    } else {
        println!("{}", nestkit_core::flatten(&v));
    }
}

fn cmd_query_parse(args: QueryParseArgs) {
    match nestkit_core::parse_url_query(&args.url) {
        Some(params) => println!("{}", nestkit_core::flatten(&params.to_json())),
        None => {
            eprintln!("no query in: {}", args.url);
            std::process::exit(3);
        }
    }
}

fn cmd_query_build(args: QueryBuildArgs) {
    let params = parse_raw("query", &args.json);
    println!("{}", nestkit_core::serialize_url_params(&params, args.sort));
}

fn cmd_random_string(args: RandomStringArgs) {
    println!("{}", nestkit_core::random_string(args.len, &args.chars));
}

fn cmd_flatten(args: FlattenArgs) {
    let v = load(&args.file);
    let opts = nestkit_core::FlattenOpts {
        indent: args.indent,
    };
    println!("{}", nestkit_core::flatten_with(&v, opts));
}
