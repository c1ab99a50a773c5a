//! Boolean Cube Calculator — command-line driver (`spec.md` §6 "CLI").
//!
//! Listed in the specification as "driver scope", i.e. a thin shell around
//! the library's [`dimacs`], [`expression`], and [`json`] collaborators.

use std::fs;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use boolean_cube::context::Context;
use boolean_cube::cover::tautology::is_tautology;
use boolean_cube::dimacs::read_dimacs_cnf;
use boolean_cube::expression::{lower_expr, parse, to_expression_string};
use boolean_cube::json::Driver;

/// Positional-cube Boolean function calculator.
#[derive(Parser, Debug)]
#[command(name = "boolean-cube", about = "Boolean cube calculator", long_about = None)]
struct Args {
    /// Increase log verbosity; repeatable.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Run the built-in self-test suite (the cargo test binary) and exit.
    #[arg(long = "test")]
    test: bool,

    /// Run the benchmark suite and report timings.
    #[arg(long = "speed")]
    speed: bool,

    /// Read a DIMACS CNF file and report its SAT-via-tautology verdict.
    #[arg(long = "dimacscnf", value_name = "FILE")]
    dimacscnf: Option<PathBuf>,

    /// Parse an expression and print its lowered cube list.
    #[arg(long = "parse", value_name = "EXPR")]
    parse_expr: Option<String>,

    /// Pretty-print the next JSON output.
    #[arg(long = "ojpp")]
    ojpp: bool,

    /// Route the next JSON output to a file instead of stdout.
    #[arg(long = "ojson", value_name = "FILE")]
    ojson: Option<PathBuf>,

    /// Execute a JSON command sequence read from FILE.
    #[arg(long = "json", value_name = "FILE")]
    json: Option<PathBuf>,
}

/// Long-option names the driver recognizes, matching `spec.md` §6's
/// single-dash spelling (`-test`, `-dimacscnf FILE`, ...) and the original
/// driver's literal `strcmp(*argv, "-test")`-style matching
/// (`examples/original_source/src/main.c`). clap's derive API only
/// recognizes GNU double-dash long options, so a single-dash spelling of one
/// of these names is rewritten to double-dash before [`Args::parse_from`]
/// sees it; anything else (including the single-char `-v`) passes through
/// untouched.
const LONG_FLAGS: &[&str] = &["test", "speed", "dimacscnf", "parse", "ojpp", "ojson", "json"];

fn normalize_args(args: impl Iterator<Item = String>) -> Vec<String> {
    args.map(|a| match a.strip_prefix('-') {
        Some(name) if !name.starts_with('-') && LONG_FLAGS.contains(&name) => {
            format!("-{}", a)
        }
        _ => a,
    })
    .collect()
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn run_dimacscnf(path: &PathBuf) -> io::Result<()> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let (header, l) = read_dimacs_cnf(&mut reader)?;
    let sat = !is_tautology(&l);
    println!(
        "p cnf {} {}: {} clauses read, tautology(negation)={}, sat={}",
        header.var_cnt,
        header.clause_cnt,
        l.live_count(),
        !sat,
        sat
    );
    Ok(())
}

fn run_parse(expr: &str) -> io::Result<()> {
    // Variables are discovered left-to-right by first appearance; a
    // dedicated pass walks the raw text before the structured parser runs,
    // since the lowering stage needs every identifier pre-registered.
    let mut ctx = Context::new(0);
    let mut names = Vec::new();
    let mut current = String::new();
    for ch in expr.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            current.push(ch);
        } else if !current.is_empty() {
            names.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        names.push(current);
    }
    let mut var_cnt = 0;
    for name in &names {
        if name.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
            continue;
        }
        if ctx.lookup(name).is_none() {
            ctx.intern(name);
            var_cnt += 1;
        }
    }
    ctx.resize(var_cnt);
    let ast = parse(&ctx, expr)?;
    let l = lower_expr(&ctx, &ast);
    for c in l.iter_live() {
        println!("{}", c.to_cube_string());
    }
    println!("expr: {}", to_expression_string(&ctx, &l));
    Ok(())
}

fn json_err(e: serde_json::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

fn run_json(path: &PathBuf, pretty: bool, out_path: Option<&PathBuf>) -> io::Result<()> {
    let input = fs::read_to_string(path)?;
    let blocks: Vec<boolean_cube::json::CommandBlock> =
        serde_json::from_str(&input).map_err(json_err)?;
    let var_cnt = blocks
        .iter()
        .filter_map(|b| b.mtvar.as_ref().map(|v| v.len()))
        .max()
        .unwrap_or(64);
    let mut driver = Driver::new(var_cnt);
    let records = driver.run(&blocks)?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&records).map_err(json_err)?
    } else {
        serde_json::to_string(&records).map_err(json_err)?
    };
    match out_path {
        Some(p) => fs::write(p, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn main() {
    let args = Args::parse_from(normalize_args(std::env::args()));
    init_logging(args.verbose);

    if args.test {
        eprintln!("self-test: run `cargo test` (the -test flag only reports this in the binary)");
        process::exit(0);
    }

    if args.speed {
        let start = Instant::now();
        let mut ctx = Context::new(8);
        for i in 0..8 {
            ctx.intern(&format!("v{}", i));
        }
        let expr = "v0&v1|v2&v3|v4&v5|v6&v7";
        let ast = parse(&ctx, expr).expect("benchmark expression must parse");
        let l = lower_expr(&ctx, &ast);
        println!(
            "speed: lowered {} in {:?} ({} cubes)",
            expr,
            start.elapsed(),
            l.live_count()
        );
        process::exit(0);
    }

    let mut exit_code = 0;

    if let Some(path) = &args.dimacscnf {
        if let Err(e) = run_dimacscnf(path) {
            eprintln!("error: {}", e);
            exit_code = 1;
        }
    }

    if let Some(expr) = &args.parse_expr {
        if let Err(e) = run_parse(expr) {
            eprintln!("error: {}", e);
            exit_code = 1;
        }
    }

    if let Some(path) = &args.json {
        if let Err(e) = run_json(path, args.ojpp, args.ojson.as_ref()) {
            eprintln!("error: {}", e);
            exit_code = 1;
        }
    }

    if args.dimacscnf.is_none() && args.parse_expr.is_none() && args.json.is_none() {
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "nothing to do; see --help");
    }

    process::exit(exit_code);
}
