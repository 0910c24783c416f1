use clap::Parser;

use cbdt::bdt::Bdt;
use cbdt::truth::TruthSet;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Binary inputs on which the function is true (e.g. `011 110`).
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<String>,

    /// Skip the reduction step.
    #[arg(long)]
    unreduced: bool,

    /// Log every build and reduction step.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let set = TruthSet::from_strs(&args.inputs)?;
    log::info!(
        "Building tree for {} true inputs over {} variables",
        set.len(),
        set.num_vars()
    );

    let mut bdt = Bdt::default();
    let root = if args.unreduced {
        bdt.build(&set)
    } else {
        bdt.build_compact(&set)
    };
    log::info!("bdt = {:?}", bdt);

    println!("Tree Evaluation Truth Table:");
    println!();
    if root.is_none() {
        println!("NULL Structure");
    }
    let mut errors = Vec::new();
    for verdict in bdt.verify(root, &set) {
        println!("{}", verdict);
        if verdict.is_error {
            errors.push(verdict.input);
        }
    }

    println!();
    if errors.is_empty() {
        println!("No output errors detected");
    } else {
        println!("An output error was detected for the following inputs: ");
        for input in &errors {
            println!("{}", input);
        }
    }

    println!();
    println!("Number of Nodes = {}", bdt.size(root));
    println!("Satisfying inputs = {}", bdt.sat_count(root, set.num_vars()));
    if let Some(root) = root {
        println!("Tree = {}", bdt.to_bracket_string(root));
        bdt.delete(root);
    }

    Ok(())
}
