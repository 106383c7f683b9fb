use std::{path::Path, process, time::Instant};

use anyhow::Result;
use clap::Parser;
use dpll_sat::{
    dimacs::parser::DimacsParser,
    solver::{
        config::{HeuristicOption, SolverConfig},
        dpll_solver::DPLLSolver,
        types::SolveStatus,
    },
};
use log::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File path of instance to parse
    #[arg(short, long)]
    pub file: String,

    /// Disable pure literal elimination
    #[arg(long, default_value_t = false)]
    pub no_pure: bool,

    /// Branching heuristic
    #[arg(long, value_enum, default_value_t = HeuristicOption::Activity)]
    pub heuristic: HeuristicOption,

    /// Weight added to both open literals of a clause down to two (0 disables)
    #[arg(long)]
    pub weight_bump: Option<u64>,

    /// Skip re-checking the model against every clause
    #[arg(long, default_value_t = false)]
    pub no_check: bool,

    /// Verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize solver config
    let mut cfg = SolverConfig::default();
    cfg.verbosity = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    cfg.pure_literals = !args.no_pure;
    cfg.check_model = !args.no_check;
    cfg.decision_policy.heuristic = args.heuristic;
    if let Some(bump) = args.weight_bump {
        cfg.decision_policy.weight_bump = bump;
    }

    log::set_max_level(cfg.verbosity);
    env_logger::builder().filter(None, cfg.verbosity).init();

    // Get instance
    let instance = DimacsParser::new(&args.file)?.parse()?;
    info!(
        "Instance: {} vars ({} referenced), {} clauses",
        instance.n_vars,
        instance.vars.len(),
        instance.n_clauses
    );
    info!("Config: {:#?}", cfg);

    let start = Instant::now();
    let mut solver = DPLLSolver::new(cfg, instance);
    let res = solver.solve();
    let elapsed = start.elapsed();

    match res {
        SolveStatus::Unknown => panic!("Solver should never return Unknown"),
        SolveStatus::SAT => {
            // Get all assignments.
            let display_str = solver
                .assignments()
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            info!("v {} 0", display_str);
        }
        SolveStatus::UNSAT => (),
    }
    info!("Stats: {:#?}", solver.stats());

    let file = Path::new(&args.file)
        .file_name()
        .map_or_else(|| args.file.clone(), |f| f.to_string_lossy().into_owned());
    println!("[{}] Status: {}\tElapsed: {:#?}", file, res, elapsed);

    process::exit(res.exit_code());
}
