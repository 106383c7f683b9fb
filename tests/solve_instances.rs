use std::path::PathBuf;

use dpll_sat::dimacs::parser::DimacsParser;
use dpll_sat::solver::config::SolverConfig;
use dpll_sat::solver::dpll_solver::DPLLSolver;
use dpll_sat::solver::types::{LBool, SolveStatus};

fn solve(name: &str, pure_literals: bool) -> (SolveStatus, DPLLSolver) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("instances")
        .join(name);
    let instance = DimacsParser::new(path)
        .and_then(|p| p.parse())
        .expect("parse");
    let mut cfg = SolverConfig::default();
    cfg.pure_literals = pure_literals;
    let mut solver = DPLLSolver::new(cfg, instance);
    let res = solver.solve();
    (res, solver)
}

#[test]
fn sat_instance_model_covers_every_clause() {
    for pure in [true, false] {
        let (res, solver) = solve("sat5.cnf", pure);
        assert_eq!(res, SolveStatus::SAT);

        let model = solver.assignments();
        let clauses = [
            vec![1, -2, 3],
            vec![-1, 4],
            vec![2, -4, 5],
            vec![-3, -5],
            vec![1, 2, -5],
            vec![-1, -2, -3],
            vec![3, 4, 5],
        ];
        for c in &clauses {
            assert!(c.iter().any(|l| model.iter().any(|m| m.v == *l)), "{c:?}");
        }
        assert!((1..=5).all(|v| solver.var_value(v) != LBool::Undef));
    }
}

#[test]
fn pigeonhole_is_unsat() {
    for pure in [true, false] {
        let (res, solver) = solve("php_3_2.cnf", pure);
        assert_eq!(res, SolveStatus::UNSAT);
        assert!(solver.stats().conflicts > 0);
    }
}

#[test]
fn unit_chain_needs_no_decisions() {
    let (res, solver) = solve("unit_chain.cnf", false);
    assert_eq!(res, SolveStatus::SAT);
    assert_eq!(solver.stats().decisions, 0);
    assert_eq!(solver.var_value(1), LBool::True);
    assert_eq!(solver.var_value(2), LBool::True);
}
