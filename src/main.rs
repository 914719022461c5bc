use {
    sprat::{
        cnf::{self, Cnf},
        config::Config,
        solver::{Certificate, SatSolverIF, Solver},
        types::*,
    },
    std::{io, process::exit},
    structopt::StructOpt,
};

// SAT-competition standardized exit codes; everything else denotes
// unsolved or error.
const UNKNOWN: i32 = 0;
const SATISFIABLE: i32 = 10;
const UNSATISFIABLE: i32 = 20;

fn main() {
    let config = Config::from_args();
    if config.use_log && cfg!(not(feature = "logging")) {
        die("compiled without logging code (use '--features logging')");
    }
    let input_name = config
        .cnf_file
        .as_ref()
        .map_or("<stdin>".to_string(), |p| p.to_string_lossy().into_owned());
    message(&config, &format!(
        "{} {}, a CDCL SAT solver",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ));
    message(&config, &format!("reading from '{input_name}'"));
    let cnf = load(&config, &input_name);
    message(&config, &format!(
        "parsed header 'p cnf {} {}'",
        cnf.description.num_of_variables, cnf.description.num_of_clauses,
    ));
    let mut solver = Solver::instantiate(&config, &cnf.description).inject(cnf);
    if let Some(limit) = config.conflict_limit {
        verbose(&config, &format!("solving with conflict limit {limit}"));
    }
    solver.state.report(&solver.asg, '*');
    let res = solver.solve();
    let code = match res {
        Ok(Certificate::SAT(_)) => SATISFIABLE,
        Ok(Certificate::UNSAT) => UNSATISFIABLE,
        Err(SolverError::ConflictLimit) => UNKNOWN,
        Err(ref e) => {
            eprintln!("{}: error: {e}", env!("CARGO_PKG_NAME"));
            exit(1);
        }
    };
    let tag = match code {
        SATISFIABLE => '1',
        UNSATISFIABLE => '0',
        _ => '?',
    };
    solver.state.report(&solver.asg, tag);
    solver.state.line();
    match res {
        Ok(Certificate::SAT(model)) => {
            println!("s SATISFIABLE");
            if !config.no_witness {
                print_model(&model);
            }
        }
        Ok(Certificate::UNSAT) => println!("s UNSATISFIABLE"),
        _ => (), // no status line on unknown
    }
    solver.state.print_statistics(&solver.asg);
    solver.state.message(&format!("exit code {code}"));
    exit(code);
}

fn load(config: &Config, input_name: &str) -> Cnf {
    let parsed = match &config.cnf_file {
        Some(path) => cnf::load(path),
        None => cnf::parse(io::stdin().lock(), input_name),
    };
    match parsed {
        Ok(cnf) => cnf,
        Err(e) => {
            eprintln!(
                "{}: parse error in '{input_name}': {e}",
                env!("CARGO_PKG_NAME"),
            );
            exit(1);
        }
    }
}

/// print the model in the format of the SAT competition, e.g.
/// `v -1 2 3 0`, always listing a full assignment.
fn print_model(model: &[i32]) {
    let mut line = String::from("v");
    for l in model {
        line.push(' ');
        line.push_str(&l.to_string());
    }
    line.push_str(" 0");
    println!("{line}");
}

fn message(config: &Config, mes: &str) {
    if config.verbosity() >= 0 {
        println!("c {mes}");
    }
}

fn verbose(config: &Config, mes: &str) {
    if config.verbosity() > 0 {
        println!("c {mes}");
    }
}

fn die(mes: &str) -> ! {
    eprintln!("{}: error: {mes}", env!("CARGO_PKG_NAME"));
    exit(1);
}
