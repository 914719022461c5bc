//! Module `state` is a collection of misc data, drawing the progress
//! report rows and the final statistics in the SAT-competition comment
//! format.
use {
    crate::{assign::AssignStack, types::*},
    std::time::Instant,
};

/// Miscellaneous data holder: configuration, reporting, and the buffers
/// shared by conflict analysis.
#[derive(Clone, Debug)]
pub struct State {
    /// cleared by an empty clause while loading the formula
    pub ok: bool,
    /// solver configuration
    pub config: Config,
    /// the problem description
    pub target: CNFDescription,
    /// the number of backjumps over more than one level.
    pub num_backjump: usize,
    /// the number of progress rows printed so far.
    pub num_report: usize,
    /// the learnt clause under construction, reused between conflicts
    pub new_learnt: Vec<Lit>,
    /// when the solver was instantiated
    pub start: Instant,
}

impl Default for State {
    fn default() -> State {
        State {
            ok: true,
            config: Config::default(),
            target: CNFDescription::default(),
            num_backjump: 0,
            num_report: 0,
            new_learnt: Vec::new(),
            start: Instant::now(),
        }
    }
}

impl Instantiate for State {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> State {
        State {
            config: config.clone(),
            target: cnf.clone(),
            ..State::default()
        }
    }
}

fn average(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

fn percent(a: f64, b: f64) -> f64 {
    average(100.0 * a, b)
}

impl State {
    /// seconds since instantiation.
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
    /// print a message line prefixed with `c `.
    pub fn message(&self, mes: &str) {
        if self.config.verbosity() < 0 {
            return;
        }
        println!("c {mes}");
    }
    /// print an empty comment line.
    pub fn line(&self) {
        if self.config.verbosity() < 0 {
            return;
        }
        println!("c");
    }
    /// print a message only in verbose mode.
    pub fn verbose(&self, mes: &str) {
        if self.config.verbosity() <= 0 {
            return;
        }
        println!("c {mes}");
    }
    /// print one progress row; the header is repeated every 20 rows.
    pub fn report(&mut self, asg: &AssignStack, tag: char) {
        if self.config.verbosity() < 0 {
            return;
        }
        if self.num_report % 20 == 0 {
            println!(
                "c\nc              decisions              variables\nc   seconds                 conflicts           remaining\nc"
            );
        }
        self.num_report += 1;
        let remaining = asg.num_vars - asg.num_asserted_vars;
        println!(
            "c {} {:7.2} {:12} {:12} {:9} {:3.0}%",
            tag,
            self.elapsed(),
            asg.num_decision,
            asg.num_conflict,
            remaining,
            percent(remaining as f64, asg.num_vars as f64),
        );
    }
    /// print the closing statistics block.
    pub fn print_statistics(&self, asg: &AssignStack) {
        if self.config.verbosity() < 0 {
            return;
        }
        let t = self.elapsed();
        println!("c");
        println!(
            "c {:<15} {:16} {:12.2} per second",
            "conflicts:",
            asg.num_conflict,
            average(asg.num_conflict as f64, t),
        );
        println!(
            "c {:<15} {:16} {:12.2} per second",
            "decisions:",
            asg.num_decision,
            average(asg.num_decision as f64, t),
        );
        println!(
            "c {:<15} {:16} {:12.2} % conflicts",
            "backjumps:",
            self.num_backjump,
            percent(self.num_backjump as f64, asg.num_conflict as f64),
        );
        println!(
            "c {:<15} {:16} {:12.2} million per second",
            "propagations:",
            asg.num_propagation,
            average(asg.num_propagation as f64 * 1e-6, t),
        );
        println!("c");
        println!("c {:<15} {:16.2} seconds", "process-time:", t);
        println!("c");
    }
}
