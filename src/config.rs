/// Crate `config` provides the solver's configuration and CLI.
use {std::path::PathBuf, structopt::StructOpt};

/// Configuration built from command line options.
#[derive(Clone, Debug, StructOpt)]
#[structopt(name = "sprat", about = "A CDCL SAT solver")]
pub struct Config {
    /// CNF file in DIMACS format; reads from stdin if omitted
    #[structopt(parse(from_os_str))]
    pub cnf_file: Option<PathBuf>,

    /// Do not print any messages
    #[structopt(long = "quiet", short = "q")]
    pub quiet_mode: bool,

    /// Print verbose messages
    #[structopt(long = "verbose", short = "v")]
    pub verbose_mode: bool,

    /// Print very verbose logging information
    #[structopt(long = "logging", short = "l")]
    pub use_log: bool,

    /// Do not print a witness if satisfiable
    #[structopt(long = "no-witness", short = "n")]
    pub no_witness: bool,

    /// Conflict limit; the solver gives up with UNKNOWN when reached
    #[structopt(long = "conflict-limit", short = "c")]
    pub conflict_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            cnf_file: None,
            quiet_mode: true,
            verbose_mode: false,
            use_log: false,
            no_witness: false,
            conflict_limit: None,
        }
    }
}

impl<T> From<T> for Config
where
    PathBuf: From<T>,
{
    fn from(path: T) -> Config {
        Config {
            cnf_file: Some(PathBuf::from(path)),
            ..Config::default()
        }
    }
}

impl Config {
    /// the verbosity level: -1 = quiet, 0 = normal, 1 = verbose.
    pub fn verbosity(&self) -> i32 {
        if self.quiet_mode {
            -1
        } else if self.verbose_mode {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quiet_and_unbounded() {
        let config = Config::default();
        assert_eq!(config.verbosity(), -1);
        assert_eq!(config.conflict_limit, None);
    }
    #[test]
    fn test_config_from_path() {
        let config = Config::from("cnfs/sample.cnf");
        assert_eq!(config.cnf_file, Some(PathBuf::from("cnfs/sample.cnf")));
    }
}
