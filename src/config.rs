use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Evaluates relational algebra queries over relations defined in a text file
#[derive(Parser, Clone, Debug)]
#[command(name = "relq")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File holding the relation definitions and the queries
    #[arg(long, default_value = "input.txt")]
    pub input: PathBuf,

    /// File the query results are written to
    #[arg(long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Most verbose level of the log written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["relq"]).unwrap();
        assert_eq!(PathBuf::from("input.txt"), config.input);
        assert_eq!(PathBuf::from("output.txt"), config.output);
        assert_eq!(Level::WARN, config.log_level);
    }

    #[test]
    fn test_flags() {
        {
            let config = Config::try_parse_from([
                "relq",
                "--input",
                "data/in.txt",
                "--output",
                "out.txt",
                "--log-level",
                "debug",
            ])
            .unwrap();
            assert_eq!(PathBuf::from("data/in.txt"), config.input);
            assert_eq!(PathBuf::from("out.txt"), config.output);
            assert_eq!(Level::DEBUG, config.log_level);
        }
        {
            assert!(Config::try_parse_from(["relq", "--log-level", "loud"]).is_err());
            assert!(Config::try_parse_from(["relq", "in.txt"]).is_err());
        }
    }
}
