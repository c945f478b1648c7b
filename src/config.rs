use crate::{Error, Result};

/// How routing tables are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab separated tables, one per algorithm
    #[default]
    Text,
    /// A JSON array of route reports
    Json,
}

/// Configuration of a `routing_protocols` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub format: OutputFormat,
    /// Run both engines on the rayon pool
    pub parallel: bool,
    /// Print the topology diagram and the input prompt
    pub show_topology: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            parallel: false,
            show_topology: true,
        }
    }
}

impl RunConfig {
    /// Usage line printed for `--help`
    pub const USAGE: &'static str = "usage: routing_protocols [--json] [--parallel] [--quiet]";

    /// Parses command line flags, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = RunConfig::default();
        for arg in args {
            match arg.as_ref() {
                "--json" => config.format = OutputFormat::Json,
                "--parallel" => config.parallel = true,
                "--quiet" => config.show_topology = false,
                other => return Err(Error::InvalidArgument(other.to_string())),
            }
        }
        Ok(config)
    }
}
