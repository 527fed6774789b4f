use std::path::PathBuf;

use clap::Parser;

/// Every flag can also be set through the environment or a `.env` file
#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    /// Directory holding index.html and any other static files
    #[clap(long, env, default_value = "assets")]
    pub assets_dir: PathBuf,
    #[clap(long, env, default_value = "exercise_tracker.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    fn default_of(id: &str) -> String {
        let cmd = Cli::command();
        let arg = cmd.get_arguments().find(|a| a.get_id() == id).unwrap();
        arg.get_default_values()[0].to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_of("port"), "3000");
        assert_eq!(default_of("assets_dir"), "assets");
        assert_eq!(default_of("bind_addr"), "127.0.0.1");
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "server",
            "--port",
            "8081",
            "--sqlite-connection-string",
            "/tmp/other.sqlite",
        ])
        .unwrap();
        assert_eq!(cli.port, 8081);
        assert_eq!(cli.sqlite_connection_string, "/tmp/other.sqlite");
    }
}
