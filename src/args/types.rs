use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base url of the CMS, e.g. https://cms.example.org
    #[arg(long, env = "ALLIANCE_CMS_URL", value_name = "CMS_URL")]
    pub cms_url: Option<String>,
    /// API token for the CMS. A path under /run/secrets or /secrets is read from the file.
    #[arg(
        long,
        env = "ALLIANCE_CMS_TOKEN",
        value_name = "CMS_TOKEN",
        hide_env_values = true
    )]
    pub cms_token: Option<String>,
    /// Serve a JSON snapshot ({"event": ..., "teeTimes": [...]}) instead of querying the CMS.
    #[arg(
        long,
        value_name = "FIXTURE_JSON",
        value_parser = crate::args::validation::check_readable_snapshot
    )]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the leaderboard web server.
    Serve {
        #[arg(long, value_name = "ADDR", default_value = "0.0.0.0:8081")]
        bind: String,
    },
    /// Full-screen terminal board with the auto-scrolling TV view.
    Tv {
        #[arg(short = 'e', long, value_name = "EVENT_ID")]
        event: i64,
        /// Auto-scroll speed in rows per second.
        #[arg(
            long,
            value_name = "ROWS_PER_SEC",
            default_value_t = 2.0,
            value_parser = crate::args::validation::check_scroll_speed
        )]
        scroll_speed: f64,
        /// Directory for the rolling log file (the terminal is taken by the board).
        #[arg(long, value_name = "DIR", default_value = "logs")]
        log_dir: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Cms { url: String, token: Option<String> },
    Fixture(PathBuf),
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub source: DataSource,
    pub command: Command,
}
