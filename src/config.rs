use std::path::PathBuf;

use clap::Parser;

/// Startup options. Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "steam-dashboard")]
#[command(about = "Dashboard for Steam top-played game statistics", long_about = None)]
pub struct Config {
    /// Dataset to load at startup (.csv, .tsv, .json, .parquet).
    /// Without it, use File → Open… once the window is up.
    #[arg(short, long, env = "STEAM_DASHBOARD_DATA")]
    pub data: Option<PathBuf>,

    /// How many games the top chart shows.
    #[arg(long, env = "STEAM_DASHBOARD_TOP_N", default_value_t = 10,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub top_n: u16,

    /// Initial window width in points.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 820.0)]
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::try_parse_from(["steam-dashboard"]).unwrap();
        assert_eq!(cfg.top_n, 10);
        assert_eq!(cfg.width, 1280.0);
        assert_eq!(cfg.height, 820.0);
    }

    #[test]
    fn explicit_flags() {
        let cfg = Config::try_parse_from([
            "steam-dashboard",
            "--data",
            "data/steam_top_100_played_games_clean.csv",
            "--top-n",
            "5",
        ])
        .unwrap();
        assert_eq!(
            cfg.data,
            Some(PathBuf::from("data/steam_top_100_played_games_clean.csv"))
        );
        assert_eq!(cfg.top_n, 5);
    }

    #[test]
    fn zero_top_n_is_rejected() {
        assert!(Config::try_parse_from(["steam-dashboard", "--top-n", "0"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
