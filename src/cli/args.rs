//! CLI argument definitions
//!
//! Positional traffic query plus output options, and config merging.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::{Render, TrafficRequest};
use crate::config::{Config, ConfigColorMode, ConfigTableStyle};
use crate::consts::{DEFAULT_API_BASE, DEFAULT_DATA_DIR, SAVE_CSV};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum TableStyle {
    /// Tab-separated text (default)
    #[default]
    Plain,
    /// Box-drawn table
    Boxed,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "ghtraffic")]
#[command(about = "GitHub clone and view traffic, printed and logged to CSV", version)]
pub(crate) struct Cli {
    /// GitHub username, also the repository owner
    pub(crate) username: String,

    /// Repository name
    pub(crate) repo: String,

    /// Traffic operation: clones or views
    pub(crate) op: String,

    /// "save_csv" appends to the CSV log, anything else (e.g. "no_csv") skips it
    pub(crate) save_csv: String,

    /// Directory for CSV logs (default: git-traffics/data)
    #[arg(long, value_name = "DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// GitHub API root, e.g. for GitHub Enterprise
    #[arg(long, value_name = "URL")]
    pub(crate) api_base: Option<String>,

    /// Table style
    #[arg(long, value_enum, default_value = "plain")]
    pub(crate) style: TableStyle,

    /// Output as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Color output mode (boxed style only)
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Print request and file diagnostics to stderr
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(style) = config.style
            && self.style == TableStyle::Plain
        {
            self.style = match style {
                ConfigTableStyle::Plain => TableStyle::Plain,
                ConfigTableStyle::Boxed => TableStyle::Boxed,
            };
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.data_dir.is_none() {
            self.data_dir = config.data_dir.clone();
        }
        if self.api_base.is_none() {
            self.api_base = config.api_base.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn render(&self) -> Render {
        if self.json {
            return Render::Json;
        }
        match self.style {
            TableStyle::Plain => Render::Plain,
            TableStyle::Boxed => Render::Boxed {
                use_color: self.use_color(),
            },
        }
    }

    pub(crate) fn username(&self) -> &str {
        self.username.trim()
    }

    pub(crate) fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub(crate) fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Positional arguments are trimmed; `op` is otherwise passed through as given.
    pub(crate) fn traffic_request(&self) -> Result<TrafficRequest, AppError> {
        let repo = self.repo.trim();
        if repo.is_empty() {
            return Err(AppError::EmptyRepository);
        }
        Ok(TrafficRequest {
            repo: repo.to_string(),
            op: self.op.trim().to_string(),
            save_csv: self.save_csv.trim() == SAVE_CSV,
            render: self.render(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["ghtraffic"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn four_positionals_required() {
        assert!(Cli::try_parse_from(["ghtraffic", "octocat", "demo", "clones"]).is_err());
    }

    #[test]
    fn save_csv_literal_enables_logging() {
        let request = parse(&["octocat", "demo", "clones", "save_csv"])
            .traffic_request()
            .unwrap();
        assert!(request.save_csv);
        assert_eq!(request.render, Render::Plain);

        let request = parse(&["octocat", "demo", "clones", "no_csv"])
            .traffic_request()
            .unwrap();
        assert!(!request.save_csv);
    }

    #[test]
    fn positionals_are_trimmed() {
        let cli = parse(&[" octocat ", " demo ", " views\n", "save_csv "]);
        assert_eq!(cli.username(), "octocat");
        let request = cli.traffic_request().unwrap();
        assert_eq!(request.repo, "demo");
        assert_eq!(request.op, "views");
        assert!(request.save_csv);
    }

    #[test]
    fn op_is_not_validated() {
        let request = parse(&["octocat", "demo", "popular", "no_csv"])
            .traffic_request()
            .unwrap();
        assert_eq!(request.op, "popular");
    }

    #[test]
    fn blank_repo_is_rejected() {
        let err = parse(&["octocat", "  ", "clones", "save_csv"])
            .traffic_request()
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyRepository));
    }

    #[test]
    fn json_flag_wins_over_style() {
        let cli = parse(&["u", "r", "views", "no_csv", "--style", "boxed", "-j"]);
        assert_eq!(cli.render(), Render::Json);
    }

    #[test]
    fn boxed_respects_no_color() {
        let cli = parse(&["u", "r", "views", "no_csv", "--style", "boxed", "--color", "always", "--no-color"]);
        assert_eq!(cli.render(), Render::Boxed { use_color: false });
    }

    #[test]
    fn defaults_when_nothing_configured() {
        let cli = parse(&["u", "r", "views", "no_csv"]).with_config(&Config::default());
        assert_eq!(cli.data_dir(), PathBuf::from("git-traffics/data"));
        assert_eq!(cli.api_base(), "https://api.github.com");
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/traffic")),
            api_base: Some("https://ghe.example.com/api/v3".to_string()),
            style: Some(ConfigTableStyle::Boxed),
            color: Some(ConfigColorMode::Never),
            debug: true,
            ..Default::default()
        };
        let cli = parse(&["u", "r", "views", "no_csv"]).with_config(&config);
        assert_eq!(cli.data_dir(), PathBuf::from("/srv/traffic"));
        assert_eq!(cli.api_base(), "https://ghe.example.com/api/v3");
        assert_eq!(cli.style, TableStyle::Boxed);
        assert_eq!(cli.color, ColorMode::Never);
        assert!(cli.debug);
    }

    #[test]
    fn cli_options_beat_config() {
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/traffic")),
            color: Some(ConfigColorMode::Never),
            ..Default::default()
        };
        let cli = parse(&["u", "r", "views", "no_csv", "--data-dir", "out", "--color", "always"])
            .with_config(&config);
        assert_eq!(cli.data_dir(), PathBuf::from("out"));
        assert_eq!(cli.color, ColorMode::Always);
    }
}
