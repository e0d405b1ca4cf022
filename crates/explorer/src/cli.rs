use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "explorer", version, about = "Explore GitHub repositories and their issues")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "EXPLORER_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitHub API base URL (overrides config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Storage file holding the repository list (overrides config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Language for messages (overrides config file)
    #[arg(long, value_enum, global = true)]
    pub locale: Option<LocaleArg>,

    /// Log fetches and storage access to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum LocaleArg {
    /// English
    En,
    /// Brazilian Portuguese
    #[value(name = "pt-br")]
    PtBr,
}

impl From<LocaleArg> for explorer_core::Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => explorer_core::Locale::En,
            LocaleArg::PtBr => explorer_core::Locale::PtBr,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a repository and add it to the saved list
    Add {
        /// Repository identifier (owner/name)
        identifier: Option<String>,
    },
    /// Show the saved repository list
    #[command(visible_alias = "dashboard", visible_alias = "ls")]
    List,
    /// Show a repository with its statistics and open issues
    #[command(visible_alias = "repo")]
    Show {
        /// Repository identifier (owner/name)
        identifier: String,
    },
    /// Navigate to a path ("/" or "/repositories/<owner>/<name>")
    Go {
        /// Route path
        path: String,
    },
    /// Open a repository or one of its issues in your browser
    Open {
        /// Repository identifier (owner/name)
        identifier: String,
        /// Issue number to open instead of the repository page
        #[arg(long, short = 'i')]
        issue: Option<u64>,
        /// Print the URL without launching a browser
        #[arg(long)]
        print: bool,
    },
    /// Configuration and storage locations
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file and storage file locations
    Path,
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "explorer", &mut std::io::stdout());
    }
}
