use clap::{Args, Parser, Subcommand};
use comimemo::form::CircleDraft;
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "comimemo", bin_name = "comimemo", version = get_version())]
#[command(about = "Keep track of the circles you want to visit at a convention", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start from this seed file (JSON array of circles)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub seed: Option<PathBuf>,

    /// Start with an empty list instead of the sample circles
    #[arg(long, global = true, conflicts_with = "seed", help_heading = "Options")]
    pub empty: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Circle(CircleCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

/// Commands that act on the circle list. Available both one-shot and inside a session.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CircleCommands {
    /// List circles
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Sort circles by priority (High, Medium, Low)
    #[command(display_order = 2)]
    Sort,

    /// Add a circle
    #[command(alias = "a", display_order = 3)]
    Add(AddArgs),

    /// Delete one or more circles
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Positions of the circles (e.g. 1 3 5, or 2-4)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Show the options accepted by `add`
    #[command(display_order = 5)]
    Choices,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Start an interactive session reading commands from stdin
    #[command(alias = "s", display_order = 10)]
    Session,

    /// Get or set configuration
    #[command(display_order = 11)]
    Config {
        /// Configuration key (seed-file, strict-add)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AddArgs {
    /// Artist name
    #[arg(long)]
    pub artist: Option<String>,

    /// Reference (URL, catalog number, ...)
    #[arg(long = "ref")]
    pub reference: Option<String>,

    /// Hall (East, West, South, or 東, 西, 南)
    #[arg(long)]
    pub hall: Option<String>,

    /// Row letter
    #[arg(long)]
    pub row: Option<String>,

    /// Desk number (1-64)
    #[arg(long)]
    pub desk: Option<String>,

    /// Position at the desk (a, b, ab)
    #[arg(long)]
    pub position: Option<String>,

    /// Priority (High, Medium, Low)
    #[arg(long, short)]
    pub priority: Option<String>,
}

impl AddArgs {
    pub fn into_draft(self) -> CircleDraft {
        CircleDraft {
            artist_name: self.artist.unwrap_or_default(),
            reference_id: self.reference.unwrap_or_default(),
            hall: self.hall.unwrap_or_default(),
            row: self.row.unwrap_or_default(),
            desk_number: self.desk.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
        }
    }
}

/// One line typed during a session.
#[derive(Parser, Debug)]
#[command(
    name = "comimemo",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    #[command(flatten)]
    Circle(CircleCommands),

    /// End the session
    #[command(aliases = ["exit", "q"], display_order = 20)]
    Quit,
}

/// Splits a session line into words. Single and double quotes group words;
/// a backslash escapes the next character.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unclosed quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_session(line: &str) -> SessionCommand {
        let words = split_line(line).unwrap();
        SessionLine::try_parse_from(words).unwrap().command
    }

    #[test]
    fn split_handles_quotes_and_escapes() {
        assert_eq!(
            split_line(r#"add --artist "Two Words" --ref 'a b'"#).unwrap(),
            vec!["add", "--artist", "Two Words", "--ref", "a b"]
        );
        assert_eq!(split_line(r"a\ b c").unwrap(), vec!["a b", "c"]);
        assert_eq!(split_line(r#"x """#).unwrap(), vec!["x", ""]);
        assert!(split_line("   ").unwrap().is_empty());
        assert!(split_line(r#"add "oops"#).is_err());
    }

    #[test]
    fn cli_parses_global_options() {
        let cli = Cli::try_parse_from(["comimemo", "--seed", "s.json", "list"]).unwrap();
        assert_eq!(cli.seed, Some(PathBuf::from("s.json")));
        assert!(matches!(
            cli.command,
            Some(Commands::Circle(CircleCommands::List))
        ));

        assert!(Cli::try_parse_from(["comimemo", "--seed", "s.json", "--empty"]).is_err());
    }

    #[test]
    fn cli_parses_delete_positions() {
        let cli = Cli::try_parse_from(["comimemo", "rm", "1", "3-4"]).unwrap();
        match cli.command {
            Some(Commands::Circle(CircleCommands::Delete { positions })) => {
                assert_eq!(positions, vec!["1", "3-4"]);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["comimemo", "delete"]).is_err());
    }

    #[test]
    fn add_args_become_a_draft() {
        let cli = Cli::try_parse_from([
            "comimemo", "add", "--artist", "Someone", "--ref", "42", "--hall", "East", "--row",
            "A", "--desk", "11", "--position", "a", "-p", "High",
        ])
        .unwrap();

        let Some(Commands::Circle(CircleCommands::Add(args))) = cli.command else {
            panic!("Expected add");
        };
        let draft = args.into_draft();
        assert_eq!(draft.place().as_deref(), Some("A-11a"));
        assert!(draft.is_complete());
    }

    #[test]
    fn session_lines_parse_without_binary_name() {
        assert_eq!(parse_session("ls"), SessionCommand::Circle(CircleCommands::List));
        assert_eq!(parse_session("sort"), SessionCommand::Circle(CircleCommands::Sort));
        assert_eq!(parse_session("exit"), SessionCommand::Quit);
        assert_eq!(
            parse_session("delete 2"),
            SessionCommand::Circle(CircleCommands::Delete {
                positions: vec!["2".into()]
            })
        );
    }

    #[test]
    fn session_rejects_unknown_commands() {
        assert!(SessionLine::try_parse_from(["fly"]).is_err());
        assert!(SessionLine::try_parse_from(["session"]).is_err());
    }
}
