use anyhow::Result;
use clap::{ArgGroup, Parser};
use gco::areas::git::GitCli;
use gco::areas::history::HistoryFile;
use gco::areas::resolver::Resolver;
use gco::artifacts::branch::reference::Reference;
use gco::artifacts::core::settings::{LOG_ENV, Settings};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gco",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Switch between git branches by recency",
    long_about = "Every checkout made through gco is remembered, together with the description \
    given when the branch was created. Recent branches can then be listed and checked out \
    again by their number instead of their name.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
    group(ArgGroup::new("action").args(["target", "create", "ordinal", "list"]))
)]
struct Cli {
    #[arg(
        index = 1,
        value_name = "BRANCH",
        help = "Branch to check out, or '-' for the most recent checkout"
    )]
    target: Option<String>,
    #[arg(
        short = 'b',
        num_args = 2,
        allow_hyphen_values = true,
        value_names = ["BRANCH", "DESCRIPTION"],
        help = "Create a described branch and check it out"
    )]
    create: Option<Vec<String>>,
    #[arg(
        short = 'n',
        value_name = "NUMBER",
        allow_negative_numbers = true,
        help = "Check out the branch listed at this position"
    )]
    ordinal: Option<i64>,
    #[arg(short = 'l', long = "list", help = "List recent checkouts")]
    list: bool,
}

enum Action {
    Create { name: String, description: String },
    Ordinal(i64),
    Switch(Reference),
    List,
}

impl Cli {
    fn action(self) -> Result<Action> {
        if let Some(values) = self.create {
            let [name, description] = <[String; 2]>::try_from(values)
                .map_err(|_| anyhow::anyhow!("-b expects a branch name and a description"))?;
            return Ok(Action::Create { name, description });
        }

        Ok(match (self.ordinal, self.target) {
            (Some(ordinal), _) => Action::Ordinal(ordinal),
            (None, Some(target)) => Action::Switch(Reference::parse(&target)),
            (None, None) => Action::List,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();
    colored::control::set_override(
        std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    );

    let settings = Settings::from_env()?;
    let pwd = std::env::current_dir()?;
    let git = GitCli::new(pwd.into_boxed_path());

    git.ensure_available()?;
    let git_dir = git.git_dir()?;

    let store = HistoryFile::in_git_dir(&git_dir, settings.history_limit);
    let resolver = Resolver::new(store, git, Box::new(std::io::stdout()));

    match cli.action()? {
        Action::Create { name, description } => resolver.create_branch(&name, &description)?,
        Action::Ordinal(ordinal) => resolver.switch_ordinal(ordinal)?,
        Action::Switch(reference) => resolver.switch_reference(&reference)?,
        Action::List => resolver.list()?,
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
