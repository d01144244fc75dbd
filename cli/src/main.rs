use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use puzzle_editor::{CommitPolicy, EditorConfig, EditorSession, Notifier};
use puzzle_model::{fixtures, ImageData, ObjectGroup, ObjectId, PuzzleDocument, RecipeSlot};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod render;

/// Prints notices to stderr, standing in for a blocking dialog
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("notice: {message}");
    }
}

fn cli() -> Command {
    Command::new("puzzle-editor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Combination puzzle editor over the sample document")
        .arg(
            Arg::new("config")
                .long("config")
                .help("Editor configuration (TOML)"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("show")
                .about("Print objects and recipes")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the document as JSON"),
                ),
        )
        .subcommand(Command::new("check").about("Report recipe violations"))
        .subcommand(
            Command::new("assign")
                .about("Assign an object into a recipe slot")
                .arg(
                    Arg::new("recipe")
                        .long("recipe")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Recipe index"),
                )
                .arg(
                    Arg::new("slot")
                        .long("slot")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Slot index: 0, 1 (ingredients) or 2 (result)"),
                )
                .arg(
                    Arg::new("object")
                        .long("object")
                        .required(true)
                        .help("Object id to assign"),
                )
                .arg(
                    Arg::new("new-recipe")
                        .long("new-recipe")
                        .action(ArgAction::SetTrue)
                        .help("Add an empty recipe first"),
                )
                .arg(
                    Arg::new("reject-invalid")
                        .long("reject-invalid")
                        .action(ArgAction::SetTrue)
                        .help("Discard writes that break recipe invariants"),
                ),
        )
        .subcommand(
            Command::new("new-object")
                .about("Create an object through the new-object modal")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("group")
                        .long("group")
                        .default_value("start")
                        .value_parser(["start", "combine"]),
                )
                .arg(Arg::new("image").long("image").help("Image URL")),
        )
}

fn load_config(path: Option<&String>) -> Result<EditorConfig> {
    let Some(path) = path else {
        return Ok(EditorConfig::default());
    };
    let text = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("reading config {path}"))?;
    let config =
        EditorConfig::from_toml_str(&text).with_context(|| format!("parsing config {path}"))?;
    tracing::debug!(path = %path, policy = ?config.commit_policy, "loaded editor config");
    Ok(config)
}

fn new_session(document: PuzzleDocument, config: EditorConfig) -> EditorSession {
    EditorSession::new(document, config, Arc::new(ConsoleNotifier))
}

/// Execute one command over `document`, writing results to `out`
fn run(matches: &ArgMatches, document: PuzzleDocument, out: &mut impl Write) -> Result<()> {
    let config = load_config(matches.get_one::<String>("config"))?;

    match matches.subcommand() {
        Some(("show", args)) => {
            let session = new_session(document, config);
            if args.get_flag("json") {
                let document = session.into_document();
                writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
            } else {
                write!(out, "{}", render::session_summary(&session))?;
            }
        }
        Some(("check", _)) => {
            let session = new_session(document, config);
            let violations = session.violations();
            if violations.is_empty() {
                writeln!(out, "no violations")?;
            } else {
                for violation in &violations {
                    writeln!(out, "{violation}")?;
                }
                bail!("{} recipe violation(s)", violations.len());
            }
        }
        Some(("assign", args)) => {
            let config = if args.get_flag("reject-invalid") {
                config.with_commit_policy(CommitPolicy::RejectInvalid)
            } else {
                config
            };
            let mut session = new_session(document, config);

            if args.get_flag("new-recipe") {
                let index = session.add_recipe();
                writeln!(out, "added recipe #{index}")?;
            }

            let recipe = *args.get_one::<usize>("recipe").context("missing --recipe")?;
            let slot = *args.get_one::<usize>("slot").context("missing --slot")?;
            let slot = RecipeSlot::try_from(slot)?;
            let object: ObjectId = args
                .get_one::<String>("object")
                .context("missing --object")?
                .parse()?;

            session.select_object(object)?;
            let outcome = session.assign_slot(recipe, slot)?;
            writeln!(out, "{}", render::assignment(&outcome))?;
            for row in session.recipe_rows() {
                writeln!(out, "  {}", render::recipe_row(&row))?;
            }
        }
        Some(("new-object", args)) => {
            let group = match args.get_one::<String>("group").map(String::as_str) {
                Some("combine") => ObjectGroup::Combine,
                _ => ObjectGroup::Start,
            };
            let mut session = new_session(document, config);

            session.open_new_object(group);
            let name = args.get_one::<String>("name").context("missing --name")?;
            session.set_draft_name(name.as_str())?;
            if let Some(url) = args.get_one::<String>("image") {
                session.set_draft_image(ImageData::url(url.as_str()))?;
            }
            let id = session.commit_new_object()?;
            writeln!(out, "created object {id} in {group}")?;
            write!(out, "{}", render::session_summary(&session))?;
        }
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    run(&matches, fixtures::sample_document(), &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use puzzle_model::Recipe;

    fn run_with(args: &[&str], document: PuzzleDocument) -> (Result<()>, String) {
        let matches = cli()
            .try_get_matches_from(std::iter::once("puzzle-editor").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = run(&matches, document, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn id(s: &str) -> ObjectId {
        s.parse().unwrap()
    }

    /// Sample document plus a self-producing recipe "2 + 3 -> 2"
    fn flagged_document() -> PuzzleDocument {
        fixtures::sample_document().with_recipe_at(1, Recipe::new(id("2"), id("3"), id("2")))
    }

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn assign_adds_recipe_and_writes() {
        let (result, out) = run_with(
            &["assign", "--new-recipe", "--recipe", "0", "--slot", "0", "--object", "1"],
            fixtures::sample_document(),
        );
        result.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "added recipe #0");
        assert_eq!(lines[1], "assigned (recipe incomplete)");
        assert_eq!(lines[2], "  #0 Fire + ? -> ?");
        assert_eq!(lines[3], "  #1 Water + Fire -> Steam");
    }

    #[test]
    fn assign_rejects_unknown_object() {
        let (result, out) = run_with(
            &["assign", "--recipe", "0", "--slot", "2", "--object", "99"],
            fixtures::sample_document(),
        );
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn reject_invalid_leaves_recipe_unchanged() {
        let (result, out) = run_with(
            &["assign", "--recipe", "0", "--slot", "2", "--object", "0", "--reject-invalid"],
            fixtures::sample_document(),
        );
        result.unwrap();
        assert!(out.contains("(rejected)"));
        assert!(out.contains("#0 Water + Fire -> Steam\n"));
    }

    #[test]
    fn show_json_prints_document() {
        let (result, out) = run_with(&["show", "--json"], fixtures::sample_document());
        result.unwrap();
        let back: PuzzleDocument = serde_json::from_str(&out).unwrap();
        assert_eq!(back, fixtures::sample_document());
    }

    #[test]
    fn new_object_joins_group() {
        let (result, out) = run_with(
            &["new-object", "--name", "Cloud", "--group", "combine", "--image", "/cloud.png"],
            fixtures::sample_document(),
        );
        result.unwrap();
        assert!(out.starts_with("created object 4 in combine\n"));
        assert!(out.contains("[4] Cloud </cloud.png>"));
    }

    #[test]
    fn config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"recipe_insertion = "back""#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.recipe_insertion, puzzle_editor::RecipeInsertion::Back);
        assert!(load_config(Some(&"/nonexistent/editor.toml".to_string())).is_err());
    }

    #[test]
    fn sample_document_checks_clean() {
        let (result, out) = run_with(&["check"], fixtures::sample_document());
        result.unwrap();
        assert_eq!(out, "no violations\n");
    }

    #[test]
    fn check_fails_on_flagged_document() {
        let (result, out) = run_with(&["check"], flagged_document());
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "1 recipe violation(s)");
        assert_eq!(out, "recipe 1: result cannot be an ingredient\n");
    }
}
