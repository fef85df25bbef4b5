//! Interactive filtering session
//!
//! Fetches the profile list once, then reads filter commands from stdin.
//! Every accepted command dispatches one action and ends with a synchronous
//! filter + render pass, mirroring how the one-shot `list` command works.

use std::io::{self, BufRead as _, Write as _};

use anyhow::Context as _;

use devfinder::controller::{Action, Session};
use devfinder::loader;
use devfinder::models::{CombineMode, Language};
use devfinder::output::{Listing, OutputMode};

const HELP: &str = "\
Commands:
  name [text]      set the name query (empty clears it)
  lang <tag>       toggle a language tag (java, javascript, python)
  mode <any|all>   set the combine mode
  show             re-render the current listing
  help             show this help
  quit             exit";

/// Run the interactive session against the given endpoint
pub fn repl(endpoint: &str, output: OutputMode) -> anyhow::Result<()> {
    let devs = loader::fetch_developers(endpoint)?;
    let mut session = Session::new(devs);

    render(&session, output)?;
    if output == OutputMode::Human {
        println!("{HELP}\n");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if output == OutputMode::Human {
            print!("> ");
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(cmd, rest)| (cmd, rest.trim()));

        let action = match command {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" => {
                println!("{HELP}");
                continue;
            },
            "show" => {
                render(&session, output)?;
                continue;
            },
            "name" => Action::SetQuery(rest.to_string()),
            "lang" => match rest.parse::<Language>() {
                Ok(lang) => Action::ToggleLanguage(lang),
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                },
            },
            "mode" => match rest.parse::<CombineMode>() {
                Ok(mode) => Action::SetMode(mode),
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                },
            },
            other => {
                eprintln!("Unknown command: {other}. Type 'help' for commands.");
                continue;
            },
        };

        session.dispatch(action);
        render(&session, output)?;
    }

    Ok(())
}

fn render(session: &Session, output: OutputMode) -> anyhow::Result<()> {
    let listing = Listing::build(session.visible())
        .context("profile data references a tag outside the supported set")?;
    listing.render(output);
    Ok(())
}
