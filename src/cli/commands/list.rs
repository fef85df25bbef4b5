//! One-shot filtered listing

use anyhow::Context as _;

use devfinder::controller::Session;
use devfinder::models::{CombineMode, FilterState, Language};
use devfinder::output::{Listing, OutputMode};
use devfinder::{loader, search};

/// Fetch profiles, apply the filters from the flags, and render the cards
pub fn list(
    endpoint: &str,
    name: Option<&str>,
    langs: &[String],
    mode: &str,
    output: OutputMode,
) -> anyhow::Result<()> {
    let mode = mode
        .parse::<CombineMode>()
        .map_err(anyhow::Error::msg)?;

    let mut state = FilterState::new();
    state.mode = mode;

    if let Some(query) = name {
        state.query = search::normalize(query);
    }

    // No --lang flags means every tag stays selected.
    if !langs.is_empty() {
        let tags = langs
            .iter()
            .map(|tag| tag.parse::<Language>())
            .collect::<Result<Vec<_>, _>>()?;
        state.select_only(&tags);
    }

    let devs = loader::fetch_developers(endpoint)?;
    let session = Session::with_state(devs, state);

    let listing = Listing::build(session.visible())
        .context("profile data references a tag outside the supported set")?;
    listing.render(output);

    Ok(())
}
