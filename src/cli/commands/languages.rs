//! List the supported language tags

use devfinder::models::Language;
use devfinder::output::OutputMode;

/// Print the supported tag table
pub fn languages(output: OutputMode) -> anyhow::Result<()> {
    match output {
        OutputMode::Human => {
            println!("Supported language tags:\n");
            for lang in Language::ALL {
                println!("  {:<12} {} {}", lang.tag(), lang.icon(), lang.label());
            }
        },
        OutputMode::Json => {
            let tags: Vec<_> = Language::ALL
                .iter()
                .map(|lang| {
                    serde_json::json!({
                        "tag": lang.tag(),
                        "label": lang.label(),
                        "icon": lang.icon(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&tags)?);
        },
    }
    Ok(())
}
