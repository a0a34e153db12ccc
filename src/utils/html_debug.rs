// src/utils/html_debug.rs
use crate::utils::error::AppError;
use std::fs;
use std::path::Path;

/// Saves a tagged document with every paragraph id shown inline and the
/// boundary paragraphs highlighted. `highlights` pairs a boundary kind
/// ("front", "back", ...) with a paragraph id.
pub fn save_debug_html(html: &str, path: &Path, highlights: &[(&str, &str)]) -> Result<(), AppError> {
    fs::write(path, annotate(html, highlights))?;
    tracing::info!("Saved debug HTML to {}", path.display());
    Ok(())
}

fn annotate(html: &str, highlights: &[(&str, &str)]) -> String {
    let mut style = String::from("<style>\n");
    style.push_str("p[id]::before { content: \"[\" attr(id) \"] \"; color: #888888; font-size: smaller; }\n");

    for (kind, id) in highlights {
        // CSS color per boundary kind
        let color = match *kind {
            "front" => "#FFFF00",
            "back" => "#FFA500",
            _ => "#FFC0CB",
        };
        style.push_str(&format!(
            "p[id=\"{}\"] {{ background-color: {}; }} /* {} boundary */\n",
            id, color, kind
        ));
    }
    style.push_str("</style>\n");

    // Right after the opening <head ...> tag, or up front if there is none
    match html.find("<head").and_then(|start| html[start..].find('>').map(|end| start + end + 1)) {
        Some(pos) => format!("{}{}{}", &html[..pos], style, &html[pos..]),
        None => format!("{}{}", style, html),
    }
}
