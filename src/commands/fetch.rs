//! `tsync fetch`: save the subtitle files a stream offers

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use tsync::theme::current_theme;
use tsync::Config;

use super::subtitle_source;

pub fn handle(stream_id: u64, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let theme = current_theme();
    let source = subtitle_source(config)?;
    let subtitles = source.available(stream_id);

    if subtitles.is_empty() {
        println!(
            "{}",
            theme.secondary_text(&format!("No subtitles available for stream {}", stream_id))
        );
        return Ok(());
    }

    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    for subtitle in &subtitles {
        let code: String = subtitle
            .language
            .id
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
            .collect();
        let path = dir.join(format!("{}.vtt", code));
        fs::write(&path, &subtitle.body)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "{}",
            theme.success_text(&format!(
                "Saved {} ({})",
                path.display(),
                subtitle.language.label
            ))
        );
    }
    Ok(())
}
