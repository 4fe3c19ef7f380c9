//! Render command - print a thread file as an indented listing

use anyhow::Context;
use clap::Args;
use colored::Colorize;
use ct_core::config::Config;
use ct_core::CommentThread;
use std::path::PathBuf;

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Path to a thread JSON file
    pub file: PathBuf,

    /// Show comment ids next to each author
    #[arg(long)]
    pub ids: bool,
}

/// Execute the render command
pub fn execute(args: RenderArgs, config: &Config) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read thread file: {}", args.file.display()))?;
    let thread: CommentThread = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse thread file: {}", args.file.display()))?;

    print!(
        "{}",
        render_thread(&thread, config.demo.indent_width, args.ids)
    );
    println!(
        "{}",
        format!(
            "{} comments, max depth {}",
            thread.len(),
            thread.max_depth().map_or(0, |d| d + 1)
        )
        .dimmed()
    );
    Ok(())
}

/// Render the thread as indented text, one comment per line pair
pub fn render_thread(thread: &CommentThread, indent_width: usize, show_ids: bool) -> String {
    let mut out = String::new();
    for entry in thread.flatten() {
        let pad = " ".repeat(entry.depth * indent_width);
        let author = entry.comment.author.magenta().bold();
        if show_ids {
            let id = format!("[{}]", entry.comment.id).dimmed();
            out.push_str(&format!("{}{} {}\n", pad, author, id));
        } else {
            out.push_str(&format!("{}{}\n", pad, author));
        }
        out.push_str(&format!("{}{}\n", pad, entry.comment.text));
    }
    out
}
