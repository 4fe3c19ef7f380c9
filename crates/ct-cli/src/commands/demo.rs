//! Demo command - interactive reply session over a seeded thread
//!
//! Mirrors the original comment box demo: pick a comment by id, type a
//! reply, and the thread is rebuilt around it while everything else is
//! shared with the previous version.

use super::render::render_thread;
use anyhow::Context;
use clap::Args;
use colored::Colorize;
use ct_core::config::{Config, LimitConfig};
use ct_core::{Comment, CommentId, CommentThread, ReplyBuilder, ReplyValidator};
use dialoguer::Input;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Load the starting thread from a JSON file instead of the built-in seed
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Author name for composed replies (overrides config)
    #[arg(long)]
    pub author: Option<String>,
}

/// Execute the demo command
pub fn execute(args: DemoArgs, config: &Config) -> anyhow::Result<()> {
    let mut thread = match &args.seed {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse seed file: {}", path.display()))?
        }
        None => seed_thread(),
    };
    let author = args.author.unwrap_or_else(|| config.demo.author.clone());

    println!("{}", "Comment thread demo".bold());
    println!("Commands: reply <id> <text>, find <id>, show, help, quit\n");
    print!("{}", render_thread(&thread, config.demo.indent_width, true));

    loop {
        let line: String = match Input::new().with_prompt(">").interact_text() {
            Ok(line) => line,
            Err(_) => break, // stdin closed
        };

        let command = match DemoCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.red());
                continue;
            }
        };

        match command {
            DemoCommand::Reply { target, text } => {
                match apply_reply(&thread, &target, &author, &text, &config.limits) {
                    Ok((updated, true)) => {
                        info!(target_id = %target, "reply added");
                        thread = updated;
                        print!("{}", render_thread(&thread, config.demo.indent_width, true));
                    }
                    Ok((_, false)) => {
                        println!("{}", format!("No comment with id {}", target).yellow());
                    }
                    Err(err) => println!("{}", err.to_string().red()),
                }
            }
            DemoCommand::Find(id) => match thread.find(&CommentId::from_string(id.as_str())) {
                Some(comment) => {
                    println!("{}: {}", comment.author.magenta().bold(), comment.text);
                }
                None => println!("{}", format!("No comment with id {}", id).yellow()),
            },
            DemoCommand::Show => {
                print!("{}", render_thread(&thread, config.demo.indent_width, true));
            }
            DemoCommand::Help => {
                println!("reply <id> <text>  append a reply under the comment with <id>");
                println!("find <id>          look up a comment by id");
                println!("show               print the thread");
                println!("quit               leave the demo");
            }
            DemoCommand::Quit => break,
        }
    }

    Ok(())
}

/// Append a reply composed from user input
///
/// Returns the resulting thread and whether the reply was actually
/// applied. A missing target is not an error in the engine; the only way
/// to notice it is that the thread did not grow.
fn apply_reply(
    thread: &CommentThread,
    target: &str,
    author: &str,
    text: &str,
    limits: &LimitConfig,
) -> ct_core::Result<(CommentThread, bool)> {
    let reply = ReplyBuilder::new()
        .validator(ReplyValidator::from_limits(limits))
        .author(author)
        .text(text)
        .build()?;

    let updated = thread.add_reply(&CommentId::from_string(target), reply)?;
    let applied = updated.len() > thread.len();
    Ok((updated, applied))
}

/// A parsed demo session command
#[derive(Debug, PartialEq, Eq)]
enum DemoCommand {
    Reply { target: String, text: String },
    Find(String),
    Show,
    Help,
    Quit,
}

impl DemoCommand {
    /// Parse a line of user input
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "reply" => {
                let (target, text) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "Usage: reply <id> <text>".to_string())?;
                Ok(DemoCommand::Reply {
                    target: target.to_string(),
                    text: text.trim().to_string(),
                })
            }
            "find" => {
                if rest.is_empty() {
                    return Err("Usage: find <id>".to_string());
                }
                Ok(DemoCommand::Find(rest.to_string()))
            }
            "show" => Ok(DemoCommand::Show),
            "help" => Ok(DemoCommand::Help),
            "quit" | "exit" => Ok(DemoCommand::Quit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

/// The built-in seed thread
fn seed_thread() -> CommentThread {
    let mut first = Comment::new(
        CommentId::from_string("1"),
        "John Doe",
        "This is a great post!",
    );
    first.replies.push(Arc::new(Comment::new(
        CommentId::from_string("2"),
        "Jane Smith",
        "I agree!",
    )));
    let second = Comment::new(
        CommentId::from_string("3"),
        "Bob Johnson",
        "Thanks for sharing",
    );
    CommentThread::from_roots([first, second])
}
