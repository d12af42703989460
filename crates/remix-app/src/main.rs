//! Remix application binary - composition root.
//!
//! 1. Parse CLI arguments and initialize tracing
//! 2. Load configuration from TOML
//! 3. Load the knowledge catalog (built-in or JSON file)
//! 4. Run the selected command: interactive chat, one-shot ask, or catalog dump

mod chat;
mod cli;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use remix_assistant::{ConversationEngine, InstantDelay, JitteredDelay, KnowledgeBase, Matcher, Reply};
use remix_core::config::AssistantConfig;
use remix_core::RemixConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

use cli::{CliArgs, Command};

/// Load the config file, or defaults when there is none.
///
/// A file that exists but does not parse or validate is logged and replaced
/// by defaults.
fn load_config(path: &Path) -> RemixConfig {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return RemixConfig::default();
    }
    RemixConfig::load_or_default(path)
}

fn load_knowledge(path: Option<&Path>) -> remix_core::Result<KnowledgeBase> {
    match path {
        Some(p) => Ok(KnowledgeBase::from_json_file(p)?),
        None => Ok(KnowledgeBase::builtin()),
    }
}

fn print_reply(reply: &Reply) {
    println!("{}", reply.answer);
    for link in &reply.links {
        println!("  -> {} ({})", link.text, link.url);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing goes to stderr so it never interleaves with the conversation.
    // RUST_LOG wins; otherwise the filter is swapped once the config is read.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let initial = env_filter
        .unwrap_or_else(|| EnvFilter::new(args.log_level.as_deref().unwrap_or("info")));
    let (filter, filter_handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_file = args.resolve_config_path();
    let config = load_config(&config_file);
    if !from_env {
        filter_handle.reload(EnvFilter::new(
            args.resolve_log_level(&config.general.log_level),
        ))?;
    }

    let catalog_path = args.resolve_catalog_path(&config);
    let knowledge = Arc::new(load_knowledge(catalog_path.as_deref())?);
    tracing::info!(entries = knowledge.len(), "Knowledge catalog ready");

    match args.command() {
        Command::Chat => {
            if args.instant {
                let assistant = AssistantConfig {
                    typing_effect: false,
                    ..config.assistant.clone()
                };
                let engine = ConversationEngine::new(knowledge, InstantDelay, &assistant);
                chat::run(engine).await?;
            } else {
                let delay = JitteredDelay::from_config(&config.assistant);
                let engine = ConversationEngine::new(knowledge, delay, &config.assistant);
                chat::run(engine).await?;
            }
        }
        Command::Ask { question } => {
            let matcher = Matcher::new(knowledge);
            print_reply(&matcher.lookup(&question.join(" ")));
        }
        Command::Catalog => {
            println!("{}", knowledge.to_json_pretty()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use remix_core::RemixError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config(Path::new("/no/such/remix/config.toml"));
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_load_config_reads_file() {
        let file = temp_file("[general]\nlog_level = \"debug\"\n");
        assert_eq!(load_config(file.path()).general.log_level, "debug");
    }

    #[test]
    fn test_load_config_invalid_file_uses_defaults() {
        let file = temp_file("[assistant]\nreveal_min_ms = 50\nreveal_max_ms = 10\n");
        let config = load_config(file.path());
        assert_eq!(config.assistant.reveal_min_ms, 15);
    }

    #[test]
    fn test_load_knowledge_builtin() {
        let kb = load_knowledge(None).unwrap();
        assert!(!kb.is_empty());
    }

    #[test]
    fn test_load_knowledge_missing_file_is_io_error() {
        let err = load_knowledge(Some(Path::new("/no/such/faq.json"))).unwrap_err();
        assert!(matches!(err, RemixError::Io(_)));
    }

    #[test]
    fn test_load_knowledge_invalid_catalog_is_catalog_error() {
        let file = temp_file("[]");
        let err = load_knowledge(Some(file.path())).unwrap_err();
        assert!(matches!(err, RemixError::Catalog(_)));
    }
}
