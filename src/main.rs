use anyhow::{bail, Result};
use reelfinder::{
    details::render_outcome,
    fetch::TrendingClient,
    genres::{render_suggestion, suggest},
    text::title_hint,
    Config, DatasetId, IndexStore, Resolver,
};
use std::{env, sync::Arc};
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage:
  reelfinder details <utterance...> [--title <title>]
  reelfinder genre <genre>
  reelfinder trending";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reelfinder=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) configuration ────────────────────────────────────────────
    let cfg = Config::from_env();
    let mut args = env::args().skip(1);
    let command = args.next();
    let rest: Vec<String> = args.collect();

    // ─── 3) dispatch ─────────────────────────────────────────────────
    let reply = match command.as_deref() {
        Some("details") => details(&cfg, rest).await?,
        Some("genre") => render_suggestion(&suggest(rest.first().map(String::as_str))),
        Some("trending") => TrendingClient::from_config(&cfg)?.trending_reply().await,
        _ => bail!("{}", USAGE),
    };

    println!("{}", reply);
    Ok(())
}

async fn details(cfg: &Config, args: Vec<String>) -> Result<String> {
    let (slot, words) = split_title_flag(args)?;
    let utterance = words.join(" ");
    let hint = title_hint(slot.as_deref(), &utterance);

    let resolver = Arc::new(Resolver::new(IndexStore::from_fs()));
    let dataset = DatasetId::from_path(&cfg.dataset_path);

    info!(dataset = %dataset, hint = %hint, "resolving");
    let start = Instant::now();
    let outcome = resolver.resolve_async(hint, dataset).await;
    info!(elapsed = ?start.elapsed(), ok = outcome.is_ok(), "resolved");

    if let Err(e) = &outcome {
        if !e.is_routine() {
            bail!("resolution failed: {}", e);
        }
    }
    Ok(render_outcome(&utterance, &outcome))
}

/// Pulls `--title <value>` out of the argument list.
fn split_title_flag(args: Vec<String>) -> Result<(Option<String>, Vec<String>)> {
    let mut slot = None;
    let mut words = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--title" {
            match iter.next() {
                Some(value) => slot = Some(value),
                None => bail!("--title needs a value"),
            }
        } else {
            words.push(arg);
        }
    }
    Ok((slot, words))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_title_flag() -> Result<()> {
        let (slot, words) = split_title_flag(strings(&["how", "long", "--title", "Up"]))?;
        assert_eq!(slot.as_deref(), Some("Up"));
        assert_eq!(words, strings(&["how", "long"]));

        let (slot, words) = split_title_flag(strings(&["what", "is", "heat"]))?;
        assert_eq!(slot, None);
        assert_eq!(words.join(" "), "what is heat");

        assert!(split_title_flag(strings(&["--title"])).is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_details_against_file_dataset() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("netflix_titles.csv");
        std::fs::write(
            &path,
            "show_id,type,title,duration,description,release_year\n\
             s1,Movie,Inception,148 min,Dreams within dreams.,2010\n",
        )?;
        let cfg = Config {
            dataset_path: path,
            ..Config::default()
        };

        let reply = details(&cfg, strings(&["how", "long", "is", "Incepton?"])).await?;
        assert_eq!(reply, "The duration of 'Inception' is 148 min.");

        let reply = details(&cfg, strings(&["tell", "me", "about", "\"Toy", "Story\""])).await?;
        assert_eq!(reply, "I couldn't find 'toy story' in the dataset.");
        Ok(())
    }
}
