use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::app::{AppContext, ReaderError, Result};
use crate::domain::Article;
use crate::fetcher::normalize_url;

pub async fn add_feed(ctx: &AppContext, url: &str) -> Result<()> {
    let feed = ctx.registry.add_feed(url).await?;
    println!("Added feed: {}", feed.url);
    println!("Feed title: {}", feed.title);
    Ok(())
}

pub async fn remove_feed(ctx: &AppContext, url: &str, yes: bool) -> Result<()> {
    let url = normalize_url(url)?;

    if !yes {
        let title = ctx
            .registry
            .feeds()
            .await
            .into_iter()
            .find(|f| f.url == url)
            .map(|f| f.display_title().to_string())
            .unwrap_or_else(|| url.clone());

        if !confirm(&format!(
            "Are you sure you want to remove the feed '{}'?",
            title
        ))? {
            println!("Cancelled");
            return Ok(());
        }
    }

    let feed = ctx.registry.remove_feed(&url).await?;
    println!("Removed feed: {}", feed.url);
    Ok(())
}

pub async fn list_feeds(ctx: &AppContext) -> Result<()> {
    let feeds = ctx.registry.feeds().await;

    if feeds.is_empty() {
        println!("No feeds");
        return Ok(());
    }

    for feed in feeds {
        println!("{}\n  {}", feed.display_title(), feed.url);
    }

    Ok(())
}

pub async fn list_articles(ctx: &AppContext, feed_url: &str) -> Result<()> {
    let articles = ctx.registry.select_feed(feed_url).await?;

    if articles.is_empty() {
        println!("No articles");
        return Ok(());
    }

    print_articles(&articles);
    Ok(())
}

pub async fn toggle_offline(ctx: &AppContext, feed_url: &str, link: &str) -> Result<()> {
    ctx.registry.select_feed(feed_url).await?;

    if ctx.registry.toggle_offline(link).await? {
        println!("Article available offline: {}", link);
    } else {
        println!("Offline copy deleted: {}", link);
    }
    Ok(())
}

pub async fn read_article(ctx: &AppContext, feed_url: &str, link: &str) -> Result<()> {
    select_for_reading(ctx, feed_url).await?;

    let document = ctx.registry.view_article(link).await?;
    print!("{}", document);
    Ok(())
}

pub async fn list_offline(ctx: &AppContext, feed_url: &str) -> Result<()> {
    select_for_reading(ctx, feed_url).await?;

    let articles = ctx.registry.list_offline_articles().await;
    if articles.is_empty() {
        println!("No offline articles saved.");
        return Ok(());
    }

    print_articles(&articles);
    Ok(())
}

/// Select `feed_url` for reading. When the feed cannot be fetched, the list
/// is rebuilt from the snapshot kept by the last successful fetch so offline
/// copies stay reachable.
async fn select_for_reading(ctx: &AppContext, feed_url: &str) -> Result<Vec<Article>> {
    match ctx.registry.select_feed(feed_url).await {
        Ok(articles) => Ok(articles),
        Err(
            e @ (ReaderError::FeedNotFound(_)
            | ReaderError::InvalidUrl(_)
            | ReaderError::InvalidInput(_)),
        ) => Err(e),
        Err(e) => {
            warn!(error = %e, feed = feed_url, "feed unavailable, falling back to snapshot");
            let articles = ctx
                .registry
                .select_feed_cached(feed_url)
                .await
                .map_err(|_| e)?;
            eprintln!("Feed unreachable, showing the last saved copy");
            Ok(articles)
        }
    }
}

fn print_articles(articles: &[Article]) {
    for article in articles {
        let offline_marker = if article.is_offline_saved { "●" } else { " " };
        println!(
            "{} {} {}\n             {}",
            offline_marker,
            article.display_date(),
            article.display_title(),
            article.link
        );
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
