use anyhow::{Context, Result};
use nexa_catalog::{Catalog, Dao, FilterSession, FilterSpec, format::compact_count};
use std::{sync::Arc, time::Duration};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Parses one console line. `category=<label>` and `status=<a,b>` tokens set
/// those clauses; every other word becomes the search text.
pub fn parse_line(line: &str) -> FilterSpec {
    let mut category = None;
    let mut status = None;
    let mut words = Vec::new();

    for token in line.split_whitespace() {
        if let Some(value) = token.strip_prefix("category=") {
            category = Some(value);
        } else if let Some(value) = token.strip_prefix("status=") {
            status = Some(value);
        } else {
            words.push(token);
        }
    }

    let search = words.join(" ");
    FilterSpec::from_params(category, status, Some(&search))
}

pub fn render_dao(dao: &Dao) -> String {
    format!(
        "{:>3}  {:<16} {:<10} {:<8} {:>6} members {:>6} proposals ({} active)",
        dao.id,
        dao.name,
        dao.category,
        dao.status,
        compact_count(dao.members),
        compact_count(dao.proposals),
        dao.active_proposals,
    )
}

/// Reads filter lines from stdin until EOF and prints each settled result.
pub async fn run(catalog: Arc<Catalog>, window: Duration) -> Result<()> {
    info!(window_ms = window.as_millis() as u64, "Starting console session");

    let session = FilterSession::spawn(catalog, window);
    let mut results = session.results();

    let printer = tokio::spawn(async move {
        while results.changed().await.is_ok() {
            let daos = results.borrow_and_update().clone();
            println!("-- {} DAO(s)", daos.len());
            for dao in &daos {
                println!("{}", render_dao(dao));
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        session.update(parse_line(&line))?;
    }

    // Flushes the pending spec; the printer ends once the session is gone.
    drop(session);
    printer.await.context("Console printer task failed")?;

    info!("Console session finished");
    Ok(())
}
