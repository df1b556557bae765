//! The collect stage: sweep the search grid, score every unseen place, and
//! write the compressed index file.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::Context;

use placedex_core::{AppConfig, PlaceIndex};
use placedex_places::{
    ApiPlace, GridConfig, GridPoint, PagerPolicy, PlacesClient, PlacesError, SearchPager,
};
use placedex_score::{build_index_entry, ScoringConfig};
use placedex_store::write_index;

/// Activity-seeking query set swept over every grid cell.
const DEFAULT_QUERIES: &[&str] = &[
    "card shops game nights",
    "hiking trails nature preserves",
    "yoga pilates studios",
    "rock climbing gyms",
    "pickleball courts",
    "boba social cafes",
    "event centers and venues",
    "nightclubs dance clubs",
    "public parks",
    "community centers",
    "bowling arcade",
    "water sports kayaking",
    "art studios workshops",
    "lifestyle centers",
    "renaissance fair and themed festivals",
];

pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let api_key = config
        .api_key
        .as_deref()
        .context("PLACEDEX_API_KEY must be set for collect")?;
    let client = PlacesClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.search_base_url,
    )?;
    let policy = PagerPolicy {
        max_retries: config.max_retries,
        backoff_base_secs: 1,
        page_delay: Duration::from_secs(config.page_delay_secs),
    };

    let grid = GridConfig::irvine(config.grid_steps);
    let centers = grid.cell_centers();
    tracing::info!(
        cells = centers.len(),
        queries = DEFAULT_QUERIES.len(),
        "starting collection sweep"
    );

    let scoring = ScoringConfig::default();
    let mut seen = HashSet::new();
    let mut index = PlaceIndex::new();

    for (cell, center) in centers.iter().enumerate() {
        for query in DEFAULT_QUERIES {
            // A failed or abandoned query loses its remaining pages but never
            // aborts the sweep.
            match run_query(
                &client,
                query,
                *center,
                config.search_radius_m,
                policy.clone(),
                &mut seen,
                &mut index,
                &scoring,
            )
            .await
            {
                QueryOutcome::Completed { added } => {
                    tracing::debug!(cell, query, added, "query complete");
                }
                QueryOutcome::Abandoned => {
                    tracing::error!(cell, query, "query abandoned after retry ceiling");
                }
                QueryOutcome::Failed(err) => {
                    tracing::error!(cell, query, error = %err, "query failed");
                }
            }
            tokio::time::sleep(query_pause(
                config.query_delay_min_ms,
                config.query_delay_max_ms,
            ))
            .await;
        }
        tracing::info!(
            cell = cell + 1,
            of = centers.len(),
            unique_places = seen.len(),
            "cell complete"
        );
    }

    write_index(&config.index_path, &index)
        .with_context(|| format!("writing index to {}", config.index_path.display()))?;
    tracing::info!(
        total = index.total(),
        path = %config.index_path.display(),
        "collection complete"
    );
    Ok(())
}

/// How one (cell, query) pagination run ended.
#[derive(Debug)]
enum QueryOutcome {
    /// Every page was fetched and ingested.
    Completed { added: usize },
    /// The pager hit the rate-limit retry ceiling and gave up the query.
    Abandoned,
    /// A non-retriable request failure ended pagination early.
    Failed(PlacesError),
}

/// Drive one query's pagination to its end, ingesting every page.
#[allow(clippy::too_many_arguments)]
async fn run_query(
    client: &PlacesClient,
    query: &str,
    center: GridPoint,
    radius_m: f64,
    policy: PagerPolicy,
    seen: &mut HashSet<String>,
    index: &mut PlaceIndex,
    scoring: &ScoringConfig,
) -> QueryOutcome {
    let mut pager = SearchPager::new(client, query, center, radius_m, policy);
    let mut added = 0;
    loop {
        match pager.next_page().await {
            Ok(Some(places)) => added += ingest_page(places, seen, index, scoring),
            Ok(None) if pager.is_exhausted() => return QueryOutcome::Abandoned,
            Ok(None) => return QueryOutcome::Completed { added },
            Err(err) => return QueryOutcome::Failed(err),
        }
    }
}

/// Score and insert every place on the page not seen before, by place id.
/// Returns how many entries were added.
fn ingest_page(
    places: Vec<ApiPlace>,
    seen: &mut HashSet<String>,
    index: &mut PlaceIndex,
    scoring: &ScoringConfig,
) -> usize {
    let mut added = 0;
    for api_place in places {
        if !seen.insert(api_place.id.clone()) {
            continue;
        }
        let place = api_place.into_place();
        index.insert(build_index_entry(&place, scoring));
        added += 1;
    }
    added
}

/// Randomized pause between queries, uniform over the configured window.
fn query_pause(min_ms: u64, max_ms: u64) -> Duration {
    let span = max_ms.saturating_sub(min_ms);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let jitter = (span as f64 * rand::random::<f64>()) as u64;
    Duration::from_millis(min_ms + jitter)
}
