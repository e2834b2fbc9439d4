//! Per-page metric collection.
//!
//! Pure observation: request and byte counters come from CDP network
//! events, the DOM element count from a single JS evaluation. Repeated
//! visits are averaged into one `PageMetrics` record.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chromiumoxide::cdp::browser_protocol::network::{EventLoadingFinished, EventRequestWillBeSent};
use futures::StreamExt;
use tracing::debug;

use crate::browser::session::Session;
use crate::error::{AuditError, Result};
use crate::metrics::model::{CategoryScores, PageMetrics, VisitSample};

const DOM_COUNT_JS: &str = "document.getElementsByTagName('*').length";

/// Loads the page once and samples its raw metrics.
pub async fn visit_once(session: &Session, url: &str) -> Result<VisitSample> {
    let page = session.new_page().await?;

    let requests = Arc::new(AtomicU64::new(0));
    let bytes = Arc::new(AtomicU64::new(0));

    let mut request_events = page
        .event_listener::<EventRequestWillBeSent>()
        .await
        .map_err(|e| AuditError::Browser(e.to_string()))?;
    let request_counter = Arc::clone(&requests);
    let request_task = tokio::spawn(async move {
        while request_events.next().await.is_some() {
            request_counter.fetch_add(1, Ordering::Relaxed);
        }
    });

    let mut finished_events = page
        .event_listener::<EventLoadingFinished>()
        .await
        .map_err(|e| AuditError::Browser(e.to_string()))?;
    let byte_counter = Arc::clone(&bytes);
    let byte_task = tokio::spawn(async move {
        while let Some(event) = finished_events.next().await {
            byte_counter.fetch_add(event.encoded_data_length.round() as u64, Ordering::Relaxed);
        }
    });

    let result = async {
        session.navigate(&page, url).await?;
        page.evaluate(DOM_COUNT_JS)
            .await
            .map_err(|e| AuditError::Browser(format!("DOM count failed: {e}")))?
            .into_value::<u64>()
            .map_err(|e| AuditError::Browser(format!("DOM count result: {e}")))
    }
    .await;

    request_task.abort();
    byte_task.abort();
    let _ = page.close().await;

    let dom_element_count = result?;

    Ok(VisitSample {
        request_count: requests.load(Ordering::Relaxed),
        transfer_size_bytes: bytes.load(Ordering::Relaxed),
        dom_element_count,
    })
}

/// Visits the page `visits` times and averages the samples.
pub async fn collect_page(
    session: &Session,
    url: &str,
    visits: u32,
    categories: CategoryScores,
) -> Result<PageMetrics> {
    let visits = visits.max(1);
    let mut samples = Vec::with_capacity(visits as usize);
    for visit in 0..visits {
        debug!(url, visit, "sampling page");
        samples.push(visit_once(session, url).await?);
    }
    Ok(PageMetrics::from_samples(url, &samples, categories))
}
