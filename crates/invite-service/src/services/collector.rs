//! Reaction collector - a bounded wait for navigation input
//!
//! Consumes any stream of reaction events, keeps only navigation controls
//! placed on one message by someone other than this system, and stops after
//! `max_events` of them, at the timeout, or when the stream ends.

use std::pin::pin;
use std::time::Duration;

use futures::{future, Stream, StreamExt};
use tracing::debug;

use invite_core::entities::{NavigationSymbol, ReactionEvent};
use invite_core::Snowflake;

/// Up and down controls observed during one wait
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationTally {
    pub up: usize,
    pub down: usize,
}

impl NavigationTally {
    pub fn record(&mut self, symbol: NavigationSymbol) {
        match symbol {
            NavigationSymbol::Up => self.up += 1,
            NavigationSymbol::Down => self.down += 1,
            NavigationSymbol::Neutral => {}
        }
    }

    pub fn total(&self) -> usize {
        self.up + self.down
    }

    /// Net direction requested, if any
    pub fn direction(&self) -> Option<NavigationSymbol> {
        match self.up.cmp(&self.down) {
            std::cmp::Ordering::Greater => Some(NavigationSymbol::Up),
            std::cmp::Ordering::Less => Some(NavigationSymbol::Down),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Which reactions count as navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationFilter {
    pub message_id: Snowflake,
    pub self_id: Snowflake,
}

impl NavigationFilter {
    pub fn new(message_id: Snowflake, self_id: Snowflake) -> Self {
        Self { message_id, self_id }
    }

    /// The navigation symbol carried by a qualifying event
    pub fn accept(&self, event: &ReactionEvent) -> Option<NavigationSymbol> {
        if event.actor_id == self.self_id || event.message_id != self.message_id {
            return None;
        }
        NavigationSymbol::from_control(&event.emoji)
    }
}

/// Wait for up to `max_events` qualifying reactions within `timeout`
///
/// Events seen before the timeout elapses are kept in the tally.
pub async fn collect_navigation<S>(
    events: S,
    filter: NavigationFilter,
    max_events: usize,
    timeout: Duration,
) -> NavigationTally
where
    S: Stream<Item = ReactionEvent>,
{
    let mut tally = NavigationTally::default();

    let collect = async {
        let mut controls = pin!(events
            .filter_map(|event| future::ready(filter.accept(&event)))
            .take(max_events));

        while let Some(symbol) = controls.next().await {
            tally.record(symbol);
        }
    };

    if tokio::time::timeout(timeout, collect).await.is_err() {
        debug!(message_id = %filter.message_id, "Navigation wait timed out");
    }

    tally
}
