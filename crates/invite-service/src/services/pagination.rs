//! Pagination controller
//!
//! Drives one interactive session as an explicit state machine:
//! `Displaying(page)` renders and shows a page, `AwaitingInput` waits for a
//! bounded batch of navigation reactions, `Terminal` ends the session.

use tracing::debug;

use invite_core::entities::{DisplayedMessage, Embed, NavigationSymbol};
use invite_core::traits::MessageTransport;

use super::collector::{collect_navigation, NavigationFilter, NavigationTally};
use super::context::LeaderboardSettings;
use super::error::{ServiceError, ServiceResult};
use super::render::LeaderboardSnapshot;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Displaying(usize),
    AwaitingInput,
    Terminal,
}

/// Outcome of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// 0-based page shown last
    pub final_page: usize,
    pub pages_rendered: usize,
    /// Message holding the last rendered page
    pub message: DisplayedMessage,
}

/// State after a wait for navigation input resolved
pub fn next_state(page: usize, total_pages: usize, tally: NavigationTally) -> SessionState {
    match tally.direction() {
        Some(NavigationSymbol::Up) if page > 0 => SessionState::Displaying(page - 1),
        Some(NavigationSymbol::Down) if page + 1 < total_pages => {
            SessionState::Displaying(page + 1)
        }
        _ => SessionState::Terminal,
    }
}

/// Show `embed` in place of `current`, editing when this system owns it
pub async fn show_embed(
    transport: &dyn MessageTransport,
    current: &DisplayedMessage,
    embed: &Embed,
) -> ServiceResult<DisplayedMessage> {
    if current.is_editable_by(transport.self_id()) {
        transport
            .edit(current, embed)
            .await
            .map_err(ServiceError::Transport)?;
        Ok(current.clone())
    } else {
        transport
            .send(current.channel_id, embed)
            .await
            .map_err(ServiceError::Transport)
    }
}

pub struct PaginationController<'a> {
    transport: &'a dyn MessageTransport,
    snapshot: &'a LeaderboardSnapshot,
    settings: &'a LeaderboardSettings,
}

impl<'a> PaginationController<'a> {
    pub fn new(
        transport: &'a dyn MessageTransport,
        snapshot: &'a LeaderboardSnapshot,
        settings: &'a LeaderboardSettings,
    ) -> Self {
        Self {
            transport,
            snapshot,
            settings,
        }
    }

    /// Run the session starting at `start_page`, replacing `invocation` if possible
    pub async fn run(
        &self,
        invocation: &DisplayedMessage,
        start_page: usize,
    ) -> ServiceResult<SessionSummary> {
        let total_pages = self.snapshot.total_pages();
        let mut message = invocation.clone();
        let mut page = start_page;
        let mut pages_rendered = 0;
        let mut state = SessionState::Displaying(start_page);

        loop {
            state = match state {
                SessionState::Displaying(index) => {
                    debug!(page = index, total_pages, "Displaying leaderboard page");
                    let embed = self.snapshot.render(index);
                    message = show_embed(self.transport, &message, &embed).await?;
                    page = index;
                    pages_rendered += 1;

                    if total_pages > 1 {
                        SessionState::AwaitingInput
                    } else {
                        SessionState::Terminal
                    }
                }
                SessionState::AwaitingInput => {
                    let tally = self.await_navigation(&message, page, total_pages).await?;
                    next_state(page, total_pages, tally)
                }
                SessionState::Terminal => break,
            };
        }

        Ok(SessionSummary {
            final_page: page,
            pages_rendered,
            message,
        })
    }

    async fn await_navigation(
        &self,
        message: &DisplayedMessage,
        page: usize,
        total_pages: usize,
    ) -> ServiceResult<NavigationTally> {
        // Subscribe before adding controls so no early reaction is missed
        let reactions = self.transport.reactions(message);

        if page > 0 {
            self.add_control(message, NavigationSymbol::Up).await?;
        }
        if page + 1 < total_pages {
            self.add_control(message, NavigationSymbol::Down).await?;
        }

        let filter = NavigationFilter::new(message.id, self.transport.self_id());
        let tally = collect_navigation(
            reactions,
            filter,
            self.settings.max_navigation_events,
            self.settings.navigation_timeout,
        )
        .await;

        debug!(page, up = tally.up, down = tally.down, "Navigation input collected");
        Ok(tally)
    }

    async fn add_control(
        &self,
        message: &DisplayedMessage,
        symbol: NavigationSymbol,
    ) -> ServiceResult<()> {
        self.transport
            .react(message, symbol.emoji())
            .await
            .map_err(ServiceError::Transport)
    }
}
