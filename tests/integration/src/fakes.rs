//! In-memory collaborators
//!
//! Storage fakes answer the aggregate queries from plain vectors; the
//! transport fake records every outgoing call and delivers reactions from
//! per-wait scripts plus a live broadcast bus.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use invite_core::entities::{
    CodeInviteTotal, CustomInvite, CustomInviteTotal, DisplayedMessage, Embed, InviteCounts,
    JoinLeaveTimestamps, JoinRecord, NavigationSymbol, ReactionEvent, WindowedCodeInviteCount,
};
use invite_core::traits::{
    InviteStatsRepository, MemberHistoryRepository, MessageTransport, ReactionStream, RepoResult,
};
use invite_core::{DomainError, Snowflake};
use parking_lot::Mutex;
use tokio::sync::broadcast;

// ============================================================================
// Storage
// ============================================================================

/// Aggregate query results served from memory
#[derive(Debug, Default)]
pub struct FakeInviteStats {
    pub code_totals: Vec<CodeInviteTotal>,
    /// Code totals answered when a channel filter is given
    pub channel_code_totals: HashMap<Snowflake, Vec<CodeInviteTotal>>,
    pub bonus_totals: Vec<CustomInviteTotal>,
    pub windowed_code_counts: Vec<WindowedCodeInviteCount>,
    pub windowed_bonus_totals: Vec<CustomInviteTotal>,
    pub timestamps: Vec<JoinLeaveTimestamps>,
    /// Every query fails with a database error
    pub unavailable: bool,
    /// Member ids passed to the join/leave lookup, per call
    pub presence_requests: Mutex<Vec<Vec<Snowflake>>>,
    /// `since` passed to the windowed queries
    pub window_starts: Mutex<Vec<DateTime<Utc>>>,
}

impl FakeInviteStats {
    /// Stats backend whose every query fails
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> RepoResult<()> {
        if self.unavailable {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl InviteStatsRepository for FakeInviteStats {
    async fn code_invite_totals(
        &self,
        _guild_id: Snowflake,
        channel_filter: Option<Snowflake>,
    ) -> RepoResult<Vec<CodeInviteTotal>> {
        self.check()?;
        Ok(match channel_filter {
            Some(channel_id) => self
                .channel_code_totals
                .get(&channel_id)
                .cloned()
                .unwrap_or_default(),
            None => self.code_totals.clone(),
        })
    }

    async fn bonus_invite_totals(
        &self,
        _guild_id: Snowflake,
    ) -> RepoResult<Vec<CustomInviteTotal>> {
        self.check()?;
        Ok(self.bonus_totals.clone())
    }

    async fn windowed_code_invite_counts(
        &self,
        _guild_id: Snowflake,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<WindowedCodeInviteCount>> {
        self.check()?;
        self.window_starts.lock().push(since);
        Ok(self.windowed_code_counts.clone())
    }

    async fn windowed_bonus_invite_totals(
        &self,
        _guild_id: Snowflake,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<CustomInviteTotal>> {
        self.check()?;
        self.window_starts.lock().push(since);
        Ok(self.windowed_bonus_totals.clone())
    }

    async fn last_join_leave_timestamps(
        &self,
        _guild_id: Snowflake,
        member_ids: &[Snowflake],
    ) -> RepoResult<Vec<JoinLeaveTimestamps>> {
        self.check()?;
        self.presence_requests.lock().push(member_ids.to_vec());
        Ok(self
            .timestamps
            .iter()
            .filter(|row| member_ids.contains(&row.member_id))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> RepoResult<()> {
        self.check()
    }
}

/// Per-member history served from memory
#[derive(Debug, Default)]
pub struct FakeMemberHistory {
    pub counts: HashMap<Snowflake, InviteCounts>,
    pub join_counts: HashMap<Snowflake, i64>,
    pub joins: HashMap<Snowflake, Vec<JoinRecord>>,
    pub custom_invites: HashMap<Snowflake, Vec<CustomInvite>>,
}

#[async_trait]
impl MemberHistoryRepository for FakeMemberHistory {
    async fn invite_counts(
        &self,
        _guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<InviteCounts> {
        Ok(self.counts.get(&member_id).copied().unwrap_or_default())
    }

    async fn join_count(&self, _guild_id: Snowflake, member_id: Snowflake) -> RepoResult<i64> {
        Ok(self.join_counts.get(&member_id).copied().unwrap_or_default())
    }

    async fn joins_with_inviters(
        &self,
        _guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<JoinRecord>> {
        Ok(self.joins.get(&member_id).cloned().unwrap_or_default())
    }

    async fn custom_invites(
        &self,
        _guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<CustomInvite>> {
        Ok(self.custom_invites.get(&member_id).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Transport
// ============================================================================

/// An outgoing transport call, in the order it was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Send {
        channel_id: Snowflake,
        message_id: Snowflake,
        embed: Embed,
    },
    Edit {
        message_id: Snowflake,
        embed: Embed,
    },
    React {
        message_id: Snowflake,
        emoji: String,
    },
}

/// A reaction delivered right after a subscription is opened
#[derive(Debug, Clone)]
pub struct ScriptedReaction {
    pub actor_id: Snowflake,
    pub emoji: String,
    /// Target message; the subscribed message when unset
    pub message_id: Option<Snowflake>,
}

impl ScriptedReaction {
    pub fn by(actor_id: Snowflake, symbol: NavigationSymbol) -> Self {
        Self {
            actor_id,
            emoji: symbol.emoji().to_string(),
            message_id: None,
        }
    }

    pub fn emoji(actor_id: Snowflake, emoji: &str) -> Self {
        Self {
            actor_id,
            emoji: emoji.to_string(),
            message_id: None,
        }
    }

    /// Aim the reaction at another message
    pub fn on(mut self, message_id: Snowflake) -> Self {
        self.message_id = Some(message_id);
        self
    }
}

/// Chat transport that records calls and replays scripted reactions
#[derive(Debug)]
pub struct FakeTransport {
    self_id: Snowflake,
    next_message_id: AtomicI64,
    calls: Mutex<Vec<TransportCall>>,
    scripts: Mutex<VecDeque<Vec<ScriptedReaction>>>,
    subscriptions: AtomicUsize,
    bus: broadcast::Sender<ReactionEvent>,
    reject_sends: bool,
}

impl FakeTransport {
    pub fn new(self_id: Snowflake) -> Self {
        let (bus, _) = broadcast::channel(64);
        Self {
            self_id,
            next_message_id: AtomicI64::new(5_000),
            calls: Mutex::new(Vec::new()),
            scripts: Mutex::new(VecDeque::new()),
            subscriptions: AtomicUsize::new(0),
            bus,
            reject_sends: false,
        }
    }

    /// Every send fails with a transport error
    pub fn rejecting_sends(mut self) -> Self {
        self.reject_sends = true;
        self
    }

    /// Queue the reactions delivered to the next subscription
    pub fn script(self, batch: Vec<ScriptedReaction>) -> Self {
        self.scripts.lock().push_back(batch);
        self
    }

    /// Publish a reaction to every open subscription
    pub fn publish(&self, event: ReactionEvent) {
        let _ = self.bus.send(event);
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().clone()
    }

    /// Number of reaction subscriptions opened so far
    pub fn subscriptions(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    /// Embeds shown, whether sent or edited
    pub fn shown_embeds(&self) -> Vec<Embed> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                TransportCall::Send { embed, .. } | TransportCall::Edit { embed, .. } => {
                    Some(embed.clone())
                }
                TransportCall::React { .. } => None,
            })
            .collect()
    }

    /// Emoji added as controls, in order
    pub fn controls(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                TransportCall::React { emoji, .. } => Some(emoji.clone()),
                _ => None,
            })
            .collect()
    }

    fn live_reactions(&self) -> impl futures::Stream<Item = ReactionEvent> + Send + 'static {
        stream::unfold(self.bus.subscribe(), |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        })
    }
}

#[async_trait]
impl MessageTransport for FakeTransport {
    fn self_id(&self) -> Snowflake {
        self.self_id
    }

    async fn send(&self, channel_id: Snowflake, embed: &Embed) -> RepoResult<DisplayedMessage> {
        if self.reject_sends {
            return Err(DomainError::TransportError("missing permissions".to_string()));
        }

        let message_id = Snowflake::new(self.next_message_id.fetch_add(1, Ordering::SeqCst));
        self.calls.lock().push(TransportCall::Send {
            channel_id,
            message_id,
            embed: embed.clone(),
        });

        Ok(DisplayedMessage {
            id: message_id,
            channel_id,
            author_id: self.self_id,
            editable: true,
        })
    }

    async fn edit(&self, message: &DisplayedMessage, embed: &Embed) -> RepoResult<()> {
        if message.author_id != self.self_id {
            return Err(DomainError::TransportError(
                "cannot edit a message authored by another user".to_string(),
            ));
        }

        self.calls.lock().push(TransportCall::Edit {
            message_id: message.id,
            embed: embed.clone(),
        });
        Ok(())
    }

    async fn react(&self, message: &DisplayedMessage, emoji: &str) -> RepoResult<()> {
        self.calls.lock().push(TransportCall::React {
            message_id: message.id,
            emoji: emoji.to_string(),
        });
        Ok(())
    }

    fn reactions(&self, message: &DisplayedMessage) -> ReactionStream {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);

        let scripted: Vec<ReactionEvent> = self
            .scripts
            .lock()
            .pop_front()
            .unwrap_or_default()
            .into_iter()
            .map(|r| ReactionEvent::new(r.message_id.unwrap_or(message.id), r.actor_id, r.emoji))
            .collect();

        stream::iter(scripted).chain(self.live_reactions()).boxed()
    }
}
