//! Conversation engine: transcript state and the turn-taking protocol.
//!
//! A turn runs user message -> "thinking" delay -> assistant reply -> typed
//! reveal. Only one turn may wait for its reply at a time; submissions made
//! meanwhile, and blank submissions, are ignored without error.
//!
//! The delay and the reveal run on a spawned tokio task, so `submit_query`
//! and `select_quick_action` must be called from within a tokio runtime.
//! Dropping the engine (or calling [`ConversationEngine::shutdown`]) aborts
//! that task; a reply that has not arrived yet is discarded.
//!
//! Events are sent while the state lock is held, so subscribers see them in
//! the same order as the state changes they describe.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use remix_core::config::AssistantConfig;
use remix_core::events::AssistantEvent;
use remix_core::types::Message;
use tokio::sync::broadcast;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info};
use uuid::Uuid;

use crate::knowledge::KnowledgeBase;
use crate::matcher::{Matcher, Reply};
use crate::pacing::{DelayProvider, JitteredDelay};
use crate::quick_actions::{canned_reply, default_quick_actions, QuickAction};
use crate::reveal::Typewriter;

/// Capacity of the event channel. Reveal progress is one event per char.
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new turn started.
    Accepted,
    /// The text was empty or whitespace only.
    IgnoredEmpty,
    /// A previous turn is still waiting for its reply.
    IgnoredBusy,
}

#[derive(Debug)]
struct ConversationState {
    transcript: Vec<Message>,
    awaiting_response: bool,
    quick_actions_visible: bool,
    /// Turn allowed to append a reply. Cleared on shutdown.
    active_turn: Option<Uuid>,
}

impl ConversationState {
    /// Mark every unrevealed message revealed, returning their ids.
    fn finish_reveals(&mut self) -> Vec<Uuid> {
        self.transcript
            .iter_mut()
            .filter(|m| !m.reveal_complete)
            .map(|m| {
                m.reveal_complete = true;
                m.id
            })
            .collect()
    }
}

/// Where the assistant reply of a turn comes from.
enum PendingReply {
    Lookup(String),
    Canned(Reply),
}

/// Spawned task of the current turn.
///
/// `abort` outlives `handle`: `wait_idle` moves the join handle out while it
/// waits, and `shutdown` must still be able to cancel the task.
#[derive(Default)]
struct TurnTask {
    handle: Option<JoinHandle<()>>,
    abort: Option<AbortHandle>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Set `reveal_complete` on `message_id` and announce it. Returns `false` if
/// it was already set or the message does not exist.
fn mark_revealed(
    state: &Mutex<ConversationState>,
    events: &broadcast::Sender<AssistantEvent>,
    message_id: Uuid,
) -> bool {
    let mut guard = lock(state);
    match guard.transcript.iter_mut().find(|m| m.id == message_id) {
        Some(m) if !m.reveal_complete => {
            m.reveal_complete = true;
            let _ = events.send(AssistantEvent::RevealCompleted { message_id });
            true
        }
        _ => false,
    }
}

/// One chat widget's conversation.
pub struct ConversationEngine<D: DelayProvider = JitteredDelay> {
    matcher: Matcher,
    delay: Arc<D>,
    state: Arc<Mutex<ConversationState>>,
    turn: Mutex<TurnTask>,
    events: broadcast::Sender<AssistantEvent>,
    quick_actions: Vec<QuickAction>,
    typing_effect: bool,
}

impl<D: DelayProvider> std::fmt::Debug for ConversationEngine<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("ConversationEngine")
            .field("messages", &state.transcript.len())
            .field("awaiting_response", &state.awaiting_response)
            .field("quick_actions_visible", &state.quick_actions_visible)
            .field("typing_effect", &self.typing_effect)
            .finish()
    }
}

impl<D: DelayProvider> ConversationEngine<D> {
    /// Start a conversation over `knowledge`, opening with the configured
    /// greeting and the default quick actions.
    pub fn new(knowledge: Arc<KnowledgeBase>, delay: D, config: &AssistantConfig) -> Self {
        let greeting = Message::assistant(config.greeting.clone(), Vec::new(), true);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            matcher: Matcher::new(knowledge),
            delay: Arc::new(delay),
            state: Arc::new(Mutex::new(ConversationState {
                transcript: vec![greeting],
                awaiting_response: false,
                quick_actions_visible: true,
                active_turn: None,
            })),
            turn: Mutex::new(TurnTask::default()),
            events,
            quick_actions: default_quick_actions(),
            typing_effect: config.typing_effect,
        }
    }

    /// Replace the quick actions offered before the first message.
    pub fn with_quick_actions(mut self, actions: Vec<QuickAction>) -> Self {
        self.quick_actions = actions;
        self
    }

    /// Receive state-change events from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<AssistantEvent> {
        self.events.subscribe()
    }

    /// Ask a free-text question.
    pub fn submit_query(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::IgnoredEmpty;
        }
        self.begin_turn(text.to_string(), PendingReply::Lookup(text.to_string()))
    }

    /// Select a quick action. The reply comes from the canned table, not the
    /// matcher.
    pub fn select_quick_action(&self, action: &QuickAction) -> SubmitOutcome {
        self.begin_turn(
            action.user_message(),
            PendingReply::Canned(canned_reply(action)),
        )
    }

    fn begin_turn(&self, content: String, pending: PendingReply) -> SubmitOutcome {
        let mut turn = lock(&self.turn);

        let turn_id = {
            let mut state = lock(&self.state);
            if state.awaiting_response {
                debug!("Ignoring submission while a reply is pending");
                return SubmitOutcome::IgnoredBusy;
            }

            // A reveal from the previous turn may still be running. Stop it
            // and show that message in full.
            if let Some(abort) = turn.abort.take() {
                abort.abort();
            }
            turn.handle = None;
            for message_id in state.finish_reveals() {
                self.emit(AssistantEvent::RevealCompleted { message_id });
            }

            let user_message = Message::user(content);
            let turn_id = user_message.id;
            state.transcript.push(user_message.clone());
            if std::mem::replace(&mut state.quick_actions_visible, false) {
                self.emit(AssistantEvent::QuickActionsHidden);
            }
            state.awaiting_response = true;
            state.active_turn = Some(turn_id);

            self.emit(AssistantEvent::MessageAppended {
                message: user_message,
            });
            self.emit(AssistantEvent::ResponsePending { turn_id });
            turn_id
        };
        debug!(%turn_id, "Turn accepted");

        let handle = tokio::spawn(run_turn(
            turn_id,
            Arc::downgrade(&self.state),
            Arc::clone(&self.delay),
            self.matcher.clone(),
            self.events.clone(),
            pending,
            self.typing_effect,
        ));
        turn.abort = Some(handle.abort_handle());
        turn.handle = Some(handle);

        SubmitOutcome::Accepted
    }

    /// Finish the reveal of `message_id` now, making its links visible.
    ///
    /// Returns `false` if the message is unknown or already revealed.
    pub fn complete_reveal(&self, message_id: Uuid) -> bool {
        mark_revealed(&self.state, &self.events, message_id)
    }

    /// Wait until the in-flight turn (reply and reveal) has finished.
    ///
    /// Cancel-safe: dropping the returned future leaves the turn abortable
    /// by [`ConversationEngine::shutdown`].
    pub async fn wait_idle(&self) {
        let handle = lock(&self.turn).handle.take();
        if let Some(handle) = handle {
            // An aborted turn is as idle as a finished one.
            let _ = handle.await;
        }
    }

    /// Cancel any pending reply or reveal.
    ///
    /// The conversation stays usable: the busy flag is cleared and a reply
    /// being typed out is shown in full.
    pub fn shutdown(&self) {
        let mut turn = lock(&self.turn);
        let Some(abort) = turn.abort.take() else {
            return;
        };
        abort.abort();

        let mut state = lock(&self.state);
        state.active_turn = None;
        state.awaiting_response = false;
        for message_id in state.finish_reveals() {
            self.emit(AssistantEvent::RevealCompleted { message_id });
        }
        debug!("Turn task cancelled");
    }

    /// Snapshot of the transcript, oldest first.
    pub fn transcript(&self) -> Vec<Message> {
        lock(&self.state).transcript.clone()
    }

    pub fn message(&self, message_id: Uuid) -> Option<Message> {
        lock(&self.state)
            .transcript
            .iter()
            .find(|m| m.id == message_id)
            .cloned()
    }

    pub fn last_message(&self) -> Option<Message> {
        lock(&self.state).transcript.last().cloned()
    }

    pub fn is_awaiting_response(&self) -> bool {
        lock(&self.state).awaiting_response
    }

    pub fn quick_actions_visible(&self) -> bool {
        lock(&self.state).quick_actions_visible
    }

    /// Every quick action this conversation offers, visible or not.
    pub fn quick_actions(&self) -> &[QuickAction] {
        &self.quick_actions
    }

    /// Quick actions to render: all of them before the first message, none after.
    pub fn visible_quick_actions(&self) -> &[QuickAction] {
        if self.quick_actions_visible() {
            &self.quick_actions
        } else {
            &[]
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    fn emit(&self, event: AssistantEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

impl<D: DelayProvider> Drop for ConversationEngine<D> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_turn<D: DelayProvider>(
    turn_id: Uuid,
    state: Weak<Mutex<ConversationState>>,
    delay: Arc<D>,
    matcher: Matcher,
    events: broadcast::Sender<AssistantEvent>,
    pending: PendingReply,
    typing_effect: bool,
) {
    let wait = delay.response_delay();
    delay.sleep(wait).await;

    let reply = match pending {
        PendingReply::Lookup(query) => matcher.lookup(&query),
        PendingReply::Canned(reply) => reply,
    };
    let message = Message::assistant(reply.answer, reply.links, !typing_effect);
    let message_id = message.id;

    {
        let Some(state) = state.upgrade() else {
            return;
        };
        let mut guard = lock(&state);
        if guard.active_turn != Some(turn_id) {
            debug!(%turn_id, "Turn cancelled before its reply");
            return;
        }
        guard.transcript.push(message.clone());
        guard.awaiting_response = false;
        let _ = events.send(AssistantEvent::MessageAppended {
            message: message.clone(),
        });
    }
    info!(
        %message_id,
        delay_ms = duration_ms(wait),
        links = message.links.len(),
        "Assistant reply appended"
    );

    if !typing_effect {
        return;
    }

    let typewriter = Typewriter::new(&message.content);
    let total_chars = typewriter.total_chars();
    let finished = typewriter
        .run(delay.as_ref(), |visible_chars, _| {
            let Some(state) = state.upgrade() else {
                return ControlFlow::Break(());
            };
            let guard = lock(&state);
            let still_revealing = guard
                .transcript
                .iter()
                .any(|m| m.id == message_id && !m.reveal_complete);
            if !still_revealing {
                return ControlFlow::Break(());
            }
            let _ = events.send(AssistantEvent::RevealProgress {
                message_id,
                visible_chars,
                total_chars,
            });
            ControlFlow::Continue(())
        })
        .await;

    if finished {
        if let Some(state) = state.upgrade() {
            mark_revealed(&state, &events, message_id);
        }
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
