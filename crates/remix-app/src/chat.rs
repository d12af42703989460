//! Terminal front-end for a conversation.
//!
//! Renders the transcript, offers quick actions as `/1`..`/N` while they are
//! visible, and prints replies as the typewriter reveals them.

use std::io::{self, Write};

use remix_assistant::{ConversationEngine, DelayProvider, SubmitOutcome};
use remix_core::events::AssistantEvent;
use remix_core::types::{Link, Message, Role};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;
use uuid::Uuid;

/// Writes assistant output as events arrive.
pub struct TerminalRenderer<W: Write> {
    out: W,
    /// Message being revealed and how many chars of it are on screen.
    revealing: Option<(Message, usize)>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            revealing: None,
        }
    }

    /// Print a complete message with its visible links.
    pub fn print_message(&mut self, message: &Message) -> io::Result<()> {
        let who = match message.role {
            Role::User => "You",
            Role::Assistant => "Assistant",
        };
        writeln!(self.out, "{}: {}", who, message.content)?;
        self.print_links(message.visible_links())?;
        self.out.flush()
    }

    pub fn print_quick_actions(&mut self, labels: &[&str]) -> io::Result<()> {
        if labels.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "Quick actions:")?;
        for (i, label) in labels.iter().enumerate() {
            writeln!(self.out, "  /{} {}", i + 1, label)?;
        }
        self.out.flush()
    }

    /// Apply one event. Returns `true` once the assistant reply of the
    /// current turn is fully on screen.
    pub fn handle(&mut self, event: AssistantEvent) -> io::Result<bool> {
        match event {
            AssistantEvent::MessageAppended { message } if message.role == Role::Assistant => {
                if message.reveal_complete {
                    self.print_message(&message)?;
                    return Ok(true);
                }
                write!(self.out, "Assistant: ")?;
                self.out.flush()?;
                self.revealing = Some((message, 0));
                Ok(false)
            }
            AssistantEvent::RevealProgress {
                message_id,
                visible_chars,
                ..
            } => {
                self.advance(message_id, visible_chars)?;
                Ok(false)
            }
            AssistantEvent::RevealCompleted { message_id } => self.complete(message_id),
            _ => Ok(false),
        }
    }

    /// Print whatever remains of the revealing message, or `message` in full
    /// if nothing was in progress.
    pub fn finish(&mut self, message: &Message) -> io::Result<()> {
        match self.revealing.as_ref().map(|(m, _)| m.id) {
            Some(id) if id == message.id => {
                self.complete(id)?;
                Ok(())
            }
            _ => self.print_message(message),
        }
    }

    fn advance(&mut self, message_id: Uuid, visible_chars: usize) -> io::Result<()> {
        let Some((message, shown)) = self.revealing.as_mut() else {
            return Ok(());
        };
        if message.id != message_id || visible_chars <= *shown {
            return Ok(());
        }
        let chunk: String = message
            .content
            .chars()
            .skip(*shown)
            .take(visible_chars - *shown)
            .collect();
        *shown = visible_chars;
        write!(self.out, "{}", chunk)?;
        self.out.flush()
    }

    fn complete(&mut self, message_id: Uuid) -> io::Result<bool> {
        match self.revealing.take() {
            Some((message, shown)) if message.id == message_id => {
                let rest: String = message.content.chars().skip(shown).collect();
                writeln!(self.out, "{}", rest)?;
                self.print_links(&message.links)?;
                self.out.flush()?;
                Ok(true)
            }
            other => {
                self.revealing = other;
                Ok(false)
            }
        }
    }

    fn print_links(&mut self, links: &[Link]) -> io::Result<()> {
        for link in links {
            writeln!(self.out, "  -> {} ({})", link.text, link.url)?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Parse `/N` into a 1-based quick action number.
pub fn parse_quick_action(input: &str) -> Option<usize> {
    input
        .strip_prefix('/')
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|n| *n > 0)
}

/// Run an interactive conversation on stdin/stdout until EOF or `/quit`.
pub async fn run<D: DelayProvider>(engine: ConversationEngine<D>) -> io::Result<()> {
    let mut events = engine.subscribe();
    let mut renderer = TerminalRenderer::new(io::stdout());

    for message in engine.transcript() {
        renderer.print_message(&message)?;
    }
    print_quick_actions(&engine, &mut renderer)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input == "/quit" || input == "/exit" {
            break;
        }

        let action = parse_quick_action(input)
            .and_then(|n| engine.visible_quick_actions().get(n - 1).cloned());
        let outcome = match action {
            Some(action) => {
                println!("You: {}", action.user_message());
                engine.select_quick_action(&action)
            }
            None => engine.submit_query(input),
        };

        match outcome {
            SubmitOutcome::Accepted => {
                await_reply(&engine, &mut events, &mut renderer).await?;
            }
            SubmitOutcome::IgnoredEmpty => continue,
            SubmitOutcome::IgnoredBusy => println!("(the assistant is still answering)"),
        }
    }

    engine.shutdown();
    Ok(())
}

fn print_quick_actions<D: DelayProvider, W: Write>(
    engine: &ConversationEngine<D>,
    renderer: &mut TerminalRenderer<W>,
) -> io::Result<()> {
    let labels: Vec<&str> = engine
        .visible_quick_actions()
        .iter()
        .map(|a| a.text.as_str())
        .collect();
    renderer.print_quick_actions(&labels)
}

async fn await_reply<D: DelayProvider, W: Write>(
    engine: &ConversationEngine<D>,
    events: &mut tokio::sync::broadcast::Receiver<AssistantEvent>,
    renderer: &mut TerminalRenderer<W>,
) -> io::Result<()> {
    loop {
        match events.recv().await {
            Ok(event) => {
                if renderer.handle(event)? {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Renderer fell behind; printing reply in full");
                engine.wait_idle().await;
                *events = engine.subscribe();
                if let Some(message) = engine.last_message() {
                    renderer.finish(&message)?;
                }
                break;
            }
            Err(RecvError::Closed) => break,
        }
    }
    engine.wait_idle().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_parse_quick_action() {
        assert_eq!(parse_quick_action("/1"), Some(1));
        assert_eq!(parse_quick_action("/5"), Some(5));
        assert_eq!(parse_quick_action("/0"), None);
        assert_eq!(parse_quick_action("/quit"), None);
        assert_eq!(parse_quick_action("1"), None);
    }

    #[test]
    fn test_print_message_with_links() {
        let mut r = TerminalRenderer::new(Vec::new());
        let msg = Message::assistant("See plans.", vec![Link::new("View Pricing", "/pricing")], true);
        r.print_message(&msg).unwrap();
        assert_eq!(
            rendered(r),
            "Assistant: See plans.\n  -> View Pricing (/pricing)\n"
        );
    }

    #[test]
    fn test_unrevealed_message_hides_links() {
        let mut r = TerminalRenderer::new(Vec::new());
        let msg = Message::assistant("Typing", vec![Link::new("Docs", "/help")], false);
        r.print_message(&msg).unwrap();
        assert_eq!(rendered(r), "Assistant: Typing\n");
    }

    #[test]
    fn test_reveal_sequence() {
        let mut r = TerminalRenderer::new(Vec::new());
        let msg = Message::assistant("Héllo", vec![Link::new("Help Center", "/help")], false);
        let id = msg.id;

        assert!(!r.handle(AssistantEvent::MessageAppended { message: msg }).unwrap());
        for n in 1..=3 {
            let done = r
                .handle(AssistantEvent::RevealProgress {
                    message_id: id,
                    visible_chars: n,
                    total_chars: 5,
                })
                .unwrap();
            assert!(!done);
        }
        assert!(r.handle(AssistantEvent::RevealCompleted { message_id: id }).unwrap());
        assert_eq!(
            rendered(r),
            "Assistant: Héllo\n  -> Help Center (/help)\n"
        );
    }

    #[test]
    fn test_already_revealed_reply_finishes_turn() {
        let mut r = TerminalRenderer::new(Vec::new());
        let msg = Message::assistant("Done.", vec![], true);
        assert!(r.handle(AssistantEvent::MessageAppended { message: msg }).unwrap());
        assert_eq!(rendered(r), "Assistant: Done.\n");
    }

    #[test]
    fn test_user_and_foreign_events_ignored() {
        let mut r = TerminalRenderer::new(Vec::new());
        let user = Message::user("hi");
        assert!(!r.handle(AssistantEvent::MessageAppended { message: user }).unwrap());
        assert!(!r.handle(AssistantEvent::QuickActionsHidden).unwrap());
        assert!(!r
            .handle(AssistantEvent::RevealCompleted {
                message_id: Uuid::new_v4()
            })
            .unwrap());
        assert_eq!(rendered(r), "");
    }

    #[test]
    fn test_finish_completes_partial_reveal() {
        let mut r = TerminalRenderer::new(Vec::new());
        let msg = Message::assistant("abcdef", vec![], false);
        let id = msg.id;
        r.handle(AssistantEvent::MessageAppended {
            message: msg.clone(),
        })
        .unwrap();
        r.handle(AssistantEvent::RevealProgress {
            message_id: id,
            visible_chars: 2,
            total_chars: 6,
        })
        .unwrap();
        r.finish(&msg).unwrap();
        assert_eq!(rendered(r), "Assistant: abcdef\n");
    }

    #[test]
    fn test_quick_action_listing() {
        let mut r = TerminalRenderer::new(Vec::new());
        r.print_quick_actions(&["Create a video", "View pricing"]).unwrap();
        assert_eq!(
            rendered(r),
            "Quick actions:\n  /1 Create a video\n  /2 View pricing\n"
        );
    }
}
