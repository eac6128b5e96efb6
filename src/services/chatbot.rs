// src/services/chatbot.rs
use tracing::debug;

use super::session_manager::Session;
use crate::render::{Block, Page};

pub const TITLE: &str = "Chatbot – exemple minimal";
pub const INPUT_PLACEHOLDER: &str = "Votre message…";

pub const PRICING_REPLY: &str =
    "Les informations de prix sont disponibles dans l'application du formulaire.";
pub const GREETING_REPLY: &str = "Bonjour ! Comment puis-je vous aider aujourd'hui ?";
pub const THANKS_REPLY: &str = "Avec plaisir !";
pub const FALLBACK_REPLY: &str =
    "Je suis un simple robot d'exemple et je ne comprends pas encore cette requête.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Pricing,
    Greeting,
    Thanks,
    Unknown,
}

impl Intent {
    pub fn reply(&self) -> &'static str {
        match self {
            Intent::Pricing => PRICING_REPLY,
            Intent::Greeting => GREETING_REPLY,
            Intent::Thanks => THANKS_REPLY,
            Intent::Unknown => FALLBACK_REPLY,
        }
    }
}

// First match wins.
pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("prix") {
        Intent::Pricing
    } else if msg_lower.contains("bonjour") || msg_lower.contains("salut") {
        Intent::Greeting
    } else if msg_lower.contains("merci") {
        Intent::Thanks
    } else {
        Intent::Unknown
    }
}

pub fn generate_reply(user_msg: &str) -> &'static str {
    let intent = detect_intent(user_msg);
    debug!(?intent, "intent detected");
    intent.reply()
}

/// Handles at most one prompt, then replays the whole history. Returns the
/// reply when a prompt was handled.
pub fn render(session: &mut Session, prompt: Option<&str>) -> (Page, Option<&'static str>) {
    let reply = match prompt {
        Some(p) if !p.is_empty() => {
            let reply = generate_reply(p);
            session.push_exchange(p, reply);
            Some(reply)
        }
        _ => None,
    };

    let mut page = Page::new(TITLE);
    for message in &session.messages {
        page.push(Block::ChatMessage {
            role: message.role,
            content: message.content.clone(),
        });
    }
    page.push(Block::ChatInput {
        placeholder: INPUT_PLACEHOLDER.into(),
    });

    (page, reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session_manager::Role;

    #[test]
    fn rules_apply_in_order() {
        assert_eq!(detect_intent("Bonjour, quel prix ?"), Intent::Pricing);
        assert_eq!(detect_intent("salut et merci"), Intent::Greeting);
        assert_eq!(detect_intent("MERCI beaucoup"), Intent::Thanks);
        assert_eq!(detect_intent(""), Intent::Unknown);
    }

    #[test]
    fn empty_prompt_only_replays() {
        let mut session = Session::new("s");
        session.push_exchange("salut", GREETING_REPLY);

        let (page, reply) = render(&mut session, Some(""));
        assert!(reply.is_none());
        assert_eq!(session.messages.len(), 2);
        assert_eq!(page.blocks.len(), 3);
    }

    #[test]
    fn prompt_appends_user_then_assistant() {
        let mut session = Session::new("s");
        let (page, reply) = render(&mut session, Some("merci"));
        assert_eq!(reply, Some(THANKS_REPLY));
        assert_eq!(
            page.blocks[..2],
            [
                Block::ChatMessage { role: Role::User, content: "merci".into() },
                Block::ChatMessage { role: Role::Assistant, content: THANKS_REPLY.into() },
            ]
        );
        assert_eq!(
            page.blocks.last(),
            Some(&Block::ChatInput { placeholder: INPUT_PLACEHOLDER.into() })
        );
    }
}
