use showroom_backend::services::chatbot::{
    FALLBACK_REPLY, GREETING_REPLY, Intent, PRICING_REPLY, THANKS_REPLY, detect_intent,
    generate_reply, render,
};
use showroom_backend::services::session_manager::{Role, Session};

#[test]
fn test_reference_prompts() {
    assert_eq!(generate_reply("Bonjour, ça va ?"), GREETING_REPLY);
    assert_eq!(generate_reply("Quel est le prix ?"), PRICING_REPLY);
    assert_eq!(generate_reply("xyz123"), FALLBACK_REPLY);
}

#[test]
fn test_keywords_are_case_insensitive() {
    assert_eq!(detect_intent("PRIX"), Intent::Pricing);
    assert_eq!(detect_intent("SaLuT toi"), Intent::Greeting);
    assert_eq!(detect_intent("Merci !"), Intent::Thanks);
    assert_eq!(generate_reply("BONJOUR"), GREETING_REPLY);
}

#[test]
fn test_keywords_match_as_substrings() {
    // "prix" inside a longer word still counts.
    assert_eq!(detect_intent("les prixfixes"), Intent::Pricing);
    assert_eq!(detect_intent("grand merci"), Intent::Thanks);
    assert_eq!(detect_intent("hello"), Intent::Unknown);
}

#[test]
fn test_pricing_wins_over_greeting_and_thanks() {
    assert_eq!(generate_reply("Salut, merci pour le prix"), PRICING_REPLY);
    assert_eq!(generate_reply("bonjour et merci"), GREETING_REPLY);
}

#[test]
fn test_replies_ignore_history() {
    let mut session = Session::new("s");
    for _ in 0..3 {
        let (_, reply) = render(&mut session, Some("merci"));
        assert_eq!(reply, Some(THANKS_REPLY));
    }
    assert_eq!(session.messages.len(), 6);
}

#[test]
fn test_history_alternates_and_stays_even() {
    let mut session = Session::new("s");
    for prompt in ["salut", "prix ?", "", "???"] {
        render(&mut session, Some(prompt));
        assert_eq!(session.messages.len() % 2, 0);
    }
    assert_eq!(session.messages.len(), 6);
    for (i, message) in session.messages.iter().enumerate() {
        let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
        assert_eq!(message.role, expected);
    }
    assert_eq!(session.messages[4].content, "???");
    assert_eq!(session.messages[5].content, FALLBACK_REPLY);
}

#[test]
fn test_whitespace_prompt_gets_fallback() {
    let mut session = Session::new("s");
    let (_, reply) = render(&mut session, Some("   "));
    assert_eq!(reply, Some(FALLBACK_REPLY));
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[0].content, "   ");
}
