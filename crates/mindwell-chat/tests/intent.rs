use mindwell_chat::intent::classify;
use mindwell_chat::replies::{CRISIS_REPLY, FALLBACK_REPLY};
use mindwell_chat::respond;
use mindwell_core::models::conversation::{Intent, TurnRole};

#[test]
fn crisis_wins_over_anxiety() {
    let turn = respond("I'm so anxious I keep thinking about suicide");
    assert_eq!(turn.intent, Some(Intent::Crisis));
    assert_eq!(turn.text, CRISIS_REPLY);
    assert_eq!(turn.role, TurnRole::Assistant);
}

#[test]
fn crisis_wins_over_every_category() {
    for message in [
        "can I take the assessment, this is an emergency",
        "feeling depressed and in crisis",
        "stressed and tired, I want to hurt myself",
    ] {
        assert_eq!(classify(message), Intent::Crisis, "{message}");
    }
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(classify("I am WORRIED about exams"), Intent::Anxiety);
    assert_eq!(classify("Can I take the PHQ-9?"), Intent::AssessmentRequest);
}

#[test]
fn first_category_in_order_wins() {
    // assessment request precedes anxiety
    assert_eq!(classify("anxious, can I do a test?"), Intent::AssessmentRequest);
    // anxiety precedes depression
    assert_eq!(classify("anxious and sad"), Intent::Anxiety);
    assert_eq!(classify("feeling down lately"), Intent::Depression);
    assert_eq!(classify("so much pressure this week"), Intent::Stress);
    assert_eq!(classify("I have insomnia"), Intent::Sleep);
}

#[test]
fn unmatched_text_falls_back() {
    let turn = respond("hello there");
    assert_eq!(turn.intent, Some(Intent::Fallback));
    assert_eq!(turn.text, FALLBACK_REPLY);
}
