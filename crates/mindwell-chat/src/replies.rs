use mindwell_core::models::conversation::Intent;

pub const CRISIS_REPLY: &str = "If you're experiencing a mental health crisis, please reach out for immediate help: National Suicide Prevention Lifeline: 988, Crisis Text Line: Text HOME to 741741, or contact emergency services at 911. I'm here to support you, but professional help may be needed for crisis situations.";

pub const ASSESSMENT_REPLY: &str = "I'd be happy to help you with a mental health assessment. The PHQ-9 is a standardized questionnaire that helps evaluate depression symptoms. Would you like to start the assessment now?";

pub const ANXIETY_REPLY: &str = "I understand you're feeling anxious. Anxiety is a common experience, especially among students. Some helpful techniques include deep breathing exercises, grounding techniques (5-4-3-2-1 method), and progressive muscle relaxation. Would you like me to guide you through a breathing exercise?";

pub const DEPRESSION_REPLY: &str = "I'm sorry you're feeling this way. Depression can feel overwhelming, but seeking help is a sign of strength. Some strategies that can help include maintaining a daily routine, getting sunlight, staying connected with others, and engaging in activities you used to enjoy. Would you like to complete a PHQ-9 assessment?";

pub const STRESS_REPLY: &str = "Academic stress is very common among students. Here are some evidence-based strategies: break large tasks into smaller ones, practice time management, use the Pomodoro technique, maintain work-life balance, and don't forget self-care. Would you like specific tips for any of these areas, or would you prefer to explore your stress levels through an assessment?";

pub const SLEEP_REPLY: &str = "Sleep issues can significantly impact mental health. Good sleep hygiene includes: keeping a consistent sleep schedule, avoiding screens 1 hour before bed, creating a relaxing bedtime routine, and keeping your bedroom cool and dark. If sleep problems persist, this could be a symptom of depression or anxiety. Would you like to take an assessment?";

pub const FALLBACK_REPLY: &str = "I'm here to listen and support you. Whether you're dealing with stress, anxiety, depression, or just need someone to talk to, I can help. I can also conduct formal mental health assessments like the PHQ-9. What would be most helpful for you right now?";

pub fn reply_for(intent: Intent) -> &'static str {
    match intent {
        Intent::Crisis => CRISIS_REPLY,
        Intent::AssessmentRequest => ASSESSMENT_REPLY,
        Intent::Anxiety => ANXIETY_REPLY,
        Intent::Depression => DEPRESSION_REPLY,
        Intent::Stress => STRESS_REPLY,
        Intent::Sleep => SLEEP_REPLY,
        Intent::Fallback => FALLBACK_REPLY,
    }
}
