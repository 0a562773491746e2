//! Chat coach. Replies come from a `ReplyClassifier`; the bundled
//! `KeywordCoach` matches keywords and never leaves the process.

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info};

use crate::models::{Exercise, WeightUnit, Workout};

const GREETING: &str = "Hi! I'm your AI fitness coach. I'll help you create a personalized workout plan. Tell me about your fitness goals, experience level, available equipment, and any preferences you have!";

const BEGINNER_REPLY: &str = "Great! For beginners, I recommend starting with a full-body workout 3 times per week. Here's a sample workout plan:

**Beginner Full Body Workout**
- Bodyweight Squats: 3 sets of 10-12 reps
- Push-ups (modified if needed): 3 sets of 8-10 reps
- Bent-over Rows: 3 sets of 10-12 reps
- Plank: 3 sets of 20-30 seconds
- Walking Lunges: 3 sets of 10 per leg

Would you like me to create this workout plan for your tracker? Just say \"create workout\" and I'll add it to your app!";

const IMPORT_REPLY: &str = "Perfect! I'll create a workout plan for you. Click the \"Import Workout\" button below to add it to your tracker.";

const PUSH_REPLY: &str = "Excellent choice! Push workouts focus on chest, shoulders, and triceps. Here's a solid push day routine:

**Push Day Workout**
- Bench Press: 4 sets of 8-10 reps
- Overhead Press: 3 sets of 8-10 reps
- Incline Dumbbell Press: 3 sets of 10-12 reps
- Lateral Raises: 3 sets of 12-15 reps
- Tricep Dips: 3 sets of 10-12 reps
- Close-grip Push-ups: 3 sets of 8-10 reps

Ready to add this to your tracker?";

const FALLBACK_REPLY: &str = "That's interesting! Based on what you've told me, I can help create a personalized workout plan. Could you tell me more about:

- Your current fitness level (beginner, intermediate, advanced)
- Your main goals (strength, muscle building, weight loss, endurance)
- Available equipment (gym, home equipment, bodyweight only)
- How many days per week you want to work out
- Any specific muscle groups you want to focus on

This will help me create the perfect workout plan for you!";

/// Turns user input into a coach reply.
pub trait ReplyClassifier {
    fn reply(&self, input: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub reply: String,
}

impl KeywordRule {
    pub fn new(keywords: &[&str], reply: &str) -> Self {
        KeywordRule {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            reply: reply.to_string(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// First matching rule wins; no match gives the fallback.
#[derive(Debug, Clone)]
pub struct KeywordCoach {
    rules: Vec<KeywordRule>,
    fallback: String,
}

impl KeywordCoach {
    pub fn new(rules: Vec<KeywordRule>, fallback: impl Into<String>) -> Self {
        KeywordCoach {
            rules,
            fallback: fallback.into(),
        }
    }
}

impl Default for KeywordCoach {
    fn default() -> Self {
        KeywordCoach::new(
            vec![
                KeywordRule::new(&["beginner", "start"], BEGINNER_REPLY),
                KeywordRule::new(&["create workout", "add workout"], IMPORT_REPLY),
                KeywordRule::new(&["push", "chest"], PUSH_REPLY),
            ],
            FALLBACK_REPLY,
        )
    }
}

impl ReplyClassifier for KeywordCoach {
    fn reply(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.reply.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyGate {
    Pending,
    Provided,
    DemoMode,
}

/// One chat conversation. The credential is held only to unlock the chat and
/// is never sent anywhere.
pub struct CoachChat<C: ReplyClassifier> {
    classifier: C,
    messages: Vec<Message>,
    api_key: Option<String>,
    gate: KeyGate,
}

impl<C: ReplyClassifier> CoachChat<C> {
    pub fn new(classifier: C, now: DateTime<Local>) -> Self {
        CoachChat {
            classifier,
            messages: vec![Message {
                role: Role::Assistant,
                content: GREETING.to_string(),
                timestamp: now,
            }],
            api_key: None,
            gate: KeyGate::Pending,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn gate(&self) -> KeyGate {
        self.gate
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Accepts any non-blank key. Returns whether the gate opened.
    pub fn submit_api_key(&mut self, key: &str) -> bool {
        let key = key.trim();
        if key.is_empty() {
            return false;
        }
        self.api_key = Some(key.to_string());
        self.gate = KeyGate::Provided;
        true
    }

    pub fn skip_api_key(&mut self) {
        self.gate = KeyGate::DemoMode;
    }

    /// Appends the user message and the coach reply. Blank input is ignored.
    pub fn send(&mut self, input: &str, now: DateTime<Local>) -> Option<&Message> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(Message {
            role: Role::User,
            content: input.to_string(),
            timestamp: now,
        });
        let reply = self.classifier.reply(input);
        debug!(chars = reply.len(), "coach replied");
        self.messages.push(Message {
            role: Role::Assistant,
            content: reply,
            timestamp: now,
        });
        self.messages.last()
    }
}

/// The workout handed over by "Import Workout". Each call gets a fresh id.
pub fn import_workout(now: DateTime<Utc>) -> Workout {
    let workout = Workout::new(
        "AI Generated Push Workout",
        now,
        vec![
            Exercise::new("1", "Bench Press", 4, 10, 60.0, WeightUnit::Kg),
            Exercise::new("2", "Overhead Press", 3, 10, 40.0, WeightUnit::Kg),
            Exercise::new("3", "Lateral Raises", 3, 15, 10.0, WeightUnit::Kg),
        ],
    );
    info!(workout_id = %workout.id, "coach workout generated");
    workout
}
