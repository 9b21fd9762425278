use async_trait::async_trait;

use super::handler::{ChatHandler, HandlerError};

#[derive(Debug, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Deadlines,
    Results,
    Curriculum,
    Help,
    Thanks,
    Unknown,
}

const GREETINGS: &[&str] = &["hello", "hi", "hey", "xin chào", "chào"];
const DEADLINE_WORDS: &[&str] = &["deadline", "due", "assignment", "homework", "submit"];
const RESULT_WORDS: &[&str] = &["grade", "grades", "result", "results", "score", "gpa", "mark", "marks"];
const CURRICULUM_WORDS: &[&str] = &["curriculum", "course", "courses", "subject", "timetable", "schedule", "credit", "credits"];
const HELP_WORDS: &[&str] = &["help", "support"];
const THANKS_WORDS: &[&str] = &["thanks", "thank", "thx"];

fn mentions(msg: &str, words: &[&str]) -> bool {
    let tokens: Vec<&str> = msg
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    words.iter().any(|w| {
        if w.contains(' ') {
            msg.contains(w)
        } else {
            tokens.contains(w)
        }
    })
}

pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    if mentions(&msg_lower, DEADLINE_WORDS) {
        Intent::Deadlines
    } else if mentions(&msg_lower, RESULT_WORDS) {
        Intent::Results
    } else if mentions(&msg_lower, CURRICULUM_WORDS) {
        Intent::Curriculum
    } else if mentions(&msg_lower, HELP_WORDS) {
        Intent::Help
    } else if mentions(&msg_lower, THANKS_WORDS) {
        Intent::Thanks
    } else if mentions(&msg_lower, GREETINGS) {
        Intent::Greeting
    } else {
        Intent::Unknown
    }
}

pub fn generate_reply(user_msg: &str, user_id: Option<&str>) -> String {
    use Intent::*;

    let intent = detect_intent(user_msg);
    tracing::debug!(?intent, "assistant intent");

    match intent {
        Greeting => match user_id {
            Some(id) => format!("Hi {}, how can I help with your studies today?", id),
            None => "Hi, how can I help with your studies today?".to_string(),
        },
        Deadlines => {
            "You can find upcoming deadlines in the Deadlines tab. Want tips on planning your assignments?"
                .to_string()
        }
        Results => {
            "Your grades are listed under Results. I can also explain how your GPA is calculated."
                .to_string()
        }
        Curriculum => {
            "The Curriculum tab shows your courses, credits and timetable for each semester."
                .to_string()
        }
        Help => {
            "I can answer questions about deadlines, results, and your curriculum. Just ask!"
                .to_string()
        }
        Thanks => "You're welcome! Good luck with your studies.".to_string(),
        Unknown => format!("I didn't quite understand: {}", user_msg.trim()),
    }
}

/// In-process, keyword-driven student assistant.
#[derive(Debug, Default, Clone)]
pub struct AssistantHandler;

#[async_trait]
impl ChatHandler for AssistantHandler {
    async fn handle_chat(&self, message: &str, user_id: Option<&str>) -> Result<String, HandlerError> {
        Ok(generate_reply(message, user_id))
    }
}
