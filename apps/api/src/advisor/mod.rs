//! Career Advisor: the AI collaborator that elaborates on a scored profile.
//!
//! Pluggable behind the `CareerAdvisor` trait; `AppState` carries an
//! `Option<Arc<dyn CareerAdvisor>>` that is `None` when no LLM key is set.
//! Default backend: `LlmCareerAdvisor`, which goes through `llm_client`.

pub mod handlers;
pub mod models;
pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::advisor::models::{
    ChatContext, ChatMessage, ChatRole, RefinedAnalysis, RoadmapEntry, ScoreProfile,
};
use crate::advisor::prompts::{
    ANALYSIS_PROMPT_TEMPLATE, CHAT_SYSTEM_TEMPLATE, COUNSELOR_SYSTEM, FOLLOW_UP_PROMPT_TEMPLATE,
    ROADMAP_PROMPT_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, SCORE_SCALE_NOTE};
use crate::llm_client::{LlmClient, Role, Turn};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap AI backends without touching handlers.
#[async_trait]
pub trait CareerAdvisor: Send + Sync {
    /// Situational questions probing motivation and working style.
    async fn follow_up_questions(&self, profile: &ScoreProfile) -> Result<Vec<String>, AppError>;

    async fn career_roadmap(
        &self,
        profile: &ScoreProfile,
        user_answers: &[String],
    ) -> Result<Vec<RoadmapEntry>, AppError>;

    /// Next counselor reply. `history` is the full transcript, ending with a user turn.
    async fn chat_reply(
        &self,
        context: &ChatContext,
        history: &[ChatMessage],
    ) -> Result<String, AppError>;

    async fn refined_analysis(
        &self,
        profile: &ScoreProfile,
        user_answers: &[String],
        career_field: &str,
    ) -> Result<RefinedAnalysis, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmCareerAdvisor (default implementation)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FollowUpReply {
    #[serde(default)]
    questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RoadmapReply {
    #[serde(default)]
    recommendations: Vec<RoadmapEntry>,
}

pub struct LlmCareerAdvisor {
    llm: LlmClient,
}

impl LlmCareerAdvisor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

fn json_system() -> String {
    format!("{COUNSELOR_SYSTEM} {JSON_ONLY_SYSTEM}")
}

#[async_trait]
impl CareerAdvisor for LlmCareerAdvisor {
    async fn follow_up_questions(&self, profile: &ScoreProfile) -> Result<Vec<String>, AppError> {
        let prompt = render(FOLLOW_UP_PROMPT_TEMPLATE, profile, &[])?;
        let reply: FollowUpReply = self
            .llm
            .call_json(&prompt, &json_system())
            .await
            .map_err(|e| AppError::Llm(format!("Follow-up question generation failed: {e}")))?;

        info!("Generated {} follow-up questions", reply.questions.len());
        Ok(reply.questions)
    }

    async fn career_roadmap(
        &self,
        profile: &ScoreProfile,
        user_answers: &[String],
    ) -> Result<Vec<RoadmapEntry>, AppError> {
        let answers = to_json(user_answers)?;
        let prompt = render(
            ROADMAP_PROMPT_TEMPLATE,
            profile,
            &[("{user_answers}", answers.as_str())],
        )?;
        let reply: RoadmapReply = self
            .llm
            .call_json(&prompt, &json_system())
            .await
            .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?;

        info!("Generated {} roadmap entries", reply.recommendations.len());
        Ok(reply.recommendations)
    }

    async fn chat_reply(
        &self,
        context: &ChatContext,
        history: &[ChatMessage],
    ) -> Result<String, AppError> {
        let answers = to_json(&context.user_answers)?;
        let titles = to_json(&context.roadmap_titles)?;
        let system = render(
            CHAT_SYSTEM_TEMPLATE,
            &context.profile,
            &[
                ("{user_answers}", answers.as_str()),
                ("{roadmap_titles}", titles.as_str()),
            ],
        )?;

        let merged = conversation_turns(history)?;
        let turns: Vec<Turn<'_>> = merged
            .iter()
            .map(|(role, content)| Turn {
                role: *role,
                content,
            })
            .collect();

        self.llm
            .converse(&turns, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Chat reply failed: {e}")))
    }

    async fn refined_analysis(
        &self,
        profile: &ScoreProfile,
        user_answers: &[String],
        career_field: &str,
    ) -> Result<RefinedAnalysis, AppError> {
        let answers = to_json(user_answers)?;
        let prompt = render(
            ANALYSIS_PROMPT_TEMPLATE,
            profile,
            &[
                ("{user_answers}", answers.as_str()),
                ("{career_field}", career_field),
            ],
        )?;

        self.llm
            .call_json(&prompt, &json_system())
            .await
            .map_err(|e| AppError::Llm(format!("Analysis of '{career_field}' failed: {e}")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt assembly
// ────────────────────────────────────────────────────────────────────────────

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| AppError::Internal(e.into()))
}

/// Fills the shared profile placeholders plus any call-specific ones.
///
/// Single pass over the template: substituted values are never rescanned, so
/// student text that happens to contain `{career_field}` stays literal.
fn render(
    template: &str,
    profile: &ScoreProfile,
    extras: &[(&str, &str)],
) -> Result<String, AppError> {
    let aptitude = to_json(&profile.aptitude_scores)?;
    let interest = to_json(&profile.interest_scores)?;
    let mut values: Vec<(&str, &str)> = vec![
        ("{score_note}", SCORE_SCALE_NOTE),
        ("{aptitude_scores}", aptitude.as_str()),
        ("{interest_scores}", interest.as_str()),
    ];
    values.extend_from_slice(extras);

    let mut prompt = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        prompt.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(placeholder, _)| tail.starts_with(placeholder)) {
            Some((placeholder, value)) => {
                prompt.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            None => {
                prompt.push('{');
                rest = &tail[1..];
            }
        }
    }
    prompt.push_str(rest);
    Ok(prompt)
}

/// Converts a client transcript into provider turns.
///
/// Leading model turns (the client's local greeting) are dropped, consecutive
/// turns from the same speaker are merged, and the transcript must end on a
/// user turn.
fn conversation_turns(history: &[ChatMessage]) -> Result<Vec<(Role, String)>, AppError> {
    let mut turns: Vec<(Role, String)> = Vec::new();

    for message in history
        .iter()
        .skip_while(|m| m.role == ChatRole::Model)
        .filter(|m| !m.text.trim().is_empty())
    {
        let role = match message.role {
            ChatRole::User => Role::User,
            ChatRole::Model => Role::Assistant,
        };
        match turns.last_mut() {
            Some((last_role, text)) if *last_role == role => {
                text.push_str("\n\n");
                text.push_str(&message.text);
            }
            _ => turns.push((role, message.text.clone())),
        }
    }

    match turns.last() {
        Some((Role::User, _)) => Ok(turns),
        _ => Err(AppError::Validation(
            "chat history must end with a non-empty user message".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::models::{AptitudeScores, InterestScores};

    fn profile() -> ScoreProfile {
        ScoreProfile {
            aptitude_scores: AptitudeScores {
                verbal: 0.5,
                logical: 1.0,
                spatial: 0.25,
                numerical: 0.75,
            },
            interest_scores: InterestScores {
                investigative: 0.9,
                ..Default::default()
            },
        }
    }

    fn msg(role: ChatRole, text: &str) -> ChatMessage {
        ChatMessage {
            role,
            text: text.to_string(),
        }
    }

    fn assert_fully_rendered(prompt: &str) {
        for placeholder in [
            "{score_note}",
            "{aptitude_scores}",
            "{interest_scores}",
            "{user_answers}",
            "{roadmap_titles}",
            "{career_field}",
        ] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }

    #[test]
    fn test_follow_up_prompt_embeds_scores() {
        let prompt = render(FOLLOW_UP_PROMPT_TEMPLATE, &profile(), &[]).unwrap();
        assert_fully_rendered(&prompt);
        assert!(prompt.contains(r#""logical":1.0"#));
        assert!(prompt.contains(r#""investigative":0.9"#));
    }

    #[test]
    fn test_analysis_prompt_names_the_field() {
        let prompt = render(
            ANALYSIS_PROMPT_TEMPLATE,
            &profile(),
            &[("{user_answers}", "[]"), ("{career_field}", "Marine Biology")],
        )
        .unwrap();
        assert_fully_rendered(&prompt);
        assert_eq!(prompt.matches("Marine Biology").count(), 2);
    }

    #[test]
    fn test_chat_and_roadmap_templates_render_completely() {
        let roadmap = render(
            ROADMAP_PROMPT_TEMPLATE,
            &profile(),
            &[("{user_answers}", r#"["I like leading"]"#)],
        )
        .unwrap();
        assert_fully_rendered(&roadmap);

        let chat = render(
            CHAT_SYSTEM_TEMPLATE,
            &profile(),
            &[("{user_answers}", "[]"), ("{roadmap_titles}", r#"["Nurse"]"#)],
        )
        .unwrap();
        assert_fully_rendered(&chat);
        assert!(chat.contains("Nurse"));
    }

    #[test]
    fn test_student_text_with_placeholders_stays_literal() {
        let prompt = render(
            ANALYSIS_PROMPT_TEMPLATE,
            &profile(),
            &[
                ("{user_answers}", r#"["I wrote {career_field} on my form"]"#),
                ("{career_field}", "Law {user_answers}"),
            ],
        )
        .unwrap();
        assert!(prompt.contains("I wrote {career_field} on my form"));
        assert_eq!(prompt.matches("Law {user_answers}").count(), 2);
    }

    #[test]
    fn test_render_keeps_json_braces() {
        let prompt = render(FOLLOW_UP_PROMPT_TEMPLATE, &profile(), &[]).unwrap();
        assert!(prompt.contains(r#"{"questions": ["question 1", "question 2", "question 3"]}"#));
    }

    #[test]
    fn test_turns_drop_leading_greeting() {
        let history = [
            msg(ChatRole::Model, "Hi! I'm Compass AI."),
            msg(ChatRole::User, "What about being a vet?"),
        ];
        let turns = conversation_turns(&history).unwrap();
        assert_eq!(turns, vec![(Role::User, "What about being a vet?".to_string())]);
    }

    #[test]
    fn test_turns_merge_consecutive_user_messages() {
        let history = [
            msg(ChatRole::User, "First question"),
            msg(ChatRole::Model, "   "),
            msg(ChatRole::User, "Second question"),
        ];
        let turns = conversation_turns(&history).unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].1, "First question\n\nSecond question");
    }

    #[test]
    fn test_turns_alternate_roles() {
        let history = [
            msg(ChatRole::User, "Hi"),
            msg(ChatRole::Model, "Hello!"),
            msg(ChatRole::User, "Tell me about nursing"),
        ];
        let roles: Vec<Role> = conversation_turns(&history)
            .unwrap()
            .into_iter()
            .map(|(r, _)| r)
            .collect();
        assert_eq!(roles, [Role::User, Role::Assistant, Role::User]);
    }

    #[test]
    fn test_turns_must_end_with_user() {
        let history = [msg(ChatRole::User, "Hi"), msg(ChatRole::Model, "Hello!")];
        assert!(matches!(
            conversation_turns(&history),
            Err(AppError::Validation(_))
        ));
        assert!(conversation_turns(&[]).is_err());
    }

    #[test]
    fn test_follow_up_reply_tolerates_missing_questions() {
        let reply: FollowUpReply = serde_json::from_str("{}").unwrap();
        assert!(reply.questions.is_empty());
    }
}
