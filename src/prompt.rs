use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Upper bound on generated tokens for a note summary.
pub const MAX_SUMMARY_TOKENS: u32 = 200;

/// Sampling temperature; kept low so summaries stay close to the source.
pub const SUMMARY_TEMPERATURE: f64 = 0.3;

pub const SYSTEM_PROMPT: &str = "You are an expert summarizer that creates concise, insightful summaries of text content.

Follow these guidelines when creating summaries:
1. Identify the most important concepts, arguments, or ideas in the text
2. Highlight any key conclusions or findings
3. Maintain objectivity and preserve the original meaning
4. Use clear, concise language that captures the essence of the text
5. Create a summary that would help someone quickly understand the main points
6. Aim for 2-4 sentences that provide a comprehensive overview
7. Include the most significant details without unnecessary information

Your summary should be informative, accurate, and reflect the original content's tone and purpose.";

/// Wraps the note text in the summarization request sent as the user turn.
#[must_use]
pub fn build_user_prompt(text: &str) -> String {
    format!(
        "Please provide a concise and insightful summary of the following text:\n\n{text}\n\nFocus on the key points and main ideas that someone would need to understand the content quickly."
    )
}

/// System instruction followed by the user's text.
#[must_use]
pub fn build_prompt(text: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(build_user_prompt(text)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
