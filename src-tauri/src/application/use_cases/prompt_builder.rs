//! Instruction templates for the four text actions.
//!
//! Everything here is a pure function of its inputs: the same action, text
//! and languages always produce the same prompt.

use crate::domain::action::{ActionKind, LanguagePair};
use crate::domain::locale::language_name;
use crate::domain::settings::{AUTO_DETECT, DEFAULT_TO_LANGUAGE};

/// Instruction sent when probing the provider.
pub const CONNECTION_PROBE: &str = "Say \"OK\".";

const KEEP_LANGUAGE: &str = "**CRITICAL INSTRUCTION: You must not, under any circumstances, change the original language of the text.** For example, if the text is in Portuguese, the result must also be in Portuguese.";

const ONLY_RESULT: &str = "with no extra phrases or introductions.";

pub struct PromptBuilder;

impl PromptBuilder {
    /// System instruction for `kind`. `languages` is only read for translations;
    /// a missing pair means "detect the source, translate to Portuguese".
    pub fn system_prompt(kind: ActionKind, languages: Option<&LanguagePair>) -> String {
        match kind {
            ActionKind::Translate => {
                let default_pair = LanguagePair::new(AUTO_DETECT, DEFAULT_TO_LANGUAGE);
                Self::translate(languages.unwrap_or(&default_pair))
            }
            ActionKind::Reformulate => format!(
                "You are a writing assistant. Your task is to reformulate the user's text to make it more professional, fluid, and clear. {} Your response should only contain the reformulated text, {}",
                KEEP_LANGUAGE, ONLY_RESULT
            ),
            ActionKind::Correct => format!(
                "You are a grammar assistant. Correct any spelling and grammar mistakes in the user text, maintaining the original style. Your response should only contain the corrected text, {}",
                ONLY_RESULT
            ),
            ActionKind::Summarize => format!(
                "You are a helpful assistant. Your task is to summarize the user's text. {} Your response should only contain the summarized text, {}",
                KEEP_LANGUAGE, ONLY_RESULT
            ),
        }
    }

    fn translate(languages: &LanguagePair) -> String {
        let target = describe_language(languages.target.trim());
        let task = if languages.detects_source() {
            format!(
                "Automatically detect the language of the following text and translate it to {}.",
                target
            )
        } else {
            format!(
                "Translate the following text from {} to {}.",
                describe_language(languages.source.trim()),
                target
            )
        };

        format!(
            "You are an expert translator. {} Return only the text translated to {}, without any additional comments or explanations.",
            task, target
        )
    }
}

fn describe_language(code: &str) -> String {
    let name = language_name(code);
    if name == code {
        code.to_string()
    } else {
        format!("{} ({})", name, code)
    }
}
