use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, PromptViMode};
use std::borrow::Cow;

#[derive(Clone, Default)]
pub(crate) struct QuestionPrompt;

static PROMPT_INDICATOR: &str = "› ";
static VI_INSERT_PROMPT_INDICATOR: &str = ": ";
static MULTILINE_INDICATOR: &str = "... ";

impl Prompt for QuestionPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<'_, str> {
        match prompt_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => PROMPT_INDICATOR.into(),
            PromptEditMode::Vi(vi_mode) => match vi_mode {
                PromptViMode::Normal => PROMPT_INDICATOR.into(),
                PromptViMode::Insert => VI_INSERT_PROMPT_INDICATOR.into(),
            },
            PromptEditMode::Custom(mode) => format!("({mode})").into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(&self, history_search: PromptHistorySearch) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search) \"{}\": ", prefix, history_search.term))
    }
}
