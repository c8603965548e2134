//! Prompt text sent to the model.

pub const SYSTEM_PROMPT: &str = "You are a helpful web copywriter";

const INSTRUCTIONS: &str = "\
You will write the content for the meta tags of this article. The \
description should be approx. 180 characters long (2 to 3 sentences). \
The description should be focused on the results a reader might expect \
from reading this article, i.e. it's not a summary but an overview of the \
key results a reader will obtain.

Then write the keywords as a single comma separated string.";

/// Build the user message for a document body.
pub fn user_prompt(content: &str) -> String {
    format!("Content:\n{content}\n--\n{INSTRUCTIONS}")
}
