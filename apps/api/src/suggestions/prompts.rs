// Free-text hints sent as the `context` string when the caller supplies none.

pub const EXPERIENCE_HINT: &str = "Generate professional bullet points for this work experience";

pub const PROJECT_HINT: &str = "Generate professional bullet points for this project";
