// Cross-cutting prompt fragments shared by every advisor prompt.
// Feature-specific templates live in advisor/prompts.rs.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// How the scores are explained to the model in every prompt.
pub const SCORE_SCALE_NOTE: &str = "\
    Aptitude scores are the fraction of verbal, logical, spatial and numerical \
    questions answered correctly (0-1). Interest scores follow the RIASEC model \
    (realistic, investigative, artistic, social, enterprising, conventional) and \
    are the mean self-rating on a 1-5 agreement scale divided by 5 (0-1).";
