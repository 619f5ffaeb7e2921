// Prompt constants for remote cover-letter generation.
// Fill with `build_user_prompt`; never send the raw template.

/// System prompt for the remote writer.
pub const COVER_LETTER_SYSTEM: &str =
    "You are a concise, specific application writer. Avoid buzzwords. Write in plain English.";

/// User prompt template.
/// Replace: {resume}, {jd}, {role}, {company}, {tone}, {length}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "Using the resume and job description, \
    write a short cover letter (220-320 words) with a 2-sentence intro, \
    3-5 bullet achievements tailored to the JD, and a brief close.\n\n\
    RESUME: {resume}\n\n\
    JOB DESCRIPTION: {jd}\n\n\
    ROLE: {role}\n\
    COMPANY: {company}\n\
    TONE: {tone}\n\
    LENGTH: {length}";
