// Cross-cutting prompt fragments.
// Each feature that calls the LLM keeps its own prompts.rs alongside it.

/// Sampling temperature for prose generation. Low enough to stay factual,
/// high enough to avoid verbatim resume echo.
pub const PROSE_TEMPERATURE: f32 = 0.4;
