// Interview preparation pipeline: session state, lifecycle, scoring, orchestration.
// Collaborators are reached only through the traits in `collaborators`.

pub mod collaborators;
pub mod handlers;
pub mod lifecycle;
pub mod llm_collaborators;
pub mod models;
pub mod orchestrator;
pub mod prompts;
pub mod scoring;
pub mod session;

#[cfg(test)]
pub mod testing;

pub use lifecycle::SessionLifecycleManager;
pub use orchestrator::{IngestOutcome, PipelineError, PipelineOrchestrator};
pub use scoring::ScoringPolicy;
