// LLM-backed coaching features layered on the gap report.
// Every feature substitutes a typed fallback when the model reply does not parse.

pub mod calendar;
pub mod chat;
pub mod handlers;
pub mod interview;
pub mod projects;
pub mod prompts;
pub mod schedule;
pub mod tailor;
