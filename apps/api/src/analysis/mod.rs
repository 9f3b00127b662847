// Gap analysis: role requirement tables, the deterministic scorer,
// and the upload/analyze/session routes that feed it.

pub mod gap;
pub mod handlers;
pub mod roles;
