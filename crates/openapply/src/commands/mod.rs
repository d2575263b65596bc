//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod guides;
pub(crate) mod serve;

pub(crate) use build::BuildArgs;
pub(crate) use guides::GuidesArgs;
pub(crate) use serve::ServeArgs;
