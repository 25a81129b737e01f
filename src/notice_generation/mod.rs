/// Domain layer - license resolution and NOTICE rendering
///
/// Everything in here is free of I/O. Collaborators such as the dependency
/// graph provider are reached only through the traits in `crate::ports`.
pub mod domain;
pub mod policies;
pub mod services;
