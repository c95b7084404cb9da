use thiserror::Error;

/// Error produced when extraction is attempted on an absent container.
///
/// `Opt::unwrap` panics with this message; `Opt::try_unwrap` returns it as a
/// value so callers can route it through `?` instead.
#[derive(Debug, Clone, Copy, Error)]
#[error("could not unwrap 'Opt': value is absent")]
pub struct EmptyUnwrap;
