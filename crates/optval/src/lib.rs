pub mod opt;
pub use opt::Opt;

pub mod error;
pub use error::EmptyUnwrap;
