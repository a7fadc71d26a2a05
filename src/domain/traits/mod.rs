//! Domain traits - Abstractions for infrastructure implementations

pub mod surface;
pub mod suggester;

pub use surface::ChatSurface;
pub use suggester::Suggester;
