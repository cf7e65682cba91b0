//! Pure data structures: the records the library queries over and the shapes its queries return.

pub mod animal;
pub mod book;
pub mod group;

pub use animal::*;
pub use book::*;
pub use group::*;
