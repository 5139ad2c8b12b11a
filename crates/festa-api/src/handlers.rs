//! Request handlers.

pub mod archive;
pub mod gallery;
pub mod health;
pub mod session;
pub mod upload;

pub use archive::*;
pub use gallery::*;
pub use health::*;
pub use session::*;
pub use upload::*;
