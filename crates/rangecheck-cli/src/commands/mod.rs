//! Command implementations.

pub mod batch;
pub mod check;
pub mod render;
pub mod types;

pub use self::batch::execute_batch;
pub use self::check::execute_check;
pub use self::render::execute_render;
pub use self::types::execute_types;
