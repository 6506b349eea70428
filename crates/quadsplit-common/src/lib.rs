pub mod errors;
pub mod types;

pub use errors::{ConfigError, LayoutError, QuadsplitError};
pub use types::{Color, Point, Rect, Size, SplitAxis};

pub type Result<T> = std::result::Result<T, QuadsplitError>;
