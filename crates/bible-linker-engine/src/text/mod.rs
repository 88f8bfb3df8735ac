pub mod cursor;
pub mod span;

pub use cursor::Cursor;
pub use span::Span;
