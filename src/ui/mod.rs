pub mod display;
pub mod format;

pub use display::{DisplayLines, Presenter};
pub use format::format_operand;
