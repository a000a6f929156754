pub mod style;
pub mod table;

pub use style::{FontSpec, Style};
pub use table::{MIN_LEVELS, StyleError, StyleTable};
