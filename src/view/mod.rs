pub mod blocks;
pub mod chrome;
pub mod highlight;
pub mod page;

pub use highlight::CodeHighlighter;
pub use page::{PageContext, PageRenderer};
