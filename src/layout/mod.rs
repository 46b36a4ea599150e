//! Text layout: Markdown line rewriting, word wrapping and pagination.

mod paginate;
mod reformat;
mod wrap;

pub use paginate::{paginate, Page};
pub use reformat::{reformat, rewrite_line, split_lines, LineKind, BULLET, MAX_RULE_WIDTH};
pub use wrap::wrap_line;
