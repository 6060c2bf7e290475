//! Embeds wordbook data files into the static page.
//!
//! Loads the JSON word sets from a results directory, renders them as a
//! JavaScript array literal, splices that literal over the page's
//! `DEFAULT_WORD_SETS` assignment, and rewrites the stock `init()` body so
//! the page seeds local storage from the embedded defaults.

pub mod injector;
pub mod literal;
pub mod loader;
pub mod patcher;

pub use injector::{EmbedError, HtmlInjector, InjectConfig, InjectReport};
pub use literal::{render_array_literal, WORD_SETS_COMMENT, WORD_SETS_CONST};
pub use loader::load_word_sets;
