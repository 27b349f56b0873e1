pub mod cli;
pub mod constants;
pub mod frontmatter;
pub mod index;
pub mod render;
pub mod section;
pub mod util;

pub use cli::Cli;
pub use index::{build_index, discover, extract_title, infer_date, NoteRecord};
pub use render::{render_list, LabelMode};
pub use section::replace_section;
