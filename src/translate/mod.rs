//! The translation pipeline: compile once, then resolve per render.
//!
//! [`pre_heat`] turns a [`TranslationTable`] into a [`CompiledTable`].
//! Each render builds its parameters with [`template_param_values`] and
//! formats the active-over-default messages with [`translate_with_defaults`].

mod loader;
mod params;
mod precompile;
mod resolve;
mod table;

pub use loader::{load_table_dir, load_table_file};
pub use params::{ParamDerivers, template_param_values};
pub use precompile::pre_heat;
pub use resolve::{merged_messages, translate_with_defaults};
pub use table::{CompiledTable, MessageSet, RawMessages, TranslationTable, Translations};
