//! Log record building blocks: fields, levels and call sites.

mod call_site;
mod field;
mod level;

pub use call_site::CallSite;
pub use field::{Field, err_field, f, mapify};
pub use level::Level;
