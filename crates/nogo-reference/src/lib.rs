#![deny(unsafe_code)]

pub mod categorize;
pub mod error;
pub mod loader;
pub mod paths;

pub use crate::categorize::{
    CategorizeSummary, CategorizedIngredient, GENERAL_CATEGORY, categorize_file,
    categorize_ingredient, categorize_ingredients,
};
pub use crate::error::ReferenceError;
pub use crate::loader::{LoadOptions, LoadReport, load_nogo_list, load_nogo_list_with, read_nogo_list};
pub use crate::paths::{NOGO_LIST_ENV_VAR, default_nogo_list_path, resolve_nogo_list_path};
