//! свойства отдельных кодпоинтов

pub use canonical_combining_class::{canonical_combining_class, ccc, is_starter};
pub use case_mapping::{
    case_mapping, lowercase, lowercase_full, titlecase, titlecase_full, to_lowercase, to_uppercase,
    uppercase, uppercase_full, CaseMapping, FullMapping,
};
pub use general_category::{category, Category, ParseCategoryError};

mod canonical_combining_class;
mod case_mapping;
mod general_category;
