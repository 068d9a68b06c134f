//! Свойства символов Unicode и нормализация.
//!
//! - основные категории (General Category) в виде битовых масок;
//! - простые и полные отображения регистра (строчные, прописные, заглавные);
//! - классы канонического комбинирования;
//! - формы нормализации NFC, NFD, NFKC, NFKD;
//! - удаление комбинирующих знаков;
//! - преобразования между UTF-8, UTF-16 и UTF-32.
//!
//! Все таблицы запечены заранее (Unicode 15.1.0) и не изменяются во время работы,
//! поэтому функции крейта можно вызывать из любого количества потоков без синхронизации.

pub use normalization::{nfc, nfd, nfkc, nfkd, NormalizationForm, Normalizer, ParseFormError};
pub use properties::{
    canonical_combining_class, category, lowercase, lowercase_full, titlecase, titlecase_full,
    to_lowercase, to_uppercase, uppercase, uppercase_full, CaseMapping, Category, FullMapping,
    ParseCategoryError,
};
pub use strip::{is_combining_mark, strip_combining_marks, strip_combining_marks_str};
pub use utf::{Decoder, EncodingError, Utf, Utf16, Utf32, Utf8, REPLACEMENT_CHAR};

pub mod normalization;
pub mod properties;
pub mod strip;
pub mod table;
pub mod utf;

mod data;

/// количество кодпоинтов Unicode: все значения от U+0000 до U+10FFFF включительно
pub const CHARS: u32 = 0x110000;

/// кодпоинт является суррогатом (U+D800 ..= U+DFFF)
#[inline(always)]
pub fn is_surrogate(code: u32) -> bool
{
    (0xD800 .. 0xE000).contains(&code)
}

/// кодпоинт является скалярным значением Unicode - не суррогат и не выходит за границы кодового пространства
#[inline(always)]
pub fn is_scalar_value(code: u32) -> bool
{
    code < CHARS && !is_surrogate(code)
}
