//! запечённые таблицы Unicode 15.1.0
//!
//! таблицы сгенерированы заранее из UCD и подключаются как выражения Rust

use crate::properties::CaseMapping::{self, *};
use crate::table::BlockTable;

/// основные категории: номер категории (1 ..= 30) для каждого кодпоинта
pub static GENERAL_CATEGORY: BlockTable<'static, u8, 256> =
    include!("./../../data/general_category.txt");

/// классы канонического комбинирования
pub static COMBINING_CLASS: BlockTable<'static, u8, 256> =
    include!("./../../data/combining_class.txt");

/// простые отображения регистра
pub static CASE_MAPPING: BlockTable<'static, CaseMapping, 256> =
    include!("./../../data/case_mapping.txt");

/// смещения декомпозиций в DECOMPOSITION_DATA с флагами в младших битах
pub static DECOMPOSITION_TABLE: BlockTable<'static, u32, 257> =
    include!("./../../data/decomposition_table.txt");

/// одноуровневые декомпозиции, как они записаны в UnicodeData.txt
pub static DECOMPOSITION_DATA: &[u32] = include!("./../../data/decomposition_data.txt");

/// смещения пар композиции в COMPOSITION_DATA
pub static COMPOSITION_TABLE: BlockTable<'static, u32, 257> =
    include!("./../../data/composition_table.txt");

/// пары (второй кодпоинт, результат композиции), отсортированные по второму кодпоинту
/// в пределах записи первого
pub static COMPOSITION_DATA: &[(u32, u32)] = include!("./../../data/composition_data.txt");

/// битовая маска комбинирующих знаков (Mn, Mc, Me)
pub static COMBINING_MARKS: BlockTable<'static, u8, 32> =
    include!("./../../data/combining_mark_table.txt");

/// индексы в STRIPPED_DATA, 0 - кодпоинт не меняется
pub static STRIPPED_TABLE: BlockTable<'static, u16, 256> =
    include!("./../../data/stripped_table.txt");

/// кодпоинты без комбинирующих знаков
pub static STRIPPED_DATA: &[u32] = include!("./../../data/stripped_data.txt");

/// полное отображение в строчные (SpecialCasing.txt, без условий)
pub fn lowercase_special(code: u32) -> Option<&'static [u32]>
{
    include!("./../../data/lowercase_full.txt")
}

/// полное отображение в прописные
pub fn uppercase_special(code: u32) -> Option<&'static [u32]>
{
    include!("./../../data/uppercase_full.txt")
}

/// полное отображение в заглавные
pub fn titlecase_special(code: u32) -> Option<&'static [u32]>
{
    include!("./../../data/titlecase_full.txt")
}
