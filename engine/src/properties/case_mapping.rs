use core::ops::Deref;

use crate::data::{lowercase_special, titlecase_special, uppercase_special, CASE_MAPPING};
use crate::CHARS;

/// простое отображение регистра, как оно хранится в таблице
///
/// для большинства кодпоинтов достаточно одного значения: строчная буква знает свою прописную (она же заглавная),
/// прописная - свою строчную. если у кодпоинта определены два разных отображения, хранится одно из них,
/// а второе берётся из записи связанного кодпоинта (варианты `*Then*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMapping
{
    /// регистр не меняется
    Identity,
    /// строчная
    Lower(u32),
    /// прописная, она же заглавная
    UpperTitle(u32),
    /// прописная, заглавная совпадает с самим кодпоинтом
    Upper(u32),
    /// строчная, прописная - в записи строчной
    LowerThenUpper(u32),
    /// прописная, заглавная - в записи прописной
    UpperThenTitle(u32),
    /// заглавная, строчная - в записи заглавной
    TitleThenLower(u32),
}

impl CaseMapping
{
    /// связанный кодпоинт
    #[inline(always)]
    pub fn target(&self) -> Option<u32>
    {
        match *self {
            CaseMapping::Identity => None,
            CaseMapping::Lower(code)
            | CaseMapping::UpperTitle(code)
            | CaseMapping::Upper(code)
            | CaseMapping::LowerThenUpper(code)
            | CaseMapping::UpperThenTitle(code)
            | CaseMapping::TitleThenLower(code) => Some(code),
        }
    }
}

/// запись таблицы регистров
#[inline(always)]
pub fn case_mapping(code: u32) -> CaseMapping
{
    match code < CHARS {
        true => CASE_MAPPING.get(code),
        false => CaseMapping::Identity,
    }
}

/// связанный кодпоинт из записи другого кодпоинта
#[inline(always)]
fn linked(code: u32, fallback: u32) -> u32
{
    case_mapping(code).target().unwrap_or(fallback)
}

/// простое отображение в строчные
pub fn lowercase(code: u32) -> u32
{
    match case_mapping(code) {
        CaseMapping::Lower(lower) | CaseMapping::LowerThenUpper(lower) => lower,
        CaseMapping::TitleThenLower(title) => linked(title, code),
        _ => code,
    }
}

/// простое отображение в прописные
pub fn uppercase(code: u32) -> u32
{
    match case_mapping(code) {
        CaseMapping::UpperTitle(upper)
        | CaseMapping::Upper(upper)
        | CaseMapping::UpperThenTitle(upper) => upper,
        CaseMapping::LowerThenUpper(lower) => linked(lower, code),
        _ => code,
    }
}

/// простое отображение в заглавные
pub fn titlecase(code: u32) -> u32
{
    match case_mapping(code) {
        CaseMapping::UpperTitle(title) | CaseMapping::TitleThenLower(title) => title,
        CaseMapping::UpperThenTitle(upper) => linked(upper, code),
        _ => code,
    }
}

/// результат полного отображения регистра: один кодпоинт или последовательность из SpecialCasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullMapping
{
    Single([u32; 1]),
    Special(&'static [u32]),
}

impl Deref for FullMapping
{
    type Target = [u32];

    #[inline(always)]
    fn deref(&self) -> &[u32]
    {
        match self {
            FullMapping::Single(code) => code.as_slice(),
            FullMapping::Special(codes) => codes,
        }
    }
}

impl FullMapping
{
    #[inline(always)]
    fn resolve(special: Option<&'static [u32]>, simple: impl FnOnce() -> u32) -> Self
    {
        match special {
            Some(codes) => FullMapping::Special(codes),
            None => FullMapping::Single([simple()]),
        }
    }
}

/// полное отображение в строчные
pub fn lowercase_full(code: u32) -> FullMapping
{
    FullMapping::resolve(lowercase_special(code), || lowercase(code))
}

/// полное отображение в прописные (ß -> SS)
pub fn uppercase_full(code: u32) -> FullMapping
{
    FullMapping::resolve(uppercase_special(code), || uppercase(code))
}

/// полное отображение в заглавные (ß -> Ss)
pub fn titlecase_full(code: u32) -> FullMapping
{
    FullMapping::resolve(titlecase_special(code), || titlecase(code))
}

macro_rules! string_mapping {
    ($name:ident, $full:ident) => {
        /// полное отображение регистра для каждого символа строки
        pub fn $name(input: &str) -> String
        {
            let mut result = String::with_capacity(input.len());

            for c in input.chars() {
                for &code in $full(u32::from(c)).iter() {
                    // таблицы отображают скалярные значения только в скалярные значения
                    if let Some(mapped) = char::from_u32(code) {
                        result.push(mapped);
                    }
                }
            }

            result
        }
    };
}

string_mapping!(to_lowercase, lowercase_full);
string_mapping!(to_uppercase, uppercase_full);
