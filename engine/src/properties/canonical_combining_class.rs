use crate::data::COMBINING_CLASS;
use crate::CHARS;

/// класс канонического комбинирования (CCC). 0 - стартер, в том числе для кодпоинтов за пределами Unicode
#[inline(always)]
pub fn canonical_combining_class(code: u32) -> u8
{
    match code < CHARS {
        true => COMBINING_CLASS.get(code),
        false => 0,
    }
}

/// короткое имя для [`canonical_combining_class`]
#[inline(always)]
pub fn ccc(code: u32) -> u8
{
    canonical_combining_class(code)
}

#[inline(always)]
pub fn is_starter(code: u32) -> bool
{
    ccc(code) == 0
}
