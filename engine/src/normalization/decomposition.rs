use super::hangul;
use super::ordering::canonical_order;
use crate::data::{DECOMPOSITION_DATA, DECOMPOSITION_TABLE};
use crate::CHARS;

/// декомпозиция помечена тегом форматирования (<compat>, <font> ...) и применяется только в NFKD / NFKC
const FLAG_COMPATIBILITY: usize = 0b01;
/// хотя бы один кодпоинт декомпозиции имеет собственную декомпозицию
const FLAG_RECURSIVE: usize = 0b10;

/// декомпозиция кодпоинта, как она записана в UnicodeData.txt (один уровень)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition
{
    pub codes: &'static [u32],
    /// декомпозиция совместимости
    pub compatibility: bool,
    /// требует дальнейшего раскрытия
    pub recursive: bool,
}

impl Decomposition
{
    /// применяется ли декомпозиция в заданном режиме
    #[inline(always)]
    fn applies(&self, compatibility: bool) -> bool
    {
        compatibility || !self.compatibility
    }
}

/// запись таблицы декомпозиций. слоги хангыль в таблице отсутствуют
#[inline(always)]
pub fn decomposition(code: u32) -> Option<Decomposition>
{
    if code >= CHARS {
        return None;
    }

    let range = DECOMPOSITION_TABLE.range(code);
    let (start, end) = (range.start >> 2, range.end >> 2);

    if start == end {
        return None;
    }

    Some(Decomposition {
        codes: &DECOMPOSITION_DATA[start .. end],
        compatibility: range.start & FLAG_COMPATIBILITY != 0,
        recursive: range.start & FLAG_RECURSIVE != 0,
    })
}

/// длина полной декомпозиции кодпоинта, None - кодпоинт не раскладывается
pub fn decomposed_len(code: u32, compatibility: bool) -> Option<usize>
{
    if hangul::is_syllable(code) {
        return Some(hangul::syllable_len(code));
    }

    let entry = decomposition(code).filter(|entry| entry.applies(compatibility))?;

    Some(match entry.recursive {
        true => entry
            .codes
            .iter()
            .map(|&code| decomposed_len(code, compatibility).unwrap_or(1))
            .sum(),
        false => entry.codes.len(),
    })
}

/// дописать полную декомпозицию кодпоинта в результат
fn expand(code: u32, compatibility: bool, result: &mut Vec<u32>)
{
    if hangul::is_syllable(code) {
        hangul::decompose_syllable(code, result);
        return;
    }

    match decomposition(code).filter(|entry| entry.applies(compatibility)) {
        Some(entry) => match entry.recursive {
            true => entry.codes.iter().for_each(|&code| expand(code, compatibility, result)),
            false => result.extend_from_slice(entry.codes),
        },
        None => result.push(code),
    }
}

/// полная декомпозиция отдельного кодпоинта, без канонического упорядочивания
pub fn decompose_code(code: u32, compatibility: bool) -> Vec<u32>
{
    let mut result = Vec::with_capacity(decomposed_len(code, compatibility).unwrap_or(1));
    expand(code, compatibility, &mut result);

    result
}

/// каноническая декомпозиция (или декомпозиция совместимости) с последующим каноническим упорядочиванием
///
/// сначала вычисляется итоговая длина, затем - если хотя бы один кодпоинт раскладывается -
/// результат собирается в новом векторе нужного размера и заменяет исходный
pub fn decompose(buffer: &mut Vec<u32>, compatibility: bool)
{
    let mut len = 0;
    let mut expands = false;

    for &code in buffer.iter() {
        match decomposed_len(code, compatibility) {
            Some(decomposed) => {
                len += decomposed;
                expands = true;
            }
            None => len += 1,
        }
    }

    if expands {
        let mut result = Vec::with_capacity(len);

        for &code in buffer.iter() {
            expand(code, compatibility, &mut result);
        }

        *buffer = result;
    }

    canonical_order(buffer);
}
