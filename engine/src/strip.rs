use crate::data::{COMBINING_MARKS, STRIPPED_DATA, STRIPPED_TABLE};
use crate::normalization::{nfc, nfd};
use crate::CHARS;

/// кодпоинт - комбинирующий знак (категории Mn, Mc, Me)
#[inline(always)]
pub fn is_combining_mark(code: u32) -> bool
{
    code < CHARS && COMBINING_MARKS.bit(code)
}

/// кодпоинт без комбинирующих знаков: á -> a, ǖ -> u.
/// если удаление знаков не даёт ровно одного кодпоинта, кодпоинт не меняется
#[inline]
pub fn strip_combining_marks(code: u32) -> u32
{
    if code >= CHARS {
        return code;
    }

    match STRIPPED_TABLE.get(code) {
        0 => code,
        index => STRIPPED_DATA[index as usize],
    }
}

/// удалить комбинирующие знаки из строки: отдельные знаки отбрасываются,
/// остальные символы заменяются на свою форму без знаков
pub fn strip_combining_marks_str(input: &str) -> String
{
    input
        .chars()
        .map(u32::from)
        .filter(|&code| !is_combining_mark(code))
        .filter_map(|code| char::from_u32(strip_combining_marks(code)))
        .collect()
}

/// вычислить форму без знаков через нормализацию: NFD, удаление знаков, NFC
///
/// та же функция, по которой построена таблица, используется для её проверки
pub fn derive_stripped(code: u32) -> u32
{
    let mut buffer = vec![code];
    nfd(&mut buffer);

    if !buffer.iter().any(|&code| is_combining_mark(code)) {
        return code;
    }

    buffer.retain(|&code| !is_combining_mark(code));
    nfc(&mut buffer);

    match buffer.as_slice() {
        &[stripped] => stripped,
        _ => code,
    }
}
