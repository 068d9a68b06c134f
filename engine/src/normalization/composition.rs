use super::hangul;
use crate::data::{COMPOSITION_DATA, COMPOSITION_TABLE};
use crate::properties::ccc;
use crate::CHARS;

/// пары композиции, в которых кодпоинт является первым
#[inline(always)]
fn compositions(first: u32) -> &'static [(u32, u32)]
{
    match first < CHARS {
        true => &COMPOSITION_DATA[COMPOSITION_TABLE.range(first)],
        false => &[],
    }
}

/// первичный композит пары кодпоинтов. исключения из композиции в данных отсутствуют
#[inline(always)]
pub fn compose_pair(first: u32, second: u32) -> Option<u32>
{
    if let Some(composed) = hangul::compose(first, second) {
        return Some(composed);
    }

    let pairs = compositions(first);

    match pairs.is_empty() {
        true => None,
        false => pairs
            .binary_search_by_key(&second, |&(second, _)| second)
            .ok()
            .map(|position| pairs[position].1),
    }
}

/// каноническая композиция декомпозированного и упорядоченного буфера
///
/// буфер сжимается на месте: кодпоинт, скомбинированный со стартером, заменяет стартер,
/// остальные переносятся к позиции записи
pub fn compose(buffer: &mut Vec<u32>)
{
    let len = buffer.len();

    // позиция последнего стартера в уже записанной части
    let mut starter: Option<usize> = None;
    // CCC последнего нескомбинированного кодпоинта после стартера
    let mut last_ccc: Option<u8> = None;
    let mut write = 0;

    for read in 0 .. len {
        let code = buffer[read];
        let class = ccc(code);

        if let Some(position) = starter {
            // кодпоинт заблокирован, если между ним и стартером есть кодпоинт с тем же или большим CCC
            let blocked = match last_ccc {
                Some(last) => last == 0 || last >= class,
                None => false,
            };

            if !blocked {
                if let Some(composed) = compose_pair(buffer[position], code) {
                    buffer[position] = composed;
                    continue;
                }
            }
        }

        match class {
            0 => {
                starter = Some(write);
                last_ccc = None;
            }
            _ => last_ccc = Some(class),
        }

        buffer[write] = code;
        write += 1;
    }

    buffer.truncate(write);
}
