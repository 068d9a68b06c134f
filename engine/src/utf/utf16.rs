use super::{EncodingError, Utf, REPLACEMENT_CHAR};

/// UTF-16
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16;

#[inline(always)]
fn is_high_surrogate(unit: u16) -> bool
{
    (0xD800 .. 0xDC00).contains(&unit)
}

#[inline(always)]
fn is_low_surrogate(unit: u16) -> bool
{
    (0xDC00 .. 0xE000).contains(&unit)
}

/// кодпоинт из суррогатной пары
#[inline(always)]
fn combine_surrogates(high: u16, low: u16) -> u32
{
    0x10000 + (((high - 0xD800) as u32) << 10) + (low - 0xDC00) as u32
}

impl Utf for Utf16
{
    type Unit = u16;

    const MAX_UNITS: usize = 2;

    fn validate(input: &[u16]) -> Result<(), EncodingError>
    {
        let mut offset = 0;

        while offset < input.len() {
            let unit = input[offset];

            if is_low_surrogate(unit) {
                return Err(EncodingError::UnpairedSurrogate { offset });
            }

            if is_high_surrogate(unit) {
                match input.get(offset + 1) {
                    Some(&low) if is_low_surrogate(low) => offset += 1,
                    _ => return Err(EncodingError::UnpairedSurrogate { offset }),
                }
            }

            offset += 1;
        }

        Ok(())
    }

    #[inline]
    fn decode_next(input: &mut &[u16]) -> Option<u32>
    {
        let units = *input;
        let (&unit, rest) = units.split_first()?;

        *input = rest;

        if is_low_surrogate(unit) {
            log::trace!("lone low surrogate {:#06X} replaced", unit);
            return Some(REPLACEMENT_CHAR);
        }

        if !is_high_surrogate(unit) {
            return Some(unit as u32);
        }

        match rest.first() {
            Some(&low) if is_low_surrogate(low) => {
                *input = &rest[1 ..];
                Some(combine_surrogates(unit, low))
            }
            // единица после старшего суррогата остаётся для следующего шага
            _ => {
                log::trace!("high surrogate {:#06X} without pair replaced", unit);
                Some(REPLACEMENT_CHAR)
            }
        }
    }

    #[inline]
    fn append(output: &mut Vec<u16>, code: u32)
    {
        match code {
            0 ..= 0xFFFF => output.push(code as u16),
            0x10000 ..= 0x10FFFF => {
                let code = code - 0x10000;
                output.push(0xD800 + (code >> 10) as u16);
                output.push(0xDC00 + (code & 0x3FF) as u16);
            }
            _ => {
                log::trace!("code point {:#X} out of range, encoded as '?'", code);
                output.push(REPLACEMENT_CHAR as u16);
            }
        }
    }
}

encoding_functions!(Utf16, u16);
