use super::{EncodingError, Utf, REPLACEMENT_CHAR};
use crate::is_scalar_value;

/// UTF-32: каждая единица - отдельный кодпоинт
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf32;

impl Utf for Utf32
{
    type Unit = u32;

    const MAX_UNITS: usize = 1;

    fn validate(input: &[u32]) -> Result<(), EncodingError>
    {
        match input.iter().position(|&code| !is_scalar_value(code)) {
            Some(offset) => Err(EncodingError::InvalidScalar {
                offset,
                code: input[offset],
            }),
            None => Ok(()),
        }
    }

    #[inline]
    fn decode_next(input: &mut &[u32]) -> Option<u32>
    {
        let (&code, rest) = input.split_first()?;
        *input = rest;

        match is_scalar_value(code) {
            true => Some(code),
            false => {
                log::trace!("invalid scalar value {:#X} replaced", code);
                Some(REPLACEMENT_CHAR)
            }
        }
    }

    #[inline]
    fn append(output: &mut Vec<u32>, code: u32)
    {
        match code < crate::CHARS {
            true => output.push(code),
            false => {
                log::trace!("code point {:#X} out of range, encoded as '?'", code);
                output.push(REPLACEMENT_CHAR);
            }
        }
    }
}

encoding_functions!(Utf32, u32);
