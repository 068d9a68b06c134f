use std::ffi::CStr;

use super::{Decoder, EncodingError, Utf, REPLACEMENT_CHAR};

/// UTF-8
///
/// длина последовательности определяется только первым байтом, избыточные формы и закодированные суррогаты
/// не отбрасываются
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8;

/// байт продолжения 10xxxxxx
#[inline(always)]
fn is_continuation(byte: u8) -> bool
{
    byte & 0xC0 == 0x80
}

/// длина последовательности и значащие биты первого байта, None - байт не может начинать последовательность
#[inline(always)]
fn sequence(first: u8) -> Option<(usize, u32)>
{
    match first {
        0x00 ..= 0x7F => Some((1, first as u32)),
        0xC0 ..= 0xDF => Some((2, (first & 0x1F) as u32)),
        0xE0 ..= 0xEF => Some((3, (first & 0x0F) as u32)),
        0xF0 ..= 0xF7 => Some((4, (first & 0x07) as u32)),
        _ => None,
    }
}

impl Utf for Utf8
{
    type Unit = u8;

    const MAX_UNITS: usize = 4;

    fn validate(input: &[u8]) -> Result<(), EncodingError>
    {
        let mut offset = 0;

        while offset < input.len() {
            let len = match sequence(input[offset]) {
                Some((len, _)) => len,
                None => return Err(EncodingError::InvalidUtf8 { offset }),
            };

            for position in offset + 1 .. offset + len {
                match input.get(position) {
                    Some(&byte) if is_continuation(byte) => (),
                    _ => return Err(EncodingError::InvalidUtf8 { offset }),
                }
            }

            offset += len;
        }

        Ok(())
    }

    #[inline]
    fn decode_next(input: &mut &[u8]) -> Option<u32>
    {
        let bytes = *input;
        let (&first, rest) = bytes.split_first()?;

        let (len, mut code) = match sequence(first) {
            Some(sequence) => sequence,
            None => {
                // байт продолжения без начала последовательности или 0xF8 ..= 0xFF
                log::trace!("invalid UTF-8 lead byte {:#04X} replaced", first);
                *input = rest;

                return Some(REPLACEMENT_CHAR);
            }
        };

        for consumed in 1 .. len {
            match bytes.get(consumed) {
                Some(&byte) if is_continuation(byte) => code = code << 6 | (byte & 0x3F) as u32,
                // байт, прервавший последовательность, остаётся для следующего шага
                _ => {
                    log::trace!("truncated UTF-8 sequence of {} bytes replaced", len);
                    *input = &bytes[consumed ..];

                    return Some(REPLACEMENT_CHAR);
                }
            }
        }

        *input = &bytes[len ..];
        Some(code)
    }

    #[inline]
    fn append(output: &mut Vec<u8>, code: u32)
    {
        match code {
            0 ..= 0x7F => output.push(code as u8),
            0x80 ..= 0x7FF => {
                output.extend_from_slice(&[0xC0 | (code >> 6) as u8, 0x80 | (code & 0x3F) as u8])
            }
            0x800 ..= 0xFFFF => output.extend_from_slice(&[
                0xE0 | (code >> 12) as u8,
                0x80 | ((code >> 6) & 0x3F) as u8,
                0x80 | (code & 0x3F) as u8,
            ]),
            0x10000 ..= 0x10FFFF => output.extend_from_slice(&[
                0xF0 | (code >> 18) as u8,
                0x80 | ((code >> 12) & 0x3F) as u8,
                0x80 | ((code >> 6) & 0x3F) as u8,
                0x80 | (code & 0x3F) as u8,
            ]),
            _ => {
                log::trace!("code point {:#X} out of range, encoded as '?'", code);
                output.push(REPLACEMENT_CHAR as u8);
            }
        }
    }
}

encoding_functions!(Utf8, u8);

/// декодировать C-строку
pub fn decode_cstr(input: &CStr) -> Vec<u32>
{
    decode(input.to_bytes())
}

/// ленивый декодер C-строки
pub fn cstr_decoder(input: &CStr) -> Decoder<'_, Utf8>
{
    Decoder::new(input.to_bytes())
}
