//! преобразования между UTF-8, UTF-16 и UTF-32
//!
//! декодирование не завершается ошибкой: некорректная последовательность заменяется одним символом '?'
//! и декодер продолжает работу со следующей единицы кодирования. для строгой проверки - `validate` / `valid`.
//!
//! поддерживаются две модели буфера: с явной длиной (срез, может содержать нулевые единицы)
//! и нуль-терминированная (последовательность заканчивается на первой нулевой единице или в конце среза)

use core::fmt;
use core::iter::FusedIterator;

pub use error::EncodingError;
pub use utf16::Utf16;
pub use utf32::Utf32;
pub use utf8::Utf8;

mod error;

/// символ, которым заменяются некорректные последовательности
pub const REPLACEMENT_CHAR: u32 = '?' as u32;

/// кодировка Unicode
pub trait Utf
{
    /// единица кодирования
    type Unit: Copy + Default + PartialEq + fmt::Debug;

    /// максимальное количество единиц кодирования на один кодпоинт
    const MAX_UNITS: usize;

    /// строгая проверка: смещение первой некорректной последовательности
    fn validate(input: &[Self::Unit]) -> Result<(), EncodingError>;

    #[inline]
    fn valid(input: &[Self::Unit]) -> bool
    {
        Self::validate(input).is_ok()
    }

    /// прочитать кодпоинт (или одну некорректную последовательность) и сдвинуть начало среза
    fn decode_next(input: &mut &[Self::Unit]) -> Option<u32>;

    /// дописать кодпоинт. для значений за пределами Unicode записывается '?'
    fn append(output: &mut Vec<Self::Unit>, code: u32);
}

/// часть буфера до первой нулевой единицы кодирования
#[inline]
pub fn terminated<U: Utf>(input: &[U::Unit]) -> &[U::Unit]
{
    let zero = U::Unit::default();

    match input.iter().position(|&unit| unit == zero) {
        Some(end) => &input[.. end],
        None => input,
    }
}

/// первый кодпоинт буфера
#[inline]
pub fn first<U: Utf>(mut input: &[U::Unit]) -> Option<u32>
{
    U::decode_next(&mut input)
}

/// декодировать буфер целиком
pub fn decode<U: Utf>(input: &[U::Unit]) -> Vec<u32>
{
    let mut output = Vec::with_capacity(input.len());
    decode_into::<U>(input, &mut output);

    output
}

/// декодировать буфер, дописывая кодпоинты в конец `output`
pub fn decode_into<U: Utf>(mut input: &[U::Unit], output: &mut Vec<u32>)
{
    output.reserve(input.len() / U::MAX_UNITS);

    while let Some(code) = U::decode_next(&mut input) {
        output.push(code);
    }
}

/// закодировать последовательность кодпоинтов
pub fn encode<U: Utf>(codes: &[u32]) -> Vec<U::Unit>
{
    let mut output = Vec::with_capacity(codes.len());
    encode_into::<U>(codes, &mut output);

    output
}

/// закодировать последовательность кодпоинтов, дописывая результат в конец `output`
pub fn encode_into<U: Utf>(codes: &[u32], output: &mut Vec<U::Unit>)
{
    for &code in codes {
        U::append(output, code);
    }
}

/// применить отображение к каждому кодпоинту без промежуточного буфера кодпоинтов
pub fn map<U: Utf>(input: &[U::Unit], mut f: impl FnMut(u32) -> u32) -> Vec<U::Unit>
{
    let mut output = Vec::with_capacity(input.len());

    for code in Decoder::<U>::new(input) {
        U::append(&mut output, f(code));
    }

    output
}

/// ленивый однопроходный декодер
///
/// выдаёт по одному кодпоинту за шаг, не материализуя результат. повторно пройти по тексту нельзя -
/// для этого создаётся новый декодер
pub struct Decoder<'a, U: Utf>
{
    input: &'a [U::Unit],
    /// нулевая единица кодирования завершает последовательность
    terminated: bool,
}

impl<'a, U: Utf> Decoder<'a, U>
{
    /// декодер буфера с явной длиной
    pub fn new(input: &'a [U::Unit]) -> Self
    {
        Self {
            input,
            terminated: false,
        }
    }

    /// декодер нуль-терminated буфера: чтение останавливается на первой нулевой единице,
    /// буфер заранее не просматривается
    pub fn terminated(input: &'a [U::Unit]) -> Self
    {
        Self {
            input,
            terminated: true,
        }
    }

    /// ещё не прочитанная часть буфера
    pub fn remaining(&self) -> &'a [U::Unit]
    {
        self.input
    }
}

impl<'a, U: Utf> Iterator for Decoder<'a, U>
{
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32>
    {
        if self.terminated && self.input.first() == Some(&U::Unit::default()) {
            self.input = &[];
            return None;
        }

        U::decode_next(&mut self.input)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = self.input.len();

        match self.terminated {
            true => (0, Some(len)),
            false => (len.div_ceil(U::MAX_UNITS), Some(len)),
        }
    }
}

impl<'a, U: Utf> FusedIterator for Decoder<'a, U> {}

impl<'a, U: Utf> fmt::Debug for Decoder<'a, U>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Decoder")
            .field("remaining", &self.input)
            .field("terminated", &self.terminated)
            .finish()
    }
}

/// функции кодировки для модулей utf8 / utf16 / utf32
macro_rules! encoding_functions {
    ($utf:ty, $unit:ty) => {
        /// единица кодирования
        pub type Unit = $unit;

        /// текст корректен
        pub fn valid(input: &[$unit]) -> bool
        {
            <$utf as $crate::utf::Utf>::valid(input)
        }

        /// строгая проверка текста
        pub fn validate(input: &[$unit]) -> Result<(), $crate::utf::EncodingError>
        {
            <$utf as $crate::utf::Utf>::validate(input)
        }

        pub fn first(input: &[$unit]) -> Option<u32>
        {
            $crate::utf::first::<$utf>(input)
        }

        pub fn decode(input: &[$unit]) -> Vec<u32>
        {
            $crate::utf::decode::<$utf>(input)
        }

        pub fn decode_into(input: &[$unit], output: &mut Vec<u32>)
        {
            $crate::utf::decode_into::<$utf>(input, output)
        }

        pub fn encode(codes: &[u32]) -> Vec<$unit>
        {
            $crate::utf::encode::<$utf>(codes)
        }

        pub fn encode_into(codes: &[u32], output: &mut Vec<$unit>)
        {
            $crate::utf::encode_into::<$utf>(codes, output)
        }

        pub fn append(output: &mut Vec<$unit>, code: u32)
        {
            <$utf as $crate::utf::Utf>::append(output, code)
        }

        pub fn decoder(input: &[$unit]) -> $crate::utf::Decoder<'_, $utf>
        {
            $crate::utf::Decoder::new(input)
        }

        pub fn map(input: &[$unit], f: impl FnMut(u32) -> u32) -> Vec<$unit>
        {
            $crate::utf::map::<$utf>(input, f)
        }

        /// нуль-терминированный текст корректен
        pub fn valid_terminated(input: &[$unit]) -> bool
        {
            valid($crate::utf::terminated::<$utf>(input))
        }

        pub fn first_terminated(input: &[$unit]) -> Option<u32>
        {
            terminated_decoder(input).next()
        }

        pub fn decode_terminated(input: &[$unit]) -> Vec<u32>
        {
            terminated_decoder(input).collect()
        }

        pub fn terminated_decoder(input: &[$unit]) -> $crate::utf::Decoder<'_, $utf>
        {
            $crate::utf::Decoder::terminated(input)
        }
    };
}

pub mod utf16;
pub mod utf32;
pub mod utf8;
