//! нормализация: NFD, NFKD, NFC, NFKC
//!
//! все формы работают с буфером кодпоинтов (`Vec<u32>`) и изменяют его на месте:
//! декомпозиция, каноническое упорядочивание и, для NFC / NFKC, каноническая композиция

use core::fmt;
use core::str::FromStr;

pub use composition::{compose, compose_pair};
pub use decomposition::{decompose, decompose_code, decomposed_len, decomposition, Decomposition};
pub use ordering::canonical_order;

use crate::utf::utf8;

mod composition;
mod decomposition;
mod ordering;

pub mod hangul;

/// каноническая декомпозиция
pub fn nfd(buffer: &mut Vec<u32>)
{
    decompose(buffer, false);
}

/// декомпозиция совместимости
pub fn nfkd(buffer: &mut Vec<u32>)
{
    decompose(buffer, true);
}

/// каноническая декомпозиция с последующей канонической композицией
pub fn nfc(buffer: &mut Vec<u32>)
{
    decompose(buffer, false);
    compose(buffer);
}

/// декомпозиция совместимости с последующей канонической композицией
pub fn nfkc(buffer: &mut Vec<u32>)
{
    decompose(buffer, true);
    compose(buffer);
}

/// форма нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizationForm
{
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl NormalizationForm
{
    /// форма включает каноническую композицию
    pub fn is_composing(&self) -> bool
    {
        matches!(self, Self::Nfc | Self::Nfkc)
    }

    /// форма использует декомпозицию совместимости
    pub fn is_compatibility(&self) -> bool
    {
        matches!(self, Self::Nfkc | Self::Nfkd)
    }

    pub fn name(&self) -> &'static str
    {
        match self {
            Self::Nfc => "NFC",
            Self::Nfd => "NFD",
            Self::Nfkc => "NFKC",
            Self::Nfkd => "NFKD",
        }
    }
}

impl fmt::Display for NormalizationForm
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

/// строка не является названием формы нормализации
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown normalization form: {0:?} (expected NFC, NFD, NFKC or NFKD)")]
pub struct ParseFormError(pub String);

impl FromStr for NormalizationForm
{
    type Err = ParseFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let form = s.trim();

        [Self::Nfc, Self::Nfd, Self::Nfkc, Self::Nfkd]
            .into_iter()
            .find(|candidate| candidate.name().eq_ignore_ascii_case(form))
            .ok_or_else(|| ParseFormError(s.to_owned()))
    }
}

/// нормализатор с заданной формой
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer
{
    form: NormalizationForm,
}

macro_rules! normalizer_constructors {
    ($($name:ident => $form:ident),+) => {
        $(
            pub fn $name() -> Self
            {
                Self::new(NormalizationForm::$form)
            }
        )+
    };
}

impl Normalizer
{
    pub fn new(form: NormalizationForm) -> Self
    {
        log::debug!("normalizer configured: {}", form);

        Self { form }
    }

    normalizer_constructors!(nfc => Nfc, nfd => Nfd, nfkc => Nfkc, nfkd => Nfkd);

    pub fn form(&self) -> NormalizationForm
    {
        self.form
    }

    /// нормализация буфера кодпоинтов на месте
    pub fn normalize(&self, buffer: &mut Vec<u32>)
    {
        decompose(buffer, self.form.is_compatibility());

        if self.form.is_composing() {
            compose(buffer);
        }
    }

    /// нормализация строки
    pub fn normalize_str(&self, input: &str) -> String
    {
        let mut buffer: Vec<u32> = input.chars().map(u32::from).collect();
        self.normalize(&mut buffer);

        // нормализация скалярных значений даёт только скалярные значения
        buffer.into_iter().filter_map(char::from_u32).collect()
    }

    /// нормализация текста в UTF-8. некорректные последовательности заменяются на '?'
    pub fn normalize_utf8(&self, input: &[u8]) -> Vec<u8>
    {
        let mut buffer = utf8::decode(input);
        self.normalize(&mut buffer);

        utf8::encode(&buffer)
    }

    /// текст уже нормализован в этой форме
    pub fn is_normalized(&self, input: &[u32]) -> bool
    {
        let mut buffer = input.to_vec();
        self.normalize(&mut buffer);

        buffer == input
    }
}

impl Default for Normalizer
{
    fn default() -> Self
    {
        Self::nfc()
    }
}
