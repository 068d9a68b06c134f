/// ошибка строгой проверки закодированного текста
///
/// декодирование никогда не завершается ошибкой (некорректные последовательности заменяются на '?'),
/// этот тип возвращает только `validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError
{
    /// некорректная последовательность UTF-8: лишний байт продолжения, неполная последовательность
    /// или недопустимый первый байт
    #[error("invalid UTF-8 sequence at byte {offset}")]
    InvalidUtf8
    {
        offset: usize,
    },
    /// суррогат UTF-16 без пары
    #[error("unpaired UTF-16 surrogate at unit {offset}")]
    UnpairedSurrogate
    {
        offset: usize,
    },
    /// значение UTF-32 не является скалярным значением Unicode
    #[error("invalid scalar value {code:#X} at unit {offset}")]
    InvalidScalar
    {
        offset: usize,
        code: u32,
    },
}

impl EncodingError
{
    /// смещение первой некорректной единицы кодирования
    pub fn offset(&self) -> usize
    {
        match *self {
            EncodingError::InvalidUtf8 { offset }
            | EncodingError::UnpairedSurrogate { offset }
            | EncodingError::InvalidScalar { offset, .. } => offset,
        }
    }
}
