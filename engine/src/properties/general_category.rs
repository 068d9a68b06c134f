#![allow(non_upper_case_globals)]

use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;

use crate::data::GENERAL_CATEGORY;
use crate::CHARS;

bitflags! {
    /// основная категория кодпоинта (General Category)
    ///
    /// у каждого кодпоинта установлен ровно один бит из листовых категорий,
    /// составные значения (L, M, N ...) используются для проверки принадлежности к группе:
    /// `category(code).intersects(Category::L)`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Category: u32
    {
        /// прописная буква
        const Lu = 1 << 1;
        /// строчная буква
        const Ll = 1 << 2;
        /// заглавная буква (диграфы)
        const Lt = 1 << 3;
        /// модификатор
        const Lm = 1 << 4;
        /// прочие буквы
        const Lo = 1 << 5;
        /// непробельный знак
        const Mn = 1 << 6;
        /// пробельный комбинирующий знак
        const Mc = 1 << 7;
        /// охватывающий знак
        const Me = 1 << 8;
        /// десятичная цифра
        const Nd = 1 << 9;
        /// буквенное число
        const Nl = 1 << 10;
        /// прочие числа
        const No = 1 << 11;
        const Pc = 1 << 12;
        const Pd = 1 << 13;
        const Ps = 1 << 14;
        const Pe = 1 << 15;
        const Pi = 1 << 16;
        const Pf = 1 << 17;
        const Po = 1 << 18;
        const Sm = 1 << 19;
        const Sc = 1 << 20;
        const Sk = 1 << 21;
        const So = 1 << 22;
        const Zs = 1 << 23;
        const Zl = 1 << 24;
        const Zp = 1 << 25;
        /// управляющий символ
        const Cc = 1 << 26;
        /// символ форматирования
        const Cf = 1 << 27;
        /// суррогат
        const Cs = 1 << 28;
        /// частное использование
        const Co = 1 << 29;
        /// не назначен
        const Cn = 1 << 30;

        /// буквы, имеющие регистр
        const LC = Self::Lu.bits() | Self::Ll.bits() | Self::Lt.bits();
        /// прописные и заглавные
        const Lut = Self::Lu.bits() | Self::Lt.bits();
        const L = Self::LC.bits() | Self::Lm.bits() | Self::Lo.bits();
        const M = Self::Mn.bits() | Self::Mc.bits() | Self::Me.bits();
        const N = Self::Nd.bits() | Self::Nl.bits() | Self::No.bits();
        const P = Self::Pc.bits()
            | Self::Pd.bits()
            | Self::Ps.bits()
            | Self::Pe.bits()
            | Self::Pi.bits()
            | Self::Pf.bits()
            | Self::Po.bits();
        const S = Self::Sm.bits() | Self::Sc.bits() | Self::Sk.bits() | Self::So.bits();
        const Z = Self::Zs.bits() | Self::Zl.bits() | Self::Zp.bits();
        const C = Self::Cc.bits()
            | Self::Cf.bits()
            | Self::Cs.bits()
            | Self::Co.bits()
            | Self::Cn.bits();
    }
}

/// сокращённые имена категорий из UCD, позиция в массиве - номер бита
const NAMES: [&str; 31] = [
    "", "Lu", "Ll", "Lt", "Lm", "Lo", "Mn", "Mc", "Me", "Nd", "Nl", "No", "Pc", "Pd", "Ps", "Pe",
    "Pi", "Pf", "Po", "Sm", "Sc", "Sk", "So", "Zs", "Zl", "Zp", "Cc", "Cf", "Cs", "Co", "Cn",
];

/// основная категория кодпоинта. кодпоинты за пределами Unicode - Cn
#[inline(always)]
pub fn category(code: u32) -> Category
{
    match code < CHARS {
        true => Category::from_bits_retain(1 << GENERAL_CATEGORY.get(code)),
        false => Category::Cn,
    }
}

impl Category
{
    /// двухбуквенное имя категории (Lu, Mn ...), только для листовых категорий
    pub fn abbreviation(&self) -> Option<&'static str>
    {
        let bits = self.bits();

        if bits.count_ones() != 1 {
            return None;
        }

        NAMES.get(bits.trailing_zeros() as usize).copied().filter(|name| !name.is_empty())
    }

    /// кодпоинт этой категории является буквой
    #[inline(always)]
    pub fn is_letter(&self) -> bool
    {
        self.intersects(Self::L)
    }

    /// комбинирующий знак
    #[inline(always)]
    pub fn is_mark(&self) -> bool
    {
        self.intersects(Self::M)
    }
}

impl fmt::Display for Category
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.abbreviation() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:?}", self),
        }
    }
}

/// строка не является именем категории
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown general category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category
{
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match NAMES.iter().skip(1).position(|&name| name == s) {
            Some(position) => Ok(Category::from_bits_retain(1 << (position + 1))),
            None => Err(ParseCategoryError(s.to_owned())),
        }
    }
}
