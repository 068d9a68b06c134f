use core::ops::Range;

/// двухуровневая таблица свойств кодпоинтов
///
/// кодовое пространство делится на блоки по 256 кодпоинтов (старшие биты кодпоинта - номер блока).
/// индекс хранит для каждого блока номер его содержимого в `blocks`; блоки с одинаковым содержимым
/// (например, полностью неназначенные) хранятся в одном экземпляре.
///
/// `N` - размер записи блока: 256 значений, 257 смещений (для данных переменной длины)
/// или 32 байта битовой маски.
///
/// кодпоинт должен быть меньше [`crate::CHARS`] - вызывающая сторона проверяет это до обращения к таблице
#[derive(Debug, Clone, Copy)]
pub struct BlockTable<'a, T, const N: usize>
{
    /// номер содержимого для каждого из 0x1100 блоков
    pub index: &'a [u8],
    /// уникальные блоки
    pub blocks: &'a [[T; N]],
}

impl<'a, T, const N: usize> BlockTable<'a, T, N>
{
    /// блок, в который попадает кодпоинт
    #[inline(always)]
    pub fn block(&self, code: u32) -> &'a [T; N]
    {
        let blocks = self.blocks;
        &blocks[self.index[(code >> 8) as usize] as usize]
    }

    /// количество уникальных блоков
    pub fn unique_blocks(&self) -> usize
    {
        self.blocks.len()
    }
}

impl<'a, T: Copy> BlockTable<'a, T, 256>
{
    /// значение свойства кодпоинта
    #[inline(always)]
    pub fn get(&self, code: u32) -> T
    {
        self.block(code)[(code & 0xFF) as usize]
    }
}

impl<'a> BlockTable<'a, u32, 257>
{
    /// запись кодпоинта в таблице смещений: от block[i] до block[i + 1].
    /// значения могут содержать флаги в младших битах, их разбирает вызывающая сторона
    #[inline(always)]
    pub fn range(&self, code: u32) -> Range<usize>
    {
        let block = self.block(code);
        let offset = (code & 0xFF) as usize;

        block[offset] as usize .. block[offset + 1] as usize
    }
}

impl<'a> BlockTable<'a, u8, 32>
{
    /// бит кодпоинта в битовой маске
    #[inline(always)]
    pub fn bit(&self, code: u32) -> bool
    {
        let byte = self.block(code)[((code >> 3) & 0x1F) as usize];
        byte & (1 << (code & 7)) != 0
    }
}
