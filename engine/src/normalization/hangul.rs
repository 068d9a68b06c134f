// слоги хангыль не хранятся в таблицах декомпозиции, они раскладываются и собираются арифметически:
//  - L (ведущие согласные) U+1100 ..= U+1112
//  - V (гласные) U+1161 ..= U+1175
//  - T (завершающие согласные) U+11A8 ..= U+11C2
//  - слоги LV и LVT U+AC00 ..= U+D7A3

/// начало блока слогов хангыль
pub const S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const V_BASE: u32 = 0x1161;
/// кодпоинт перед началом блока завершающих согласных (T = 0 - слог без завершающей согласной)
pub const T_BASE: u32 = 0x11A7;
/// количество ведущих согласных
pub const L_COUNT: u32 = 19;
/// количество гласных
pub const V_COUNT: u32 = 21;
/// количество завершающих согласных + отсутствие завершающей согласной
pub const T_COUNT: u32 = 28;
/// количество слогов с одной ведущей согласной
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
/// количество слогов хангыль в Unicode
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

/// кодпоинт - слог хангыль
#[inline(always)]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(S_BASE) < S_COUNT
}

/// количество кодпоинтов в декомпозиции слога: 2 (LV) или 3 (LVT)
#[inline(always)]
pub fn syllable_len(code: u32) -> usize
{
    match (code - S_BASE) % T_COUNT {
        0 => 2,
        _ => 3,
    }
}

/// разложить слог на чамо и дописать их в результат
#[inline(always)]
pub fn decompose_syllable(code: u32, result: &mut Vec<u32>)
{
    let s = code - S_BASE;
    let l = s / N_COUNT;
    let v = (s % N_COUNT) / T_COUNT;
    let t = s % T_COUNT;

    result.push(L_BASE + l);
    result.push(V_BASE + v);

    if t != 0 {
        result.push(T_BASE + t);
    }
}

/// скомбинировать два кодпоинта по правилам хангыль: L + V -> LV, LV + T -> LVT
#[inline(always)]
pub fn compose(first: u32, second: u32) -> Option<u32>
{
    let l = first.wrapping_sub(L_BASE);

    if l < L_COUNT {
        let v = second.wrapping_sub(V_BASE);

        return match v < V_COUNT {
            true => Some(S_BASE + (l * V_COUNT + v) * T_COUNT),
            false => None,
        };
    }

    let s = first.wrapping_sub(S_BASE);
    let t = second.wrapping_sub(T_BASE);

    // T_BASE сам по себе не является завершающей согласной
    match s < S_COUNT && s % T_COUNT == 0 && t > 0 && t < T_COUNT {
        true => Some(first + t),
        false => None,
    }
}
