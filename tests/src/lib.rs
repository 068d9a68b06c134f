//! сравнение нормализации с ICU4X на всех кодпоинтах и на текстах из test_data

#[cfg(test)]
mod data;
#[cfg(test)]
mod icu;
