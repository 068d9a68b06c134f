//! общие части бенчмарков: чтение текстов и группа criterion для нормализатора

use std::fs;
use std::path::Path;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// тексты на разных языках
pub const TEXTS: &str = "./../test_data/texts";
/// те же тексты в NFD
pub const TEXTS_DECOMPOSED: &str = "./../test_data/texts_decomposed";

/// группа бенчмарков: один нормализатор на всех текстах папки
#[macro_export]
macro_rules! group {
    ($dir: expr, $fn: ident, $test: ident, $group: expr, $name: expr, $normalizer: ty, $init: expr, $method: ident) => {
        #[inline(never)]
        fn $test(normalizer: &$normalizer, source: &str) -> String
        {
            normalizer.$method(source)
        }

        fn $fn(c: &mut criterion::Criterion)
        {
            let mut group = c.benchmark_group($group);
            let normalizer: $normalizer = $init;

            group.warm_up_time(core::time::Duration::from_secs($crate::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs($crate::MEASUREMENT_TIME));

            for (name, text) in $crate::read_dir($dir) {
                group.throughput(criterion::Throughput::Bytes(text.len() as u64));
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &name),
                    text.as_str(),
                    |b, text| b.iter(|| $test(&normalizer, criterion::black_box(text))),
                );
            }

            group.finish();
        }
    };
}

/// прочитать папку с тестовыми текстами: (название, текст), по алфавиту
pub fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let mut data = vec![];

    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();

        data.push((get_name(&path), read(&path, 4)));
    }

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// прочитать файл и повторить его содержимое n раз
fn read(source: &Path, times: usize) -> String
{
    fs::read_to_string(source).unwrap().repeat(times)
}

/// название файла без расширения
fn get_name(path: &Path) -> String
{
    path.file_stem().unwrap().to_string_lossy().into_owned()
}
