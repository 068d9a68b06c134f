use std::fs;
use std::path::Path;

/// тексты на разных языках
pub const TEXTS: &str = "./../test_data/texts";
/// те же тексты в NFD
pub const TEXTS_DECOMPOSED: &str = "./../test_data/texts_decomposed";

/// прочитать все тексты папки: (название файла без расширения, содержимое), по алфавиту
pub fn files(dir: &str) -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|extension| extension == "txt"))
        .map(|path| (name(&path), fs::read_to_string(&path).unwrap()))
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    assert!(!data.is_empty(), "нет текстов в {}", dir);

    data
}

/// название файла без расширения
fn name(path: &Path) -> String
{
    path.file_stem().unwrap().to_string_lossy().into_owned()
}
