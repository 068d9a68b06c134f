use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use unicode_engine::utf::utf16;
use unicode_engine::{is_scalar_value, NormalizationForm, Normalizer, CHARS};

use crate::data::{files, TEXTS, TEXTS_DECOMPOSED};

fn init()
{
    let _ = env_logger::builder().is_test(true).try_init();
}

/// нормализатор ICU для заданной формы
enum Icu
{
    Composing(ComposingNormalizer),
    Decomposing(DecomposingNormalizer),
}

impl Icu
{
    fn new(form: NormalizationForm) -> Self
    {
        match form {
            NormalizationForm::Nfc => Icu::Composing(ComposingNormalizer::new_nfc()),
            NormalizationForm::Nfkc => Icu::Composing(ComposingNormalizer::new_nfkc()),
            NormalizationForm::Nfd => Icu::Decomposing(DecomposingNormalizer::new_nfd()),
            NormalizationForm::Nfkd => Icu::Decomposing(DecomposingNormalizer::new_nfkd()),
        }
    }

    fn normalize(&self, text: &str) -> String
    {
        match self {
            Icu::Composing(normalizer) => normalizer.normalize(text),
            Icu::Decomposing(normalizer) => normalizer.normalize(text),
        }
    }

    fn normalize_utf16(&self, text: &[u16]) -> Vec<u16>
    {
        match self {
            Icu::Composing(normalizer) => normalizer.normalize_utf16(text),
            Icu::Decomposing(normalizer) => normalizer.normalize_utf16(text),
        }
    }
}

const FORMS: [NormalizationForm; 4] = [
    NormalizationForm::Nfc,
    NormalizationForm::Nfd,
    NormalizationForm::Nfkc,
    NormalizationForm::Nfkd,
];

/// сравниваем с результатами нормализации ICU на текстах
#[test]
fn texts()
{
    init();

    for form in FORMS {
        let icu = Icu::new(form);
        let normalizer = Normalizer::new(form);

        for dir in [TEXTS, TEXTS_DECOMPOSED] {
            for (name, text) in files(dir) {
                log::debug!("{}: {} - {} ({} bytes)", form, dir, name, text.len());

                assert_eq!(
                    normalizer.normalize_str(&text),
                    icu.normalize(&text),
                    "{}, {} - {}",
                    form,
                    dir,
                    name
                );
            }
        }
    }
}

/// каждое скалярное значение по отдельности
#[test]
fn all_scalar_values()
{
    init();

    for form in FORMS {
        let icu = Icu::new(form);
        let normalizer = Normalizer::new(form);

        for c in (0 .. CHARS).filter_map(char::from_u32) {
            let text = c.to_string();

            assert_eq!(
                normalizer.normalize_str(&text),
                icu.normalize(&text),
                "{}, U+{:04X}",
                form,
                u32::from(c)
            );
        }
    }
}

/// последовательности стартер + знаки, в том числе с исключениями из композиции и хангыль
#[test]
fn combining_sequences()
{
    init();

    let starters = ['a', 'e', 'o', 'u', 'A', 'S', 'ω', 'α', 'и', 'ᄀ', '가', '각', 'क', 'ェ', 'ｴ'];
    let marks = [
        '\u{301}', '\u{308}', '\u{323}', '\u{327}', '\u{345}', '\u{93C}', '\u{1161}', '\u{11A8}',
        '\u{3099}', '\u{FF9E}',
    ];

    for form in FORMS {
        let icu = Icu::new(form);
        let normalizer = Normalizer::new(form);

        for &starter in &starters {
            for &first in &marks {
                for &second in &marks {
                    let text: String = [starter, first, second].iter().collect();

                    assert_eq!(
                        normalizer.normalize_str(&text),
                        icu.normalize(&text),
                        "{}, {:04X?}",
                        form,
                        text.chars().map(u32::from).collect::<Vec<_>>()
                    );
                }
            }
        }
    }
}

/// UTF-16 через собственный кодек против UTF-16 интерфейса ICU
#[test]
fn utf16_texts()
{
    init();

    for form in FORMS {
        let icu = Icu::new(form);
        let normalizer = Normalizer::new(form);

        for (name, text) in files(TEXTS) {
            log::debug!("{}: UTF-16 {}", form, name);

            let units = utf16::encode(&text.chars().map(u32::from).collect::<Vec<_>>());

            let mut buffer = utf16::decode(&units);
            assert!(buffer.iter().all(|&code| is_scalar_value(code)));

            normalizer.normalize(&mut buffer);

            assert_eq!(utf16::encode(&buffer), icu.normalize_utf16(&units), "{} - {}", form, name);
        }
    }
}
