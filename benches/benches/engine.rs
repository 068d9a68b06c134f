use criterion::{criterion_group, criterion_main};
use unicode_engine::Normalizer;
use unicode_engine_benches::{group, TEXTS, TEXTS_DECOMPOSED};

group!(TEXTS, nfc, test_nfc, "nfc", "engine", Normalizer, Normalizer::nfc(), normalize_str);
group!(TEXTS, nfd, test_nfd, "nfd", "engine", Normalizer, Normalizer::nfd(), normalize_str);
group!(TEXTS, nfkc, test_nfkc, "nfkc", "engine", Normalizer, Normalizer::nfkc(), normalize_str);
group!(TEXTS, nfkd, test_nfkd, "nfkd", "engine", Normalizer, Normalizer::nfkd(), normalize_str);
group!(
    TEXTS_DECOMPOSED,
    dec,
    test_dec,
    "dec",
    "engine",
    Normalizer,
    Normalizer::nfc(),
    normalize_str
);

criterion_group!(benches, nfc, nfd, nfkc, nfkd, dec);
criterion_main!(benches);
