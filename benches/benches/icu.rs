use criterion::{criterion_group, criterion_main};
use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use unicode_engine_benches::{group, TEXTS, TEXTS_DECOMPOSED};

group!(
    TEXTS,
    nfc,
    test_nfc,
    "nfc",
    "icu",
    ComposingNormalizer,
    ComposingNormalizer::new_nfc(),
    normalize
);

group!(
    TEXTS,
    nfd,
    test_nfd,
    "nfd",
    "icu",
    DecomposingNormalizer,
    DecomposingNormalizer::new_nfd(),
    normalize
);

group!(
    TEXTS,
    nfkc,
    test_nfkc,
    "nfkc",
    "icu",
    ComposingNormalizer,
    ComposingNormalizer::new_nfkc(),
    normalize
);

group!(
    TEXTS,
    nfkd,
    test_nfkd,
    "nfkd",
    "icu",
    DecomposingNormalizer,
    DecomposingNormalizer::new_nfkd(),
    normalize
);

group!(
    TEXTS_DECOMPOSED,
    dec,
    test_dec,
    "dec",
    "icu",
    ComposingNormalizer,
    ComposingNormalizer::new_nfc(),
    normalize
);

criterion_group!(benches, nfc, nfd, nfkc, nfkd, dec);
criterion_main!(benches);
