// tests/common/mod.rs
//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use stoplang::{InMemoryWordLists, Language, StopWordConfig, StopWordRegistry};

/// Short paragraphs with the language they are written in.
pub const SAMPLES: &[(Language, &str)] = &[
    (
        Language::English,
        "It was the best of times, it was the worst of times. The people of the town \
         went to the market and they bought bread for their families.",
    ),
    (
        Language::French,
        "Il était une fois une petite fille qui vivait avec sa mère dans une maison \
         au bord de la forêt. Elle aimait les fleurs et les oiseaux.",
    ),
    (
        Language::German,
        "Es war einmal ein König, der hatte eine schöne Tochter. Sie wohnte mit ihm \
         in einem großen Schloss und war sehr glücklich.",
    ),
    (
        Language::Spanish,
        "En un lugar de la Mancha, de cuyo nombre no quiero acordarme, no ha mucho \
         tiempo que vivía un hidalgo de los de lanza en astillero.",
    ),
    (
        Language::Italian,
        "Nel mezzo del cammin di nostra vita mi ritrovai per una selva oscura, \
         che la diritta via era smarrita.",
    ),
    (
        Language::Russian,
        "Все счастливые семьи похожи друг на друга, каждая несчастливая семья \
         несчастлива по-своему. Все смешалось в доме, и он не знал, что делать.",
    ),
];

/// Registry over two hand-written lists with identical overlap potential.
pub fn twin_registry(first: Language, second: Language, words: &str) -> StopWordRegistry {
    let source = InMemoryWordLists::new()
        .with(first.resource_name(), words)
        .with(second.resource_name(), words);
    let config = StopWordConfig::default().with_languages([first, second]);
    StopWordRegistry::with_config(source, config).expect("valid config")
}
