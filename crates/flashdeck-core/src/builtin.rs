//! The bundled default deck, used when neither storage nor the remote source
//! yields one.

use crate::model::{Card, Deck};

const DEFAULT_CARDS: [(&str, &str, i64); 12] = [
    (
        "Mi a JavaScript?",
        "Magas szintű, dinamikus, böngészőben és szerveroldalon futó programozási nyelv.",
        3,
    ),
    (
        "Mi a különbség a var, let és const között?",
        "A var függvény-scope, a let és const blokk-scope; a const értéke nem írható felül.",
        1,
    ),
    (
        "Mi az a scope?",
        "Az a terület, ahol egy változó elérhető — globális, függvény- vagy blokk-scope.",
        2,
    ),
    (
        "Mi az immutabilitás?",
        "Az állapot nem módosítása meglévő objektumon belül.",
        -1,
    ),
    (
        "Mi az eseményhurok (event loop)?",
        "A JS egyetlen szálú módon kezeli a feladatokat és callbackeket.",
        5,
    ),
    (
        "Mi az a Promise?",
        "Egy aszinkron művelet állapotát reprezentáló objektum.",
        3,
    ),
    (
        "Mi a destrukturálás (destructuring)?",
        "Objektum vagy tömb elemeinek egyszerű változókba szedése.",
        5,
    ),
    (
        "Mire jók a template literálok?",
        "Többsoros string és beágyazott kifejezések használata `${}` szintaxissal.",
        1,
    ),
    (
        "Mi a különbség a == és === között?",
        "A == konvertál, a === típus és érték alapján hasonlít.",
        3,
    ),
    (
        "Mi a REST?",
        "Webszolgáltatás-architektúra, JS fetch/API hívásokkal éri el.",
        -2,
    ),
    (
        "Miért hasznos az immutábilis állapotfrissítés?",
        "Kisebb mellékhatás, jobb teljesítmény és egyszerűbb követhetőség.",
        0,
    ),
    (
        "Mi az a NaN és hogyan ellenőrizhető?",
        "Not-a-Number érték, Number.isNaN() segítségével ellenőrizhető.",
        4,
    ),
];

/// Build a fresh copy of the default deck.
pub fn default_deck() -> Deck {
    let cards = DEFAULT_CARDS
        .iter()
        .map(|&(question, answer, points)| Card::new(question, answer, points))
        .collect();
    Deck::from_nonempty(cards)
}
