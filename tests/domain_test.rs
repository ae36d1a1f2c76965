//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use deck_engine::domain::*;

fn catalog() -> CardCatalog {
    CardCatalog::standard()
}

/// Лимиты размера колоды для FRENCH.
#[test]
fn french_bounds() {
    let c = catalog();
    assert_eq!(c.min_cards(GameType::French), 1);
    assert_eq!(c.max_cards(GameType::French), 52);
}

/// Обычные коды и десятка (три символа).
#[test]
fn resolve_regular_and_ten_codes() {
    let c = catalog();

    let cases = [
        ("AS", "ACE", "SPADES"),
        ("2C", "2", "CLUBS"),
        ("9D", "9", "DIAMONDS"),
        ("10H", "10", "HEARTS"),
        ("JC", "JACK", "CLUBS"),
        ("QD", "QUEEN", "DIAMONDS"),
        ("KS", "KING", "SPADES"),
    ];

    for (code, value, suit) in cases {
        let (v, s) = c.resolve_code(GameType::French, code);
        assert_eq!(v, value, "value for {code}");
        assert_eq!(s, suit, "suit for {code}");
    }
}

/// Битые коды не отвергаются: нераспознанные части становятся пустыми строками.
#[test]
fn resolve_malformed_codes_yields_blanks() {
    let c = catalog();

    // пустой код
    assert_eq!(c.resolve_code(GameType::French, ""), (String::new(), String::new()));

    // один символ: ранг есть, масти нет
    assert_eq!(
        c.resolve_code(GameType::French, "A"),
        ("ACE".to_string(), String::new())
    );

    // "1S": ранга "1" нет в каталоге
    assert_eq!(
        c.resolve_code(GameType::French, "1S"),
        (String::new(), "SPADES".to_string())
    );

    // "10" без масти: двухсимвольный код читается как ранг "1" + масть "0"
    assert_eq!(c.resolve_code(GameType::French, "10"), (String::new(), String::new()));

    // длинные коды: ранг — первые два символа
    assert_eq!(c.resolve_code(GameType::French, "AST"), (String::new(), String::new()));
    assert_eq!(
        c.resolve_code(GameType::French, "10SX"),
        ("10".to_string(), "SPADES".to_string())
    );

    // строчные буквы не распознаются
    assert_eq!(c.resolve_code(GameType::French, "as"), (String::new(), String::new()));

    // не-ASCII не должен паниковать
    assert_eq!(
        c.resolve_code(GameType::French, "A♠"),
        ("ACE".to_string(), String::new())
    );
}

/// Полный проход каталога: 52 уникальных кода, масти C, D, H, S.
#[test]
fn sweep_is_full_and_ordered() {
    let c = catalog();
    let codes = c.sweep(GameType::French);

    assert_eq!(codes.len(), 52);
    assert_eq!(codes.first().map(String::as_str), Some("AC"));
    assert_eq!(codes[9], "10C");
    assert_eq!(codes[13], "AD");
    assert_eq!(codes.last().map(String::as_str), Some("KS"));

    let set: HashSet<_> = codes.iter().collect();
    assert_eq!(set.len(), 52);

    for code in &codes {
        assert!(c.is_known_code(GameType::French, code));
        assert!(!c.resolve_card(GameType::French, code).is_blank());
    }

    assert!(!c.is_known_code(GameType::French, "1S"));
    assert!(!c.is_known_code(GameType::French, ""));
}

/// is_known_code смотрит в таблицы и совпадает с полным проходом.
#[test]
fn is_known_code_matches_sweep() {
    let c = catalog();
    let sweep: HashSet<String> = c.sweep(GameType::French).into_iter().collect();

    let codes = [
        "AS", "10H", "KD", "2C", "10", "10SX", "AST", "ASX", "as", "A", "S", "1S", "11S",
        "0S", "A♠", "ZZ", "", "QQ", "JS ",
    ];
    for code in codes {
        assert_eq!(
            c.is_known_code(GameType::French, code),
            sweep.contains(code),
            "{code:?}"
        );
    }

    assert!(c.is_known_code(GameType::French, "10H"));
    assert!(!c.is_known_code(GameType::French, "10SX"));
    assert!(!c.is_known_code(GameType::French, "AST"));
}

#[test]
fn sweep_cards_carry_game_type() {
    let cards = catalog().sweep_cards(GameType::French);
    assert_eq!(cards.len(), 52);
    assert!(cards.iter().all(|c| c.game_type() == GameType::French));
    assert_eq!(cards[0], Card::new("ACE", "CLUBS", "AC", GameType::French));
}

#[test]
fn card_display_prints_code() {
    let card = Card::new("10", "HEARTS", "10H", GameType::French);
    assert_eq!(card.to_string(), "10H");
    assert!(!card.is_blank());
    assert!(Card::new("", "SPADES", "1S", GameType::French).is_blank());
}

#[test]
fn game_type_parse_and_display() {
    assert_eq!("FRENCH".parse::<GameType>(), Ok(GameType::French));
    assert_eq!(" french ".parse::<GameType>(), Ok(GameType::French));
    assert!("UNO".parse::<GameType>().is_err());
    assert_eq!(GameType::French.to_string(), "FRENCH");
    assert_eq!(
        serde_json::to_string(&GameType::French).unwrap(),
        "\"FRENCH\""
    );
}

/// game_type не должен попадать в JSON карты.
#[test]
fn card_json_has_no_game_type() {
    let card = Card::new("ACE", "SPADES", "AS", GameType::French);
    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(json, r#"{"value":"ACE","suit":"SPADES","code":"AS"}"#);
}
