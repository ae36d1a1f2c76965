//! Тесты кодека карт (JSON-атрибут `cards`).

use deck_engine::domain::{Card, GameType};
use deck_engine::infra::{CardCodec, CodecError, JsonCardCodec};

fn two_cards() -> Vec<Card> {
    vec![
        Card::new("ACE", "CLUBS", "AC", GameType::French),
        Card::new("KING", "DIAMONDS", "KD", GameType::French),
    ]
}

#[test]
fn encode_writes_three_fields_in_order() {
    let codec = JsonCardCodec::new(GameType::French);

    let bytes = codec.encode(&two_cards()).unwrap();
    let json = String::from_utf8(bytes).unwrap();

    assert_eq!(
        json,
        r#"[{"value":"ACE","suit":"CLUBS","code":"AC"},{"value":"KING","suit":"DIAMONDS","code":"KD"}]"#
    );
}

#[test]
fn decode_pretty_json() {
    let codec = JsonCardCodec::new(GameType::French);
    let stored = r#"[
  {
    "value": "ACE",
    "suit": "CLUBS",
    "code": "AC"
  },
  {
    "value": "KING",
    "suit": "DIAMONDS",
    "code": "KD"
  }
]"#;

    let cards = codec.decode(stored.as_bytes()).unwrap();
    assert_eq!(cards, two_cards());
}

#[test]
fn roundtrip_keeps_order() {
    let codec = JsonCardCodec::default();
    let mut cards = two_cards();
    cards.reverse();
    cards.push(Card::new("10", "HEARTS", "10H", GameType::French));

    let decoded = codec.decode(&codec.encode(&cards).unwrap()).unwrap();
    assert_eq!(decoded, cards);
}

#[test]
fn empty_sequence_encodes_to_nothing() {
    let codec = JsonCardCodec::default();

    let bytes = codec.encode(&[]).unwrap();
    assert!(bytes.is_empty());
    assert!(codec.decode(&bytes).unwrap().is_empty());

    // пустой массив тоже допустим
    assert!(codec.decode(b"[]").unwrap().is_empty());
}

#[test]
fn malformed_bytes_fail() {
    let codec = JsonCardCodec::default();

    for raw in [
        &b"not json"[..],
        &b"{\"value\":\"ACE\"}"[..],
        &b"[{\"value\":\"ACE\",\"suit\":\"CLUBS\"}]"[..],
        &b"[{\"value\":1,\"suit\":\"CLUBS\",\"code\":\"AC\"}]"[..],
    ] {
        let err = codec.decode(raw).unwrap_err();
        assert!(
            matches!(err, CodecError::Malformed(_)),
            "expected Malformed for {:?}",
            String::from_utf8_lossy(raw)
        );
    }
}

/// Неизвестные поля (например, старый card_type) игнорируются.
#[test]
fn decode_ignores_extra_fields() {
    let codec = JsonCardCodec::default();
    let stored = br#"[{"value":"ACE","suit":"CLUBS","code":"AC","card_type":"FRENCH"}]"#;

    let cards = codec.decode(stored).unwrap();
    assert_eq!(cards, vec![Card::new("ACE", "CLUBS", "AC", GameType::French)]);
}
