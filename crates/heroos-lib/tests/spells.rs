use heroos_lib::{Error, SpellRegistry};

#[test]
fn fire_lookup_matches_table() {
    let spell = SpellRegistry::standard().lookup("fire").expect("fire exists");
    assert_eq!(spell.name, "豪火球之術");
    assert_eq!(spell.damage, 500);
    assert_eq!(spell.element, "火系");
}

#[test]
fn ice_lookup_matches_table() {
    let spell = SpellRegistry::standard().lookup("ice").unwrap();
    assert_eq!(spell.damage, 450);
    assert_eq!(spell.name, "絕對零度");
}

#[test]
fn thunder_is_strongest() {
    let registry = SpellRegistry::standard();
    let strongest = registry
        .codes()
        .map(|code| registry.lookup(code).unwrap())
        .max_by_key(|spell| spell.damage)
        .unwrap();
    assert_eq!(strongest.code, "thunder");
}

#[test]
fn unknown_code_is_not_found() {
    let err = SpellRegistry::standard().lookup("unknown").unwrap_err();
    assert!(matches!(err, Error::UnknownSpell { ref code, .. } if code == "unknown"));
}

#[test]
fn records_serialize_to_json() {
    let spell = SpellRegistry::standard().lookup("heal").unwrap();
    let json = serde_json::to_value(spell).unwrap();
    assert_eq!(json["damage"], -200);
    assert_eq!(json["element"], "治癒");
}
