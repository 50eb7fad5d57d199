use serde_json::json;

use phrasal::PhrasalError;
use phrasal::datatype::Value;
use phrasal::options::{OptionName, OptionValue};
use phrasal::prelude::*;

#[test]
fn options_set_by_name() {
    let eat = v("eat").option("t", "ps").unwrap().option("b", "*").unwrap();
    assert_eq!(eat.to_string(), r#"V("eat").t("ps").b("*")"#);
    let cat = n("cat")
        .option("dOpt", json!({"nat": true}))
        .unwrap()
        .option("tag", json!(["a", {"href": "x"}]))
        .unwrap()
        .option("tag", "em")
        .unwrap();
    assert_eq!(cat.to_string(), r#"N("cat").dOpt({"nat":true}).tag("a",{"href":"x"}).tag("em")"#);
}

#[test]
fn unknown_option_names_are_rejected() {
    let cat = n("cat").n("p");
    match cat.option("colour", "grey") {
        Err(PhrasalError::UnknownOption(name)) => assert_eq!(name, "colour"),
        other => panic!("unexpected {:?}", other),
    }
    // case matters
    assert!(cat.option("dopt", true).is_err());
    assert_eq!(cat.to_string(), r#"N("cat").n("p")"#);
}

#[test]
fn badly_shaped_values_are_rejected() {
    let cat = n("cat");
    assert!(matches!(cat.option("typ", "neg"), Err(PhrasalError::OptionShape { .. })));
    assert!(matches!(cat.option("tag", 3), Err(PhrasalError::OptionShape { .. })));
    assert!(cat.options().is_empty());
}

#[test]
fn typ_merges_sub_keys() {
    let sentence = s![n("cat")]
        .typ(json!({"neg": true, "int": "yon"}))
        .typ(json!({"pas": true, "neg": false}));
    let typ = sentence.options().get(OptionName::Typ).cloned();
    match typ {
        Some(OptionValue::Typ(typ)) => {
            let keys: Vec<&str> = typ.keys().map(String::as_str).collect();
            assert_eq!(keys, ["neg", "int", "pas"]);
            assert_eq!(typ["neg"], Value::Bool(false));
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        sentence.to_string(),
        r#"S(N("cat")).typ({"neg":false,"int":"yon","pas":true})"#
    );
}

#[test]
fn typ_needs_a_mapping() {
    let sentence = s![n("cat")].typ("neg");
    assert!(sentence.options().is_empty());
}

#[test]
fn scalar_keeps_its_first_position() {
    let eat = v("eat").t("ps").n("p").t("pc");
    let names: Vec<OptionName> = eat.options().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, [OptionName::T, OptionName::N]);
    assert_eq!(
        eat.options().get(OptionName::T),
        Some(&OptionValue::Scalar(Value::from("pc")))
    );
}

#[test]
fn list_collects_every_write() {
    let cat = n("cat").ba("*").ba("/");
    assert_eq!(
        cat.options().get(OptionName::Ba),
        Some(&OptionValue::List(vec![Value::from("*"), Value::from("/")]))
    );
}

#[test]
fn tag_attributes_must_be_a_mapping() {
    let cat = n("cat").tag_with("a", "http://x").tag_with("b", Value::Null);
    assert_eq!(cat.to_string(), r#"N("cat").tag("a").tag("b")"#);
}

#[test]
fn options_are_a_snapshot() {
    let cat = n("cat");
    let before = cat.options();
    cat.n("p");
    assert!(before.is_empty());
    assert_eq!(cat.options().len(), 1);
}

#[test]
fn option_names_spell_like_the_engine() {
    for name in OptionName::ALL {
        assert_eq!(name.as_str().parse::<OptionName>().unwrap(), *name);
    }
    assert_eq!(OptionName::DOpt.to_string(), "dOpt");
}

#[test]
fn language_is_kept_per_node() {
    let cat = n("chat");
    let phrase = np![d("le"), &cat].set_language("fr");
    assert_eq!(phrase.language().as_deref(), Some("fr"));
    assert_eq!(cat.language(), None);
    // not a two letter tag: stored anyway
    cat.set_language("fra");
    assert_eq!(cat.language().as_deref(), Some("fra"));
}

#[test]
fn node_handles_chain_setters() {
    let node = Node::from(n("cat")).n("p").set_language("en");
    assert_eq!(node.to_structured_form(-1), r#"{"terminal":"N","lemma":"cat","lang":"en","props":{"n":"p"}}"#);
}
