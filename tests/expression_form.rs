use serde_json::json;

use phrasal::PhrasalError;
use phrasal::prelude::*;

fn the_cat() -> Phrase {
    np![d("the"), n("cat")]
}

#[test]
fn noun_phrase_on_one_line() {
    assert_eq!(the_cat().to_expression_form(-1).unwrap(), r#"NP(D("the"),N("cat"))"#);
    assert_eq!(the_cat().to_string(), r#"NP(D("the"),N("cat"))"#);
}

#[test]
fn insertion_shows_up_in_place() {
    let cat = the_cat();
    cat.add_at(a("grey"), 1);
    assert_eq!(cat.to_string(), r#"NP(D("the"),A("grey"),N("cat"))"#);
}

#[test]
fn options_follow_the_call() {
    let cat = n("cat")
        .n("p")
        .tag_with("a", json!({"href": "http://wikipedia/cat", "class": "important"}))
        .ba("*")
        .ba("/");
    assert_eq!(
        cat.to_string(),
        r#"N("cat").n("p").tag("a",{"href":"http://wikipedia/cat","class":"important"}).ba("*").ba("/")"#
    );
}

#[test]
fn scalar_option_keeps_last_value() {
    let eat = v("eat").t("ps").t("pc");
    assert_eq!(eat.to_string(), r#"V("eat").t("pc")"#);
}

#[test]
fn list_option_repeats_clause() {
    let cat = n("cat").b("*").b("/");
    assert_eq!(cat.to_string(), r#"N("cat").b("*").b("/")"#);
}

#[test]
fn phrase_options_follow_children() {
    let sentence = s![pro("him").c("nom"), vp![v("eat"), np![d("a"), n("apple").n("p")].tag("em")]]
        .typ(json!({"neg": true}))
        .typ(json!({"pas": true}));
    assert_eq!(
        sentence.to_string(),
        r#"S(Pro("him").c("nom"),VP(V("eat"),NP(D("a"),N("apple").n("p")).tag("em"))).typ({"neg":true,"pas":true})"#
    );
}

#[test]
fn null_and_structured_values_are_encoded() {
    let them = pro("them").pro(Value::Null).d_opt(json!({"hour": false}));
    assert_eq!(them.to_string(), r#"Pro("them").pro(null).dOpt({"hour":false})"#);
}

#[test]
fn quotes_in_lemmas_are_escaped() {
    assert_eq!(q(r#"say "hi""#).to_string(), r#"Q("say \"hi\"")"#);
}

#[test]
fn language_is_not_part_of_the_expression() {
    let cat = the_cat().set_language("fr");
    assert_eq!(cat.to_string(), r#"NP(D("the"),N("cat"))"#);
}

#[test]
fn children_align_under_the_parenthesis() {
    let sentence = s![the_cat(), vp![v("sit")]];
    let expected = "S(NP(D(\"the\"),\n     N(\"cat\")),\n  VP(V(\"sit\")))";
    assert_eq!(sentence.to_expression_form(0).unwrap(), expected);
    assert_eq!(format!("{:#}", sentence), expected);
}

#[test]
fn indentation_starts_at_the_given_column() {
    let expected = "NP(D(\"the\"),\n       N(\"cat\"))";
    assert_eq!(the_cat().to_expression_form(4).unwrap(), expected);
}

#[test]
fn terminals_ignore_indentation() {
    assert_eq!(n("cat").to_expression_form(8).unwrap(), r#"N("cat")"#);
}

#[test]
fn cyclic_phrase_falls_back_to_structured_form() {
    let cat = np![n("cat")];
    cat.add(&cat);
    match cat.to_expression_form(-1) {
        Err(PhrasalError::Serialization(message)) => assert!(message.contains("NP phrase contains itself")),
        other => panic!("unexpected {:?}", other.map(|_| ())),
    }
    let structured = cat.to_structured_form(-1);
    assert_eq!(
        structured,
        r#"{"phrase":"NP","elements":[{"terminal":"N","lemma":"cat"},null]}"#
    );
    assert_eq!(cat.to_string(), structured);
}

#[test]
fn node_prints_like_its_variant() {
    let node = Node::from(the_cat());
    assert_eq!(node.to_string(), the_cat().to_string());
    assert_eq!(format!("{:?}", node), r#"Phrase(NP(D("the"),N("cat")))"#);
}
