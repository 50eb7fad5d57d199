use chrono::NaiveDate;
use serde_json::json;

use phrasal::prelude::*;

#[test]
fn add_appends_in_order() {
    let phrase = np![d("the")];
    phrase.add(a("grey")).add(vec![a("fat"), n("cat")]);
    assert_eq!(phrase.to_string(), r#"NP(D("the"),A("grey"),A("fat"),N("cat"))"#);
    assert_eq!(phrase.len(), 4);
}

#[test]
fn add_returns_the_same_phrase() {
    let phrase = np![n("cat")];
    let returned = phrase.add(d("the"));
    returned.n("p");
    assert_eq!(phrase.to_string(), r#"NP(N("cat"),D("the")).n("p")"#);
}

#[test]
fn nothing_to_add_changes_nothing() {
    let phrase = np![d("the"), n("cat")];
    phrase.add(None::<Terminal>);
    phrase.add(Value::Null);
    phrase.add(Vec::<Node>::new());
    phrase.add_at(vec![None::<Terminal>, None], 0);
    assert_eq!(phrase.to_string(), r#"NP(D("the"),N("cat"))"#);
}

#[test]
fn raw_values_are_quoted() {
    let phrase = s!["x"];
    let child = phrase.child(0).unwrap();
    let quoted = child.as_terminal().unwrap();
    assert_eq!(quoted.category(), TerminalCategory::Q);
    assert_eq!(quoted.lemma(), "x");

    phrase.add(Value::from(json!([1, [2.5, [true]]])));
    assert_eq!(phrase.to_string(), r#"S(Q("x"),Q("1"),Q("2.5"),Q("true"))"#);
}

#[test]
fn nested_sequences_flatten_in_reading_order() {
    let phrase = vp![v("eat"), vec![vec![d("a")], vec![]], vec![n("apple")]];
    assert_eq!(phrase.to_string(), r#"VP(V("eat"),D("a"),N("apple"))"#);
}

#[test]
fn insertion_index_is_clamped() {
    let phrase = np![d("the"), n("cat")];
    phrase.add_at(a("grey"), 17);
    phrase.add_at(vec![q("oh"), q("look")], 0);
    assert_eq!(
        phrase.to_string(),
        r#"NP(Q("oh"),Q("look"),D("the"),N("cat"),A("grey"))"#
    );
}

#[test]
fn shared_nodes_change_everywhere() {
    let cat = n("cat");
    let first = np![d("the"), &cat];
    let second = np![d("a"), &cat];
    cat.n("p");
    assert_eq!(first.to_string(), r#"NP(D("the"),N("cat").n("p"))"#);
    assert_eq!(second.to_string(), r#"NP(D("a"),N("cat").n("p"))"#);
}

#[test]
fn one_node_may_appear_twice_in_a_phrase() {
    let upcoming = q("* à venir");
    let phrase = s![&upcoming, &upcoming];
    upcoming.cap(true);
    assert_eq!(phrase.to_string(), r#"S(Q("* à venir").cap(true),Q("* à venir").cap(true))"#);
}

#[test]
fn deep_copies_are_independent() {
    let cat = n("cat");
    let template = np![d("the"), &cat].tag("em");
    let copy = template.deep_copy();
    assert_eq!(copy, template);

    copy.add(a("grey"));
    cat.n("p");
    assert_eq!(template.to_string(), r#"NP(D("the"),N("cat").n("p")).tag("em")"#);
    assert_eq!(copy.to_string(), r#"NP(D("the"),N("cat"),A("grey")).tag("em")"#);
}

#[test]
fn deep_copy_of_a_cycle_terminates() {
    let phrase = np![n("cat")];
    phrase.add(&phrase);
    let copy = phrase.deep_copy();
    assert_eq!(copy.len(), 2);
    assert!(copy.to_expression_form(-1).is_err());
}

#[test]
fn equality_follows_content() {
    let first = np![d("the"), n("cat")];
    let second = np![d("the"), n("cat")];
    assert_eq!(first, second);

    second.child(1).unwrap().n("p");
    assert_ne!(first, second);

    let french = np![d("the"), n("cat")].set_language("fr");
    assert_ne!(first, french);
    assert_ne!(Node::from(n("cat")), Node::from(np![n("cat")]));
}

#[test]
fn phrases_nested_in_themselves_compare() {
    let first = np![n("cat")];
    first.add(&first);
    let second = np![n("cat")];
    second.add(&second);
    assert_eq!(first, second);

    let dog = np![n("dog")];
    dog.add(&dog);
    assert_ne!(first, dog);
    assert_ne!(first, np![n("cat"), np![n("cat")]]);
}

#[test]
fn dates_are_written_with_slashes() {
    assert_eq!(dt("2023-11-18").lemma(), "2023/11/18");
    let born = NaiveDate::from_ymd_opt(1923, 11, 18).unwrap();
    assert_eq!(dt(born).to_string(), r#"DT("1923/11/18")"#);
    let launch = born.and_hms_opt(9, 34, 0).unwrap();
    assert_eq!(dt(launch).lemma(), "1923/11/18 09:34:00");
    // a mismatch is diagnosed, the string value still used
    assert_eq!(dt(42).lemma(), "42");
}

#[test]
fn numbers_keep_their_string_value() {
    assert_eq!(no(3).lemma(), "3");
    assert_eq!(no(3.5).lemma(), "3.5");
    assert_eq!(no(3.0).lemma(), "3.0");
    assert_eq!(no(3.0).to_string(), r#"NO("3.0")"#);
    assert_eq!(no("1e3").lemma(), "1e3");
    assert_eq!(no(true).lemma(), "true");
}

#[test]
fn any_terminal_accepts_any_lemma() {
    assert_eq!(n(true).to_string(), r#"N("true")"#);
    assert_eq!(v(Value::Null).to_string(), r#"V("null")"#);
}

#[test]
fn categories_read_from_their_tags() {
    for category in TerminalCategory::ALL {
        assert_eq!(category.as_str().parse::<TerminalCategory>().unwrap(), *category);
    }
    for category in PhraseCategory::ALL {
        assert_eq!(category.as_str().parse::<PhraseCategory>().unwrap(), *category);
    }
    assert!("NX".parse::<PhraseCategory>().is_err());
    assert!("np".parse::<PhraseCategory>().is_err());
}

#[test]
fn node_accessors() {
    let node = Node::from(np![n("cat")]);
    assert!(!node.is_terminal());
    assert_eq!(node.category_tag(), "NP");
    assert!(node.as_terminal().is_none());
    let child = node.as_phrase().unwrap().child(0).unwrap();
    assert!(child.is_terminal());
    assert_eq!(child.category_tag(), "N");
    assert!(node.as_phrase().unwrap().child(1).is_none());
}
