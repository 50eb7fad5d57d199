use chrono::NaiveDate;
use serde_json::json;
use tracing::{error, info};

use phrasal::prelude::*;
use phrasal::realizer::{Form, HttpRealizer, realize_tree};
use phrasal::settings::Settings;
use phrasal::{Result, logger};

// Prints a tree in all its forms and, when asked for, how the engine realizes it.
fn show<C: Constituent + std::fmt::Display>(
    tree: &C,
    form: Form,
    settings: &Settings,
    realizer: Option<&HttpRealizer>,
) {
    println!("** expression:\n{}", tree);
    match tree.to_expression_form(settings.indent) {
        Ok(expression) => println!("** indented:\n{}", expression),
        Err(e) => println!("** indented: unavailable ({})", e),
    }
    println!("** structured:\n{}", tree.to_structured_form(settings.indent));
    if let Some(realizer) = realizer {
        match realize_tree(realizer, tree, form, &settings.language) {
            Ok(text) => println!("** realization:\n{}", text),
            Err(e) => println!("@@@:{}", e),
        }
    }
    println!("---");
}

fn run() -> Result<()> {
    let path = std::env::args().nth(1);
    let settings = Settings::load(path.as_deref())?;
    logger::init(&settings.log_level)?;
    let realizer = if settings.realize {
        info!(url = %settings.server_url, "realizing through the engine");
        Some(HttpRealizer::from_settings(&settings)?)
    } else {
        None
    };
    let realizer = realizer.as_ref();

    // the same terminal shared by two parents
    let upcoming = q("* à venir");
    show(&s![&upcoming, &upcoming], Form::Expression, &settings, realizer);

    let the = d("the");
    let cat = n("cat");
    let the3cats = np![&the, no(3).d_opt(json!({"nat": true})), &cat].set_language("en");
    show(&the3cats, Form::Expression, &settings, realizer);

    let sentence = s![&the3cats, vp![v("eat"), np![d("a"), n("mouse")]]]
        .typ(json!({"pas": true, "neg": true}));
    show(&sentence, Form::Expression, &settings, realizer);

    show(&cp(vec![Node::from(c("and")), n("dog").into(), cat.clone().into()]), Form::Expression, &settings, realizer);

    let decorated = np![n("cat")
        .tag_with("a", json!({"href": "http://wikipedia/cat", "class": "important"}))
        .ba("*")
        .ba("/")];
    decorated.add_at(d("a"), 0);
    decorated.add_at(vec![a("grey"), a("black")], 1);
    show(&decorated, Form::Expression, &settings, realizer);

    show(
        &s![
            pro("him").c("nom"),
            vp![v("eat"), np![d("a"), n("apple").n("p")].tag("em")]
        ],
        Form::Expression,
        &settings,
        realizer,
    );

    let born = NaiveDate::from_ymd_opt(1923, 11, 18).map(|date| {
        dt(date).d_opt(json!({"hour": false, "minute": false, "second": false}))
    });
    show(
        &s![
            q("Alan Shepard"),
            vp![
                v("be").t("ps"),
                v("born").t("pp"),
                pp![p("on"), born],
                pp![p("in"), q("New Hampshire")]
            ]
        ],
        Form::Expression,
        &settings,
        realizer,
    );

    // independent copies of one template
    let template = n("cat");
    show(
        &cp![c("or"), template.deep_copy().n("p"), template.deep_copy()],
        Form::Expression,
        &settings,
        realizer,
    );

    // the engine only picks the language up from the structured form
    show(
        &s![
            pro("lui").c("nom"),
            vp![v("donner").t("pc"), np![d("un"), n("pomme")].pro(true)]
        ]
        .typ(json!({"neg": true}))
        .set_language("fr"),
        Form::Structured,
        &settings,
        realizer,
    );

    // raw values are quoted, nested lists flattened
    show(
        &s!["string", Value::from(json!([1, [2, [true]]]))],
        Form::Expression,
        &settings,
        realizer,
    );
    show(&n(true), Form::Expression, &settings, realizer);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!(error = %e, "phrasal failed");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
