use bizbattle::{Battle, BattleError, Metric, Side, TieBreak};

fn battle() -> Battle {
    Battle::builder().build().expect("default battle builds")
}

#[test]
fn typing_selecting_and_comparing() {
    let b = battle();
    let mut s = b.session();

    s.focus(Side::A);
    s.edit(Side::A, "A");
    assert_eq!(s.visible_suggestions(Side::A), ["Apple", "Amazon"]);

    s.select_suggestion(Side::A, "Amazon").unwrap();
    assert_eq!(s.text(Side::A), "Amazon");
    assert_eq!(s.focused(), Some(Side::B));
    assert!(s.visible_suggestions(Side::A).is_empty());

    s.edit(Side::B, "g");
    assert_eq!(s.visible_suggestions(Side::B), ["Google"]);
    s.select_index(Side::B, 0).unwrap();

    let r = s.compare().unwrap();
    assert_eq!((r.company_a.as_str(), r.company_b.as_str()), ("Amazon", "Google"));
    assert_eq!(r.winner(Metric::Revenue), Some("Amazon"));
    assert_eq!(r.winner(Metric::Employees), Some("Google"));
}

#[test]
fn refocusing_reopens_a_closed_list() {
    let b = battle();
    let mut s = b.session();
    s.edit(Side::A, "me");
    s.select_suggestion(Side::A, "Meta").unwrap();
    assert!(s.visible_suggestions(Side::A).is_empty());

    s.focus(Side::A);
    assert_eq!(s.visible_suggestions(Side::A), ["Meta"]);
}

#[test]
fn free_typed_names_compare_without_selection() {
    let b = battle();
    let mut s = b.session();
    s.edit(Side::A, " apple ");
    s.edit(Side::B, "GOOGLE");
    let r = s.compare().unwrap();
    assert_eq!(r.company_a, "Apple");
    assert_eq!(r.company_b, "Google");
}

#[test]
fn validation_message_names_every_company() {
    let b = battle();
    let mut s = b.session();
    s.edit(Side::A, "nope");
    s.edit(Side::B, "Apple");
    let err = s.compare().unwrap_err();
    assert!(matches!(err, BattleError::Unresolved { .. }));
    assert_eq!(
        s.alert(),
        Some("Please enter valid company names (Apple, Microsoft, Google, Amazon, or Meta)")
    );
    assert!(s.result().is_none());
}

#[test]
fn each_compare_replaces_the_result() {
    let b = Battle::builder().tie_break(TieBreak::PreferA).build().unwrap();
    let mut s = b.session();
    s.edit(Side::A, "Apple");
    s.edit(Side::B, "Microsoft");
    s.compare().unwrap();

    s.edit(Side::B, "Apple");
    s.compare().unwrap();
    let r = s.result().unwrap();
    assert_eq!(r.company_b, "Apple");
    assert_eq!(r.wins(Side::A), 5);
}

#[test]
fn result_serializes_chart_rows_as_keyed_objects() {
    let b = battle();
    let r = b.compare("apple", "microsoft").unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["companyA"], "Apple");
    assert_eq!(v["chart"][2]["name"], "Employees (K)");
    assert_eq!(v["chart"][2]["Apple"], 164.0);
    assert_eq!(v["chart"][2]["Microsoft"], 221.0);
    assert_eq!(v["metricsB"]["employees"], 221_000);
}

mod props {
    use super::battle;
    use bizbattle::Side;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn edit_mirrors_suggester(text in "[ a-zA-Z]{0,8}") {
            let b = battle();
            let mut s = b.session();
            s.edit(Side::B, text.clone());
            prop_assert_eq!(s.visible_suggestions(Side::B).to_vec(), b.suggest(&text));
            prop_assert!(s.visible_suggestions(Side::A).is_empty());
        }
    }
}
