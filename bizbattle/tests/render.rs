use bizbattle::{Battle, CardsView, ChartView, render};

fn apple_vs_meta() -> (Battle, bizbattle::ComparisonResult) {
    let b = Battle::builder().chart_width(20).build().unwrap();
    let r = b.compare("Apple", "Meta").unwrap();
    (b, r)
}

#[test]
fn cards_show_display_values_and_winner_marks() {
    let (_, r) = apple_vs_meta();
    let text = CardsView(&r).to_string();

    assert!(text.contains("Revenue ($B)"));
    assert!(text.contains("Employees (K)"));
    assert!(text.contains("2,940"));
    assert!(text.contains("86.482"));
    assert!(text.contains("164"));

    // Apple wins revenue, Meta wins headcount.
    let lines: Vec<&str> = text.lines().collect();
    let rev = lines.iter().position(|l| *l == "Revenue ($B)").unwrap();
    assert!(lines[rev + 1].contains('★') && lines[rev + 1].contains("Apple"));
    assert!(!lines[rev + 2].contains('★'));

    let emp = lines.iter().position(|l| *l == "Employees (K)").unwrap();
    assert!(!lines[emp + 1].contains('★'));
    assert!(lines[emp + 2].contains('★') && lines[emp + 2].contains("Meta"));
}

#[test]
fn chart_has_five_categories_and_two_series() {
    let (_, r) = apple_vs_meta();
    let text = ChartView::new(&r, 20).to_string();
    assert!(text.starts_with("Visual Comparison\n"));
    let bar_lines = text.lines().filter(|l| l.contains('│')).count();
    assert_eq!(bar_lines, 10);

    // Apple's market cap is the largest value and gets the full width.
    let full: String = "█".repeat(20);
    assert!(text.contains(&format!("│{full} 2,940")));
}

#[test]
fn full_view_includes_heading_cards_and_chart() {
    let (b, r) = apple_vs_meta();
    let text = b.render(&r).to_string();
    assert!(text.starts_with("Comparison Results\n"));
    assert!(text.contains("Growth (%)"));
    assert!(text.contains("Side-by-side metrics comparison"));
    assert_eq!(render::TITLE, "Big Business Battles");
}

#[test]
fn zero_width_chart_renders_values_without_bars() {
    let (_, r) = apple_vs_meta();
    let text = ChartView::new(&r, 0).to_string();
    assert!(!text.contains('█'));
    assert!(!text.contains('▒'));
    assert!(text.contains("│ 2,940"));
    assert_eq!(text.lines().filter(|l| l.contains('│')).count(), 10);
}

#[test]
fn company_against_itself_stars_both_lines() {
    let b = Battle::builder().build().unwrap();
    let r = b.compare("Meta", "meta").unwrap();
    let text = CardsView(&r).to_string();
    let lines: Vec<&str> = text.lines().collect();
    for metric in bizbattle::Metric::ALL {
        let at = lines.iter().position(|l| *l == metric.label()).unwrap();
        assert!(lines[at + 1].contains('★'), "{metric}");
        assert!(lines[at + 2].contains('★'), "{metric}");
    }
}
