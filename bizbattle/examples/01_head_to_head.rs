use bizbattle::{Battle, Metric};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let battle = Battle::builder().chart_width(30).build()?;
    let result = battle.compare("microsoft", "Google")?;

    println!("{}", bizbattle::render::TITLE);
    println!("{}\n", bizbattle::render::TAGLINE);
    println!("{}", battle.render(&result));

    println!(
        "{} takes {} of {} metrics",
        result.company_a,
        result.verdicts.iter().filter(|v| result.company(v.winner) == result.company_a).count(),
        Metric::ALL.len()
    );
    Ok(())
}
