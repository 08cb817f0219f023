use bizbattle::Battle;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let battle = Battle::builder().build()?;

    // Simulate typing "amazon" one keystroke at a time.
    let word = "amazon";
    for end in 1..=word.len() {
        let typed = &word[..end];
        println!("{typed:<8} -> {:?}", battle.suggest(typed));
    }

    for input in ["AMAZON", "  meta ", "Alphabet"] {
        match battle.resolve(input) {
            Some(name) => println!("{input:?} resolves to {name}"),
            None => println!("{input:?} does not match any company"),
        }
    }
    Ok(())
}
