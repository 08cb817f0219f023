use bizbattle::{Battle, Side};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=bizbattle=trace cargo run --example 00_tracing --features tracing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let battle = Battle::builder().build()?;
    let mut session = battle.session();

    session.edit(Side::A, "app");
    session.select_index(Side::A, 0)?;
    session.edit(Side::B, "nvidia");
    // Rejected: logged at debug level, alert set on the session.
    let _ = session.compare();

    session.edit(Side::B, "google");
    let _ = session.compare()?;

    Ok(())
}
