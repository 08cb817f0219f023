//! Interactive mode: two prompts with company-name completion, then a comparison.

use bizbattle::render::{TAGLINE, TITLE};
use bizbattle::{Battle, Side};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

/// Line-editor helper backed by the battle's suggester.
pub(crate) struct CompanyHelper<'a> {
    battle: &'a Battle,
}

impl CompanyHelper<'_> {
    /// Byte offset where the typed name starts (after leading whitespace).
    fn name_start(line: &str) -> usize {
        line.len() - line.trim_start().len()
    }
}

impl Completer for CompanyHelper<'_> {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = &line[..pos];
        let candidates = self
            .battle
            .suggest(typed)
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((Self::name_start(typed), candidates))
    }
}

impl Hinter for CompanyHelper<'_> {
    type Hint = String;

    /// Inline remainder of the first suggestion while typing at the end of the line.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.ends_with(char::is_whitespace) {
            return None;
        }
        let typed = line.trim_start();
        let first = self.battle.suggest(typed).into_iter().next()?;
        first
            .get(typed.len()..)
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
    }
}

impl Highlighter for CompanyHelper<'_> {}
impl Validator for CompanyHelper<'_> {}
impl Helper for CompanyHelper<'_> {}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "quit" | "exit" | ":q")
}

fn read_line(
    rl: &mut Editor<CompanyHelper<'_>, DefaultHistory>,
    prompt: &str,
) -> anyhow::Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) if is_quit(&line) => Ok(None),
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn run(battle: &Battle) -> anyhow::Result<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(true)
        .build();
    let mut rl: Editor<CompanyHelper<'_>, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(CompanyHelper { battle }));

    println!("{TITLE}");
    println!("{TAGLINE}");
    println!("Tab completes company names. Type quit to exit.\n");

    let mut session = battle.session();
    loop {
        for (side, prompt) in [(Side::A, "Company A: "), (Side::B, "Company B: ")] {
            session.focus(side);
            let Some(line) = read_line(&mut rl, prompt)? else {
                return Ok(());
            };
            session.edit(side, line);
        }

        match session.compare() {
            Ok(result) => println!("\n{}", battle.render(result)),
            Err(e) if e.is_validation() => {
                tracing::debug!(a = session.text(Side::A), b = session.text(Side::B), "unresolved input");
                eprintln!("{e}\n");
                session.dismiss_alert();
            }
            Err(e) => return Err(e.into()),
        }
    }
}
