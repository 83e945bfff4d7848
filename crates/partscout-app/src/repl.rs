//! Line-oriented interactive session.
//!
//! Reads one query per line, runs it through the assistant and prints the
//! new transcript entry. Lines starting with `/` are commands.

use std::io::Write;

use partscout_chat::{CatalogAssistant, ResponseRenderer};
use partscout_llm::TextCompletion;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const HELP: &str = "\
Comandos:
  /history   mostrar toda la conversación
  /reset     borrar la conversación
  /help      mostrar esta ayuda
  /quit      salir
";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Query(String),
    History,
    Reset,
    Help,
    Quit,
    Blank,
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Blank;
    }
    // Anything that is not exactly a command is a product query, slashes
    // included ("/4 pulgada").
    match trimmed.to_ascii_lowercase().as_str() {
        "/history" => Command::History,
        "/reset" => Command::Reset,
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        _ => Command::Query(trimmed.to_string()),
    }
}

/// Run a single query and print its entry.
pub async fn run_once<C, W>(
    assistant: &mut CatalogAssistant<C>,
    renderer: &ResponseRenderer,
    query: &str,
    out: &mut W,
) -> std::io::Result<()>
where
    C: TextCompletion,
    W: Write,
{
    match assistant.submit(query).await {
        Ok(entry) => write!(out, "{}", renderer.render_entry(entry))?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    out.flush()
}

/// Interactive loop until `/quit` or end of input.
pub async fn run<C, R, W>(
    assistant: &mut CatalogAssistant<C>,
    renderer: &ResponseRenderer,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    C: TextCompletion,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", renderer.banner())?;
    prompt(out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Blank => {}
            Command::Query(query) => {
                run_once(assistant, renderer, &query, out).await?;
            }
            Command::History => {
                let transcript = renderer.render_transcript(assistant.session());
                if !transcript.is_empty() {
                    writeln!(out, "{}", transcript)?;
                }
            }
            Command::Reset => {
                assistant.reset_session();
                writeln!(out, "Conversación reiniciada.")?;
            }
            Command::Help => write!(out, "{}", HELP)?,
            Command::Quit => break,
        }
        prompt(out)?;
    }

    debug!(turns = assistant.session().len(), "Interactive session ended");
    writeln!(out)?;
    out.flush()
}

fn prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "\n? ")?;
    out.flush()
}
