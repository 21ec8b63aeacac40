//! Line-oriented interactive session.

use std::io::{self, BufRead, Write};
use valuescope::data::StatementClient;
use valuescope::{PsxUniverse, Reply, Session};

const PROMPT: &str = "valuescope> ";

/// Read commands from stdin until `quit` or end of input.
///
/// Errors are printed and the prompt returns; only I/O failures on the
/// terminal end the loop early.
pub(crate) async fn run(client: &StatementClient, currency: &str) -> io::Result<()> {
    let universe = PsxUniverse::new();
    let mut session = Session::new(client, &universe, currency);

    println!("Type 'help' for commands.");
    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let Some(line) = read_line().await? else {
            println!();
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match session.execute_line(&line).await {
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Quit) => break,
            Err(e) => println!("Error: {e}"),
        }
    }
    Ok(())
}

/// Read one line from stdin on the blocking pool. `None` at end of input.
async fn read_line() -> io::Result<Option<String>> {
    tokio::task::spawn_blocking(|| next_line(&mut io::stdin().lock()))
        .await
        .map_err(io::Error::other)?
}

fn next_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    Ok((read > 0).then_some(line))
}
