//! Interactive command loop.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use mr_or_ms_controller::FormController;
use mr_or_ms_core::types::Gender;

const HELP: &str = "\
commands:
  predict <name>            look up the saved answer and fetch a prediction
  save <name> male|female   save a gender for a name
  clear                     clear the last shown saved answer
  help                      show this help
  quit                      exit";

/// Run the interactive loop until stdin closes or the user quits.
pub async fn run(controller: FormController) -> anyhow::Result<()> {
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "predict" => controller.submit(rest).await,
            "save" => {
                let (name, selection) = split_save_args(rest);
                controller.save(name, selection).await;
            }
            "clear" => controller.clear().await,
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try 'help')"),
        }
    }

    Ok(())
}

/// Split the arguments of `save` into a name and a gender selection.
///
/// The trailing token is the selection when it names a gender; anything
/// else leaves the selection empty so the validator reports it, matching
/// a form submitted with no selector checked.
fn split_save_args(rest: &str) -> (&str, Option<Gender>) {
    match rest.rsplit_once(char::is_whitespace) {
        Some((name, last)) => match last.parse::<Gender>() {
            Ok(gender) => (name.trim_end(), Some(gender)),
            Err(_) => (rest, None),
        },
        None => match rest.parse::<Gender>() {
            Ok(gender) => ("", Some(gender)),
            Err(_) => (rest, None),
        },
    }
}
