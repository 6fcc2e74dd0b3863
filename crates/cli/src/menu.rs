use std::io::Write;

use anyhow::Result;

use index_lab_engine::{DedupSink, Mode, OutputLayout, SortKey, Strategy, run_strategy};
use index_lab_model::Record;

const MENU: &str = "\
Choose an indexing strategy:
  1. Clustered index by name
  2. Clustered index by id
  3. Clustered index by salary
  4. Non-clustered index by name
  5. Non-clustered index by id
  6. Non-clustered index by salary
  7. Exit";

enum Choice {
    Run(Strategy),
    Exit,
}

fn parse_choice(input: &str) -> Option<Choice> {
    let run = |mode, key| Some(Choice::Run(Strategy { key, mode }));
    match input.trim() {
        "1" => run(Mode::Clustered, SortKey::Name),
        "2" => run(Mode::Clustered, SortKey::Id),
        "3" => run(Mode::Clustered, SortKey::Salary),
        "4" => run(Mode::NonClustered, SortKey::Name),
        "5" => run(Mode::NonClustered, SortKey::Id),
        "6" => run(Mode::NonClustered, SortKey::Salary),
        "7" => Some(Choice::Exit),
        _ => None,
    }
}

/// Interactive strategy loop. Every choice reuses the same loaded dataset and
/// the same sink, so repeating a strategy adds no duplicate bucket lines.
pub fn run_menu(records: &[Record], layout: &OutputLayout, sink: &mut DedupSink) -> Result<()> {
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        println!("{MENU}");
        print!("Choice: ");
        std::io::stdout().flush()?;

        line.clear();
        // Ctrl+D => EOF => exit
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match parse_choice(&line) {
            Some(Choice::Run(strategy)) => {
                run_strategy(strategy, records, layout, sink)?;
                println!("Done: {strategy}. Results under {}\n", layout.root().display());
            }
            Some(Choice::Exit) => break,
            None => eprintln!("Invalid choice, pick 1-7."),
        }
    }
    Ok(())
}
