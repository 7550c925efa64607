use std::{
    io::{
        self,
        BufRead,
        Write,
    },
    path::Path,
    process,
};

use tagcloud::{
    core::pipeline,
    frequency::{
        parse_word_count,
        select_top,
        sort_for_display,
    },
    segmentation::SeparatorSet,
    settings::Settings,
    TagCloudError,
};

fn prompt(stdin: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run() -> Result<(), TagCloudError> {
    let mut stdin = io::stdin().lock();

    let input_path = prompt(&mut stdin, "Enter a file to read from: ")?;
    let output_path = prompt(&mut stdin, "Enter a file to be written to: ")?;

    let settings = Settings::load_or_default();
    let separators = SeparatorSet::new(&settings.separators);

    let counts = pipeline::count_file(Path::new(&input_path), &separators)?;
    let available = counts.len();
    println!("Counted {} distinct words in {}", available, input_path);

    // Out-of-range answers (negative included) re-prompt; a non-numeric
    // answer is fatal.
    let requested = loop {
        let raw = prompt(&mut stdin, "Enter a valid number of words for the tag cloud: ")?;
        match usize::try_from(parse_word_count(&raw)?) {
            Ok(n) if n <= available => break n,
            _ => println!("Input outside range."),
        }
    };

    let mut selection = select_top(&counts, requested)?;
    sort_for_display(&mut selection);

    pipeline::render_to_file(Path::new(&output_path), &input_path, &selection, &settings)?;
    println!("Tag cloud written to {}", output_path);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
