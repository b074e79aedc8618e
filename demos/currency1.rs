//!
//! Replays keystrokes on a currency input and prints
//! the text after each one. The cursor is shown as `|`.
//!
//! Keys: digits and `.` are typed, `<` is backspace,
//! `>` is delete, `{` and `}` move the cursor and `!`
//! ends editing.
//!
//! The locale is the second argument, or the system locale.
//!
//! ```sh
//! cargo run --example currency1 -- "1234.5<<67!" de_DE
//! ```
//!

use anyhow::anyhow;
use rat_currency::{CurrencyInput, Locale};
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let keys = env::args().nth(1).unwrap_or_else(|| "1234<5}}}9!".into());
    let locale = match env::args().nth(2) {
        Some(v) => v,
        None => sys_locale::get_locale().unwrap_or("POSIX".to_string()),
    };
    let locale = locale.replace('-', "_");
    let locale =
        Locale::try_from(locale.as_str()).map_err(|_| anyhow!("unknown locale {}", locale))?;

    let mut input = CurrencyInput::new().with_locale(locale);
    input.begin_editing();

    for c in keys.chars() {
        match c {
            '<' => _ = input.delete_prev_char(),
            '>' => _ = input.delete_next_char(),
            '{' => input.set_cursor(input.cursor().saturating_sub(1))?,
            '}' => input.set_cursor((input.cursor() + 1).min(input.len()))?,
            '!' => _ = input.end_editing(),
            c => _ = input.insert_char(c),
        }
        println!("{:>3}  {}", c, show_cursor(&input));
    }

    match input.value_opt::<f64>() {
        Ok(Some(v)) => println!("value {}", v),
        Ok(None) => println!("no value"),
        Err(e) => println!("invalid {}", e),
    }

    Ok(())
}

fn show_cursor(input: &CurrencyInput) -> String {
    let mut s = String::new();
    for (i, c) in input.text().chars().enumerate() {
        if i as u32 == input.cursor() {
            s.push('|');
        }
        s.push(c);
    }
    if input.cursor() as usize >= input.text().chars().count() {
        s.push('|');
    }
    s
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("log.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
