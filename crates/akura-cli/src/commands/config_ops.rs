use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", akura_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        akura_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: repeat.initial_delay_ms={}, repeat.interval_ms={}, session.max_buffer_len={}",
        s.repeat.initial_delay_ms, s.repeat.interval_ms, s.session.max_buffer_len
    );
}
