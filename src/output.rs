//! Consistent, colored user-facing console messages.
//! Colors are enabled only when the stream is a TTY; the summary line is
//! printed without a prefix so scripts can match on it.

use owo_colors::OwoColorize;

enum Stream {
    Out,
    Err,
}

fn emit(stream: Stream, prefix: &str, colored: String, msg: &str) {
    match stream {
        Stream::Out => {
            if atty::is(atty::Stream::Stdout) {
                println!("{} {}", colored, msg);
            } else {
                println!("{} {}", prefix, msg);
            }
        }
        Stream::Err => {
            if atty::is(atty::Stream::Stderr) {
                eprintln!("{} {}", colored, msg);
            } else {
                eprintln!("{} {}", prefix, msg);
            }
        }
    }
}

pub fn print_info(msg: &str) {
    emit(Stream::Out, "info:", "info:".cyan().bold().to_string(), msg);
}

pub fn print_warn(msg: &str) {
    emit(Stream::Err, "warn:", "warn:".yellow().bold().to_string(), msg);
}

pub fn print_error(msg: &str) {
    emit(Stream::Err, "error:", "error:".red().bold().to_string(), msg);
}

pub fn print_success(msg: &str) {
    emit(Stream::Out, "ok:", "ok:".green().bold().to_string(), msg);
}

/// Plain line without a prefix, for primary output users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
