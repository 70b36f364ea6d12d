//! User facing status lines on stdout

pub const TAG: &str = "imag.in.e";

#[derive(Debug, Clone, Copy)]
pub enum Mode {
    Complement,
}

impl Mode {
    fn context(self) -> &'static str {
        match self {
            Mode::Complement => "Converting to complement",
        }
    }
}

pub fn log_message(msg: &str) {
    println!("[{TAG}] {msg}");
}

pub fn log_error(err: &anyhow::Error, mode: Mode) {
    println!("{}", error_line(err, mode));
    println!("{err:?}");
}

fn error_line(err: &anyhow::Error, mode: Mode) -> String {
    format!("[{TAG} - {}] {err}", mode.context())
}
