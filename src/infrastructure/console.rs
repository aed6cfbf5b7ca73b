use crate::domain::ports::{NoticeKind, Presenter};

const DEMO_NOTICE: &str =
    "Demo Mode: This is a simulated prediction. Connect to the actual API for real predictions.";

/// Presenter that renders to stdout/stderr.
///
/// Error notices and validation failures go to stderr; prices and other
/// notices go to stdout. Prices are rounded and printed with thousands
/// separators.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn enter_loading_state(&self) {
        println!("Generating price prediction...");
    }

    fn exit_loading_state(&self) {
        tracing::debug!("loading state cleared");
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn show_price(&self, value: f64, simulated: bool) {
        println!("Estimated price: ${}", format_thousands(value.round() as i64));
        if simulated {
            println!("{DEMO_NOTICE}");
        }
    }

    fn notify(&self, message: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Error => eprintln!("error: {message}"),
            NoticeKind::Success | NoticeKind::Info => println!("{message}"),
        }
    }
}

/// Formats an integer with comma separators, e.g. 452000 -> "452,000".
fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 { format!("-{out}") } else { out }
}
