//! The `explain` command: describe an error code.

use hyper_diagnostic::ErrorCode;
use hyperc::ExitStatus;

pub fn explain_error(code_str: &str) -> i32 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E6002");
        return ExitStatus::Usage.code();
    };

    println!("{code} ({:?} phase)", code.phase());
    println!();
    println!("{}", code.description());
    ExitStatus::Success.code()
}
