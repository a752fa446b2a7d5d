//! Ctrl-C handling
//!
//! An interrupted command prints one line and exits with status 1 instead of
//! dying by signal.

/// Exit status after Ctrl-C
pub const INTERRUPT_EXIT_CODE: i32 = 1;

/// Line printed to stderr on Ctrl-C
pub const INTERRUPT_MESSAGE: &str = "Interrupted by user";

/// Register the process-wide Ctrl-C handler
///
/// Fails if a handler is already registered.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        eprintln!("\n{}", INTERRUPT_MESSAGE);
        std::process::exit(INTERRUPT_EXIT_CODE);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_is_registered_once() {
        install_interrupt_handler().unwrap();

        let second = ctrlc::set_handler(|| {});
        assert!(matches!(second, Err(ctrlc::Error::MultipleHandlers)));
        assert!(install_interrupt_handler().is_err());
    }
}
