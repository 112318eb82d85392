//! Error handling foundation for the Magmist crates.
//!
//! Only the `Result` alias lives here. Each crate defines its own error
//! enums in an `error` module and wraps them in a rootcause `Report` as they
//! propagate.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_alias_carries_values() {
        let ok: Result<&str> = Ok("magmist");
        assert_eq!(ok.expect("should be ok"), "magmist");
    }
}
