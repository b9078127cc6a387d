#[cfg(test)]
mod tests {
    use abi_codec_macros::test_traced;
    use tracing::{debug, error, info, trace};

    #[test_traced(level = "INFO")]
    fn test_info_level() {
        info!("This is an info log");
        debug!("This is a debug log (won't be shown)");
        assert_eq!(2 + 2, 4);
    }

    #[test_traced]
    fn test_default_level() {
        debug!("This is a debug log");
        trace!("This is a trace log (won't be shown)");
        assert_eq!(3 * 3, 9);
    }

    #[test_traced(level = "error")]
    fn test_lowercase_level() {
        error!("This is an error log");
        assert_eq!(5 * 2, 10);
    }

    #[test_traced(level = "TRACE")]
    fn test_trace_level() {
        trace!("This is a trace log");
        assert_eq!(7 + 7, 14);
    }

    #[test_traced]
    #[should_panic(expected = "boom")]
    fn test_should_panic() {
        info!("about to panic");
        panic!("boom");
    }

    #[test_traced]
    fn test_returns_result() -> Result<(), String> {
        let value: u8 = "7".parse().map_err(|_| "parse".to_string())?;
        assert_eq!(value, 7);
        Ok(())
    }
}
