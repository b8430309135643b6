pub fn verdict_line(url: &str, detected: bool) -> String {
    if detected {
        format!("Potential verbose error page detected at: {}", url)
    } else {
        format!("No verbose error page detected at: {}", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_verdicts() {
        assert_eq!(
            verdict_line("http://example.com", true),
            "Potential verbose error page detected at: http://example.com"
        );
        assert_eq!(
            verdict_line("http://example.com", false),
            "No verbose error page detected at: http://example.com"
        );
    }
}
