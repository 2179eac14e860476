//! Ordered request strategies
//!
//! Published sheets intermittently reject some header combinations
//! (typically with 400/403/405), so each URL variant is tried with a
//! ladder of header sets. Strategy 0 is the default; later entries
//! relax or vary the headers.

/// One request configuration: a name for logging and a header set.
#[derive(Debug, Clone, Copy)]
pub struct RequestStrategy {
    pub name: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
}

const STRATEGIES: &[RequestStrategy] = &[
    RequestStrategy {
        name: "standard",
        headers: &[("Accept", "text/csv,text/plain,*/*")],
    },
    RequestStrategy {
        name: "no-cache",
        headers: &[
            ("Accept", "text/csv,text/plain,*/*"),
            ("Cache-Control", "no-cache"),
            ("Pragma", "no-cache"),
        ],
    },
    RequestStrategy {
        name: "minimal",
        headers: &[],
    },
    RequestStrategy {
        name: "csv-only",
        headers: &[("Accept", "text/csv")],
    },
];

/// The fixed strategy ladder, in trial order.
pub fn request_strategies() -> &'static [RequestStrategy] {
    STRATEGIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_comes_first() {
        let strategies = request_strategies();
        assert_eq!(strategies.len(), 4);
        assert_eq!(strategies[0].name, "standard");
        assert!(strategies[0]
            .headers
            .iter()
            .any(|(name, _)| *name == "Accept"));
    }

    #[test]
    fn minimal_strategy_sends_no_headers() {
        let minimal = request_strategies()
            .iter()
            .find(|s| s.name == "minimal")
            .unwrap();
        assert!(minimal.headers.is_empty());
    }
}
