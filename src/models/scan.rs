use serde::{Deserialize, Serialize};

/// Text extracted by one OCR request.
///
/// Replaces any previous value on each invocation; guard failures
/// ("no frame", "no ROI") and engine errors surface here as plain text
/// for the output pane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    pub text: String,
}

impl ScanResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_result_serialization() {
        let result = ScanResult::new("INVOICE 2024-118");
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
