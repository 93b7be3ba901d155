//! Tests for valuation domain models.

#[cfg(test)]
mod tests {
    use crate::valuation::{normalize_label, Condition, Valuation, ValuationRequest};

    // ==================== Condition Parsing Tests ====================

    #[test]
    fn test_condition_parse_recognized_tags() {
        assert_eq!(Condition::parse("Excellent"), Condition::Excellent);
        assert_eq!(Condition::parse("Good"), Condition::Good);
        assert_eq!(Condition::parse("Fair"), Condition::Fair);
    }

    #[test]
    fn test_condition_parse_is_case_insensitive() {
        assert_eq!(Condition::parse("excellent"), Condition::Excellent);
        assert_eq!(Condition::parse("EXCELLENT"), Condition::Excellent);
        assert_eq!(Condition::parse("gOOd"), Condition::Good);
        assert_eq!(Condition::parse("fair"), Condition::Fair);
    }

    #[test]
    fn test_condition_parse_unrecognized_falls_back_to_other() {
        assert_eq!(Condition::parse("Mint"), Condition::Other);
        assert_eq!(Condition::parse("Poor"), Condition::Other);
        assert_eq!(Condition::parse(""), Condition::Other);
        assert_eq!(Condition::parse("Very Good"), Condition::Other);
    }

    #[test]
    fn test_condition_default_is_good() {
        assert_eq!(Condition::default(), Condition::Good);
    }

    // ==================== Condition Factor Tests ====================

    #[test]
    fn test_condition_factor_values() {
        assert_eq!(Condition::Excellent.factor(), 1.1);
        assert_eq!(Condition::Good.factor(), 1.0);
        assert_eq!(Condition::Fair.factor(), 0.85);
    }

    #[test]
    fn test_other_condition_prices_like_good() {
        assert_eq!(Condition::Other.factor(), Condition::Good.factor());
    }

    // ==================== Label Normalization Tests ====================

    #[test]
    fn test_normalize_label_capitalizes_first_letter() {
        assert_eq!(normalize_label("honda"), "Honda");
        assert_eq!(normalize_label("city"), "City");
    }

    #[test]
    fn test_normalize_label_lowercases_the_rest() {
        assert_eq!(normalize_label("BMW"), "Bmw");
        assert_eq!(normalize_label("hOnDa"), "Honda");
    }

    #[test]
    fn test_normalize_label_empty_stays_empty() {
        assert_eq!(normalize_label(""), "");
    }

    // ==================== Request Defaults Tests ====================

    #[test]
    fn test_request_defaults() {
        let request = ValuationRequest::default();
        assert_eq!(request.make, "");
        assert_eq!(request.model, "");
        assert_eq!(request.year, 2020);
        assert_eq!(request.mileage, 0);
        assert_eq!(request.condition, Condition::Good);
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_valuation_serializes_with_snake_case_key() {
        let valuation = Valuation {
            estimated_value: 624000,
        };
        assert_eq!(
            serde_json::to_string(&valuation).unwrap(),
            r#"{"estimated_value":624000}"#
        );
    }
}
