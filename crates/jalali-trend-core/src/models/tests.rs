#[cfg(test)]
mod model_tests {
    use indexmap::IndexMap;

    use crate::{
        error::TrendError,
        models::{AggregateFunction, TimeUnit, TrendResult},
    };

    fn create_test_result() -> TrendResult {
        let mut trend = IndexMap::new();
        trend.insert("فروردین 1402".to_string(), 3.0);
        trend.insert("اردیبهشت 1402".to_string(), 5.5);
        trend.insert("خرداد 1402".to_string(), 1.5);
        TrendResult::new(trend)
    }

    #[test]
    fn test_time_unit_from_str() {
        assert_eq!("month".parse::<TimeUnit>().unwrap(), TimeUnit::Month);
        assert_eq!("WEEK".parse::<TimeUnit>().unwrap(), TimeUnit::Week);
        assert_eq!("days".parse::<TimeUnit>().unwrap(), TimeUnit::Day);
        assert_eq!("hour".parse::<TimeUnit>().unwrap(), TimeUnit::Hour);
        assert_eq!("minute".parse::<TimeUnit>().unwrap(), TimeUnit::Minute);
    }

    #[test]
    fn test_time_unit_unknown_is_error() {
        let err = "fortnight".parse::<TimeUnit>().unwrap_err();
        assert!(matches!(err, TrendError::UnsupportedUnit(ref s) if s == "fortnight"));
    }

    #[test]
    fn test_time_unit_display_round_trips() {
        for unit in TimeUnit::ALL {
            assert_eq!(unit.to_string().parse::<TimeUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_aggregate_function_parsing() {
        assert_eq!(
            "average".parse::<AggregateFunction>().unwrap(),
            AggregateFunction::Avg
        );
        assert_eq!(AggregateFunction::Sum.as_sql(), "sum");
        assert_eq!(AggregateFunction::default(), AggregateFunction::Count);
        assert!("median".parse::<AggregateFunction>().is_err());
    }

    #[test]
    fn test_time_unit_serde() {
        let json = serde_json::to_string(&TimeUnit::Week).unwrap();
        assert_eq!(json, "\"week\"");
        let unit: TimeUnit = serde_json::from_str("\"minute\"").unwrap();
        assert_eq!(unit, TimeUnit::Minute);
    }

    #[test]
    fn test_show_latest_value() {
        let result = create_test_result().show_latest_value();
        assert_eq!(result.value, Some(1.5));
    }

    #[test]
    fn test_show_sum_value() {
        let result = create_test_result().show_sum_value();
        assert_eq!(result.value, Some(10.0));
    }

    #[test]
    fn test_latest_value_of_empty_result() {
        let result = TrendResult::default().show_latest_value();
        assert_eq!(result.value, None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_preserves_insertion_order() {
        let result = create_test_result();
        let labels: Vec<&str> = result.labels().collect();
        assert_eq!(labels, vec!["فروردین 1402", "اردیبهشت 1402", "خرداد 1402"]);
        assert_eq!(result.get("اردیبهشت 1402"), Some(5.5));
    }

    #[test]
    fn test_result_serializes_in_order() {
        let json = serde_json::to_string(&create_test_result()).unwrap();
        let first = json.find("فروردین").unwrap();
        let last = json.find("خرداد").unwrap();
        assert!(first < last);
        assert!(json.starts_with("{\"value\":null,\"trend\":{"));
    }
}
