//! Declarative fixtures driving the parameterized quote contract tests.
//!
//! Centralizing the tables keeps the tests readable and makes extending
//! coverage a one-line change. Tables are built once per call and never
//! mutated afterwards.

use crate::quote::QuoteRequest;

/// A named, immutable input fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub payload: QuoteRequest,
}

/// Assorted valid business/state/revenue combinations.
pub fn valid_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "typical retail in CA",
            payload: QuoteRequest::full(50_000.0, "CA", "retail"),
        },
        Scenario {
            name: "professional services in NY",
            payload: QuoteRequest::full(125_000.0, "NY", "professional"),
        },
        Scenario {
            name: "manufacturing in TX",
            payload: QuoteRequest::full(750_000.0, "TX", "manufacturing"),
        },
    ]
}

/// Edge boundaries for revenue scale. Zero revenue may be accepted or
/// rejected by the backend; the contract tests allow either.
pub fn edge_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "zero revenue",
            payload: QuoteRequest::full(0.0, "OH", "retail"),
        },
        Scenario {
            name: "very large revenue",
            payload: QuoteRequest::full(10_000_000.0, "FL", "technology"),
        },
    ]
}

/// Inputs intended to trigger validation errors.
pub fn invalid_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "missing revenue",
            payload: QuoteRequest {
                revenue: None,
                state: Some("CA".to_string()),
                business: Some("retail".to_string()),
            },
        },
        Scenario {
            name: "missing state",
            payload: QuoteRequest {
                revenue: Some(50_000.0),
                state: None,
                business: Some("retail".to_string()),
            },
        },
        Scenario {
            name: "missing business",
            payload: QuoteRequest {
                revenue: Some(50_000.0),
                state: Some("CA".to_string()),
                business: None,
            },
        },
        Scenario {
            name: "negative revenue",
            payload: QuoteRequest::full(-100.0, "CA", "retail"),
        },
        Scenario {
            name: "invalid state code",
            payload: QuoteRequest::full(50_000.0, "INVALID", "retail"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_scenarios_are_fully_populated() {
        for scenario in valid_scenarios() {
            assert!(scenario.payload.revenue.is_some(), "{}", scenario.name);
            assert!(scenario.payload.state.is_some(), "{}", scenario.name);
            assert!(scenario.payload.business.is_some(), "{}", scenario.name);
        }
    }

    #[test]
    fn each_missing_field_scenario_omits_exactly_one_field() {
        let by_name = |name: &str| {
            invalid_scenarios()
                .into_iter()
                .find(|s| s.name == name)
                .unwrap()
        };
        assert!(by_name("missing revenue").payload.revenue.is_none());
        assert!(by_name("missing state").payload.state.is_none());
        assert!(by_name("missing business").payload.business.is_none());
    }

    #[test]
    fn scenario_names_are_unique() {
        let mut names: Vec<&str> = valid_scenarios()
            .iter()
            .chain(edge_scenarios().iter())
            .chain(invalid_scenarios().iter())
            .map(|s| s.name)
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
