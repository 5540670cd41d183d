//! Share links: inputs carried as URL query parameters under their legacy keys.

use mv_core::number_or;
use mv_sizing::{InputField, SizingInputs};
use url::{Url, form_urlencoded};

use crate::ProjectResult;

/// `B3_length_m=172&C3_width_m=0.8&...`, in form order.
pub fn encode_query(inputs: &SizingInputs) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for field in InputField::ALL {
        query.append_pair(field.legacy_key(), &field.get(inputs).to_string());
    }
    query.finish()
}

/// Set every input on `base_url`.
///
/// An input parameter already present keeps its position and takes the new
/// value; repeats of it are dropped. Missing inputs are appended in form
/// order. Unrelated parameters and any `#fragment` are kept.
pub fn share_url(base_url: &str, inputs: &SizingInputs) -> ProjectResult<String> {
    let mut url = Url::parse(base_url)?;
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    for field in InputField::ALL {
        let key = field.legacy_key();
        let value = field.get(inputs).to_string();
        match pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                pairs[first].1 = value;
                let mut index = 0;
                pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => pairs.push((key.to_string(), value)),
        }
    }

    url.query_pairs_mut().clear().extend_pairs(&pairs);
    Ok(url.into())
}

/// Decoded `(key, value)` pairs from a full URL or a bare query string.
pub fn parse_query(url_or_query: &str) -> Vec<(String, String)> {
    if let Ok(url) = Url::parse(url_or_query) {
        return url.query_pairs().into_owned().collect();
    }

    let without_fragment = url_or_query
        .split_once('#')
        .map_or(url_or_query, |(head, _)| head);
    let query = without_fragment
        .split_once('?')
        .map_or(without_fragment, |(_, query)| query);
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

/// Overlay query parameters on `base`.
///
/// Each recognised legacy key is parsed as a number, keeping the base value
/// when parsing fails. Unknown keys are ignored; the last occurrence wins.
pub fn apply_query(base: &SizingInputs, url_or_query: &str) -> SizingInputs {
    let mut inputs = *base;
    for (key, value) in parse_query(url_or_query) {
        if let Some(field) = legacy_field(&key) {
            let current = field.get(&inputs);
            field.set(&mut inputs, number_or(Some(value.as_str()), current));
        }
    }
    inputs
}

fn legacy_field(key: &str) -> Option<InputField> {
    InputField::ALL.into_iter().find(|f| f.legacy_key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_defaults() {
        assert_eq!(
            encode_query(&SizingInputs::default()),
            "B3_length_m=172&C3_width_m=0.8&D3_belts=2&C4_nozzleSpacing_m=3\
             &C5_nozzlesPerLocation=2&C6_lhsSides=3&C7_lhsToPanel_m=15&C10_pressure_bar=2.1"
        );
    }

    #[test]
    fn share_url_replaces_inputs_in_place() {
        let inputs = SizingInputs {
            length_m: 50.0,
            ..SizingInputs::default()
        };
        let url = share_url(
            "https://calc.example/mvws?B3_length_m=9&lang=en&B3_length_m=7#results",
            &inputs,
        )
        .unwrap();
        assert!(url.starts_with("https://calc.example/mvws?B3_length_m=50&lang=en&C3_width_m=0.8&"));
        assert!(url.ends_with("C10_pressure_bar=2.1#results"));
        assert_eq!(url.matches("B3_length_m").count(), 1);
    }

    #[test]
    fn share_url_without_query() {
        let url = share_url("https://calc.example/", &SizingInputs::default()).unwrap();
        assert!(url.starts_with("https://calc.example/?B3_length_m=172"));
    }

    #[test]
    fn share_url_rejects_relative_base() {
        assert!(matches!(
            share_url("calc/mvws", &SizingInputs::default()),
            Err(crate::ProjectError::Url(_))
        ));
    }

    #[test]
    fn parse_query_decodes() {
        let pairs = parse_query("?a=1%2E5&b=x+y&flag");
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1.5".to_string()),
                ("b".to_string(), "x y".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn parse_query_bare_and_empty() {
        assert_eq!(parse_query("D3_belts=4").len(), 1);
        assert_eq!(
            parse_query("/mvws?D3_belts=4#top"),
            vec![("D3_belts".to_string(), "4".to_string())]
        );
        assert!(parse_query("https://calc.example/").is_empty());
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn apply_query_overrides_known_keys() {
        let base = SizingInputs::default();
        let inputs = apply_query(
            &base,
            "https://calc.example/?D3_belts=4&C10_pressure_bar=abc&other=1&C3_width_m=1.4",
        );
        assert_eq!(inputs.belt_count, 4.0);
        assert_eq!(inputs.pressure_bar, 2.1);
        assert_eq!(inputs.width_m, 1.4);
        assert_eq!(inputs.length_m, 172.0);
    }

    #[test]
    fn apply_query_round_trips_share_url() {
        let inputs = SizingInputs {
            length_m: 64.5,
            width_m: 1.05,
            belt_count: 1.0,
            nozzle_spacing_m: 2.75,
            nozzles_per_location: 3.0,
            lhs_sides: 2.0,
            lhs_to_panel_m: 22.5,
            pressure_bar: 3.4,
        };
        let url = share_url("https://calc.example/", &inputs).unwrap();
        assert_eq!(apply_query(&SizingInputs::default(), &url), inputs);
    }
}
