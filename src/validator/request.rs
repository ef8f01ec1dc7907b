//! Field matching of an incoming request against a registered model.

use std::collections::HashMap;

use crate::model::{
    EndpointModel, FieldAnomaly, FieldGroup, IncomingRequest, Parameter, ParamValue, RequestParam,
    TypeTag, ValidationOutcome,
};
use crate::validator::grammar;

/// Checks requests against endpoint models.
///
/// Stateless; `check` is a pure function of its two inputs and never fails.
/// A model with zero declared parameters yields zero anomalies.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    /// Produce the validation outcome for one request.
    ///
    /// Anomalies come out in group order (query, header, body), and within
    /// a group in the model's declaration order.
    pub fn check(&self, request: &IncomingRequest, model: &EndpointModel) -> ValidationOutcome {
        tracing::debug!(
            path = %request.path,
            method = %request.method,
            "starting request validation"
        );

        let mut anomalies =
            check_group(&request.query_params, &model.query_params, FieldGroup::Query);
        anomalies.extend(check_group(&request.headers, &model.headers, FieldGroup::Header));
        anomalies.extend(check_group(&request.body, &model.body, FieldGroup::Body));

        ValidationOutcome::from_anomalies(anomalies)
    }
}

fn check_group(
    request_params: &[RequestParam],
    declared: &[Parameter],
    group: FieldGroup,
) -> Vec<FieldAnomaly> {
    // Last duplicate wins when the request repeats a name.
    let mut by_name: HashMap<&str, &ParamValue> = HashMap::with_capacity(request_params.len());
    for rp in request_params {
        by_name.insert(rp.name.as_str(), &rp.value);
    }

    let mut anomalies = Vec::new();

    for param in declared {
        let Some(value) = by_name.get(param.name.as_str()).copied() else {
            if param.required {
                anomalies.push(FieldAnomaly {
                    field: group,
                    parameter_name: param.name.clone(),
                    reason: format!("required parameter {:?} is missing", param.name),
                });
            }
            continue;
        };

        if !param.types.iter().any(|tag| grammar::accepts(value, tag)) {
            anomalies.push(FieldAnomaly {
                field: group,
                parameter_name: param.name.clone(),
                reason: type_mismatch_reason(&param.types, value),
            });
        }
    }

    anomalies
}

/// Names the full accepted set, not just the first tag tried, so the reason
/// is independent of accepted-type order.
fn type_mismatch_reason(accepted: &[TypeTag], value: &ParamValue) -> String {
    let expected = accepted
        .iter()
        .map(TypeTag::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "type mismatch: expected one of [{}], got {}",
        expected,
        value.kind()
    )
}
