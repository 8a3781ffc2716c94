//! XACML request and policy templates.
//!
//! Rendering is a pure function of [`RenderInput`]: the value kind selects one
//! row of the template table and the attribute identifier is interpolated
//! verbatim, without XML escaping. A missing identifier renders as the literal
//! text `null`.

use sifis_ontology::iris;

use crate::extractor::RenderInput;

/// Category carried by every attribute designator.
pub const ENVIRONMENT_CATEGORY: &str = "urn:oasis:names:tc:xacml:3.0:attribute-category:environment";

/// Text interpolated when a hazard has no `attributeId`.
pub const MISSING_ATTRIBUTE_ID: &str = "null";

/// How a hazard's attribute is typed in requests and policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Presence flag: `xsd:boolean`, compared for equality with `true`.
    Boolean,
    /// Risk score: `xsd:integer`, compared with `integer-greater-than`.
    Integer,
}

impl ValueKind {
    /// Picks the kind from the presence of a risk score.
    #[must_use]
    pub fn from_risk_score(has_risk_score: bool) -> Self {
        if has_risk_score {
            Self::Integer
        } else {
            Self::Boolean
        }
    }

    /// Returns this kind's row of the template table.
    #[must_use]
    pub fn template(self) -> &'static ValueTemplate {
        match self {
            Self::Boolean => &BOOLEAN_TEMPLATE,
            Self::Integer => &INTEGER_TEMPLATE,
        }
    }
}

/// One row of the template table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTemplate {
    /// XSD datatype IRI of request, designator, and policy values.
    pub data_type: &'static str,
    /// Content of the `AttributeValue` elements.
    pub value: &'static str,
    /// Outer `Apply` function.
    pub comparison: &'static str,
    /// Inner `Apply` function.
    pub one_and_only: &'static str,
}

/// Template row for hazards without a risk score.
pub const BOOLEAN_TEMPLATE: ValueTemplate = ValueTemplate {
    data_type: iris::XSD_BOOLEAN,
    value: "true",
    comparison: "urn:oasis:names:tc:xacml:1.0:function:boolean-equal",
    one_and_only: "urn:oasis:names:tc:xacml:1.0:function:boolean-one-and-only",
};

/// Template row for risk-scored hazards.
pub const INTEGER_TEMPLATE: ValueTemplate = ValueTemplate {
    data_type: iris::XSD_INTEGER,
    value: "1..10",
    comparison: "urn:oasis:names:tc:xacml:1.0:function:integer-greater-than",
    one_and_only: "urn:oasis:names:tc:xacml:1.0:function:integer-one-and-only",
};

/// The two text fragments rendered for one hazard.
///
/// Each fragment is a sequence of `\n`-terminated lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// `<Attribute>` element for an XACML request.
    pub request: String,
    /// `<Apply>` condition for an XACML policy.
    pub policy: String,
}

/// Renders the request and policy fragments for `input`.
#[must_use]
pub fn render(input: &RenderInput) -> Rendered {
    let id = input
        .attribute_id
        .as_deref()
        .unwrap_or(MISSING_ATTRIBUTE_ID);
    let t = ValueKind::from_risk_score(input.has_risk_score).template();
    Rendered {
        request: render_request(id, t),
        policy: render_policy(id, t),
    }
}

fn render_request(id: &str, t: &ValueTemplate) -> String {
    lines(&[
        format!(r#"<Attribute AttributeId="{id}" IncludeInResult="false">"#),
        format!(
            r#"  <AttributeValue DataType="{}">{}</AttributeValue>"#,
            t.data_type, t.value
        ),
        "</Attribute>".to_string(),
    ])
}

fn render_policy(id: &str, t: &ValueTemplate) -> String {
    lines(&[
        "<Apply".to_string(),
        format!(r#"  FunctionId="{}">"#, t.comparison),
        "  <Apply".to_string(),
        format!(r#"    FunctionId="{}">"#, t.one_and_only),
        "    <AttributeDesignator".to_string(),
        format!(r#"      AttributeId="{id}""#),
        format!(r#"      Category="{ENVIRONMENT_CATEGORY}""#),
        format!(r#"      DataType="{}""#, t.data_type),
        r#"      MustBePresent="true">"#.to_string(),
        "    </AttributeDesignator>".to_string(),
        "  </Apply>".to_string(),
        "  <AttributeValue".to_string(),
        format!(
            r#"    DataType="{}">{}</AttributeValue>"#,
            t.data_type, t.value
        ),
        "</Apply>".to_string(),
    ])
}

fn lines(parts: &[String]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|p| p.len() + 1).sum());
    for part in parts {
        out.push_str(part);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_INTEGER_POLICY: &str = r#"<Apply
  FunctionId="urn:oasis:names:tc:xacml:1.0:function:integer-greater-than">
  <Apply
    FunctionId="urn:oasis:names:tc:xacml:1.0:function:integer-one-and-only">
    <AttributeDesignator
      AttributeId="HighImpactFire"
      Category="urn:oasis:names:tc:xacml:3.0:attribute-category:environment"
      DataType="http://www.w3.org/2001/XMLSchema#integer"
      MustBePresent="true">
    </AttributeDesignator>
  </Apply>
  <AttributeValue
    DataType="http://www.w3.org/2001/XMLSchema#integer">1..10</AttributeValue>
</Apply>
"#;

    const EXPECTED_BOOLEAN_REQUEST: &str = r#"<Attribute AttributeId="gas_leak" IncludeInResult="false">
  <AttributeValue DataType="http://www.w3.org/2001/XMLSchema#boolean">true</AttributeValue>
</Attribute>
"#;

    #[test]
    fn high_impact_fire_request() {
        let out = render(&RenderInput::new(Some("HighImpactFire"), true));
        assert!(out
            .request
            .contains(r#"<Attribute AttributeId="HighImpactFire" IncludeInResult="false">"#));
        assert!(out.request.contains(
            r#"<AttributeValue DataType="http://www.w3.org/2001/XMLSchema#integer">1..10</AttributeValue>"#
        ));
    }

    #[test]
    fn high_impact_fire_policy_is_exact() {
        let out = render(&RenderInput::new(Some("HighImpactFire"), true));
        assert_eq!(out.policy, EXPECTED_INTEGER_POLICY);
    }

    #[test]
    fn boolean_request_is_exact() {
        let out = render(&RenderInput::new(Some("gas_leak"), false));
        assert_eq!(out.request, EXPECTED_BOOLEAN_REQUEST);
        assert!(out.policy.contains("boolean-equal"));
        assert!(out.policy.contains("boolean-one-and-only"));
        assert!(!out.policy.contains("integer"));
    }

    // Known defect kept for compatibility: a missing identifier is rendered
    // as the text "null".
    #[test]
    fn missing_attribute_id_renders_null() {
        let out = render(&RenderInput::new(None::<String>, false));
        assert!(out.request.contains(r#"AttributeId="null""#));
        assert!(out.policy.contains(r#"AttributeId="null""#));
    }

    #[test]
    fn attribute_id_is_not_escaped() {
        let out = render(&RenderInput::new(Some(r#"a"<b>&c"#), false));
        assert!(out.request.contains(r#"AttributeId="a"<b>&c""#));
    }

    #[test]
    fn kind_follows_risk_score() {
        assert_eq!(ValueKind::from_risk_score(true), ValueKind::Integer);
        assert_eq!(ValueKind::from_risk_score(false), ValueKind::Boolean);
        assert_eq!(ValueKind::Integer.template(), &INTEGER_TEMPLATE);
    }
}
