use crate::cores::*;
use crate::{impl_tag_value, impl_xml_deserialize};

// SOAP 1.1 fault: qualified Fault element, unqualified children. faultcode
// and faultstring are mandatory, actor and detail are not.

#[derive(Debug, Clone, typed_builder::TypedBuilder)]
pub struct FaultValue<'a> {
    #[builder(setter(into))]
    pub faultcode: Tag<'a, Text<'a>, FaultCode>,
    #[builder(setter(into))]
    pub faultstring: Tag<'a, Text<'a>, FaultString>,
    #[builder(default, setter(into, strip_option))]
    pub faultactor: Option<Tag<'a, Text<'a>, FaultActor>>,
    #[builder(default, setter(into, strip_option))]
    pub detail: Option<Tag<'a, Unparsed<'a>, Detail>>,
}

impl_tag_value!(
    struct -> FaultValue<'a>
    required -> [faultcode, faultstring]
    optional -> [faultactor, detail]
);

impl_xml_deserialize!(
    struct -> FaultValue<'a>
    required -> [
        faultcode: Tag<'a, Text<'a>, FaultCode>,
        faultstring: Tag<'a, Text<'a>, FaultString>,
    ]
    optional -> [
        faultactor: Tag<'a, Text<'a>, FaultActor>,
        detail: Tag<'a, Unparsed<'a>, Detail>,
    ]
);

/// Owned form of a parsed fault, detached from the response document. This
/// is what a failed call reports upward.
#[derive(Debug, Clone, thiserror::Error)]
#[error("SOAP fault {code}: {reason}")]
pub struct SoapFault {
    pub code: String,
    pub reason: String,
    pub actor: Option<String>,
    pub detail: Option<String>,
}

impl From<&FaultValue<'_>> for SoapFault {
    fn from(value: &FaultValue<'_>) -> Self {
        SoapFault {
            code: value.faultcode.value.as_ref().to_string(),
            reason: value.faultstring.value.as_ref().to_string(),
            actor: value
                .faultactor
                .as_ref()
                .map(|actor| actor.value.as_ref().to_string()),
            detail: value
                .detail
                .as_ref()
                .and_then(|detail| detail.value.text.as_ref())
                .map(ToString::to_string),
        }
    }
}
