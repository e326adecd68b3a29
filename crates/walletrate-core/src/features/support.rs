//! Three-state feature leaf.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether a wallet has a feature, distinguishing "not assessed" from
/// "confirmed absent".
///
/// Wire form: `null` (or a missing key) is `Unknown`,
/// `{"support": "not_supported"}` is `NotSupported`, and
/// `{"support": "supported", "detail": {..}}` is `Supported`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Support<T> {
    Unknown,
    NotSupported,
    Supported(T),
}

impl<T> Support<T> {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Support::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Support::Supported(_))
    }

    pub fn as_ref(&self) -> Support<&T> {
        match self {
            Support::Unknown => Support::Unknown,
            Support::NotSupported => Support::NotSupported,
            Support::Supported(detail) => Support::Supported(detail),
        }
    }

    /// The detail when supported.
    pub fn detail(&self) -> Option<&T> {
        match self {
            Support::Supported(detail) => Some(detail),
            _ => None,
        }
    }
}

impl<T> Default for Support<T> {
    fn default() -> Self {
        Support::Unknown
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "support", content = "detail", rename_all = "snake_case")]
enum Tagged<T> {
    NotSupported,
    Supported(T),
}

impl<T: Serialize> Serialize for Support<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tagged = match self {
            Support::Unknown => None,
            Support::NotSupported => Some(Tagged::NotSupported),
            Support::Supported(detail) => Some(Tagged::Supported(detail)),
        };
        tagged.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Support<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Tagged<T>>::deserialize(deserializer)? {
            None => Support::Unknown,
            Some(Tagged::NotSupported) => Support::NotSupported,
            Some(Tagged::Supported(detail)) => Support::Supported(detail),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Detail {
        count: u32,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default)]
        leaf: Support<Detail>,
    }

    #[test]
    fn null_and_missing_are_unknown() {
        let explicit: Holder = serde_json::from_str(r#"{"leaf": null}"#).unwrap();
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(explicit.leaf, Support::Unknown);
        assert_eq!(missing.leaf, Support::Unknown);
    }

    #[test]
    fn tagged_forms_parse() {
        let not: Holder =
            serde_json::from_str(r#"{"leaf": {"support": "not_supported"}}"#).unwrap();
        assert_eq!(not.leaf, Support::NotSupported);

        let yes: Holder = serde_json::from_str(
            r#"{"leaf": {"support": "supported", "detail": {"count": 3}}}"#,
        )
        .unwrap();
        assert_eq!(yes.leaf, Support::Supported(Detail { count: 3 }));
    }

    #[test]
    fn serializes_back_to_wire_form() {
        let holder = Holder {
            leaf: Support::Supported(Detail { count: 1 }),
        };
        let json = serde_json::to_value(&holder).unwrap();
        assert_eq!(json["leaf"]["support"], "supported");
        assert_eq!(json["leaf"]["detail"]["count"], 1);

        let unknown = serde_json::to_value(Holder { leaf: Support::Unknown }).unwrap();
        assert!(unknown["leaf"].is_null());
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let result: Result<Holder, _> =
            serde_json::from_str(r#"{"leaf": {"support": "maybe"}}"#);
        assert!(result.is_err());
    }
}
