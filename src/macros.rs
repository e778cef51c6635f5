//! Macros for declaring status enumerations.

/// Declare a status enum together with its `State` implementation.
///
/// Each variant names its wire label, which is used for `State::name`,
/// `Display` and serde. Variants listed under `final:` and `error:` drive
/// `State::is_final` and `State::is_error`.
///
/// # Example
///
/// ```
/// use carrental::status_enum;
/// use carrental::core::State;
///
/// status_enum! {
///     pub enum PermitStatus {
///         Requested => "REQUESTED",
///         Granted => "GRANTED",
///         Denied => "DENIED",
///     }
///     final: [Granted, Denied]
///     error: [Denied]
/// }
///
/// assert_eq!(PermitStatus::Granted.name(), "GRANTED");
/// assert_eq!(PermitStatus::from_label("DENIED"), Some(PermitStatus::Denied));
/// assert!(PermitStatus::Denied.is_error());
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:tt
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Parse a wire label.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    status_enum! {
        enum TestStatus {
            Open => "OPEN",
            Closed => "CLOSED",
            Broken => "BROKEN",
        }
        final: [Closed, Broken]
        error: [Broken]
    }

    #[test]
    fn generates_state_impl() {
        assert_eq!(TestStatus::Open.name(), "OPEN");
        assert!(!TestStatus::Open.is_final());
        assert!(TestStatus::Closed.is_final());
        assert!(!TestStatus::Closed.is_error());
        assert!(TestStatus::Broken.is_error());
    }

    #[test]
    fn labels_round_trip() {
        for status in TestStatus::ALL {
            assert_eq!(TestStatus::from_label(status.name()), Some(*status));
            assert_eq!(status.to_string(), status.name());
        }
        assert_eq!(TestStatus::from_label("open"), None);
    }

    #[test]
    fn works_without_final_error() {
        status_enum! {
            enum MinimalStatus {
                One => "ONE",
                Two => "TWO",
            }
        }

        assert!(!MinimalStatus::One.is_final());
        assert!(!MinimalStatus::Two.is_error());
        assert_eq!(
            serde_json::to_string(&MinimalStatus::Two).unwrap(),
            "\"TWO\""
        );
    }
}
