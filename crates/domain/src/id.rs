//! Typed identifier newtypes backed by UUIDs.

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }
    };
}

define_id!(
    /// Identifier of one row in an [`ApplianceList`](crate::appliance::ApplianceList).
    ///
    /// Used as the render key so rows keep their inputs when new rows are appended.
    ApplianceRowId
);
