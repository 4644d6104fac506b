//! Relationship naming policies.

/// Derives relationship type names for fields that do not declare one.
pub trait RelationshipNaming {
    /// Name of the relationship backing `field_name` on `type_name`.
    fn relationship_type_name(
        &self,
        type_name: &str,
        field_name: &str,
        use_short_names: bool,
    ) -> String;
}

/// Default policy: `Type.field`, or the bare field name under short names.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNaming;

impl RelationshipNaming for DefaultNaming {
    fn relationship_type_name(
        &self,
        type_name: &str,
        field_name: &str,
        use_short_names: bool,
    ) -> String {
        if use_short_names {
            field_name.to_string()
        } else {
            format!("{}.{}", type_name, field_name)
        }
    }
}
