//! Country resource schema.

use super::{FieldDescriptor, ResourceSchema, Rule};

/// Form schema for the country resource.
///
/// `code` and `phonecode` are numeric strings, not numbers: leading zeros
/// are significant, so the rules constrain characters and length rather
/// than value range.
pub static COUNTRY_SCHEMA: ResourceSchema = ResourceSchema {
    resource: "country",
    fields: &[
        FieldDescriptor {
            name: "name",
            label: "Country Name",
            section: "Country Data",
            rules: &[Rule::Required, Rule::MaxLength(255)],
        },
        FieldDescriptor {
            name: "code",
            label: "Code",
            section: "Country Data",
            rules: &[Rule::Required, Rule::Numeric, Rule::MaxLength(3)],
        },
        FieldDescriptor {
            name: "phonecode",
            label: "Country Phone Code",
            section: "Country Data",
            rules: &[Rule::Required, Rule::Numeric, Rule::MaxLength(5)],
        },
    ],
};
