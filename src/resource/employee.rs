//! Employee resource schema.

use super::{FieldDescriptor, ResourceSchema, Rule};

/// Form schema for the employee resource.
///
/// The four select fields only declare `Required` here; referential checks
/// (existence, state-in-country, city-in-state) are the selector
/// controller's job and run after schema validation passes.
pub static EMPLOYEE_SCHEMA: ResourceSchema = ResourceSchema {
    resource: "employee",
    fields: &[
        FieldDescriptor {
            name: "country_id",
            label: "Country",
            section: "Locations",
            rules: &[Rule::Required],
        },
        FieldDescriptor {
            name: "state_id",
            label: "State",
            section: "Locations",
            rules: &[Rule::Required],
        },
        FieldDescriptor {
            name: "city_id",
            label: "City",
            section: "Locations",
            rules: &[Rule::Required],
        },
        FieldDescriptor {
            name: "department_id",
            label: "Department",
            section: "Locations",
            rules: &[Rule::Required],
        },
        FieldDescriptor {
            name: "first_name",
            label: "First Name",
            section: "User Name",
            rules: &[Rule::Required, Rule::MaxLength(255)],
        },
        FieldDescriptor {
            name: "middle_name",
            label: "Middle Name",
            section: "User Name",
            rules: &[Rule::Required, Rule::MaxLength(255)],
        },
        FieldDescriptor {
            name: "last_name",
            label: "Last Name",
            section: "User Name",
            rules: &[Rule::Required, Rule::MaxLength(255)],
        },
        FieldDescriptor {
            name: "address",
            label: "Full Address",
            section: "User Address",
            rules: &[Rule::Required, Rule::MaxLength(255)],
        },
        FieldDescriptor {
            name: "zip_code",
            label: "Zip Code",
            section: "User Address",
            rules: &[Rule::Required, Rule::MaxLength(255)],
        },
        FieldDescriptor {
            name: "date_of_birth",
            label: "Date of Birth",
            section: "Dates",
            rules: &[Rule::Required, Rule::PastOrPresent],
        },
        FieldDescriptor {
            name: "date_hired",
            label: "Date Hired",
            section: "Dates",
            rules: &[Rule::Required, Rule::PastOrPresent],
        },
    ],
};
