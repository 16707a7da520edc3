use crate::macros::{id, nutype_string};

id!(CompanyId);

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    /// Average review rating, if the company has been reviewed at all.
    pub rating: Option<f64>,
}

nutype_string!(CompanyName(validate(len_char_min = 1, len_char_max = 128)));
