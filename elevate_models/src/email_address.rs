use nutype::nutype;

use crate::EMAIL_REGEX;

#[nutype(
    sanitize(with = crate::trim),
    validate(regex = EMAIL_REGEX),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Display,
        FromStr,
        TryFrom,
        Deref,
        Serialize,
        Deserialize
    )
)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self
    }
}
