//! Person records and the searchable-item contract.
//!
//! A dataset is an ordered, read-only slice of [`PersonRecord`]s that is loaded
//! once, before any pagination happens. The controller only ever borrows it.
//!
//! Datasets are usually loaded from the JSON document format used by the
//! roster page:
//!
//! ```json
//! [
//!   {
//!     "name": { "title": "Ms", "first": "Ethel", "last": "Dean" },
//!     "email": "ethel.dean@example.com",
//!     "registered": { "date": "12-15-2005", "age": 15 },
//!     "picture": { "medium": "https://randomuser.me/api/portraits/med/women/25.jpg" }
//!   }
//! ]
//! ```

use std::fmt;
use std::io::Read;

use serde::Deserialize;

use crate::error::Result;

/// Trait for values that can be searched by the filter.
///
/// The filter performs a case-insensitive substring match against
/// [`filter_value`](Item::filter_value), so implementors should return the
/// text a user would type to find the item.
///
/// # Examples
///
/// ```rust
/// use roster_pager::record::Item;
///
/// struct Course {
///     code: String,
///     title: String,
/// }
///
/// impl Item for Course {
///     fn filter_value(&self) -> String {
///         format!("{} {}", self.code, self.title)
///     }
/// }
/// ```
pub trait Item {
    /// Returns the text matched by searches.
    fn filter_value(&self) -> String;
}

/// An immutable person entry in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "wire::Person")]
pub struct PersonRecord {
    first_name: String,
    last_name: String,
    email: String,
    registered_date: String,
    avatar_url: String,
}

impl PersonRecord {
    /// Creates a record from its individual fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        registered_date: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            registered_date: registered_date.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Registration date, kept exactly as it appears in the dataset.
    pub fn registered_date(&self) -> &str {
        &self.registered_date
    }

    /// URL of the avatar image.
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Full display name, `"{first} {last}"`.
    ///
    /// ```rust
    /// use roster_pager::PersonRecord;
    ///
    /// let ada = PersonRecord::new("Ada", "Lovelace", "ada@example.com", "1842", "");
    /// assert_eq!(ada.display_name(), "Ada Lovelace");
    /// ```
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl Item for PersonRecord {
    fn filter_value(&self) -> String {
        self.display_name()
    }
}

/// Parses a dataset from a JSON document.
///
/// # Errors
///
/// Returns [`Error::Dataset`](crate::Error::Dataset) when the document is not
/// an array of person objects.
///
/// # Examples
///
/// ```rust
/// let json = r#"[{
///     "name": {"first": "Ethel", "last": "Dean"},
///     "email": "ethel.dean@example.com",
///     "registered": {"date": "12-15-2005"},
///     "picture": {"medium": "ethel.jpg"}
/// }]"#;
///
/// let dataset = roster_pager::record::from_json_str(json).unwrap();
/// assert_eq!(dataset[0].display_name(), "Ethel Dean");
/// assert_eq!(dataset[0].avatar_url(), "ethel.jpg");
/// ```
pub fn from_json_str(json: &str) -> Result<Vec<PersonRecord>> {
    let records: Vec<PersonRecord> = serde_json::from_str(json)?;
    tracing::debug!(records = records.len(), "loaded dataset");
    Ok(records)
}

/// Reads and parses a dataset from any reader.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if reading fails and
/// [`Error::Dataset`](crate::Error::Dataset) if the content is malformed.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Vec<PersonRecord>> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    from_json_str(&json)
}

mod wire {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub(super) struct Person {
        name: Name,
        email: String,
        registered: Registered,
        picture: Picture,
    }

    #[derive(Deserialize)]
    struct Name {
        first: String,
        last: String,
    }

    #[derive(Deserialize)]
    struct Registered {
        date: String,
    }

    #[derive(Deserialize)]
    struct Picture {
        medium: String,
    }

    impl From<Person> for super::PersonRecord {
        fn from(p: Person) -> Self {
            Self {
                first_name: p.name.first,
                last_name: p.name.last,
                email: p.email,
                registered_date: p.registered.date,
                avatar_url: p.picture.medium,
            }
        }
    }
}
