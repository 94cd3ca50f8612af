use crate::model::{HttpFieldInfo, HttpMethodInfo, ServiceElementWithAttributes};

/// An element the obsolescence filter understands.
///
/// The set is closed: declarations carry their own `obsolete` flag, while
/// HTTP bindings defer to the method or field they bind.
#[derive(Clone, Copy)]
pub enum Filterable<'a> {
    Element(&'a dyn ServiceElementWithAttributes),
    HttpMethod(&'a HttpMethodInfo),
    HttpField(&'a HttpFieldInfo),
}

impl Filterable<'_> {
    pub fn is_obsolete(&self) -> bool {
        match self {
            Filterable::Element(element) => element.is_obsolete(),
            Filterable::HttpMethod(http) => http.service_method.obsolete,
            Filterable::HttpField(http) => http.service_field.obsolete,
        }
    }
}

/// Lazily skip obsolete elements.
pub fn where_not_obsolete<'a, I>(items: I) -> impl Iterator<Item = Filterable<'a>>
where
    I: IntoIterator<Item = Filterable<'a>>,
{
    items.into_iter().filter(|item| !item.is_obsolete())
}
