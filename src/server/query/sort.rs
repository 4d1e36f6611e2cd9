//! Resolution of `sortBy` / `sortOrder` query parameters.

use sea_orm::Order;

/// Direction of the primary ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses `asc` / `desc` case-insensitively; anything else is descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn into_order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// Sort key enum of a resource.
///
/// The `Default` variant must be the creation-time key; it is used whenever the request
/// does not name a recognized key.
pub trait SortKey: Copy + Default + 'static {
    /// Every accepted key together with its canonical name.
    const KEYS: &'static [(&'static str, Self)];

    /// Looks a key up by name, ignoring case, `_` and `-` so that `createdAt`,
    /// `created_at` and `CREATED-AT` all resolve to the same key.
    fn parse(value: &str) -> Option<Self> {
        let wanted = normalize(value);
        Self::KEYS
            .iter()
            .find(|(name, _)| normalize(name) == wanted)
            .map(|(_, key)| *key)
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// A resolved single-column ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec<K> {
    pub by: K,
    pub order: SortOrder,
}

impl<K: SortKey> SortSpec<K> {
    /// Resolves raw query values into a sort specification.
    ///
    /// A missing `sort_by` uses the default key with the requested order. An unrecognized
    /// `sort_by` falls back to the default key in descending order, ignoring `sort_order`.
    pub fn resolve(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let requested = sort_by.map(str::trim).filter(|s| !s.is_empty());

        match requested {
            None => Self {
                by: K::default(),
                order: SortOrder::parse(sort_order),
            },
            Some(name) => match K::parse(name) {
                Some(by) => Self {
                    by,
                    order: SortOrder::parse(sort_order),
                },
                None => Self::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum TestSort {
        #[default]
        CreatedAt,
        Title,
        ViewCount,
    }

    impl SortKey for TestSort {
        const KEYS: &'static [(&'static str, Self)] = &[
            ("createdAt", Self::CreatedAt),
            ("title", Self::Title),
            ("viewCount", Self::ViewCount),
        ];
    }

    #[test]
    fn defaults_to_created_at_descending() {
        let spec = SortSpec::<TestSort>::resolve(None, None);

        assert_eq!(spec.by, TestSort::CreatedAt);
        assert_eq!(spec.order, SortOrder::Desc);
    }

    #[test]
    fn resolves_known_key_and_order() {
        let spec = SortSpec::<TestSort>::resolve(Some("title"), Some("asc"));

        assert_eq!(spec.by, TestSort::Title);
        assert_eq!(spec.order, SortOrder::Asc);
    }

    #[test]
    fn accepts_snake_case_and_mixed_case() {
        assert_eq!(TestSort::parse("view_count"), Some(TestSort::ViewCount));
        assert_eq!(TestSort::parse("VIEWCOUNT"), Some(TestSort::ViewCount));
        assert_eq!(TestSort::parse("created-at"), Some(TestSort::CreatedAt));
    }

    #[test]
    fn unknown_key_falls_back_to_created_at_desc() {
        let spec = SortSpec::<TestSort>::resolve(Some("password"), Some("asc"));

        assert_eq!(spec.by, TestSort::CreatedAt);
        assert_eq!(spec.order, SortOrder::Desc);
    }

    #[test]
    fn missing_key_keeps_requested_order() {
        let spec = SortSpec::<TestSort>::resolve(None, Some("ASC"));

        assert_eq!(spec.by, TestSort::CreatedAt);
        assert_eq!(spec.order, SortOrder::Asc);
    }

    #[test]
    fn unknown_order_is_descending() {
        assert_eq!(SortOrder::parse(Some("sideways")), SortOrder::Desc);
    }
}
