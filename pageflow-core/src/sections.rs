/// Ordered, immutable list of addressable sections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionList {
    ids: Vec<String>,
}

impl SectionList {
    /// Build from ids in document order. Duplicate ids keep their first
    /// position only, so every id resolves to exactly one index.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if id.is_empty() || out.contains(&id) {
                log::warn!("Skipping unusable section id {id:?}");
                continue;
            }
            out.push(id);
        }
        Self { ids: out }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.ids.len().checked_sub(1)
    }

    pub fn id(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// Resolve a location fragment or same-page href (`#id`, or a bare `id`).
    pub fn resolve_fragment(&self, fragment: &str) -> Option<usize> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        if id.is_empty() {
            return None;
        }
        self.index_of(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SectionList {
        SectionList::new(["home", "about", "portfolio", "contact"])
    }

    #[test]
    fn test_resolve_fragment_forms() {
        let s = sample();
        assert_eq!(s.resolve_fragment("#contact"), Some(3));
        assert_eq!(s.resolve_fragment("about"), Some(1));
        assert_eq!(s.resolve_fragment("#"), None);
        assert_eq!(s.resolve_fragment(""), None);
        assert_eq!(s.resolve_fragment("#pricing"), None);
    }

    #[test]
    fn test_duplicates_and_empty_ids_dropped() {
        let s = SectionList::new(["a", "", "b", "a"]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.id(1), Some("b"));
    }

    #[test]
    fn test_empty_list() {
        let s = SectionList::default();
        assert!(s.is_empty());
        assert_eq!(s.last_index(), None);
        assert_eq!(s.id(0), None);
    }
}
