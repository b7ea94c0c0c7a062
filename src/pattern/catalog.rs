use hashbrown::HashMap as FastHashMap;

pub const BUILTIN_MATCH_TYPES: [(&str, &str); 8] = [
    ("i", "[0-9]+"),
    ("a", "[0-9A-Za-z]+"),
    ("c", "[A-Za-z][0-9A-Za-z_]*"),
    ("h", "[0-9A-Fa-f]+"),
    ("s", r"[0-9A-Za-z\-_]+"),
    ("*", ".+?"),
    ("**", ".+"),
    ("", "[^/]+?"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    classes: FastHashMap<Box<str>, Box<str>>,
}

impl Default for TypeCatalog {
    fn default() -> Self {
        let classes = BUILTIN_MATCH_TYPES
            .iter()
            .map(|(code, class)| (Box::from(*code), Box::from(*class)))
            .collect();
        Self { classes }
    }
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builtins plus `extra`; an extra entry replaces a builtin with the same code.
    pub fn with_extra<'a, I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut catalog = Self::default();
        for (code, class) in extra {
            catalog.insert(code, class);
        }
        catalog
    }

    pub fn insert(&mut self, code: &str, class: &str) {
        self.classes.insert(Box::from(code), Box::from(class));
    }

    /// Unknown codes are returned as-is so a placeholder can carry an inline class.
    #[inline]
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.classes.get(code).map(|class| class.as_ref()).unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
