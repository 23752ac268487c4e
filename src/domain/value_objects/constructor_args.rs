//! Constructor arguments
//!
//! Kept as text until the artifact's constructor ABI is known; coercion to
//! typed ABI values happens in `ContractFactory::deploy_code`.

/// Ordered textual constructor arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructorArgs(Vec<String>);

impl ConstructorArgs {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(args.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ConstructorArgs {
    fn from(args: Vec<String>) -> Self {
        Self(args)
    }
}
