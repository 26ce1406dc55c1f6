use youi_yuml::{AttributeError, ParseError};

// ── Tree ──────────────────────────────────────────────────────────────────

/// Structural failures of [`Tree`](crate::tree::Tree) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("index {index} is out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("component is not a child of the given parent")]
    ComponentNotFound,
    #[error("component id does not refer to a live component")]
    StaleComponent,
    #[error("<{tag}> cannot hold children")]
    NotAContainer { tag: String },
    #[error("attaching the component under its own descendant would create a cycle")]
    WouldCycle,
    #[error("component is not a `{expected}`")]
    TypeMismatch { expected: &'static str },
    #[error("tree has no root component")]
    NoRoot,
}

// ── Factories ─────────────────────────────────────────────────────────────

/// Returned by a component factory that cannot construct its component.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactoryError {
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    #[error("{0}")]
    Invalid(String),
}

// ── Builder ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("YUML namespace \"{namespace}\" not found (were its components registered?)")]
    UnknownNamespace { namespace: String },
    #[error("YUML component \"{name}\" not found in namespace \"{namespace}\"")]
    UnknownComponent { namespace: String, name: String },
    #[error("<{tag}>: {source}")]
    Factory {
        tag: String,
        #[source]
        source: FactoryError,
    },
    /// A descendant of `parent` failed. Nests once per level.
    #[error("<{parent}> > {source}")]
    Build {
        parent: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl BuildError {
    /// Tags of the enclosing elements, outermost first.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut cur = self;
        while let BuildError::Build { parent, source } = cur {
            path.push(parent.as_str());
            cur = source;
        }
        path
    }

    /// The failure underneath every `Build` wrapper.
    pub fn root_cause(&self) -> &BuildError {
        match self {
            BuildError::Build { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// ── Top level ─────────────────────────────────────────────────────────────

/// Everything that can go wrong while turning a document into a [`Form`](crate::form::Form).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error("document root must be <Page>, found <{tag}>")]
    RootNotPage { tag: String },
}
