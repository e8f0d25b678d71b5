//! Error context types for better error messages.

/// Filesystem probes made against a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOperation {
    Enumerate,
    Stat,
    List,
    Traverse,
}

impl std::fmt::Display for ProbeOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enumerate => write!(f, "enumerate"),
            Self::Stat => write!(f, "stat"),
            Self::List => write!(f, "list"),
            Self::Traverse => write!(f, "traverse"),
        }
    }
}

/// I/O operation types on the fix list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Write,
    Delete,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write => write!(f, "write"),
            Self::Delete => write!(f, "delete"),
        }
    }
}
